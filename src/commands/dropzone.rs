//! `mountDropzone` and friends.
//!
//! ```javascript
//! import init, { mountDropzone } from './pkg/pdf_dropzone.js';
//!
//! await init();
//! const dropzone = mountDropzone({ locale: 'en' });
//! // keep `dropzone` alive for as long as the form is on the page
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

use crate::error::AppError;
use crate::models::file::SelectedFile;
use crate::models::settings::DropzoneSettings;
use crate::services::controller::UploadController;
use crate::services::validation;
use crate::view::dom::{self, DomView};

/// A mounted drop zone. Dropping it (`free()` from JS) unregisters every
/// listener it installed.
#[wasm_bindgen]
pub struct DropzoneHandle {
    controller: Rc<RefCell<UploadController<DomView>>>,
    _listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl DropzoneHandle {
    /// Name of the committed file, if any.
    #[wasm_bindgen(js_name = selectedFileName)]
    pub fn selected_file_name(&self) -> Option<String> {
        self.controller
            .borrow()
            .selection()
            .file()
            .map(|file| file.file_name.clone())
    }

    #[wasm_bindgen(js_name = hasSelection)]
    pub fn has_selection(&self) -> bool {
        self.controller.borrow().selection().is_selected()
    }
}

/// Read settings from whatever the page passed: nothing, a settings object,
/// or a JSON string (e.g. a `data-dropzone` attribute).
fn parse_settings(config: JsValue) -> crate::error::Result<DropzoneSettings> {
    if config.is_undefined() || config.is_null() {
        return Ok(DropzoneSettings::default());
    }
    if let Some(json) = config.as_string() {
        return DropzoneSettings::from_json(&json);
    }
    Ok(serde_wasm_bindgen::from_value(config)?)
}

/// Bind a controller to the upload form in the current document.
#[wasm_bindgen(js_name = mountDropzone)]
pub fn mount_dropzone(config: JsValue) -> Result<DropzoneHandle, JsValue> {
    let settings = parse_settings(config)?;
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AppError::Internal("no document available".into()))?;

    let view = DomView::from_document(&document, &settings)?;
    let controller = Rc::new(RefCell::new(UploadController::new(view, settings)));
    let listeners = dom::bind(&controller);
    log::debug!("Dropzone mounted: listeners={}", listeners.len());

    Ok(DropzoneHandle {
        controller,
        _listeners: listeners,
    })
}

/// Whether a dropped file with this name and MIME type would be accepted.
#[wasm_bindgen(js_name = isPdfCandidate)]
pub fn is_pdf_candidate(file_name: &str, mime_type: &str) -> bool {
    validation::is_pdf_candidate(&SelectedFile::new(file_name, mime_type, 0))
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
