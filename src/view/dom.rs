//! web-sys implementation of [`UploadView`] and the event listeners that feed
//! an [`UploadController`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{DataTransfer, Document, DragEvent, Element, Event, File, FileList, HtmlInputElement};

use super::{UiEvent, UploadView};
use crate::error::{AppError, Result};
use crate::models::file::SelectedFile;
use crate::models::settings::DropzoneSettings;
use crate::services::controller::UploadController;

impl UiEvent for Event {
    fn suppress_default(&self) {
        self.prevent_default();
        self.stop_propagation();
    }
}

/// Element handles of one upload form.
pub struct DomView {
    /// Absent when the page only offers the picker.
    dropzone: Option<Element>,
    file_input: HtmlInputElement,
    file_name: Element,
    submit: Element,
    hover_class: String,
}

impl DomView {
    /// Resolve the elements named by `settings` in `document`.
    pub fn from_document(document: &Document, settings: &DropzoneSettings) -> Result<Self> {
        settings.validate()?;

        let required = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| AppError::MissingElement(id.to_string()))
        };

        let file_input = required(settings.file_input_id.as_str())?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| {
                AppError::Dom(format!(
                    "#{} is not an <input> element",
                    settings.file_input_id
                ))
            })?;
        let file_name = required(settings.file_name_id.as_str())?;
        let submit = required(settings.submit_id.as_str())?;

        let dropzone = document.get_element_by_id(&settings.dropzone_id);
        if dropzone.is_none() {
            log::warn!(
                "Drop target #{} not found, only the file picker is active",
                settings.dropzone_id
            );
        }

        Ok(Self {
            dropzone,
            file_input,
            file_name,
            submit,
            hover_class: settings.hover_class.clone(),
        })
    }

    pub fn dropzone(&self) -> Option<&Element> {
        self.dropzone.as_ref()
    }

    pub fn file_input(&self) -> &HtmlInputElement {
        &self.file_input
    }
}

impl UploadView for DomView {
    type File = File;

    fn describe(&self, file: &File) -> SelectedFile {
        SelectedFile::new(file.name(), file.type_(), file.size() as u64)
    }

    fn set_hover(&self, hovering: bool) -> Result<()> {
        let Some(dropzone) = &self.dropzone else {
            return Ok(());
        };
        let classes = dropzone.class_list();
        if hovering {
            classes.add_1(&self.hover_class)?;
        } else {
            classes.remove_1(&self.hover_class)?;
        }
        Ok(())
    }

    fn set_files(&self, file: &File) -> Result<()> {
        let transfer = DataTransfer::new()?;
        transfer.items().add_with_file(file)?;
        self.file_input.set_files(transfer.files().as_ref());
        Ok(())
    }

    fn set_label(&self, text: &str) -> Result<()> {
        self.file_name.set_text_content(Some(text));
        Ok(())
    }

    fn enable_submit(&self) -> Result<()> {
        self.submit.remove_attribute("disabled")?;
        Ok(())
    }

    fn notify(&self, message: &str) -> Result<()> {
        let window =
            web_sys::window().ok_or_else(|| AppError::Internal("no window available".into()))?;
        window.alert_with_message(message)?;
        Ok(())
    }
}

fn file_list_to_vec(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

fn dropped_files(event: &Event) -> Vec<File> {
    let files = event
        .dyn_ref::<DragEvent>()
        .and_then(DragEvent::data_transfer)
        .and_then(|transfer| transfer.files());
    file_list_to_vec(files)
}

fn log_failure(event_type: &str, result: Result<()>) {
    if let Err(err) = result {
        log::error!("Dropzone {} handler failed: {}", event_type, err);
    }
}

type SharedController = Rc<RefCell<UploadController<DomView>>>;

/// Run `handler` with the controller borrowed mutably. A re-entrant event
/// (fired while another handler still holds the controller) is dropped.
fn with_controller(
    controller: &SharedController,
    event_type: &str,
    handler: impl FnOnce(&mut UploadController<DomView>) -> Result<()>,
) {
    match controller.try_borrow_mut() {
        Ok(mut ctrl) => log_failure(event_type, handler(&mut ctrl)),
        Err(_) => log::warn!("Dropped re-entrant {} event", event_type),
    }
}

fn listen(
    target: &Element,
    event_type: &'static str,
    controller: &SharedController,
    handler: fn(&mut UploadController<DomView>, &Event) -> Result<()>,
) -> EventListener {
    let controller = Rc::clone(controller);
    EventListener::new_with_options(
        target,
        event_type,
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            with_controller(&controller, event_type, |ctrl| handler(ctrl, event));
        },
    )
}

/// Register the drag and change listeners for `controller`.
///
/// The listeners stay registered as long as the returned vector is alive.
pub fn bind(controller: &SharedController) -> Vec<EventListener> {
    let (dropzone, file_input) = {
        let ctrl = controller.borrow();
        (
            ctrl.view().dropzone().cloned(),
            ctrl.view().file_input().clone(),
        )
    };

    let mut listeners = Vec::new();

    if let Some(dropzone) = dropzone {
        for event_type in ["dragenter", "dragover"] {
            listeners.push(listen(&dropzone, event_type, controller, |ctrl, event| {
                ctrl.on_drag_hover(event)
            }));
        }
        listeners.push(listen(&dropzone, "dragleave", controller, |ctrl, event| {
            ctrl.on_drag_leave(event)
        }));
        listeners.push(listen(&dropzone, "drop", controller, |ctrl, event| {
            ctrl.on_drop(event, dropped_files(event)).map(|_| ())
        }));
    }

    let controller = Rc::clone(controller);
    let input = file_input.clone();
    listeners.push(EventListener::new(&file_input, "change", move |_event| {
        let files = file_list_to_vec(input.files());
        with_controller(&controller, "change", |ctrl| {
            ctrl.on_picker_change(files).map(|_| ())
        });
    }));

    listeners
}
