//! Drag-and-drop and file-picker controller for a single-file PDF upload form.
//!
//! A PDF dropped on the drop target, or picked through the file input, is
//! placed into the form's file control, its name is shown in the label and
//! the submit control is enabled. Drops that are not PDFs are refused with a
//! blocking notification. The upload itself is left to the form.

use wasm_bindgen::prelude::*;

pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod view;

pub use commands::dropzone::{is_pdf_candidate, mount_dropzone, DropzoneHandle};
pub use models::file::{SelectedFile, Selection};
pub use models::settings::{DropzoneSettings, Locale};
pub use services::controller::{DropOutcome, UploadController};

/// Runs once when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when the embedding page already installed a logger.
    let _ = console_log::init_with_level(log::Level::Info);
}
