//! UI abstraction layer.
//!
//! `UploadView` is the only interface through which the controller touches the
//! page: the drop target's hover class, the form's file control, the file name
//! label, the submit control and the blocking notification. `services` never
//! calls browser APIs directly; the web-sys implementation lives in [`dom`].

use crate::error::Result;
use crate::models::file::SelectedFile;

/// A native input event whose default handling can be suppressed.
pub trait UiEvent {
    /// Prevent the browser's default action (navigating to the dropped file)
    /// and stop propagation.
    fn suppress_default(&self);
}

/// Handles to the elements an upload form exposes to the controller.
pub trait UploadView {
    /// Host file object. Committed as-is into the file control.
    type File;

    /// Read name, declared MIME type and size of a host file.
    fn describe(&self, file: &Self::File) -> SelectedFile;

    fn set_hover(&self, hovering: bool) -> Result<()>;

    /// Replace the file control's list with exactly `file`.
    fn set_files(&self, file: &Self::File) -> Result<()>;

    fn set_label(&self, text: &str) -> Result<()>;

    /// Enable the submit control. The page renders it disabled until a file
    /// is committed.
    fn enable_submit(&self) -> Result<()>;

    /// Show a blocking notification. Returns once the user dismissed it.
    fn notify(&self, message: &str) -> Result<()>;
}

pub mod dom;
