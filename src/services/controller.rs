//! Upload controller — turns drag-and-drop and file-picker events into a
//! single "file committed" effect on the upload form.
//!
//! The drop path checks the file type (MIME first, `.pdf` suffix as fallback)
//! and notifies the user on rejection. The picker path trusts the platform
//! file dialog and commits without checking.

use crate::models::file::{SelectedFile, Selection};
use crate::models::settings::DropzoneSettings;
use crate::services::validation;
use crate::view::{UiEvent, UploadView};

/// Result of handling a drop event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The drop carried no files (e.g. dragged text).
    Ignored,
    Accepted(SelectedFile),
    /// The first file is not a PDF; the user was notified.
    Rejected(SelectedFile),
}

/// Controller bound to one upload form for the lifetime of its view.
pub struct UploadController<V: UploadView> {
    view: V,
    settings: DropzoneSettings,
    selection: Selection,
}

impl<V: UploadView> UploadController<V> {
    pub fn new(view: V, settings: DropzoneSettings) -> Self {
        Self {
            view,
            settings,
            selection: Selection::Empty,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn settings(&self) -> &DropzoneSettings {
        &self.settings
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// `dragenter` / `dragover` on the drop target.
    pub fn on_drag_hover(&self, event: &impl UiEvent) -> crate::error::Result<()> {
        event.suppress_default();
        self.view.set_hover(true)
    }

    /// `dragleave` on the drop target.
    pub fn on_drag_leave(&self, event: &impl UiEvent) -> crate::error::Result<()> {
        event.suppress_default();
        self.view.set_hover(false)
    }

    /// `drop` on the drop target. Only the first file is considered.
    pub fn on_drop(
        &mut self,
        event: &impl UiEvent,
        files: Vec<V::File>,
    ) -> crate::error::Result<DropOutcome> {
        event.suppress_default();
        if let Err(err) = self.view.set_hover(false) {
            log::warn!("Could not clear drop target hover state: {}", err);
        }

        let Some(first) = files.into_iter().next() else {
            return Ok(DropOutcome::Ignored);
        };
        let described = self.view.describe(&first);

        if !validation::is_pdf_candidate(&described) {
            log::warn!(
                "Rejected dropped file: name={}, mime_type={:?}",
                described.file_name,
                described.mime_type
            );
            self.view.notify(self.settings.rejection_message())?;
            return Ok(DropOutcome::Rejected(described));
        }

        let committed = self.commit(&first)?;
        Ok(DropOutcome::Accepted(committed))
    }

    /// `change` on the file input. Commits the first file without a type check.
    pub fn on_picker_change(
        &mut self,
        files: Vec<V::File>,
    ) -> crate::error::Result<Option<SelectedFile>> {
        match files.into_iter().next() {
            Some(first) => self.commit(&first).map(Some),
            None => Ok(None),
        }
    }

    /// Make `file` the upload candidate: file control, label, submit.
    ///
    /// The selection follows the file control: once the control holds the new
    /// file it is recorded, even if updating the label or submit fails after.
    pub fn commit(&mut self, file: &V::File) -> crate::error::Result<SelectedFile> {
        let described = self.view.describe(file);
        self.view.set_files(file)?;
        self.selection = Selection::Selected(described.clone());
        log::info!(
            "Selected upload file: name={}, size={}",
            described.file_name,
            described.file_size
        );
        self.view.set_label(&described.file_name)?;
        self.view.enable_submit()?;
        Ok(described)
    }
}
