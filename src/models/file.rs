//! Selected file model shared by the drop and picker paths.

use serde::{Deserialize, Serialize};

/// Metadata of a file offered by a drop or a picker change.
///
/// Only the name and the declared MIME type drive acceptance. Browsers leave
/// `mime_type` empty for some drag payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    pub file_name: String,
    pub mime_type: String,
    pub file_size: u64,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, file_size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            file_size,
        }
    }
}

/// Current upload candidate. Every commit replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Empty,
    Selected(SelectedFile),
}

impl Selection {
    pub fn file(&self) -> Option<&SelectedFile> {
        match self {
            Selection::Empty => None,
            Selection::Selected(file) => Some(file),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}
