use serde::{Deserialize, Serialize};

pub const DEFAULT_DROPZONE_ID: &str = "dropzone";
pub const DEFAULT_FILE_INPUT_ID: &str = "file";
pub const DEFAULT_FILE_NAME_ID: &str = "file-name";
pub const DEFAULT_SUBMIT_ID: &str = "submit-btn";
pub const DEFAULT_HOVER_CLASS: &str = "hover";

/// Language of the rejection notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    pub fn rejection_message(self) -> &'static str {
        match self {
            Locale::Fr => "Veuillez déposer un fichier PDF.",
            Locale::En => "Please drop a PDF file.",
        }
    }
}

/// Element ids and presentation settings a drop zone binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropzoneSettings {
    pub dropzone_id: String,
    pub file_input_id: String,
    /// Label showing the selected file name.
    pub file_name_id: String,
    pub submit_id: String,
    /// CSS class toggled on the drop target while a drag hovers it.
    pub hover_class: String,
    pub locale: Locale,
    /// Replaces the localized rejection message when set.
    pub rejection_message: Option<String>,
}

impl Default for DropzoneSettings {
    fn default() -> Self {
        Self {
            dropzone_id: DEFAULT_DROPZONE_ID.to_string(),
            file_input_id: DEFAULT_FILE_INPUT_ID.to_string(),
            file_name_id: DEFAULT_FILE_NAME_ID.to_string(),
            submit_id: DEFAULT_SUBMIT_ID.to_string(),
            hover_class: DEFAULT_HOVER_CLASS.to_string(),
            locale: Locale::default(),
            rejection_message: None,
        }
    }
}

impl DropzoneSettings {
    /// Parse settings from a JSON document, e.g. a `data-` attribute.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject values the page would refuse at event time.
    ///
    /// `classList` throws on an empty token or one containing whitespace.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.hover_class.is_empty() || self.hover_class.chars().any(char::is_whitespace) {
            return Err(crate::error::AppError::Config(format!(
                "hoverClass must be a single non-empty class name, got {:?}",
                self.hover_class
            )));
        }
        Ok(())
    }

    pub fn rejection_message(&self) -> &str {
        self.rejection_message
            .as_deref()
            .unwrap_or(self.locale.rejection_message())
    }
}
