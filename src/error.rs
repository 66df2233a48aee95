//! Application error types.
//!
//! Every fallible operation in the crate returns [`Result`]. Errors are turned
//! into `JsValue`s only at the JS boundary (`commands`), and are logged inside
//! event listeners, which have no caller to report to.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required element is absent from the page.
    #[error("Missing element: #{0}")]
    MissingElement(String),
    /// A browser API call failed.
    #[error("DOM error: {0}")]
    Dom(String),
    /// The settings object passed from JS could not be read.
    #[error("Config error: {0}")]
    Config(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        AppError::Dom(message)
    }
}

impl From<serde_wasm_bindgen::Error> for AppError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
