//! Error types for the rich text widget
//!
//! Host-engine failures inside the surface adapter and selection observer are
//! soft: they are logged and defaulted, never propagated. The variants below
//! are what remains: API misuse and DOM construction problems that the
//! JavaScript caller should see.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level error type for the widget
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Host editing engine rejected or failed an operation
    #[error("host operation '{operation}' failed: {message}")]
    Host { operation: String, message: String },

    /// A required element id is missing from the page
    #[error("element not found: #{0}")]
    ElementNotFound(String),

    /// DOM construction or wiring failed
    #[error("DOM error: {0}")]
    Dom(String),

    /// Color literal is not `#rgb` or `#rrggbb`
    #[error("invalid color value: '{0}' (expected #rgb or #rrggbb)")]
    InvalidColor(String),

    /// Command name does not match any registry entry
    #[error("unknown formatting command: '{0}'")]
    UnknownCommand(String),

    /// Configuration could not be loaded
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl EditorError {
    /// Build a host error from a raw JavaScript exception value
    pub fn host(operation: &str, err: &JsValue) -> Self {
        EditorError::Host {
            operation: operation.to_string(),
            message: js_message(err),
        }
    }

    /// Build a DOM error from a raw JavaScript exception value
    pub fn dom(context: &str, err: &JsValue) -> Self {
        EditorError::Dom(format!("{}: {}", context, js_message(err)))
    }
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl From<EditorError> for JsValue {
    fn from(err: EditorError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        EditorError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EditorError::ElementNotFound("editor".into()).to_string(),
            "element not found: #editor"
        );
        assert_eq!(
            EditorError::Host {
                operation: "bold".into(),
                message: "unsupported".into()
            }
            .to_string(),
            "host operation 'bold' failed: unsupported"
        );
    }

    #[test]
    fn test_json_error_becomes_config_error() {
        let err: EditorError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, EditorError::Config(_)));
    }
}
