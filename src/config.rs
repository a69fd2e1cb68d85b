//! Widget configuration
//!
//! Every field has a default, so an empty object (or `undefined` from
//! JavaScript) yields the stock widget.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Color, ColorState, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};

/// Content loaded on mount and restored by reset
pub const STARTER_MARKUP: &str = "<h2>Welcome to the editor</h2>\
<p>Select some text and use the toolbar to format it. \
The preview and markup views update as you type.</p>";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub starter_markup: String,
    pub foreground: String,
    pub background: String,
    /// Prefix for every generated CSS class
    pub class_prefix: String,
    /// Render the literal-markup pane
    pub show_source: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            starter_markup: STARTER_MARKUP.to_string(),
            foreground: DEFAULT_FOREGROUND.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            class_prefix: "rte".to_string(),
            show_source: true,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.default_colors()?;
        Ok(config)
    }

    /// Color state restored on mount and reset
    pub fn default_colors(&self) -> Result<ColorState> {
        Ok(ColorState {
            foreground: Color::parse(&self.foreground)?,
            background: Color::parse(&self.background)?,
        })
    }

    /// `{prefix}-{name}`
    pub fn class(&self, name: &str) -> String {
        format!("{}-{}", self.class_prefix, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditorError;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(EditorConfig::from_json("{}").unwrap(), EditorConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = EditorConfig::from_json(r#"{"classPrefix":"ed","showSource":false}"#).unwrap();
        assert_eq!(config.class("toolbar"), "ed-toolbar");
        assert!(!config.show_source);
        assert_eq!(config.starter_markup, STARTER_MARKUP);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let err = EditorConfig::from_json(r#"{"foreground":"blue"}"#).unwrap_err();
        assert_eq!(err, EditorError::InvalidColor("blue".into()));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        assert!(matches!(
            EditorConfig::from_json("{"),
            Err(EditorError::Config(_))
        ));
    }

    #[test]
    fn test_default_colors_match_fixed_defaults() {
        assert_eq!(
            EditorConfig::default().default_colors().unwrap(),
            ColorState::default()
        );
    }
}
