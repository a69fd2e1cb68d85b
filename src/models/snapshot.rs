//! Snapshot types owned by the root controller
//!
//! Every snapshot is replaced wholesale on update; nothing here is mutated
//! field by field from outside its constructor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::commands::{BlockFormat, CommandId};
use crate::error::{EditorError, Result};

/// Default text color
pub const DEFAULT_FOREGROUND: &str = "#1f2933";

/// Default highlight color
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Serialized markup and rendered plain text of the editable surface
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub markup_html: String,
    /// Read from the rendered surface, never parsed out of `markup_html`
    pub plain_text: String,
}

impl EditorSnapshot {
    pub fn new(markup_html: impl Into<String>, plain_text: impl Into<String>) -> Self {
        Self {
            markup_html: markup_html.into(),
            plain_text: plain_text.into(),
        }
    }
}

/// Formatting state at the current selection
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot {
    pub active_commands: BTreeMap<CommandId, bool>,
    pub block_type: BlockFormat,
}

impl SelectionSnapshot {
    /// Whether a toggle command is active; non-toggles are never active
    pub fn is_active(&self, id: CommandId) -> bool {
        self.active_commands.get(&id).copied().unwrap_or(false)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for SelectionSnapshot {
    /// All toggles inactive, block = paragraph
    fn default() -> Self {
        Self {
            active_commands: CommandId::TOGGLES.iter().map(|id| (*id, false)).collect(),
            block_type: BlockFormat::Paragraph,
        }
    }
}

/// CSS hex color, normalized to lowercase `#rrggbb`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse `#rgb` or `#rrggbb` (any case)
    pub fn parse(raw: &str) -> Result<Color> {
        let trimmed = raw.trim();
        let hex = trimmed
            .strip_prefix('#')
            .filter(|h| h.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| EditorError::InvalidColor(raw.to_string()))?;

        let expanded = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => hex.to_string(),
            _ => return Err(EditorError::InvalidColor(raw.to_string())),
        };

        Ok(Color(format!("#{}", expanded.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = EditorError;

    fn try_from(value: String) -> Result<Self> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.0
    }
}

/// Current text and highlight colors
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ColorState {
    pub foreground: Color,
    pub background: Color,
}

impl Default for ColorState {
    fn default() -> Self {
        Self {
            foreground: Color(DEFAULT_FOREGROUND.to_string()),
            background: Color(DEFAULT_BACKGROUND.to_string()),
        }
    }
}

/// Whether the surface still holds the starter content
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentState {
    #[default]
    Default,
    Custom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_all_inactive_paragraph() {
        let snapshot = SelectionSnapshot::default();
        assert_eq!(snapshot.block_type, BlockFormat::Paragraph);
        assert_eq!(snapshot.active_commands.len(), CommandId::TOGGLES.len());
        assert!(snapshot.active_commands.values().all(|active| !active));
        assert!(!snapshot.is_active(CommandId::FormatBlock));
    }

    #[test]
    fn test_color_parse_normalizes() {
        assert_eq!(Color::parse("#ABC").unwrap().as_str(), "#aabbcc");
        assert_eq!(Color::parse(" #1F2933 ").unwrap().as_str(), "#1f2933");
    }

    #[test]
    fn test_color_parse_rejects_garbage() {
        for bad in ["", "red", "#12", "#1234567", "#ggg", "1f2933"] {
            assert_eq!(
                Color::parse(bad),
                Err(EditorError::InvalidColor(bad.to_string())),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_default_colors() {
        let colors = ColorState::default();
        assert_eq!(colors.foreground.as_str(), DEFAULT_FOREGROUND);
        assert_eq!(colors.background.as_str(), DEFAULT_BACKGROUND);
    }

    #[test]
    fn test_selection_snapshot_json_shape() {
        let json = serde_json::to_value(SelectionSnapshot::default()).unwrap();
        assert_eq!(json["blockType"], "paragraph");
        assert_eq!(json["activeCommands"]["bold"], false);
        assert_eq!(json["activeCommands"]["align-justify"], false);
    }
}
