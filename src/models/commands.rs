//! Formatting command registry
//!
//! Static catalog of every formatting command the toolbar offers. Each
//! [`CommandId`] maps to exactly one host editing-engine operation; there is
//! no open-ended string dispatch.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Closed set of supported formatting commands
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CommandId {
    Bold,
    Italic,
    Underline,
    StrikeThrough,
    OrderedList,
    UnorderedList,
    AlignLeft,
    AlignCenter,
    AlignRight,
    AlignJustify,
    FormatBlock,
    RemoveFormat,
    ForeColor,
    BackColor,
}

impl CommandId {
    /// Every command, in registry order
    pub const ALL: [CommandId; 14] = [
        CommandId::Bold,
        CommandId::Italic,
        CommandId::Underline,
        CommandId::StrikeThrough,
        CommandId::OrderedList,
        CommandId::UnorderedList,
        CommandId::AlignLeft,
        CommandId::AlignCenter,
        CommandId::AlignRight,
        CommandId::AlignJustify,
        CommandId::FormatBlock,
        CommandId::RemoveFormat,
        CommandId::ForeColor,
        CommandId::BackColor,
    ];

    /// Commands with a binary active/inactive state for a selection
    pub const TOGGLES: [CommandId; 10] = [
        CommandId::Bold,
        CommandId::Italic,
        CommandId::Underline,
        CommandId::StrikeThrough,
        CommandId::OrderedList,
        CommandId::UnorderedList,
        CommandId::AlignLeft,
        CommandId::AlignCenter,
        CommandId::AlignRight,
        CommandId::AlignJustify,
    ];

    /// Stable kebab-case identifier (used in `data-command` attributes)
    pub fn name(self) -> &'static str {
        match self {
            CommandId::Bold => "bold",
            CommandId::Italic => "italic",
            CommandId::Underline => "underline",
            CommandId::StrikeThrough => "strike-through",
            CommandId::OrderedList => "ordered-list",
            CommandId::UnorderedList => "unordered-list",
            CommandId::AlignLeft => "align-left",
            CommandId::AlignCenter => "align-center",
            CommandId::AlignRight => "align-right",
            CommandId::AlignJustify => "align-justify",
            CommandId::FormatBlock => "format-block",
            CommandId::RemoveFormat => "remove-format",
            CommandId::ForeColor => "fore-color",
            CommandId::BackColor => "back-color",
        }
    }

    /// Operation identifier understood by the host editing engine
    pub fn host_operation(self) -> &'static str {
        match self {
            CommandId::Bold => "bold",
            CommandId::Italic => "italic",
            CommandId::Underline => "underline",
            CommandId::StrikeThrough => "strikeThrough",
            CommandId::OrderedList => "insertOrderedList",
            CommandId::UnorderedList => "insertUnorderedList",
            CommandId::AlignLeft => "justifyLeft",
            CommandId::AlignCenter => "justifyCenter",
            CommandId::AlignRight => "justifyRight",
            CommandId::AlignJustify => "justifyFull",
            CommandId::FormatBlock => "formatBlock",
            CommandId::RemoveFormat => "removeFormat",
            CommandId::ForeColor => "foreColor",
            CommandId::BackColor => "hiliteColor",
        }
    }

    pub fn is_toggle(self) -> bool {
        Self::TOGGLES.contains(&self)
    }

    /// Resolve either the kebab-case id or the host operation name
    pub fn from_name(name: &str) -> Option<CommandId> {
        COMMANDS_BY_NAME.get(name).copied()
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static COMMANDS_BY_NAME: Lazy<HashMap<&'static str, CommandId>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for id in CommandId::ALL {
        map.insert(id.name(), id);
        map.insert(id.host_operation(), id);
    }
    map
});

// ============================================================================
// Block formats
// ============================================================================

/// Structural container of the current line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[serde(into = "String", from = "String")]
pub enum BlockFormat {
    #[default]
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Quote,
    /// Any other container the host reports (`pre`, `h4`, ...)
    Other(String),
}

impl BlockFormat {
    /// Options offered by the block selector, in display order
    pub const OPTIONS: [BlockFormat; 5] = [
        BlockFormat::Paragraph,
        BlockFormat::Heading1,
        BlockFormat::Heading2,
        BlockFormat::Heading3,
        BlockFormat::Quote,
    ];

    /// Normalize a host-reported or user-supplied block value.
    ///
    /// Strips `<`/`>` delimiters and lowercases. The implicit root container
    /// (`div`, or an empty report) and `p` both become [`BlockFormat::Paragraph`].
    pub fn parse(raw: &str) -> BlockFormat {
        let tag = raw
            .trim()
            .trim_start_matches('<')
            .trim_end_matches('>')
            .trim()
            .to_ascii_lowercase();

        match tag.as_str() {
            "" | "div" | "p" | "paragraph" => BlockFormat::Paragraph,
            "h1" => BlockFormat::Heading1,
            "h2" => BlockFormat::Heading2,
            "h3" => BlockFormat::Heading3,
            "blockquote" | "quote" => BlockFormat::Quote,
            _ => BlockFormat::Other(tag),
        }
    }

    /// Name reported in selection snapshots
    pub fn as_str(&self) -> &str {
        match self {
            BlockFormat::Paragraph => "paragraph",
            BlockFormat::Heading1 => "h1",
            BlockFormat::Heading2 => "h2",
            BlockFormat::Heading3 => "h3",
            BlockFormat::Quote => "blockquote",
            BlockFormat::Other(tag) => tag,
        }
    }

    /// Tag handed to the host `formatBlock` operation
    pub fn host_value(&self) -> &str {
        match self {
            BlockFormat::Paragraph => "p",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for BlockFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for BlockFormat {
    fn from(value: String) -> Self {
        BlockFormat::parse(&value)
    }
}

impl From<BlockFormat> for String {
    fn from(value: BlockFormat) -> Self {
        value.as_str().to_string()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Toolbar grouping for a registry entry
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CommandGroup {
    Block,
    Inline,
    List,
    Align,
    Color,
    Clear,
}

impl CommandGroup {
    pub fn name(self) -> &'static str {
        match self {
            CommandGroup::Block => "block",
            CommandGroup::Inline => "inline",
            CommandGroup::List => "list",
            CommandGroup::Align => "align",
            CommandGroup::Color => "color",
            CommandGroup::Clear => "clear",
        }
    }
}

/// One registry entry: a command plus its display metadata
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormattingCommand {
    pub id: CommandId,
    pub group: CommandGroup,
    pub label: &'static str,
    pub tooltip: &'static str,
    /// Fixed value passed with the command (block tag for `formatBlock`)
    pub value: Option<&'static str>,
}

const fn entry(
    id: CommandId,
    group: CommandGroup,
    label: &'static str,
    tooltip: &'static str,
) -> FormattingCommand {
    FormattingCommand { id, group, label, tooltip, value: None }
}

const fn block(label: &'static str, tooltip: &'static str, tag: &'static str) -> FormattingCommand {
    FormattingCommand {
        id: CommandId::FormatBlock,
        group: CommandGroup::Block,
        label,
        tooltip,
        value: Some(tag),
    }
}

/// The full command catalog, in toolbar order
pub static REGISTRY: [FormattingCommand; 17] = [
    block("Paragraph", "Normal paragraph text", "p"),
    block("Heading 1", "Top-level heading", "h1"),
    block("Heading 2", "Section heading", "h2"),
    block("Heading 3", "Subsection heading", "h3"),
    block("Quote", "Block quotation", "blockquote"),
    entry(CommandId::Bold, CommandGroup::Inline, "B", "Bold"),
    entry(CommandId::Italic, CommandGroup::Inline, "I", "Italic"),
    entry(CommandId::Underline, CommandGroup::Inline, "U", "Underline"),
    entry(CommandId::StrikeThrough, CommandGroup::Inline, "S", "Strike-through"),
    entry(CommandId::OrderedList, CommandGroup::List, "1.", "Numbered list"),
    entry(CommandId::UnorderedList, CommandGroup::List, "\u{2022}", "Bulleted list"),
    entry(CommandId::AlignLeft, CommandGroup::Align, "Left", "Align left"),
    entry(CommandId::AlignCenter, CommandGroup::Align, "Center", "Align center"),
    entry(CommandId::AlignRight, CommandGroup::Align, "Right", "Align right"),
    entry(CommandId::AlignJustify, CommandGroup::Align, "Justify", "Justify"),
    entry(CommandId::ForeColor, CommandGroup::Color, "Text", "Text color"),
    entry(CommandId::BackColor, CommandGroup::Color, "Highlight", "Highlight color"),
];

/// Clear-formatting entry, rendered apart from the grouped buttons
pub static CLEAR_FORMATTING: FormattingCommand = FormattingCommand {
    id: CommandId::RemoveFormat,
    group: CommandGroup::Clear,
    label: "Clear",
    tooltip: "Clear formatting",
    value: None,
};

/// Registry entries belonging to one toolbar group
pub fn commands_in(group: CommandGroup) -> impl Iterator<Item = &'static FormattingCommand> {
    REGISTRY
        .iter()
        .chain(std::iter::once(&CLEAR_FORMATTING))
        .filter(move |cmd| cmd.group == group)
}

/// Look up the registry entry for a non-block command
pub fn lookup(id: CommandId) -> Option<&'static FormattingCommand> {
    REGISTRY
        .iter()
        .chain(std::iter::once(&CLEAR_FORMATTING))
        .find(|cmd| cmd.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_toggle_is_registered() {
        for id in CommandId::TOGGLES {
            let cmd = lookup(id).expect("toggle missing from registry");
            assert!(!cmd.label.is_empty());
            assert!(!cmd.tooltip.is_empty());
        }
    }

    #[test]
    fn test_from_name_accepts_id_and_host_operation() {
        assert_eq!(CommandId::from_name("strike-through"), Some(CommandId::StrikeThrough));
        assert_eq!(CommandId::from_name("strikeThrough"), Some(CommandId::StrikeThrough));
        assert_eq!(CommandId::from_name("insertOrderedList"), Some(CommandId::OrderedList));
        assert_eq!(CommandId::from_name("hiliteColor"), Some(CommandId::BackColor));
        assert_eq!(CommandId::from_name("explode"), None);
    }

    #[test]
    fn test_host_operations_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for id in CommandId::ALL {
            assert!(seen.insert(id.host_operation()), "duplicate op for {}", id);
        }
    }

    #[test]
    fn test_block_parse_normalizes_delimiters_and_case() {
        assert_eq!(BlockFormat::parse("<H2>"), BlockFormat::Heading2);
        assert_eq!(BlockFormat::parse("blockquote"), BlockFormat::Quote);
        assert_eq!(BlockFormat::parse("<pre>"), BlockFormat::Other("pre".into()));
    }

    #[test]
    fn test_root_container_is_paragraph() {
        assert_eq!(BlockFormat::parse("div"), BlockFormat::Paragraph);
        assert_eq!(BlockFormat::parse("<DIV>"), BlockFormat::Paragraph);
        assert_eq!(BlockFormat::parse(""), BlockFormat::Paragraph);
        assert_eq!(BlockFormat::parse("p").as_str(), "paragraph");
    }

    #[test]
    fn test_block_registry_matches_options() {
        let tags: Vec<_> = commands_in(CommandGroup::Block)
            .map(|cmd| cmd.value.unwrap())
            .collect();
        let options = BlockFormat::OPTIONS;
        let expected: Vec<_> = options.iter().map(|b| b.host_value()).collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn test_block_format_serializes_as_name() {
        let json = serde_json::to_string(&BlockFormat::Heading1).unwrap();
        assert_eq!(json, "\"h1\"");
        let back: BlockFormat = serde_json::from_str("\"paragraph\"").unwrap();
        assert_eq!(back, BlockFormat::Paragraph);
    }
}
