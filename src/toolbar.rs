//! Toolbar view-model and user actions
//!
//! [`ToolbarModel`] is a pure projection of the registry, the current
//! selection snapshot and the color state. The DOM renderer in
//! `renderers::toolbar` materializes it; nothing here touches the DOM.

use serde::Serialize;

use crate::error::{EditorError, Result};
use crate::models::{
    commands_in, BlockFormat, Color, ColorState, CommandGroup, CommandId, SelectionSnapshot,
    CLEAR_FORMATTING,
};

/// Something the user asked the toolbar to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolbarAction {
    Toggle(CommandId),
    SetBlock(BlockFormat),
    SetForeground(Color),
    SetBackground(Color),
    ClearFormatting,
}

impl ToolbarAction {
    /// Decode a toolbar control event: the control's command plus its
    /// current value (select option, color input).
    pub fn from_control(command: CommandId, value: Option<&str>) -> Result<ToolbarAction> {
        let required = |value: Option<&str>| {
            value
                .map(str::to_string)
                .ok_or_else(|| EditorError::InvalidColor(String::new()))
        };

        Ok(match command {
            CommandId::FormatBlock => {
                ToolbarAction::SetBlock(BlockFormat::parse(value.unwrap_or("paragraph")))
            }
            CommandId::ForeColor => ToolbarAction::SetForeground(Color::parse(&required(value)?)?),
            CommandId::BackColor => ToolbarAction::SetBackground(Color::parse(&required(value)?)?),
            CommandId::RemoveFormat => ToolbarAction::ClearFormatting,
            toggle => ToolbarAction::Toggle(toggle),
        })
    }

    /// Command and value handed to the surface adapter
    pub fn command(&self) -> (CommandId, Option<String>) {
        match self {
            ToolbarAction::Toggle(id) => (*id, None),
            ToolbarAction::SetBlock(block) => {
                (CommandId::FormatBlock, Some(block.host_value().to_string()))
            }
            ToolbarAction::SetForeground(color) => {
                (CommandId::ForeColor, Some(color.as_str().to_string()))
            }
            ToolbarAction::SetBackground(color) => {
                (CommandId::BackColor, Some(color.as_str().to_string()))
            }
            ToolbarAction::ClearFormatting => (CommandId::RemoveFormat, None),
        }
    }
}

// ============================================================================
// View-model
// ============================================================================

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ToolbarButton {
    pub command: CommandId,
    pub label: &'static str,
    pub tooltip: &'static str,
    /// Pressed/highlighted state
    pub active: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ButtonGroup {
    pub group: CommandGroup,
    pub buttons: Vec<ToolbarButton>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct BlockOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ColorPicker {
    pub command: CommandId,
    pub label: &'static str,
    pub tooltip: &'static str,
    pub value: Color,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ToolbarModel {
    pub block_options: Vec<BlockOption>,
    pub groups: Vec<ButtonGroup>,
    pub colors: Vec<ColorPicker>,
    pub clear: ToolbarButton,
}

impl ToolbarModel {
    pub fn build(selection: &SelectionSnapshot, colors: &ColorState) -> Self {
        let block_options = commands_in(CommandGroup::Block)
            .filter_map(|cmd| cmd.value.map(|value| (cmd, value)))
            .map(|(cmd, value)| BlockOption {
                value,
                label: cmd.label,
                selected: BlockFormat::parse(value) == selection.block_type,
            })
            .collect();

        let groups = [CommandGroup::Inline, CommandGroup::List, CommandGroup::Align]
            .into_iter()
            .map(|group| ButtonGroup {
                group,
                buttons: commands_in(group)
                    .map(|cmd| ToolbarButton {
                        command: cmd.id,
                        label: cmd.label,
                        tooltip: cmd.tooltip,
                        active: selection.is_active(cmd.id),
                    })
                    .collect(),
            })
            .collect();

        let colors = commands_in(CommandGroup::Color)
            .map(|cmd| ColorPicker {
                command: cmd.id,
                label: cmd.label,
                tooltip: cmd.tooltip,
                value: match cmd.id {
                    CommandId::BackColor => colors.background.clone(),
                    _ => colors.foreground.clone(),
                },
            })
            .collect();

        Self {
            block_options,
            groups,
            colors,
            clear: ToolbarButton {
                command: CLEAR_FORMATTING.id,
                label: CLEAR_FORMATTING.label,
                tooltip: CLEAR_FORMATTING.tooltip,
                active: false,
            },
        }
    }

    /// Value of the selected block option, if the block is one we offer
    pub fn selected_block(&self) -> Option<&'static str> {
        self.block_options.iter().find(|o| o.selected).map(|o| o.value)
    }

    pub fn buttons(&self) -> impl Iterator<Item = &ToolbarButton> {
        self.groups.iter().flat_map(|g| g.buttons.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_has_nothing_pressed() {
        let model = ToolbarModel::build(&SelectionSnapshot::default(), &ColorState::default());
        assert!(model.buttons().all(|b| !b.active));
        assert_eq!(model.buttons().count(), 10);
        assert_eq!(model.selected_block(), Some("p"));
        assert_eq!(model.block_options.len(), 5);
    }

    #[test]
    fn test_active_toggles_are_highlighted() {
        let mut selection = SelectionSnapshot::default();
        selection.active_commands.insert(CommandId::Underline, true);
        selection.active_commands.insert(CommandId::OrderedList, true);
        selection.block_type = BlockFormat::Quote;

        let model = ToolbarModel::build(&selection, &ColorState::default());
        let pressed: Vec<_> = model.buttons().filter(|b| b.active).map(|b| b.command).collect();
        assert_eq!(pressed, vec![CommandId::Underline, CommandId::OrderedList]);
        assert_eq!(model.selected_block(), Some("blockquote"));
    }

    #[test]
    fn test_unknown_block_selects_nothing() {
        let mut selection = SelectionSnapshot::default();
        selection.block_type = BlockFormat::parse("pre");
        let model = ToolbarModel::build(&selection, &ColorState::default());
        assert_eq!(model.selected_block(), None);
    }

    #[test]
    fn test_color_pickers_follow_color_state() {
        let colors = ColorState {
            foreground: Color::parse("#ff0000").unwrap(),
            background: Color::parse("#00ff00").unwrap(),
        };
        let model = ToolbarModel::build(&SelectionSnapshot::default(), &colors);
        assert_eq!(model.colors[0].command, CommandId::ForeColor);
        assert_eq!(model.colors[0].value.as_str(), "#ff0000");
        assert_eq!(model.colors[1].command, CommandId::BackColor);
        assert_eq!(model.colors[1].value.as_str(), "#00ff00");
    }

    #[test]
    fn test_from_control_decodes_actions() {
        assert_eq!(
            ToolbarAction::from_control(CommandId::Bold, None),
            Ok(ToolbarAction::Toggle(CommandId::Bold))
        );
        assert_eq!(
            ToolbarAction::from_control(CommandId::FormatBlock, Some("h3")),
            Ok(ToolbarAction::SetBlock(BlockFormat::Heading3))
        );
        assert_eq!(
            ToolbarAction::from_control(CommandId::FormatBlock, None),
            Ok(ToolbarAction::SetBlock(BlockFormat::Paragraph))
        );
        assert_eq!(
            ToolbarAction::from_control(CommandId::RemoveFormat, None),
            Ok(ToolbarAction::ClearFormatting)
        );
        assert!(matches!(
            ToolbarAction::from_control(CommandId::ForeColor, Some("#ABCDEF")),
            Ok(ToolbarAction::SetForeground(c)) if c.as_str() == "#abcdef"
        ));
    }

    #[test]
    fn test_from_control_rejects_bad_colors() {
        assert_eq!(
            ToolbarAction::from_control(CommandId::BackColor, None),
            Err(EditorError::InvalidColor(String::new()))
        );
        assert_eq!(
            ToolbarAction::from_control(CommandId::ForeColor, None),
            Err(EditorError::InvalidColor(String::new()))
        );
        assert_eq!(
            ToolbarAction::from_control(CommandId::BackColor, Some("teal")),
            Err(EditorError::InvalidColor("teal".into()))
        );
    }

    #[test]
    fn test_action_command_mapping() {
        assert_eq!(
            ToolbarAction::SetBlock(BlockFormat::Paragraph).command(),
            (CommandId::FormatBlock, Some("p".to_string()))
        );
        assert_eq!(
            ToolbarAction::ClearFormatting.command(),
            (CommandId::RemoveFormat, None)
        );
    }
}
