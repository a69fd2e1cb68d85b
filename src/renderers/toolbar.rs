//! Toolbar DOM
//!
//! Built once from the initial [`ToolbarModel`]; later models only flip
//! pressed classes, the selected block option and color values.

use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

use super::{append, create_element, set_attr};
use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::models::CommandId;
use crate::toolbar::{ToolbarButton, ToolbarModel};

/// A toolbar element the editor wires to an action
#[derive(Clone)]
pub enum ToolbarControl {
    Button(CommandId, HtmlElement),
    BlockSelect(HtmlSelectElement),
    ColorPicker(CommandId, HtmlInputElement),
}

pub struct ToolbarView {
    root: HtmlElement,
    block_select: HtmlSelectElement,
    buttons: Vec<(CommandId, HtmlElement)>,
    clear: HtmlElement,
    color_inputs: Vec<(CommandId, HtmlInputElement)>,
    pressed_class: String,
}

impl ToolbarView {
    pub fn build(
        document: &Document,
        parent: &Element,
        model: &ToolbarModel,
        config: &EditorConfig,
    ) -> Result<Self> {
        let root: HtmlElement = create_element(document, "div", &config.class("toolbar"))?;
        set_attr(&root, "role", "toolbar")?;

        let block_select: HtmlSelectElement =
            create_element(document, "select", &config.class("block-select"))?;
        set_attr(&block_select, "data-command", CommandId::FormatBlock.name())?;
        set_attr(&block_select, "title", "Block format")?;
        for option in &model.block_options {
            let element: HtmlElement = create_element(document, "option", "")?;
            set_attr(&element, "value", option.value)?;
            element.set_text_content(Some(option.label));
            append(&block_select, &element)?;
        }
        append(&root, &block_select)?;

        let mut buttons = Vec::new();
        for group in &model.groups {
            let container: HtmlElement = create_element(
                document,
                "div",
                &format!("{} {}", config.class("group"), config.class(group.group.name())),
            )?;
            for button in &group.buttons {
                let element = build_button(document, button, config)?;
                append(&container, &element)?;
                buttons.push((button.command, element));
            }
            append(&root, &container)?;
        }

        let mut color_inputs = Vec::new();
        for picker in &model.colors {
            let label: HtmlElement = create_element(document, "label", &config.class("color"))?;
            label.set_title(picker.tooltip);
            let caption: HtmlElement = create_element(document, "span", "")?;
            caption.set_text_content(Some(picker.label));
            let input: HtmlInputElement = create_element(document, "input", "")?;
            input.set_type("color");
            input.set_value(picker.value.as_str());
            set_attr(&input, "data-command", picker.command.name())?;
            set_attr(&input, "aria-label", picker.tooltip)?;
            append(&label, &caption)?;
            append(&label, &input)?;
            append(&root, &label)?;
            color_inputs.push((picker.command, input));
        }

        let clear = build_button(document, &model.clear, config)?;
        append(&root, &clear)?;
        append(parent, &root)?;

        let view = Self {
            root,
            block_select,
            buttons,
            clear,
            color_inputs,
            pressed_class: config.class("active"),
        };
        view.update(model)?;
        Ok(view)
    }

    /// Reflect a fresh model in the existing elements
    pub fn update(&self, model: &ToolbarModel) -> Result<()> {
        for button in model.buttons() {
            if let Some((_, element)) = self.buttons.iter().find(|(id, _)| *id == button.command) {
                element
                    .class_list()
                    .toggle_with_force(&self.pressed_class, button.active)
                    .map_err(|e| EditorError::dom("class toggle", &e))?;
                set_attr(element, "aria-pressed", if button.active { "true" } else { "false" })?;
            }
        }

        self.block_select
            .set_value(model.selected_block().unwrap_or(""));

        for picker in &model.colors {
            if let Some((_, input)) = self.color_inputs.iter().find(|(id, _)| *id == picker.command) {
                if input.value() != picker.value.as_str() {
                    input.set_value(picker.value.as_str());
                }
            }
        }
        Ok(())
    }

    /// Every interactive element, for event wiring
    pub fn controls(&self) -> Vec<ToolbarControl> {
        let mut controls = vec![ToolbarControl::BlockSelect(self.block_select.clone())];
        controls.extend(
            self.buttons
                .iter()
                .map(|(id, element)| ToolbarControl::Button(*id, element.clone())),
        );
        controls.push(ToolbarControl::Button(CommandId::RemoveFormat, self.clear.clone()));
        controls.extend(
            self.color_inputs
                .iter()
                .map(|(id, input)| ToolbarControl::ColorPicker(*id, input.clone())),
        );
        controls
    }

    pub fn remove(&self) {
        self.root.remove();
    }
}

fn build_button(
    document: &Document,
    button: &ToolbarButton,
    config: &EditorConfig,
) -> Result<HtmlElement> {
    let element: HtmlElement = create_element(document, "button", &config.class("button"))?;
    set_attr(&element, "type", "button")?;
    set_attr(&element, "data-command", button.command.name())?;
    set_attr(&element, "aria-label", button.tooltip)?;
    element.set_title(button.tooltip);
    element.set_text_content(Some(button.label));
    Ok(element)
}
