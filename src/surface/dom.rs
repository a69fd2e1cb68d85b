//! Browser `contenteditable` host
//!
//! Formatting, state queries and serialization are delegated to the
//! document's editing commands (`execCommand`, `queryCommandState`,
//! `queryCommandValue`). The surface only holds element handles.

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlElement, Node};

use super::TextSurface;
use crate::error::{EditorError, Result};

pub struct DomSurface {
    element: HtmlElement,
    document: HtmlDocument,
}

impl DomSurface {
    /// Turn `element` into an editable surface
    pub fn attach(element: HtmlElement) -> Result<Self> {
        let document = element
            .owner_document()
            .ok_or_else(|| EditorError::Dom("surface element has no owner document".into()))?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| EditorError::Dom("owner document is not an HTML document".into()))?;

        element.set_content_editable("true");
        element
            .set_attribute("spellcheck", "true")
            .map_err(|e| EditorError::dom("spellcheck attribute", &e))?;

        Ok(Self { element, document })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl Drop for DomSurface {
    fn drop(&mut self) {
        self.element.set_content_editable("false");
    }
}

impl TextSurface for DomSurface {
    type Node = Node;

    fn focus(&self) -> Result<()> {
        self.element
            .focus()
            .map_err(|e| EditorError::host("focus", &e))
    }

    fn execute(&mut self, operation: &str, value: Option<&str>) -> Result<()> {
        let result = match value {
            Some(value) => self
                .document
                .exec_command_with_show_ui_and_value(operation, false, value),
            None => self.document.exec_command(operation),
        };

        match result {
            Ok(true) => Ok(()),
            Ok(false) => Err(EditorError::Host {
                operation: operation.to_string(),
                message: "command was not executed".to_string(),
            }),
            Err(e) => Err(EditorError::host(operation, &e)),
        }
    }

    fn query_state(&self, operation: &str) -> Result<bool> {
        self.document
            .query_command_state(operation)
            .map_err(|e| EditorError::host(operation, &e))
    }

    fn query_block(&self) -> Result<String> {
        self.document
            .query_command_value("formatBlock")
            .map_err(|e| EditorError::host("formatBlock", &e))
    }

    fn markup(&self) -> String {
        self.element.inner_html()
    }

    fn plain_text(&self) -> String {
        self.element.inner_text()
    }

    fn set_markup(&mut self, markup: &str) {
        self.element.set_inner_html(markup);
    }

    fn selection_anchor(&self) -> Option<Node> {
        let selection = self.document.get_selection().ok().flatten()?;
        if selection.range_count() == 0 {
            return None;
        }
        selection.anchor_node()
    }

    fn contains(&self, node: &Node) -> bool {
        self.element.contains(Some(node))
    }
}
