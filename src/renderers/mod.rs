//! DOM renderers
//!
//! Materialize the pure view-models (`ToolbarModel`, `PreviewModel`) as
//! elements and keep them in sync. Only this module and `surface::dom`
//! touch `web_sys`.

pub mod events;
pub mod preview;
pub mod toolbar;

pub use events::EventBinding;
pub use preview::PreviewView;
pub use toolbar::{ToolbarControl, ToolbarView};

use wasm_bindgen::JsCast;
use web_sys::{Document, Node};

use crate::error::{EditorError, Result};

/// Create `<tag class="...">` and cast it to the requested element type
pub(crate) fn create_element<T: JsCast>(document: &Document, tag: &str, class: &str) -> Result<T> {
    let element = document
        .create_element(tag)
        .map_err(|e| EditorError::dom(tag, &e))?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element
        .dyn_into::<T>()
        .map_err(|_| EditorError::Dom(format!("<{}> has an unexpected element type", tag)))
}

pub(crate) fn append(parent: &Node, child: &Node) -> Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| EditorError::dom("append_child", &e))
}

pub(crate) fn set_attr(element: &web_sys::Element, name: &str, value: &str) -> Result<()> {
    element
        .set_attribute(name, value)
        .map_err(|e| EditorError::dom(name, &e))
}
