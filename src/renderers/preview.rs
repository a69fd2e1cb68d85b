//! Stats line, rendered preview and literal source panes

use web_sys::{Document, Element, HtmlElement};

use super::{append, create_element, set_attr};
use crate::config::EditorConfig;
use crate::error::Result;
use crate::preview::PreviewModel;

pub struct PreviewView {
    stats: HtmlElement,
    preview: HtmlElement,
    source: Option<HtmlElement>,
}

impl PreviewView {
    pub fn build(document: &Document, parent: &Element, config: &EditorConfig) -> Result<Self> {
        let stats: HtmlElement = create_element(document, "div", &config.class("stats"))?;
        set_attr(&stats, "aria-live", "polite")?;
        append(parent, &stats)?;

        let preview: HtmlElement = create_element(document, "div", &config.class("preview"))?;
        append(parent, &preview)?;

        let source = if config.show_source {
            let pre: HtmlElement = create_element(document, "pre", &config.class("source"))?;
            append(parent, &pre)?;
            Some(pre)
        } else {
            None
        };

        Ok(Self { stats, preview, source })
    }

    pub fn render(&self, model: &PreviewModel) {
        self.stats.set_text_content(Some(&model.summary()));
        self.preview.set_inner_html(&model.preview_html);
        if let Some(source) = &self.source {
            source.set_text_content(Some(&model.source_text));
        }
    }

    pub fn remove(&self) {
        self.stats.remove();
        self.preview.remove();
        if let Some(source) = &self.source {
            source.remove();
        }
    }
}
