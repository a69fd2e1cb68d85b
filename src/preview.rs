//! Preview & output view-model
//!
//! The same markup is shown twice: rendered as formatted preview and as
//! literal source text.

use serde::Serialize;

use crate::models::{EditorSnapshot, TextStatistics};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewModel {
    /// Markup injected as HTML into the preview pane
    pub preview_html: String,
    /// Markup shown verbatim (as text) in the source pane
    pub source_text: String,
    pub statistics: TextStatistics,
}

impl PreviewModel {
    pub fn build(snapshot: &EditorSnapshot) -> Self {
        Self {
            preview_html: snapshot.markup_html.clone(),
            source_text: snapshot.markup_html.clone(),
            statistics: TextStatistics::from_text(&snapshot.plain_text),
        }
    }

    pub fn summary(&self) -> String {
        self.statistics.summary()
    }
}
