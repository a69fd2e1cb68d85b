//! In-memory editing host
//!
//! `HeadlessSurface` stands in for the browser engine wherever there is no
//! DOM: the test suite and non-browser embedders. It keeps markup as a
//! string, keeps per-operation toggle state, and records every focus and
//! execute call so callers can check ordering.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::TextSurface;
use crate::error::{EditorError, Result};

/// Where the headless selection is anchored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadlessNode {
    Surface,
    Outside,
}

/// Calls observed by the headless host, in order
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    Focus,
    Execute {
        operation: String,
        value: Option<String>,
    },
    SetMarkup(String),
}

const INLINE_OPS: [&str; 4] = ["bold", "italic", "underline", "strikeThrough"];
const LIST_OPS: [&str; 2] = ["insertOrderedList", "insertUnorderedList"];
const ALIGN_OPS: [&str; 4] = ["justifyLeft", "justifyCenter", "justifyRight", "justifyFull"];

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    markup: String,
    states: HashMap<String, bool>,
    block: String,
    anchor: Option<HeadlessNode>,
    rejected: HashSet<String>,
    block_query_fails: bool,
    events: RefCell<Vec<SurfaceEvent>>,
}

impl HeadlessSurface {
    pub fn new(markup: &str) -> Self {
        Self {
            markup: markup.to_string(),
            states: HashMap::new(),
            block: "div".to_string(),
            anchor: None,
            rejected: HashSet::new(),
            block_query_fails: false,
            events: RefCell::new(Vec::new()),
        }
    }

    /// Every focus/execute/set-markup call so far
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    pub fn clear_events(&mut self) {
        self.events.get_mut().clear();
    }

    /// Simulate the user editing the content directly
    pub fn type_markup(&mut self, markup: &str) {
        self.markup = markup.to_string();
    }

    /// Place the caret inside the surface
    pub fn select_inside(&mut self) {
        self.anchor = Some(HeadlessNode::Surface);
    }

    /// Move the selection somewhere else in the document
    pub fn select_outside(&mut self) {
        self.anchor = Some(HeadlessNode::Outside);
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Set the raw value reported for the block container
    pub fn report_block(&mut self, raw: &str) {
        self.block = raw.to_string();
    }

    /// Force the state of one host operation
    pub fn set_state(&mut self, operation: &str, active: bool) {
        self.states.insert(operation.to_string(), active);
    }

    /// Make `operation` fail on execute and on state query
    pub fn reject(&mut self, operation: &str) {
        self.rejected.insert(operation.to_string());
    }

    pub fn fail_block_query(&mut self) {
        self.block_query_fails = true;
    }

    fn unsupported(operation: &str) -> EditorError {
        EditorError::Host {
            operation: operation.to_string(),
            message: "not supported in this context".to_string(),
        }
    }

    fn toggle(&mut self, operation: &str, exclusive_with: &[&str]) {
        let active = !self.states.get(operation).copied().unwrap_or(false);
        for other in exclusive_with {
            self.states.insert(other.to_string(), false);
        }
        self.states.insert(operation.to_string(), active);
    }
}

impl TextSurface for HeadlessSurface {
    type Node = HeadlessNode;

    fn focus(&self) -> Result<()> {
        self.events.borrow_mut().push(SurfaceEvent::Focus);
        Ok(())
    }

    fn execute(&mut self, operation: &str, value: Option<&str>) -> Result<()> {
        if self.rejected.contains(operation) {
            return Err(Self::unsupported(operation));
        }

        match operation {
            op if INLINE_OPS.contains(&op) => self.toggle(op, &[]),
            op if LIST_OPS.contains(&op) => self.toggle(op, &LIST_OPS),
            op if ALIGN_OPS.contains(&op) => {
                for other in ALIGN_OPS {
                    self.states.insert(other.to_string(), false);
                }
                self.states.insert(op.to_string(), true);
            }
            "formatBlock" => self.block = value.unwrap_or("div").to_string(),
            "removeFormat" => {
                for op in INLINE_OPS {
                    self.states.insert(op.to_string(), false);
                }
            }
            _ => {}
        }

        self.events.get_mut().push(SurfaceEvent::Execute {
            operation: operation.to_string(),
            value: value.map(str::to_string),
        });
        Ok(())
    }

    fn query_state(&self, operation: &str) -> Result<bool> {
        if self.rejected.contains(operation) {
            return Err(Self::unsupported(operation));
        }
        Ok(self.states.get(operation).copied().unwrap_or(false))
    }

    fn query_block(&self) -> Result<String> {
        if self.block_query_fails {
            return Err(Self::unsupported("formatBlock"));
        }
        Ok(self.block.clone())
    }

    fn markup(&self) -> String {
        self.markup.clone()
    }

    fn plain_text(&self) -> String {
        render_plain_text(&self.markup)
    }

    fn set_markup(&mut self, markup: &str) {
        self.markup = markup.to_string();
        self.states.clear();
        self.block = "div".to_string();
        self.events
            .get_mut()
            .push(SurfaceEvent::SetMarkup(markup.to_string()));
    }

    fn selection_anchor(&self) -> Option<HeadlessNode> {
        self.anchor
    }

    fn contains(&self, node: &HeadlessNode) -> bool {
        *node == HeadlessNode::Surface
    }
}

// ============================================================================
// Plain text rendering
// ============================================================================

fn is_block_tag(name: &[u8]) -> bool {
    matches!(
        name,
        b"p" | b"div" | b"h1" | b"h2" | b"h3" | b"h4" | b"h5" | b"h6"
            | b"blockquote" | b"li" | b"ul" | b"ol" | b"pre"
    )
}

fn break_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn resolve_entity(entity: &str) -> Option<&'static str> {
    match entity {
        "nbsp" => Some("\u{a0}"),
        _ => None,
    }
}

/// Approximate the host's rendered text: block boundaries and `<br>` become
/// newlines, tags vanish, entities decode.
fn render_plain_text(markup: &str) -> String {
    let mut reader = Reader::from_str(markup);
    reader.check_end_names(false);

    let mut out = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"br" {
                    out.push('\n');
                } else if is_block_tag(e.name().as_ref()) {
                    break_line(&mut out);
                }
            }
            Ok(Event::End(e)) => {
                if is_block_tag(e.name().as_ref()) {
                    break_line(&mut out);
                }
            }
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"br" {
                    out.push('\n');
                }
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape_with(resolve_entity)
                    .map(|t| t.into_owned())
                    .unwrap_or_else(|_| String::from_utf8_lossy(&e).into_owned());
                out.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                log::debug!("headless markup stopped rendering: {}", e);
                break;
            }
            _ => {}
        }
    }

    out.trim_end_matches('\n').to_string()
}
