//! Editable surface capability and adapter
//!
//! [`TextSurface`] is the exact set of operations the widget needs from the
//! host editing engine and selection subsystem. The browser implementation
//! lives in [`dom`]; [`headless`] is an in-memory host used by tests and by
//! non-browser embedders.
//!
//! [`SurfaceAdapter`] wraps an optional surface. While nothing is mounted
//! every operation is a silent no-op.

pub mod dom;
pub mod headless;

use crate::error::Result;
use crate::models::{BlockFormat, CommandId, EditorSnapshot};

/// Host editing engine + selection subsystem for one editable region
pub trait TextSurface {
    /// A point in the host document a selection can be anchored at
    type Node;

    /// Move input focus to the surface
    fn focus(&self) -> Result<()>;

    /// Execute a named formatting operation against the current selection
    fn execute(&mut self, operation: &str, value: Option<&str>) -> Result<()>;

    /// Active/inactive state of a named operation at the current selection
    fn query_state(&self, operation: &str) -> Result<bool>;

    /// Raw block-level container reported at the current selection
    fn query_block(&self) -> Result<String>;

    /// Current content serialized as markup
    fn markup(&self) -> String;

    /// Current rendered plain text
    fn plain_text(&self) -> String;

    /// Replace the entire content
    fn set_markup(&mut self, markup: &str);

    /// Anchor point of the current selection, if any selection exists
    fn selection_anchor(&self) -> Option<Self::Node>;

    /// Whether `node` lies inside the surface subtree
    fn contains(&self, node: &Self::Node) -> bool;
}

/// Adapter between the controller and an (optionally mounted) surface
pub struct SurfaceAdapter<S: TextSurface> {
    surface: Option<S>,
}

impl<S: TextSurface> SurfaceAdapter<S> {
    pub fn new() -> Self {
        Self { surface: None }
    }

    /// Mount a surface, returning the one it replaces
    pub fn mount(&mut self, surface: S) -> Option<S> {
        self.surface.replace(surface)
    }

    pub fn unmount(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Focus the surface, then apply `command` to the live selection.
    ///
    /// `formatBlock` without a value applies a paragraph. Host failures are
    /// logged and swallowed; the caller re-reads the snapshot afterwards.
    pub fn apply_command(&mut self, command: CommandId, value: Option<&str>) {
        let Some(surface) = self.surface.as_mut() else {
            log::debug!("apply_command({}) ignored: no surface mounted", command);
            return;
        };

        if let Err(e) = surface.focus() {
            log::warn!("failed to focus surface before {}: {}", command, e);
        }

        let block;
        let value = match command {
            CommandId::FormatBlock => {
                block = BlockFormat::parse(value.unwrap_or("paragraph"));
                Some(block.host_value())
            }
            _ => value,
        };

        log::debug!("execute {} ({:?})", command.host_operation(), value);
        if let Err(e) = surface.execute(command.host_operation(), value) {
            log::warn!("{}", e);
        }
    }

    pub fn markup(&self) -> Option<String> {
        self.surface.as_ref().map(|s| s.markup())
    }

    pub fn plain_text(&self) -> Option<String> {
        self.surface.as_ref().map(|s| s.plain_text())
    }

    /// Replace the whole content (starter load and reset only)
    pub fn set_markup(&mut self, markup: &str) {
        match self.surface.as_mut() {
            Some(surface) => surface.set_markup(markup),
            None => log::debug!("set_markup ignored: no surface mounted"),
        }
    }

    /// Fresh snapshot read from the surface
    pub fn snapshot(&self) -> Option<EditorSnapshot> {
        self.surface
            .as_ref()
            .map(|s| EditorSnapshot::new(s.markup(), s.plain_text()))
    }
}

impl<S: TextSurface> Default for SurfaceAdapter<S> {
    fn default() -> Self {
        Self::new()
    }
}
