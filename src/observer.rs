//! Selection state observer
//!
//! The host does not report deltas, so every selection change re-queries
//! every toggle command plus the block container.

use crate::models::{BlockFormat, CommandId, SelectionSnapshot};
use crate::surface::{SurfaceAdapter, TextSurface};

/// Compute the selection snapshot for the current host selection.
///
/// Returns the default snapshot when nothing is mounted, nothing is
/// selected, or the selection anchor lies outside the surface. Failed
/// state queries read as inactive; a failed block query reads as paragraph.
pub fn observe_selection<S: TextSurface>(adapter: &SurfaceAdapter<S>) -> SelectionSnapshot {
    let Some(surface) = adapter.surface() else {
        return SelectionSnapshot::default();
    };

    match surface.selection_anchor() {
        Some(anchor) if surface.contains(&anchor) => {}
        _ => return SelectionSnapshot::default(),
    }

    let active_commands = CommandId::TOGGLES
        .iter()
        .map(|id| {
            let active = surface
                .query_state(id.host_operation())
                .unwrap_or_else(|e| {
                    log::debug!("treating {} as inactive: {}", id, e);
                    false
                });
            (*id, active)
        })
        .collect();

    let block_type = match surface.query_block() {
        Ok(raw) => BlockFormat::parse(&raw),
        Err(e) => {
            log::debug!("block query failed, assuming paragraph: {}", e);
            BlockFormat::Paragraph
        }
    };

    SelectionSnapshot { active_commands, block_type }
}

/// Holds the latest snapshot and reports whether a refresh changed it
#[derive(Debug, Default)]
pub struct SelectionObserver {
    current: SelectionSnapshot,
}

impl SelectionObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &SelectionSnapshot {
        &self.current
    }

    /// Recompute from the host; `true` when the snapshot changed
    pub fn refresh<S: TextSurface>(&mut self, adapter: &SurfaceAdapter<S>) -> bool {
        let next = observe_selection(adapter);
        if next == self.current {
            return false;
        }
        self.current = next;
        true
    }

    /// Drop back to the default snapshot
    pub fn clear(&mut self) {
        self.current = SelectionSnapshot::default();
    }
}
