//! Root controller
//!
//! Owns every piece of widget state and wires the surface adapter, the
//! selection observer and the derived views together. The surface is passed
//! in on mount and handed back on unmount; there are no ambient singletons.
//!
//! Within one user action the order is always: focus restore, command
//! apply, snapshot refresh, selection re-observe.

use serde::Serialize;

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::models::{
    ColorState, CommandId, ContentState, EditorSnapshot, SelectionSnapshot, TextStatistics,
};
use crate::observer::SelectionObserver;
use crate::preview::PreviewModel;
use crate::surface::{SurfaceAdapter, TextSurface};
use crate::toolbar::{ToolbarAction, ToolbarModel};

/// Everything a host page may want to show or persist, in one object
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StateReport {
    #[serde(flatten)]
    pub snapshot: EditorSnapshot,
    pub statistics: TextStatistics,
    pub selection: SelectionSnapshot,
    pub colors: ColorState,
    pub content_state: ContentState,
}

pub struct RootController<S: TextSurface> {
    config: EditorConfig,
    default_colors: ColorState,
    adapter: SurfaceAdapter<S>,
    snapshot: EditorSnapshot,
    observer: SelectionObserver,
    colors: ColorState,
    content: ContentState,
}

impl<S: TextSurface> RootController<S> {
    pub fn new(config: EditorConfig) -> Result<Self> {
        let default_colors = config.default_colors()?;
        Ok(Self {
            config,
            colors: default_colors.clone(),
            default_colors,
            adapter: SurfaceAdapter::new(),
            snapshot: EditorSnapshot::default(),
            observer: SelectionObserver::new(),
            content: ContentState::Default,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Take ownership of `surface` and load the starter content
    pub fn mount(&mut self, surface: S) {
        if self.adapter.mount(surface).is_some() {
            log::warn!("mount replaced an already mounted surface");
        }
        self.reset();
        log::info!("editable surface mounted");
    }

    /// Release the surface; every operation is a no-op afterwards
    pub fn unmount(&mut self) -> Option<S> {
        let surface = self.adapter.unmount();
        self.snapshot = EditorSnapshot::default();
        self.observer.clear();
        if surface.is_some() {
            log::info!("editable surface unmounted");
        }
        surface
    }

    pub fn is_mounted(&self) -> bool {
        self.adapter.is_mounted()
    }

    pub fn surface(&self) -> Option<&S> {
        self.adapter.surface()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.adapter.surface_mut()
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Run one toolbar action against the live selection
    pub fn dispatch(&mut self, action: ToolbarAction) {
        if !self.adapter.is_mounted() {
            log::debug!("toolbar action ignored: no surface mounted");
            return;
        }

        match &action {
            ToolbarAction::SetForeground(color) => {
                self.colors = ColorState {
                    foreground: color.clone(),
                    background: self.colors.background.clone(),
                };
            }
            ToolbarAction::SetBackground(color) => {
                self.colors = ColorState {
                    foreground: self.colors.foreground.clone(),
                    background: color.clone(),
                };
            }
            _ => {}
        }

        let (command, value) = action.command();
        self.adapter.apply_command(command, value.as_deref());
        self.refresh_snapshot();
        self.observer.refresh(&self.adapter);
        self.content = ContentState::Custom;
    }

    /// Dispatch by command name (`"bold"`, `"formatBlock"`, ...)
    pub fn apply_named(&mut self, name: &str, value: Option<&str>) -> Result<()> {
        let command =
            CommandId::from_name(name).ok_or_else(|| EditorError::UnknownCommand(name.into()))?;
        let action = ToolbarAction::from_control(command, value)?;
        self.dispatch(action);
        Ok(())
    }

    /// The user edited the surface directly
    pub fn on_input(&mut self) {
        if !self.adapter.is_mounted() {
            return;
        }
        self.refresh_snapshot();
        self.content = ContentState::Custom;
    }

    /// The document selection moved; `true` when toolbar state changed
    pub fn on_selection_change(&mut self) -> bool {
        self.observer.refresh(&self.adapter)
    }

    /// Back to starter content, default selection and default colors
    pub fn reset(&mut self) {
        let starter = self.config.starter_markup.clone();
        self.adapter.set_markup(&starter);
        self.refresh_snapshot();
        self.observer.clear();
        self.colors = self.default_colors.clone();
        self.content = ContentState::Default;
        log::debug!("editor reset to starter content");
    }

    fn refresh_snapshot(&mut self) {
        if let Some(snapshot) = self.adapter.snapshot() {
            self.snapshot = snapshot;
        }
    }

    // ========================================================================
    // Derived state
    // ========================================================================

    pub fn snapshot(&self) -> &EditorSnapshot {
        &self.snapshot
    }

    pub fn selection(&self) -> &SelectionSnapshot {
        self.observer.current()
    }

    pub fn colors(&self) -> &ColorState {
        &self.colors
    }

    pub fn content_state(&self) -> ContentState {
        self.content
    }

    pub fn statistics(&self) -> TextStatistics {
        TextStatistics::from_text(&self.snapshot.plain_text)
    }

    pub fn toolbar_model(&self) -> ToolbarModel {
        ToolbarModel::build(self.selection(), &self.colors)
    }

    pub fn preview_model(&self) -> PreviewModel {
        PreviewModel::build(&self.snapshot)
    }

    pub fn report(&self) -> StateReport {
        StateReport {
            snapshot: self.snapshot.clone(),
            statistics: self.statistics(),
            selection: self.selection().clone(),
            colors: self.colors.clone(),
            content_state: self.content,
        }
    }
}
