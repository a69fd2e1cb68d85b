//! `RichTextEditor`: the widget as seen from JavaScript
//!
//! Builds the layout inside a container element, mounts a `DomSurface`,
//! and wires toolbar, `input` and `selectionchange` events to the root
//! controller. `destroy()` (or dropping the JS object) removes every
//! listener and the generated DOM.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::api::helpers;
use crate::config::EditorConfig;
use crate::controller::RootController;
use crate::error::{EditorError, Result};
use crate::models::{CommandId, TextStatistics, REGISTRY};
use crate::renderers::{create_element, EventBinding, PreviewView, ToolbarControl, ToolbarView};
use crate::surface::dom::DomSurface;
use crate::toolbar::ToolbarAction;

// ============================================================================
// Mounted view
// ============================================================================

struct EditorView {
    controller: RootController<DomSurface>,
    toolbar: ToolbarView,
    preview: PreviewView,
    container: Element,
    container_class: String,
    surface_element: HtmlElement,
    on_change: Option<js_sys::Function>,
}

/// Change notification collected under a borrow, delivered after it ends
struct PendingChange {
    callback: js_sys::Function,
    report: JsValue,
}

impl PendingChange {
    fn deliver(self) {
        if let Err(e) = self.callback.call1(&JsValue::NULL, &self.report) {
            log::warn!("onChange callback threw: {:?}", e);
        }
    }
}

impl EditorView {
    /// Re-render the document views; the caller delivers the returned
    /// notification once it has released the view.
    #[must_use]
    fn render_document(&self) -> Option<PendingChange> {
        self.preview.render(&self.controller.preview_model());
        self.pending_change()
    }

    fn render_toolbar(&self) {
        if let Err(e) = self.toolbar.update(&self.controller.toolbar_model()) {
            log::warn!("toolbar update failed: {}", e);
        }
    }

    fn pending_change(&self) -> Option<PendingChange> {
        let callback = self.on_change.clone()?;
        match helpers::serialize(&self.controller.report(), "state report") {
            Ok(report) => Some(PendingChange { callback, report }),
            Err(e) => {
                log::warn!("state report not delivered: {:?}", e);
                None
            }
        }
    }

    /// Unmount and remove everything `mount` added to the container
    fn teardown(&mut self) {
        self.controller.unmount();
        self.toolbar.remove();
        self.preview.remove();
        self.surface_element.remove();
        if let Err(e) = self.container.class_list().remove_1(&self.container_class) {
            log::debug!("container class not removed: {:?}", e);
        }
    }
}

type SharedView = Rc<RefCell<EditorView>>;

/// Run `update` on the view, re-render, then notify outside the borrow.
/// Skips when the view is already borrowed higher up the stack.
fn update_view(view: &SharedView, what: &str, update: impl FnOnce(&mut EditorView)) {
    let Ok(mut guard) = view.try_borrow_mut() else {
        log::debug!("{} skipped: editor busy", what);
        return;
    };
    update(&mut *guard);
    guard.render_toolbar();
    let pending = guard.render_document();
    drop(guard);

    if let Some(pending) = pending {
        pending.deliver();
    }
}

/// Apply a decoded toolbar action and re-render
fn run_action(view: &SharedView, action: Result<ToolbarAction>) {
    let action = match action {
        Ok(action) => action,
        Err(e) => {
            log::warn!("toolbar control ignored: {}", e);
            return;
        }
    };

    // The host fires `input` synchronously from inside the command; that
    // handler finds the view borrowed and skips, the refresh happens here.
    update_view(view, "toolbar action", |view| view.controller.dispatch(action));
}

// ============================================================================
// JavaScript class
// ============================================================================

#[wasm_bindgen]
pub struct RichTextEditor {
    view: Option<SharedView>,
    bindings: Vec<EventBinding>,
}

#[wasm_bindgen]
impl RichTextEditor {
    /// Mount a new editor inside the element with id `container_id`.
    /// `config` is an optional `EditorConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, config: JsValue) -> std::result::Result<RichTextEditor, JsValue> {
        let config: EditorConfig = helpers::deserialize_or_default(config, "editor config")?;
        Ok(Self::mount(container_id, config)?)
    }

    /// Restore starter content, default selection state and default colors
    pub fn reset(&self) {
        if let Some(view) = &self.view {
            update_view(view, "reset", |view| view.controller.reset());
        }
    }

    /// Apply a command by name (`"bold"`, `"format-block"`, `"foreColor"`, ...)
    #[wasm_bindgen(js_name = applyCommand)]
    pub fn apply_command(&self, name: &str, value: Option<String>) -> std::result::Result<(), JsValue> {
        let Some(view) = &self.view else { return Ok(()) };
        let command =
            CommandId::from_name(name).ok_or_else(|| EditorError::UnknownCommand(name.into()))?;
        let action = ToolbarAction::from_control(command, value.as_deref())?;
        run_action(view, Ok(action));
        Ok(())
    }

    /// Current markup of the editable surface
    pub fn markup(&self) -> String {
        self.read(|view| view.controller.snapshot().markup_html.clone())
            .unwrap_or_default()
    }

    /// Current rendered plain text of the editable surface
    #[wasm_bindgen(js_name = plainText)]
    pub fn plain_text(&self) -> String {
        self.read(|view| view.controller.snapshot().plain_text.clone())
            .unwrap_or_default()
    }

    /// Full state report (snapshot, statistics, selection, colors)
    pub fn state(&self) -> std::result::Result<JsValue, JsValue> {
        match self.read(|view| view.controller.report()) {
            Some(report) => helpers::serialize(&report, "state report"),
            None => Ok(JsValue::NULL),
        }
    }

    /// Register (or clear) a callback receiving the state report after
    /// every document update
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: Option<js_sys::Function>) {
        let Some(view) = &self.view else { return };
        match view.try_borrow_mut() {
            Ok(mut view) => view.on_change = callback,
            Err(_) => log::warn!("onChange not updated: editor busy"),
        }
    }

    /// Remove listeners and generated DOM; the editor is inert afterwards
    pub fn destroy(&mut self) {
        let Some(view) = &self.view else { return };
        let Ok(mut guard) = view.try_borrow_mut() else {
            log::warn!("destroy skipped: editor busy");
            return;
        };
        guard.teardown();
        drop(guard);

        self.view = None;
        self.bindings.clear();
        log::info!("rich text editor destroyed");
    }
}

impl RichTextEditor {
    /// Read from the view; `None` when destroyed or mid-update
    fn read<T>(&self, f: impl FnOnce(&EditorView) -> T) -> Option<T> {
        let view = self.view.as_ref()?;
        match view.try_borrow() {
            Ok(view) => Some(f(&view)),
            Err(_) => {
                log::warn!("editor read skipped: editor busy");
                None
            }
        }
    }

    fn mount(container_id: &str, config: EditorConfig) -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| EditorError::Dom("no document available".into()))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| EditorError::ElementNotFound(container_id.to_string()))?;
        let container_class = config.class("editor");
        container
            .class_list()
            .add_1(&container_class)
            .map_err(|e| EditorError::dom("container class", &e))?;

        let mut controller = RootController::new(config.clone())?;
        let toolbar = ToolbarView::build(&document, &container, &controller.toolbar_model(), &config)?;

        let surface_element: HtmlElement = create_element(&document, "div", &config.class("surface"))?;
        crate::renderers::append(&container, &surface_element)?;
        let preview = PreviewView::build(&document, &container, &config)?;

        controller.mount(DomSurface::attach(surface_element.clone())?);

        let view = Rc::new(RefCell::new(EditorView {
            controller,
            toolbar,
            preview,
            container,
            container_class,
            surface_element: surface_element.clone(),
            on_change: None,
        }));
        update_view(&view, "initial render", |_| {});

        let bindings = match bind_events(&document, &surface_element, &view) {
            Ok(bindings) => bindings,
            Err(e) => {
                view.borrow_mut().teardown();
                return Err(e);
            }
        };
        log::info!("rich text editor mounted in #{}", container_id);

        Ok(Self {
            view: Some(view),
            bindings,
        })
    }
}

impl Drop for RichTextEditor {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn bind_events(
    document: &Document,
    surface_element: &HtmlElement,
    view: &SharedView,
) -> Result<Vec<EventBinding>> {
    let mut bindings = Vec::new();

    let selection_view = view.clone();
    bindings.push(EventBinding::listen(document, "selectionchange", move |_: Event| {
        if let Ok(mut view) = selection_view.try_borrow_mut() {
            if view.controller.on_selection_change() {
                view.render_toolbar();
            }
        }
    })?);

    let input_view = view.clone();
    bindings.push(EventBinding::listen(surface_element, "input", move |_: Event| {
        let Ok(mut view) = input_view.try_borrow_mut() else {
            return;
        };
        view.controller.on_input();
        let pending = view.render_document();
        drop(view);

        if let Some(pending) = pending {
            pending.deliver();
        }
    })?);

    let controls = view.borrow().toolbar.controls();
    for control in controls {
        match control {
            ToolbarControl::Button(command, element) => {
                // Keep focus (and the selection) on the surface
                bindings.push(EventBinding::listen(&element, "mousedown", |event: Event| {
                    event.prevent_default();
                })?);
                let view = view.clone();
                bindings.push(EventBinding::listen(&element, "click", move |_: Event| {
                    run_action(&view, ToolbarAction::from_control(command, None));
                })?);
            }
            ToolbarControl::BlockSelect(select) => {
                let view = view.clone();
                let target = select.clone();
                bindings.push(EventBinding::listen(&select, "change", move |_: Event| {
                    let value = target.value();
                    run_action(
                        &view,
                        ToolbarAction::from_control(CommandId::FormatBlock, Some(&value)),
                    );
                })?);
            }
            ToolbarControl::ColorPicker(command, input) => {
                let view = view.clone();
                let target = input.clone();
                bindings.push(EventBinding::listen(&input, "input", move |_: Event| {
                    let value = target.value();
                    run_action(&view, ToolbarAction::from_control(command, Some(&value)));
                })?);
            }
        }
    }

    Ok(bindings)
}

// ============================================================================
// Free functions
// ============================================================================

/// The formatting command registry, for hosts building their own toolbar
#[wasm_bindgen(js_name = formattingCommands)]
pub fn formatting_commands() -> std::result::Result<JsValue, JsValue> {
    helpers::serialize(&REGISTRY.to_vec(), "formatting commands")
}

/// Word/character/sentence counts for arbitrary text
#[wasm_bindgen(js_name = textStatistics)]
pub fn text_statistics(text: &str) -> std::result::Result<JsValue, JsValue> {
    helpers::serialize(&TextStatistics::from_text(text), "text statistics")
}
