//! DOM event bindings
//!
//! An [`EventBinding`] owns both the listener closure and its registration;
//! dropping it removes the listener, so tearing down the widget is just
//! dropping its bindings.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::error::{EditorError, Result};

pub struct EventBinding {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    pub fn listen<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| EditorError::dom(kind, &e))?;

        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {:?}", self.kind, e);
        }
    }
}
