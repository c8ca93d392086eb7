// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Utilities for handling DOM events

use std::ops::Deref;

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget};

/// Click event with typed access to the element the listener is bound on.
#[repr(transparent)]
pub struct ClickEvent {
    event: web_sys::Event,
}

impl From<web_sys::Event> for ClickEvent {
    fn from(event: web_sys::Event) -> Self {
        ClickEvent { event }
    }
}

impl From<&web_sys::Event> for ClickEvent {
    fn from(event: &web_sys::Event) -> Self {
        ClickEvent {
            event: event.clone(),
        }
    }
}

impl Deref for ClickEvent {
    type Target = web_sys::Event;

    fn deref(&self) -> &Self::Target {
        &self.event
    }
}

impl ClickEvent {
    /// Element the listener was registered on, as opposed to
    /// [`Event::target`](web_sys::Event::target) which may be a descendant
    /// such as the icon inside a button.
    pub fn current_element(&self) -> Option<Element> {
        self.event.current_target()?.dyn_into().ok()
    }
}

/// A single JavaScript function shared between many elements.
///
/// Because every binding uses the same function object, re-binding an
/// element removes the previous registration first and never stacks a
/// second handler.
pub struct SharedListener {
    event_type: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl SharedListener {
    pub fn new<F>(event_type: &'static str, mut handler: F) -> Self
    where
        F: FnMut(ClickEvent) + 'static,
    {
        let closure = Closure::wrap(
            Box::new(move |event: web_sys::Event| handler(event.into()))
                as Box<dyn FnMut(web_sys::Event)>,
        );

        SharedListener {
            event_type,
            closure,
        }
    }

    fn function(&self) -> &Function {
        self.closure.as_ref().unchecked_ref()
    }

    /// Bind to `target`, replacing any earlier binding of this listener.
    pub fn rebind(&self, target: &EventTarget) {
        let _ = target.remove_event_listener_with_callback(self.event_type, self.function());
        let _ = target.add_event_listener_with_callback(self.event_type, self.function());
    }

    pub fn unbind(&self, target: &EventTarget) {
        let _ = target.remove_event_listener_with_callback(self.event_type, self.function());
    }
}
