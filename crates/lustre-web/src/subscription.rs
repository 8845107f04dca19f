//! Scoped DOM event registration.
//!
//! Widget handlers are registered through [`EventSubscription`] so that
//! teardown is deterministic: dropping the subscription removes the listener
//! and releases the closure. Nothing widget-owned is ever `forget()`-leaked
//! onto the page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct EventSubscription {
    target: web::EventTarget,
    kind: &'static str,
    callback: js_sys::Function,
    // Kept alive for the lifetime of the registration.
    _closure: Closure<dyn FnMut(web::Event)>,
}

impl EventSubscription {
    pub fn listen(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let callback: js_sys::Function =
            closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        if let Err(e) = target.add_event_listener_with_callback(kind, &callback) {
            log::error!("failed to register {} listener: {:?}", kind, e);
        }
        Self {
            target: target.clone(),
            kind,
            callback,
            _closure: closure,
        }
    }

    /// Like [`listen`](Self::listen) but non-passive, for handlers that call
    /// `preventDefault` (the wheel-to-horizontal remap needs this).
    pub fn listen_active(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let callback: js_sys::Function =
            closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind, &callback, &opts,
        ) {
            log::error!("failed to register {} listener: {:?}", kind, e);
        }
        Self {
            target: target.clone(),
            kind,
            callback,
            _closure: closure,
        }
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, &self.callback);
    }
}
