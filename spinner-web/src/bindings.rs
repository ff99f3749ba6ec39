//! Browser event listeners feeding the controller.
//!
//! The controller is shared between listeners as `Rc<RefCell<..>>`; every
//! handler runs to completion on the page's single thread, and appending or
//! removing the overlay does not dispatch any of the events listened for.

use crate::dom::{dom_error, WebDom};
use log::{debug, warn};
use spinner_core::{PageEvent, ReadyState, Result, SpinnerController, SpinnerError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

pub type SharedController = Rc<RefCell<SpinnerController<WebDom>>>;

/// One registered listener. Keeps its closure alive for as long as it is attached.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(Event)>,
}

/// Every listener of one installation. Dropping it detaches them.
pub struct Bindings {
    listeners: Vec<Listener>,
}

impl Bindings {
    /// Attach the lifecycle listeners and replay what fired before they existed.
    pub fn install(controller: &SharedController) -> Result<Self> {
        let (document, window, hide_on_page_hide) = {
            let ctl = controller.borrow();
            let window = web_sys::window().ok_or(SpinnerError::NoWindow)?;
            (
                ctl.dom().document().clone(),
                window,
                ctl.config().hide_on_page_hide,
            )
        };
        let document_target: EventTarget = document.clone().into();
        let window_target: EventTarget = window.into();

        let mut bindings = Bindings {
            listeners: Vec::new(),
        };
        bindings.listen(&document_target, "DOMContentLoaded", false, controller, |_| {
            PageEvent::ContentReady
        })?;
        bindings.listen(&window_target, "load", false, controller, |_| {
            PageEvent::WindowLoad
        })?;
        // capture phase, ahead of the form's own submit handlers
        bindings.listen(&document_target, "submit", true, controller, |event| {
            let target_tag = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map(|element| element.tag_name())
                .unwrap_or_default();
            PageEvent::Submit { target_tag }
        })?;
        let doc = document.clone();
        bindings.listen(&document_target, "visibilitychange", false, controller, move |_| {
            PageEvent::VisibilityChange {
                hidden: doc.hidden(),
            }
        })?;
        if hide_on_page_hide {
            bindings.listen(&window_target, "pagehide", false, controller, |_| {
                PageEvent::PageHide
            })?;
        }

        let ready_state = match document.ready_state().as_str() {
            "loading" => ReadyState::Loading,
            "interactive" => ReadyState::Interactive,
            _ => ReadyState::Complete,
        };
        debug!("installed {} listeners, document {:?}", bindings.listeners.len(), ready_state);
        if let Some(event) = ready_state.missed_event() {
            controller.borrow_mut().handle(&event);
        }
        Ok(bindings)
    }

    fn listen<F>(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        capture: bool,
        controller: &SharedController,
        mut to_page_event: F,
    ) -> Result<()>
    where
        F: FnMut(&Event) -> PageEvent + 'static,
    {
        let controller = Rc::clone(controller);
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let page_event = to_page_event(&event);
            match controller.try_borrow_mut() {
                Ok(mut ctl) => {
                    ctl.handle(&page_event);
                }
                Err(_) => warn!("controller busy, dropped {:?}", page_event),
            }
        });
        target
            .add_event_listener_with_callback_and_bool(
                kind,
                closure.as_ref().unchecked_ref(),
                capture,
            )
            .map_err(dom_error)?;
        self.listeners.push(Listener {
            target: target.clone(),
            kind,
            capture,
            closure,
        });
        Ok(())
    }
}

impl Drop for Bindings {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            let callback: &js_sys::Function = listener.closure.as_ref().unchecked_ref();
            if let Err(err) = listener
                .target
                .remove_event_listener_with_callback_and_bool(listener.kind, callback, listener.capture)
            {
                warn!("failed to detach {} listener: {:?}", listener.kind, err);
            }
        }
    }
}
