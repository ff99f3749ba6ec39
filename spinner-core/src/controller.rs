//! The overlay state machine.
//!
//! Two states, `Hidden` and `Visible`, each reachable from the other and
//! driven by [`PageEvent`]s. The document itself is the source of truth:
//! an element carrying the reserved id means `Visible`, so the controller
//! never produces a second overlay even if something else put one there.

use crate::config::SpinnerConfig;
use crate::dom::OverlayDom;
use crate::error::Result;
use crate::event::{Action, PageEvent};
use log::{debug, trace, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// Owns the overlay handle and is the only thing that creates or removes it.
pub struct SpinnerController<D: OverlayDom> {
    dom: D,
    config: SpinnerConfig,
    /// Overlay this controller appended or adopted, if any
    overlay: Option<D::Node>,
}

impl<D: OverlayDom> SpinnerController<D> {
    pub fn new(dom: D, config: SpinnerConfig) -> Self {
        Self {
            dom,
            config,
            overlay: None,
        }
    }

    pub fn config(&self) -> &SpinnerConfig {
        &self.config
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Current state, read from the document.
    pub fn visibility(&self) -> Visibility {
        let id = &self.config.element_id;
        if self.held_overlay().is_some() || self.dom.find_by_id(id).is_some() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    /// Put the overlay on screen unless it already is.
    ///
    /// Never fails from the caller's point of view: a missing `<body>` or a
    /// throwing DOM call is logged and the state stays `Hidden`.
    pub fn show(&mut self) -> Visibility {
        if let Err(err) = self.try_show() {
            warn!("could not show overlay #{}: {}", self.config.element_id, err);
        }
        self.visibility()
    }

    /// Take the overlay off screen. Hiding when nothing is shown is a no-op.
    pub fn hide(&mut self) -> Visibility {
        let mut removed = false;
        if let Some(node) = self.overlay.take() {
            removed = self.dom.is_attached(&node);
            self.dom.remove(&node);
        }
        // one placed by someone else is removed the same way
        if let Some(node) = self.dom.find_by_id(&self.config.element_id) {
            self.dom.remove(&node);
            removed = true;
        }
        if removed {
            debug!("overlay #{} removed", self.config.element_id);
        } else {
            trace!("overlay #{} already hidden", self.config.element_id);
        }
        self.visibility()
    }

    /// Apply the action an event maps to and return the resulting state.
    pub fn handle(&mut self, event: &PageEvent) -> Visibility {
        match event.action(&self.config) {
            Some(Action::Show) => {
                debug!("{} -> show", event.dom_type());
                self.show()
            }
            Some(Action::Hide) => {
                debug!("{} -> hide", event.dom_type());
                self.hide()
            }
            None => {
                trace!("{:?} ignored", event);
                self.visibility()
            }
        }
    }

    fn held_overlay(&self) -> Option<&D::Node> {
        self.overlay
            .as_ref()
            .filter(|node| self.dom.is_attached(node))
    }

    fn try_show(&mut self) -> Result<()> {
        if self.held_overlay().is_some() {
            trace!("overlay #{} already shown", self.config.element_id);
            return Ok(());
        }
        if let Some(existing) = self.dom.find_by_id(&self.config.element_id) {
            trace!("adopting existing #{}", self.config.element_id);
            self.overlay = Some(existing);
            return Ok(());
        }
        let node = self.dom.build_overlay(&self.config)?;
        self.dom.append_to_body(&node)?;
        debug!("overlay #{} appended", self.config.element_id);
        self.overlay = Some(node);
        Ok(())
    }
}
