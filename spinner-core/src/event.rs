//! Page lifecycle events and the actions they map to.

use crate::config::SpinnerConfig;

/// A browser signal the controller reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageEvent {
    /// `DOMContentLoaded` on the document
    ContentReady,
    /// `load` on the window, after every subresource finished
    WindowLoad,
    /// `submit` caught in the capture phase at the document
    Submit {
        /// `tagName` of the event target, empty when the target is not an element
        target_tag: String,
    },
    /// `visibilitychange` on the document
    VisibilityChange { hidden: bool },
    /// `pagehide` on the window
    PageHide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Show,
    Hide,
}

impl PageEvent {
    /// Decide what a given event means for the overlay. `None` means ignore.
    pub fn action(&self, config: &SpinnerConfig) -> Option<Action> {
        match self {
            PageEvent::ContentReady => Some(Action::Show),
            PageEvent::WindowLoad => Some(Action::Hide),
            PageEvent::Submit { target_tag } if *target_tag == config.form_tag => {
                Some(Action::Show)
            }
            PageEvent::Submit { .. } => None,
            PageEvent::VisibilityChange { hidden: true } => Some(Action::Hide),
            PageEvent::VisibilityChange { hidden: false } => None,
            PageEvent::PageHide if config.hide_on_page_hide => Some(Action::Hide),
            PageEvent::PageHide => None,
        }
    }

    /// DOM event type the listener is registered for.
    pub fn dom_type(&self) -> &'static str {
        match self {
            PageEvent::ContentReady => "DOMContentLoaded",
            PageEvent::WindowLoad => "load",
            PageEvent::Submit { .. } => "submit",
            PageEvent::VisibilityChange { .. } => "visibilitychange",
            PageEvent::PageHide => "pagehide",
        }
    }
}

/// `document.readyState` at the moment listeners get attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Event that already fired before listeners existed and still matters.
    ///
    /// The wasm module boots asynchronously, so `DOMContentLoaded` may be
    /// gone by the time we subscribe. Once the document is `complete` the
    /// window `load` has fired too and the overlay must stay hidden.
    pub fn missed_event(self) -> Option<PageEvent> {
        match self {
            ReadyState::Loading => None,
            ReadyState::Interactive => Some(PageEvent::ContentReady),
            ReadyState::Complete => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(tag: &str) -> PageEvent {
        PageEvent::Submit {
            target_tag: tag.to_string(),
        }
    }

    #[test]
    fn test_lifecycle_actions() {
        let config = SpinnerConfig::default();
        assert_eq!(PageEvent::ContentReady.action(&config), Some(Action::Show));
        assert_eq!(PageEvent::WindowLoad.action(&config), Some(Action::Hide));
    }

    #[test]
    fn test_submit_filters_on_tag() {
        let config = SpinnerConfig::default();
        assert_eq!(submit("FORM").action(&config), Some(Action::Show));
        assert_eq!(submit("BUTTON").action(&config), None);
        assert_eq!(submit("").action(&config), None);
        // tagName is upper case for HTML documents, match exactly
        assert_eq!(submit("form").action(&config), None);
    }

    #[test]
    fn test_visibility_only_hides() {
        let config = SpinnerConfig::default();
        let hidden = PageEvent::VisibilityChange { hidden: true };
        let visible = PageEvent::VisibilityChange { hidden: false };
        assert_eq!(hidden.action(&config), Some(Action::Hide));
        assert_eq!(visible.action(&config), None);
    }

    #[test]
    fn test_page_hide_is_opt_in() {
        let mut config = SpinnerConfig::default();
        assert_eq!(PageEvent::PageHide.action(&config), None);
        config.hide_on_page_hide = true;
        assert_eq!(PageEvent::PageHide.action(&config), Some(Action::Hide));
    }

    #[test]
    fn test_missed_event() {
        assert_eq!(ReadyState::Loading.missed_event(), None);
        assert_eq!(
            ReadyState::Interactive.missed_event(),
            Some(PageEvent::ContentReady)
        );
        assert_eq!(ReadyState::Complete.missed_event(), None);
    }

    #[test]
    fn test_dom_types() {
        assert_eq!(PageEvent::ContentReady.dom_type(), "DOMContentLoaded");
        assert_eq!(submit("FORM").dom_type(), "submit");
        assert_eq!(
            PageEvent::VisibilityChange { hidden: true }.dom_type(),
            "visibilitychange"
        );
    }
}
