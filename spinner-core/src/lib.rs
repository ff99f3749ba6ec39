//! Loading overlay controller for the admin pages.
//!
//! This crate provides:
//! - `config`: `SpinnerConfig`, parsed from JSON with defaults
//! - `event`: page lifecycle events and the show/hide action each maps to
//! - `dom`: the `OverlayDom` trait a document backend implements
//! - `controller`: `SpinnerController`, the Hidden/Visible state machine
//! - `memory`: an in-memory `OverlayDom` for native tests
//!
//! Browser bindings live in `spinner-web`.

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod event;
pub mod memory;

pub use config::SpinnerConfig;
pub use controller::{SpinnerController, Visibility};
pub use dom::OverlayDom;
pub use error::{Result, SpinnerError};
pub use event::{Action, PageEvent, ReadyState};
