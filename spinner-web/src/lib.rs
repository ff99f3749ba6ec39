//! WASM entry point for the admin loading overlay.
//!
//! Loaded by every admin page. On start it reads the optional
//! `<meta name="admin-spinner-config">` JSON, installs the logger and binds
//! the page lifecycle events to a [`SpinnerController`]. The exported
//! functions below give page scripts the same `showSpinner` / `hideSpinner`
//! handles a plain script would have put on `window`.

mod bindings;
mod dom;

use bindings::{Bindings, SharedController};
use dom::WebDom;
use log::{info, warn};
use spinner_core::config::CONFIG_META_NAME;
use spinner_core::{Result, SpinnerConfig, SpinnerController, SpinnerError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Document;

struct Installation {
    controller: SharedController,
    // detaches listeners on drop
    _bindings: Bindings,
}

thread_local! {
    static INSTALLED: RefCell<Option<Installation>> = const { RefCell::new(None) };
}

fn to_js(err: SpinnerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Read the page config from its `<meta>` tag, defaults when absent.
fn page_config(document: &Document) -> Result<SpinnerConfig> {
    let selector = format!("meta[name=\"{CONFIG_META_NAME}\"]");
    let meta = document
        .query_selector(&selector)
        .map_err(dom::dom_error)?;
    match meta.and_then(|el| el.get_attribute("content")) {
        Some(json) => SpinnerConfig::from_json(&json),
        None => Ok(SpinnerConfig::default()),
    }
}

fn install(config: SpinnerConfig) -> Result<()> {
    // max level only; the logger itself may already be installed
    let _ = spinner_log::init(config.log_level);
    let document = dom::document()?;
    // replacing an installation detaches the old listeners first
    uninstall();
    let controller: SharedController = Rc::new(RefCell::new(SpinnerController::new(
        WebDom::new(document),
        config,
    )));
    let bindings = Bindings::install(&controller)?;
    info!(
        "admin spinner installed as #{}",
        controller.borrow().config().element_id
    );
    INSTALLED.with(|installed| {
        *installed.borrow_mut() = Some(Installation {
            controller,
            _bindings: bindings,
        });
    });
    Ok(())
}

fn with_controller(f: impl FnOnce(&mut SpinnerController<WebDom>)) {
    INSTALLED.with(|installed| match installed.borrow().as_ref() {
        Some(installation) => match installation.controller.try_borrow_mut() {
            Ok(mut ctl) => f(&mut ctl),
            Err(_) => warn!("controller busy"),
        },
        None => warn!("admin spinner is not installed"),
    });
}

/// Module start hook: configure from the page and bind the events.
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    let document = dom::document().map_err(to_js)?;
    let config = match page_config(&document) {
        Ok(config) => config,
        Err(err) => {
            let _ = spinner_log::init(SpinnerConfig::default().log_level);
            warn!("ignoring page config: {}", err);
            SpinnerConfig::default()
        }
    };
    install(config).map_err(to_js)
}

/// Reinstall with a JSON config, replacing the current installation.
#[wasm_bindgen(js_name = installWithConfig)]
pub fn install_with_config(json: &str) -> std::result::Result<(), JsValue> {
    let config = SpinnerConfig::from_json(json).map_err(to_js)?;
    install(config).map_err(to_js)
}

#[wasm_bindgen(js_name = showSpinner)]
pub fn show_spinner() {
    with_controller(|ctl| {
        ctl.show();
    });
}

#[wasm_bindgen(js_name = hideSpinner)]
pub fn hide_spinner() {
    with_controller(|ctl| {
        ctl.hide();
    });
}

/// Detach every listener and take the overlay down.
#[wasm_bindgen]
pub fn uninstall() {
    let previous = INSTALLED.with(|installed| installed.borrow_mut().take());
    if let Some(installation) = previous {
        if let Ok(mut ctl) = installation.controller.try_borrow_mut() {
            ctl.hide();
        }
        info!("admin spinner uninstalled");
    }
}
