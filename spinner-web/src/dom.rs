//! `OverlayDom` over the live browser document.

use spinner_core::{OverlayDom, Result, SpinnerConfig, SpinnerError};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Convert a thrown JS value into a [`SpinnerError`].
pub(crate) fn dom_error(value: JsValue) -> SpinnerError {
    SpinnerError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Resolve `window.document`.
pub fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(SpinnerError::NoWindow)?
        .document()
        .ok_or(SpinnerError::NoDocument)
}

#[derive(Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn div(&self, class_name: &str) -> Result<Element> {
        let div = self.document.create_element("div").map_err(dom_error)?;
        div.set_class_name(class_name);
        Ok(div)
    }
}

impl OverlayDom for WebDom {
    type Node = Element;

    fn find_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn build_overlay(&self, config: &SpinnerConfig) -> Result<Element> {
        let root = self.document.create_element("div").map_err(dom_error)?;
        root.set_id(&config.element_id);
        let overlay = self.div(&config.overlay_class)?;
        let spinner = self.div(&config.spinner_class)?;
        overlay.append_child(&spinner).map_err(dom_error)?;
        root.append_child(&overlay).map_err(dom_error)?;
        Ok(root)
    }

    fn append_to_body(&self, node: &Element) -> Result<()> {
        let body = self.document.body().ok_or(SpinnerError::NoBody)?;
        body.append_child(node).map_err(dom_error)?;
        Ok(())
    }

    fn is_attached(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }
}
