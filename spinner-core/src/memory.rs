//! In-memory document used to exercise the controller without a browser.
//!
//! Follows the same `Rc<RefCell<..>>` sharing the controller sees in WASM:
//! clones of a [`MemoryDom`] observe the same document, so a test can keep
//! one clone for assertions while the controller owns another.

use crate::config::SpinnerConfig;
use crate::dom::OverlayDom;
use crate::error::{Result, SpinnerError};
use std::cell::RefCell;
use std::rc::Rc;

/// An element in the in-memory tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryElement {
    key: usize,
    pub tag: String,
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub children: Vec<MemoryElement>,
}

impl MemoryElement {
    fn find(&self, id: &str) -> Option<&MemoryElement> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    fn count(&self, id: &str) -> usize {
        let own = usize::from(self.id.as_deref() == Some(id));
        own + self.children.iter().map(|c| c.count(id)).sum::<usize>()
    }

    fn contains_key(&self, key: usize) -> bool {
        self.key == key || self.children.iter().any(|c| c.contains_key(key))
    }

    fn remove_key(&mut self, key: usize) -> bool {
        if let Some(pos) = self.children.iter().position(|c| c.key == key) {
            self.children.remove(pos);
            return true;
        }
        self.children.iter_mut().any(|c| c.remove_key(key))
    }
}

#[derive(Debug)]
struct MemoryDocument {
    body: Option<MemoryElement>,
    next_key: usize,
}

impl MemoryDocument {
    fn element(&mut self, tag: &str, id: Option<&str>, class_name: Option<&str>) -> MemoryElement {
        self.next_key += 1;
        MemoryElement {
            key: self.next_key,
            tag: tag.to_string(),
            id: id.map(str::to_string),
            class_name: class_name.map(str::to_string),
            children: Vec::new(),
        }
    }
}

/// Shared handle to an in-memory document with an optional `<body>`.
#[derive(Clone, Debug)]
pub struct MemoryDom {
    doc: Rc<RefCell<MemoryDocument>>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// A document with an empty `<body>`.
    pub fn new() -> Self {
        let mut doc = MemoryDocument {
            body: None,
            next_key: 0,
        };
        doc.body = Some(doc.element("BODY", None, None));
        Self {
            doc: Rc::new(RefCell::new(doc)),
        }
    }

    /// A document whose `<body>` has not been parsed yet.
    pub fn without_body() -> Self {
        Self {
            doc: Rc::new(RefCell::new(MemoryDocument {
                body: None,
                next_key: 0,
            })),
        }
    }

    /// Append a plain element, standing in for markup owned by the host page.
    pub fn insert_element(&self, tag: &str, id: &str) -> Result<MemoryElement> {
        let mut doc = self.doc.borrow_mut();
        let element = doc.element(tag, Some(id), None);
        let body = doc.body.as_mut().ok_or(SpinnerError::NoBody)?;
        body.children.push(element.clone());
        Ok(element)
    }

    /// Number of elements in the document carrying `id`.
    pub fn count_by_id(&self, id: &str) -> usize {
        self.doc
            .borrow()
            .body
            .as_ref()
            .map_or(0, |body| body.count(id))
    }

    /// Direct children of `<body>`, in order.
    pub fn body_children(&self) -> Vec<MemoryElement> {
        self.doc
            .borrow()
            .body
            .as_ref()
            .map(|body| body.children.clone())
            .unwrap_or_default()
    }
}

impl OverlayDom for MemoryDom {
    type Node = MemoryElement;

    fn find_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.doc.borrow().body.as_ref()?.find(id).cloned()
    }

    fn build_overlay(&self, config: &SpinnerConfig) -> Result<MemoryElement> {
        let mut doc = self.doc.borrow_mut();
        let spinner = doc.element("DIV", None, Some(config.spinner_class.as_str()));
        let mut overlay = doc.element("DIV", None, Some(config.overlay_class.as_str()));
        overlay.children.push(spinner);
        let mut root = doc.element("DIV", Some(config.element_id.as_str()), None);
        root.children.push(overlay);
        Ok(root)
    }

    fn append_to_body(&self, node: &MemoryElement) -> Result<()> {
        let mut doc = self.doc.borrow_mut();
        let body = doc.body.as_mut().ok_or(SpinnerError::NoBody)?;
        body.children.push(node.clone());
        Ok(())
    }

    fn is_attached(&self, node: &MemoryElement) -> bool {
        self.doc
            .borrow()
            .body
            .as_ref()
            .is_some_and(|body| body.contains_key(node.key))
    }

    fn remove(&self, node: &MemoryElement) {
        if let Some(body) = self.doc.borrow_mut().body.as_mut() {
            body.remove_key(node.key);
        }
    }
}
