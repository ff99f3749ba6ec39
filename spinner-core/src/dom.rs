//! The seam between the controller and a document.
//!
//! `spinner-web` implements this over `web-sys`; [`crate::memory::MemoryDom`]
//! implements it in memory for tests.

use crate::config::SpinnerConfig;
use crate::error::Result;

/// Minimal document surface the controller needs.
pub trait OverlayDom {
    /// Handle to an element living in (or detached from) the document.
    type Node: Clone;

    /// Look up an element anywhere in the document by id.
    fn find_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Build the detached overlay tree: a root carrying `config.element_id`,
    /// holding an `overlay_class` layer, holding a `spinner_class` indicator.
    fn build_overlay(&self, config: &SpinnerConfig) -> Result<Self::Node>;

    /// Append a node as the last child of `<body>`.
    fn append_to_body(&self, node: &Self::Node) -> Result<()>;

    /// Whether the node is currently attached to the document.
    fn is_attached(&self, node: &Self::Node) -> bool;

    /// Detach the node. Detaching an already detached node is a no-op.
    fn remove(&self, node: &Self::Node);
}
