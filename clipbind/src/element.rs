//! Element references supplied by the rendering host.
//!
//! ## Usage
//!
//! Hosts implement [`ElementSource`]; engines downcast [`ElementRef`] to
//! whatever node payload they understand.

use std::{
    any::Any,
    fmt,
    sync::Arc,
};

/// Non-owning reference to the rendered container node.
///
/// The node itself belongs to the rendering host; the component only holds
/// this handle long enough to construct the bound instance. The payload is
/// type-erased so any host node representation can travel through the core
/// unchanged.
#[derive(Clone)]
pub struct ElementRef {
    node: Arc<dyn Any + Send + Sync>,
}

impl ElementRef {
    /// Wraps a host node payload.
    pub fn new<T: Any + Send + Sync>(node: T) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// Wraps an already-shared host node payload.
    pub fn from_shared(node: Arc<dyn Any + Send + Sync>) -> Self {
        Self { node }
    }

    /// Attempts to view the payload as a concrete node type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.node.downcast_ref()
    }

    /// Whether two references point at the same host node.
    pub fn same_node(&self, other: &ElementRef) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl fmt::Debug for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ElementRef")
    }
}

/// The single stable interface through which the host supplies the rendered
/// container element.
///
/// There is deliberately no second access path and no host-version
/// detection: a host either has a rendered element or it does not.
pub trait ElementSource {
    /// Returns the rendered container element, when one exists.
    fn element(&self) -> Option<ElementRef>;
}
