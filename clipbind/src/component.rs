//! Declarative copy component: one container plus a bound copy instance.
//!
//! ## Usage
//!
//! Render the container into the host tree, then call
//! [`CopyRegion::on_mount`] and [`CopyRegion::on_unmount`] from the host's
//! lifecycle, exactly once each per cycle.

use std::{any::Any, fmt, sync::Arc};

use tracing::debug;

use crate::{
    binder::{BindError, LifecycleBinder},
    element::ElementSource,
    engine::CopyEngine,
    prop::{PropBag, PropMap},
    router::RoutedProps,
};

/// Host-owned node payload carried inside [`Children`].
pub type HostNode = Arc<dyn Any + Send + Sync>;

/// Content rendered verbatim inside the container.
#[derive(Clone, Default)]
pub enum Children {
    /// No content.
    #[default]
    Empty,
    /// Plain text content.
    Text(String),
    /// Numeric content.
    Number(f64),
    /// A single host-owned element.
    Element(HostNode),
    /// A sequence of child values rendered in order.
    Sequence(Vec<Children>),
}

impl PartialEq for Children {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Children::Empty, Children::Empty) => true,
            (Children::Text(a), Children::Text(b)) => a == b,
            (Children::Number(a), Children::Number(b)) => a == b,
            (Children::Element(a), Children::Element(b)) => Arc::ptr_eq(a, b),
            (Children::Sequence(a), Children::Sequence(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Children {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Children::Empty => f.write_str("Empty"),
            Children::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Children::Number(number) => f.debug_tuple("Number").field(number).finish(),
            Children::Element(_) => f.write_str("Element"),
            Children::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
        }
    }
}

impl From<&str> for Children {
    fn from(text: &str) -> Self {
        Children::Text(text.to_string())
    }
}

impl From<String> for Children {
    fn from(text: String) -> Self {
        Children::Text(text)
    }
}

impl From<f64> for Children {
    fn from(number: f64) -> Self {
        Children::Number(number)
    }
}

impl From<Vec<Children>> for Children {
    fn from(items: Vec<Children>) -> Self {
        Children::Sequence(items)
    }
}

/// The single container element handed to the host renderer.
///
/// Children pass through unmodified; `attrs` carries the properties that
/// routed to neither options nor callbacks, for hosts that apply them.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerNode {
    /// Passthrough subset of the bag.
    pub attrs: PropMap,
    /// Content rendered verbatim.
    pub children: Children,
}

/// Declarative clipboard-copy component.
///
/// Holds the property bag and children supplied by the host, and a
/// [`LifecycleBinder`] that owns the bound instance while mounted.
/// Options and callbacks are fixed at mount time for the life of the
/// instance; remounting binds whatever the bag holds then.
pub struct CopyRegion<E: CopyEngine> {
    props: PropBag,
    children: Children,
    binder: LifecycleBinder<E>,
}

impl<E: CopyEngine> CopyRegion<E> {
    /// Creates an unmounted component.
    pub fn new(engine: E, props: PropBag, children: Children) -> Self {
        Self {
            props,
            children,
            binder: LifecycleBinder::new(engine),
        }
    }

    /// The bag the next mount will bind.
    pub fn props(&self) -> &PropBag {
        &self.props
    }

    /// Whether a live instance is currently bound.
    pub fn is_mounted(&self) -> bool {
        self.binder.is_mounted()
    }

    /// Read access to the bound instance, for hosts wiring trigger
    /// plumbing.
    pub fn bound(&self) -> Option<&E::Instance> {
        self.binder.bound()
    }

    /// Produces the render output: exactly one container wrapping the
    /// children unmodified.
    pub fn render(&self) -> ContainerNode {
        let routed = RoutedProps::partition(&self.props);
        ContainerNode {
            attrs: routed.passthrough,
            children: self.children.clone(),
        }
    }

    /// Mount transition, invoked by the host once the container element
    /// exists.
    ///
    /// Fails with [`BindError::MissingElement`] when the host has no
    /// rendered element; engine construction failures propagate unchanged.
    pub fn on_mount(&mut self, host: &dyn ElementSource) -> Result<(), BindError> {
        let element = host.element().ok_or(BindError::MissingElement)?;
        self.binder.mount(element, &self.props)
    }

    /// Unmount transition; releasing twice is a no-op.
    pub fn on_unmount(&mut self) {
        self.binder.unmount();
    }

    /// Replaces the stored props and children for the next mount cycle.
    ///
    /// A live instance keeps the configuration and subscriptions it was
    /// mounted with; nothing re-binds here.
    pub fn update(&mut self, props: PropBag, children: Children) {
        if self.binder.is_mounted() {
            debug!("props updated while mounted; live instance unchanged");
        }
        self.props = props;
        self.children = children;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_compare_structurally_and_elements_by_identity() {
        assert_eq!(Children::from("a"), Children::from("a"));
        assert_ne!(Children::from("a"), Children::from("b"));

        let node: HostNode = Arc::new(7u8);
        assert_eq!(
            Children::Element(node.clone()),
            Children::Element(node.clone())
        );
        assert_ne!(Children::Element(node), Children::Element(Arc::new(7u8)));
    }

    #[test]
    fn sequences_nest() {
        let tree = Children::from(vec![Children::from("a"), Children::from(1.0)]);
        let Children::Sequence(items) = &tree else {
            panic!("expected a sequence");
        };
        assert_eq!(items.len(), 2);
    }
}
