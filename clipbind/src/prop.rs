//! Property bag model for declarative copy components.
//!
//! ## Usage
//!
//! Build a [`PropBag`] per render and hand it to a component; routing and
//! resolution read it without ever mutating it.

use std::{fmt, sync::Arc};

use im::OrdMap;

use crate::{element::ElementRef, engine::EngineEvent};

/// String-keyed mapping of [`PropValue`] used for routed subsets.
///
/// Enumeration order is the map's key order; every documented ordering rule
/// (subscription order, last-write-wins on stripped-key collisions) is
/// phrased against it.
pub type PropMap = OrdMap<String, PropValue>;

/// Stable, comparable event callback handle.
///
/// `EventHandler` compares by identity (`Arc::ptr_eq`) so it can live inside
/// property values without forcing deep closure comparisons.
#[derive(Clone)]
pub struct EventHandler {
    inner: Arc<dyn Fn(&EngineEvent) + Send + Sync>,
}

impl EventHandler {
    /// Creates a handler from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&EngineEvent) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(handler),
        }
    }

    /// A handler that does nothing when invoked.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    /// Invokes the handler with an event payload.
    pub fn call(&self, event: &EngineEvent) {
        (self.inner)(event);
    }
}

impl PartialEq for EventHandler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for EventHandler {}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler")
    }
}

impl<F> From<F> for EventHandler
where
    F: Fn(&EngineEvent) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

/// Stable, comparable text source handle.
///
/// Models a `text` option computed from the bound element at trigger time
/// rather than fixed at construction.
#[derive(Clone)]
pub struct TextProvider {
    inner: Arc<dyn Fn(&ElementRef) -> String + Send + Sync>,
}

impl TextProvider {
    /// Creates a provider from a closure.
    pub fn new<F>(provider: F) -> Self
    where
        F: Fn(&ElementRef) -> String + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Resolves the text for the given element.
    pub fn call(&self, element: &ElementRef) -> String {
        (self.inner)(element)
    }
}

impl PartialEq for TextProvider {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for TextProvider {}

impl fmt::Debug for TextProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TextProvider")
    }
}

impl<F> From<F> for TextProvider
where
    F: Fn(&ElementRef) -> String + Send + Sync + 'static,
{
    fn from(provider: F) -> Self {
        Self::new(provider)
    }
}

/// A single property value.
///
/// Callables are carried as identity-compared handles ([`EventHandler`],
/// [`TextProvider`]), so `PropValue` comparison is total and cheap.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// Explicit absence; treated like a missing property by resolution.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
    /// Ordered list of values.
    List(Vec<PropValue>),
    /// Nested string-keyed mapping.
    Map(PropMap),
    /// Event callback.
    Handler(EventHandler),
    /// Element-to-text provider.
    Provider(TextProvider),
}

impl PropValue {
    /// Short name of the variant, for diagnostics and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PropValue::Null => "null",
            PropValue::Bool(_) => "bool",
            PropValue::Number(_) => "number",
            PropValue::Text(_) => "text",
            PropValue::List(_) => "list",
            PropValue::Map(_) => "map",
            PropValue::Handler(_) => "handler",
            PropValue::Provider(_) => "provider",
        }
    }

    /// Returns the handler when this value is one.
    pub fn as_handler(&self) -> Option<&EventHandler> {
        match self {
            PropValue::Handler(handler) => Some(handler),
            _ => None,
        }
    }

    /// Returns the text when this value is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(value: Vec<PropValue>) -> Self {
        PropValue::List(value)
    }
}

impl From<PropMap> for PropValue {
    fn from(value: PropMap) -> Self {
        PropValue::Map(value)
    }
}

impl From<EventHandler> for PropValue {
    fn from(value: EventHandler) -> Self {
        PropValue::Handler(value)
    }
}

impl From<TextProvider> for PropValue {
    fn from(value: TextProvider) -> Self {
        PropValue::Provider(value)
    }
}

/// The full set of declarative inputs supplied to a component for one
/// render.
///
/// The bag is an immutable mapping: [`PropBag::with`] returns a new bag and
/// the routing functions only ever read. Clones are cheap (structural
/// sharing via `im`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropBag {
    entries: PropMap,
}

impl PropBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new bag with `key` set to `value`.
    pub fn with(&self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        Self {
            entries: self.entries.update(key.into(), value.into()),
        }
    }

    /// Looks up a property by key.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    /// Whether the bag carries `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates entries in enumeration (key) order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropValue)> {
        self.entries.iter()
    }

    /// Number of properties in the bag.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, PropValue)> for PropBag {
    fn from_iter<I: IntoIterator<Item = (String, PropValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn handler_compares_by_identity() {
        let a = EventHandler::noop();
        let b = EventHandler::noop();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn handler_invokes_closure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = calls.clone();
        let handler = EventHandler::new(move |_| {
            counted.fetch_add(1, Ordering::SeqCst);
        });
        handler.call(&EngineEvent::trigger(crate::engine::CopyAction::Copy));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn with_returns_a_new_bag() {
        let empty = PropBag::new();
        let one = empty.with("option-text", "hello");
        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(one.get("option-text").and_then(PropValue::as_text), Some("hello"));
    }

    #[test]
    fn iteration_follows_key_order() {
        let bag = PropBag::new()
            .with("zeta", 1i64)
            .with("alpha", 2i64)
            .with("mid", 3i64);
        let keys: Vec<&str> = bag.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn value_kinds_are_reported() {
        assert_eq!(PropValue::Null.kind(), "null");
        assert_eq!(PropValue::from(vec![]).kind(), "list");
        assert_eq!(PropValue::from(EventHandler::noop()).kind(), "handler");
    }
}
