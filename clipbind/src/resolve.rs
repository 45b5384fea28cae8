//! Effective-options and callback resolution.
//!
//! ## Usage
//!
//! Called by the lifecycle binder at mount time; both functions are pure
//! reads over the bag.

use tracing::warn;

use crate::{
    prop::{EventHandler, PropBag, PropValue},
    router::{EXPLICIT_OPTIONS_KEY, callback_pattern, option_pattern, route},
};

/// Bag key whose absence triggers the default `click` binding.
pub const DEFAULT_CLICK_KEY: &str = "onClick";

/// Resolves the configuration passed to instance construction.
///
/// An explicit `options` entry wins over the derived `option-*` subset and
/// the two are never merged. The explicit value is returned verbatim, even
/// a list or a primitive, so that an invalid shape that skipped validation
/// reaches the engine and is rejected there, not silently coerced here.
/// An explicit `Null` counts as absent, matching the legacy falsy
/// fallback.
pub fn resolve_options(bag: &PropBag) -> PropValue {
    match bag.get(EXPLICIT_OPTIONS_KEY) {
        Some(PropValue::Null) | None => PropValue::Map(route(bag, option_pattern(), true)),
        Some(explicit) => explicit.clone(),
    }
}

/// One event subscription derived from the bag.
#[derive(Clone, Debug, PartialEq)]
pub struct CallbackBinding {
    /// Lowercased event name to subscribe under.
    pub event: String,
    /// Handler to register.
    pub handler: EventHandler,
}

/// Resolves the event subscriptions derived from `on<Event>` properties.
///
/// Stripping only discovers which suffixes exist; the handler bound for a
/// suffix `K` is the value re-read at the reconstructed key `"on" + K`.
/// Bindings are an ordered list rather than a map because two distinct
/// keys (`onClick`, `onclick`) may legitimately bind the same event; order
/// follows bag enumeration, with the default `click` binding appended last
/// when the literal `onClick` key is absent.
pub fn resolve_callbacks(bag: &PropBag) -> Vec<CallbackBinding> {
    let derived = route(bag, callback_pattern(), true);
    let mut bindings = Vec::with_capacity(derived.len() + 1);
    for suffix in derived.keys() {
        let original_key = format!("on{suffix}");
        match bag.get(&original_key) {
            Some(PropValue::Handler(handler)) => bindings.push(CallbackBinding {
                event: suffix.to_lowercase(),
                handler: handler.clone(),
            }),
            Some(other) => {
                warn!(
                    key = original_key.as_str(),
                    kind = other.kind(),
                    "ignoring callback property that is not a handler"
                );
            }
            // The pattern is anchored, so the reconstructed key always
            // exists; nothing to do if it somehow does not.
            None => {}
        }
    }
    if bag.get(DEFAULT_CLICK_KEY).is_none() {
        bindings.push(CallbackBinding {
            event: "click".to_string(),
            handler: EventHandler::noop(),
        });
    }
    bindings
}
