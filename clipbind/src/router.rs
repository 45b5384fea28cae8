//! Naming-convention property routing.
//!
//! ## Usage
//!
//! Select a subset of a bag's keys by pattern, or partition the whole bag
//! into its three routed subsets in one pass.

use std::sync::OnceLock;

use regex::Regex;

use crate::prop::{PropBag, PropMap};

/// Reserved key carrying an explicit options object (legacy API).
pub const EXPLICIT_OPTIONS_KEY: &str = "options";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("routing pattern must compile")
}

/// Pattern selecting `option-<name>` configuration keys.
pub fn option_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| compile("^option-"))
}

/// Pattern selecting `on<Event>` callback keys.
pub fn callback_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| compile("^on"))
}

/// Copies every property whose key the pattern matches anywhere into a new
/// mapping.
///
/// With `strip_matched`, the first match is removed from the key; otherwise
/// keys are copied as-is. The input bag is never mutated, and the result is
/// deterministic for a given bag and pattern.
///
/// When two distinct keys collapse to the same stripped key, the
/// later-enumerated one wins. Enumeration here is the bag's key order, so
/// the outcome is stable, but callers should treat such collisions as an
/// input smell rather than rely on the tiebreak.
pub fn route(bag: &PropBag, pattern: &Regex, strip_matched: bool) -> PropMap {
    let mut selected = PropMap::new();
    for (key, value) in bag.iter() {
        let Some(found) = pattern.find(key) else {
            continue;
        };
        let routed_key = if strip_matched {
            let mut stripped = String::with_capacity(key.len() - found.len());
            stripped.push_str(&key[..found.start()]);
            stripped.push_str(&key[found.end()..]);
            stripped
        } else {
            key.clone()
        };
        selected.insert(routed_key, value.clone());
    }
    selected
}

/// The three disjoint outputs of one routing pass over a bag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoutedProps {
    /// `option-<name>` keys, stripped.
    pub options: PropMap,
    /// `on<Event>` keys, stripped.
    pub callbacks: PropMap,
    /// Everything else, minus the reserved `options` key.
    pub passthrough: PropMap,
}

impl RoutedProps {
    /// Partitions a bag into options, callbacks, and passthrough subsets.
    ///
    /// Equivalent to routing twice with [`option_pattern`] and
    /// [`callback_pattern`] plus collecting the remainder, but walks the
    /// bag once.
    pub fn partition(bag: &PropBag) -> Self {
        let option_keys = option_pattern();
        let callback_keys = callback_pattern();
        let mut routed = RoutedProps::default();
        // Both patterns are anchored, so the match always starts at 0.
        for (key, value) in bag.iter() {
            if let Some(found) = option_keys.find(key) {
                routed.options.insert(key[found.end()..].to_string(), value.clone());
            } else if let Some(found) = callback_keys.find(key) {
                routed.callbacks.insert(key[found.end()..].to_string(), value.clone());
            } else if key != EXPLICIT_OPTIONS_KEY {
                routed.passthrough.insert(key.clone(), value.clone());
            }
        }
        routed
    }
}
