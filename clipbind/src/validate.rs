//! Optional construction-time property validation.
//!
//! ## Usage
//!
//! Hosts that want early diagnostics call [`validate_props`] when the
//! component is constructed. The lifecycle binder never calls it: a bag
//! that skipped validation flows through unchanged and invalid shapes are
//! rejected by the engine instead.

use thiserror::Error;

use crate::{
    prop::{PropBag, PropValue},
    router::EXPLICIT_OPTIONS_KEY,
};

/// Bag key whose value must be a text provider when present.
pub const OPTION_TEXT_KEY: &str = "option-text";

/// Shape violations reported at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropError {
    /// `options` was a list; lists are never treated as option objects.
    #[error("`options` must be an object, not a list")]
    OptionsIsList,
    /// `options` was a primitive.
    #[error("`options` must be an object, got {0}")]
    OptionsNotObject(&'static str),
    /// `option-text` was present but not a provider.
    #[error("`option-text` must be a text provider, got {0}")]
    OptionTextNotProvider(&'static str),
}

/// Checks the shapes the legacy API constrained.
///
/// `options`, when present and non-null, must be an object; `option-text`,
/// when present, must be a text provider.
pub fn validate_props(bag: &PropBag) -> Result<(), PropError> {
    match bag.get(EXPLICIT_OPTIONS_KEY) {
        None | Some(PropValue::Null) | Some(PropValue::Map(_)) => {}
        Some(PropValue::List(_)) => return Err(PropError::OptionsIsList),
        Some(other) => return Err(PropError::OptionsNotObject(other.kind())),
    }
    match bag.get(OPTION_TEXT_KEY) {
        None | Some(PropValue::Provider(_)) => {}
        Some(other) => return Err(PropError::OptionTextNotProvider(other.kind())),
    }
    Ok(())
}
