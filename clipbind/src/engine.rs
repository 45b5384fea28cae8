//! Contract between the declarative component and the imperative copy
//! utility.
//!
//! ## Usage
//!
//! Implement [`CopyEngine`] and [`EngineInstance`] for a clipboard backend;
//! the lifecycle binder depends on nothing beyond these three operations.

use std::fmt;

use thiserror::Error;

use crate::{
    element::ElementRef,
    prop::{EventHandler, PropValue},
};

/// Clipboard action requested for a trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyAction {
    /// Copy the resolved text.
    #[default]
    Copy,
    /// Copy the resolved text; clearing the source is host business.
    Cut,
}

impl CopyAction {
    /// Lowercase wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyAction::Copy => "copy",
            CopyAction::Cut => "cut",
        }
    }
}

impl fmt::Display for CopyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload delivered to subscribed event handlers.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineEvent {
    /// Action the instance was performing.
    pub action: CopyAction,
    /// Text that was copied, when the operation got that far.
    pub text: Option<String>,
    /// Failure detail for error events.
    pub detail: Option<String>,
}

impl EngineEvent {
    /// Event announcing that a trigger fired.
    pub fn trigger(action: CopyAction) -> Self {
        Self {
            action,
            text: None,
            detail: None,
        }
    }

    /// Event announcing a completed copy.
    pub fn success(action: CopyAction, text: impl Into<String>) -> Self {
        Self {
            action,
            text: Some(text.into()),
            detail: None,
        }
    }

    /// Event announcing a failed copy.
    pub fn failure(action: CopyAction, detail: impl Into<String>) -> Self {
        Self {
            action,
            text: None,
            detail: Some(detail.into()),
        }
    }
}

/// Errors surfaced while constructing a bound instance.
///
/// Construction failures propagate synchronously out of the mount
/// transition; the core performs no retry and no recovery.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The effective options did not have a shape the engine accepts.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    /// The element reference was not something the engine can bind to.
    #[error("element rejected: {0}")]
    ElementRejected(String),
    /// The clipboard backend could not be reached.
    #[error("clipboard backend unavailable: {0}")]
    Unavailable(String),
}

/// Constructor side of the imperative copy utility.
///
/// Any clipboard-copy implementation satisfying this contract and
/// [`EngineInstance`] is substitutable.
pub trait CopyEngine {
    /// Live instance type produced by [`CopyEngine::create`].
    type Instance: EngineInstance;

    /// Builds an instance bound to the rendered element and the effective
    /// options.
    ///
    /// The options value arrives verbatim from resolution; shapes the
    /// engine cannot use (lists, primitives) are rejected here, not
    /// upstream.
    fn create(
        &self,
        element: &ElementRef,
        options: &PropValue,
    ) -> Result<Self::Instance, EngineError>;
}

/// Live handle created by a [`CopyEngine`].
pub trait EngineInstance {
    /// Subscribes a handler under an event name.
    ///
    /// Subscribing the same event twice appends; both handlers fire.
    fn on(&mut self, event: &str, handler: EventHandler);

    /// Releases the instance. Must be idempotent: destroying twice is a
    /// no-op, never an error.
    fn destroy(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names_are_lowercase() {
        assert_eq!(CopyAction::Copy.to_string(), "copy");
        assert_eq!(CopyAction::Cut.as_str(), "cut");
    }

    #[test]
    fn event_constructors_fill_the_right_fields() {
        let ok = EngineEvent::success(CopyAction::Copy, "abc");
        assert_eq!(ok.text.as_deref(), Some("abc"));
        assert_eq!(ok.detail, None);

        let err = EngineEvent::failure(CopyAction::Cut, "backend gone");
        assert_eq!(err.text, None);
        assert_eq!(err.detail.as_deref(), Some("backend gone"));
    }
}
