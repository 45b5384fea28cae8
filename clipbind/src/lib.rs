//! clipbind exposes an imperative clipboard-copy utility as a declarative
//! component in a UI component tree.
//!
//! A host supplies a property bag per render. The naming-convention router
//! partitions it into configuration options (`option-*`), event callbacks
//! (`on*`) and passthrough, the legacy-aware resolver turns those into an
//! effective configuration and a set of event bindings, and the lifecycle
//! binder ties the result to an engine instance that is constructed on
//! mount and released on unmount.
//!
//! The engine itself sits behind a three-operation contract
//! ([`CopyEngine::create`], [`EngineInstance::on`],
//! [`EngineInstance::destroy`]); any clipboard-copy implementation
//! satisfying it is substitutable. The `clipbind-arboard` crate provides
//! one backed by the system clipboard.
//!
//! # Example
//!
//! ```
//! use clipbind::{
//!     Children, CopyEngine, CopyRegion, ElementRef, ElementSource, EngineError,
//!     EngineInstance, EventHandler, PropBag, PropValue,
//! };
//!
//! // A minimal engine that accepts everything and does nothing.
//! struct NullEngine;
//! struct NullInstance;
//!
//! impl EngineInstance for NullInstance {
//!     fn on(&mut self, _event: &str, _handler: EventHandler) {}
//!     fn destroy(&mut self) {}
//! }
//!
//! impl CopyEngine for NullEngine {
//!     type Instance = NullInstance;
//!
//!     fn create(
//!         &self,
//!         _element: &ElementRef,
//!         _options: &PropValue,
//!     ) -> Result<NullInstance, EngineError> {
//!         Ok(NullInstance)
//!     }
//! }
//!
//! struct Host;
//!
//! impl ElementSource for Host {
//!     fn element(&self) -> Option<ElementRef> {
//!         Some(ElementRef::new("container"))
//!     }
//! }
//!
//! let props = PropBag::new()
//!     .with("option-text", "hello")
//!     .with("onSuccess", EventHandler::noop());
//! let mut region = CopyRegion::new(NullEngine, props, Children::from("Copy"));
//! region.on_mount(&Host)?;
//! assert!(region.is_mounted());
//! region.on_unmount();
//! # Ok::<(), clipbind::BindError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod binder;
pub mod component;
pub mod element;
pub mod engine;
pub mod prop;
pub mod resolve;
pub mod router;
pub mod validate;

#[cfg(test)]
mod test;

pub use crate::{
    binder::{BindError, LifecycleBinder},
    component::{Children, ContainerNode, CopyRegion, HostNode},
    element::{ElementRef, ElementSource},
    engine::{CopyAction, CopyEngine, EngineError, EngineEvent, EngineInstance},
    prop::{EventHandler, PropBag, PropMap, PropValue, TextProvider},
    resolve::{CallbackBinding, DEFAULT_CLICK_KEY, resolve_callbacks, resolve_options},
    router::{EXPLICIT_OPTIONS_KEY, RoutedProps, route},
    validate::{OPTION_TEXT_KEY, PropError, validate_props},
};
