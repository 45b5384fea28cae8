//! Lifecycle binding between a property bag and a bound copy instance.
//!
//! ## Usage
//!
//! Mount when the host attaches the component, unmount when it detaches;
//! release of the bound instance is guaranteed on every path.

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    element::ElementRef,
    engine::{CopyEngine, EngineError, EngineInstance},
    prop::PropBag,
    resolve::{resolve_callbacks, resolve_options},
};

/// Errors surfaced by the mount transition.
#[derive(Debug, Error)]
pub enum BindError {
    /// The host had no rendered container element to bind to.
    #[error("no rendered element to bind")]
    MissingElement,
    /// The engine rejected instance construction.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Owns the bound instance for one mounted component lifetime.
///
/// The binder moves between exactly two states, unmounted and mounted,
/// and holds at most one live instance. Failures propagate synchronously
/// out of [`LifecycleBinder::mount`]; there is no retry and no error
/// state.
pub struct LifecycleBinder<E: CopyEngine> {
    engine: E,
    bound: Option<E::Instance>,
}

impl<E: CopyEngine> LifecycleBinder<E> {
    /// Creates an unmounted binder around an engine.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            bound: None,
        }
    }

    /// Whether a live instance is currently bound.
    pub fn is_mounted(&self) -> bool {
        self.bound.is_some()
    }

    /// Read access to the bound instance, when mounted.
    pub fn bound(&self) -> Option<&E::Instance> {
        self.bound.as_ref()
    }

    /// Runs the mount transition: resolve options, construct the instance,
    /// subscribe the resolved callbacks in bag enumeration order.
    ///
    /// Construction errors propagate to the caller. The instance handle is
    /// stored before any subscription happens, so a partially completed
    /// mount still releases cleanly on the next [`LifecycleBinder::unmount`]
    /// or on drop.
    pub fn mount(&mut self, element: ElementRef, bag: &PropBag) -> Result<(), BindError> {
        if self.bound.is_some() {
            warn!("mount while already mounted; releasing the stale instance");
            self.unmount();
        }
        let options = resolve_options(bag);
        let instance = self.engine.create(&element, &options)?;
        let instance = self.bound.insert(instance);
        for binding in resolve_callbacks(bag) {
            instance.on(&binding.event, binding.handler);
        }
        debug!("copy instance bound");
        Ok(())
    }

    /// Releases the bound instance.
    ///
    /// Releasing twice, or without a prior mount, is a no-op.
    pub fn unmount(&mut self) {
        if let Some(mut instance) = self.bound.take() {
            instance.destroy();
            debug!("copy instance released");
        }
    }
}

impl<E: CopyEngine> Drop for LifecycleBinder<E> {
    fn drop(&mut self) {
        self.unmount();
    }
}
