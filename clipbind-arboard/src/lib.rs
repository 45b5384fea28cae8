//! Arboard-backed copy engine for `clipbind` components.
//!
//! Implements the core's three-operation engine contract over the system
//! clipboard: `create` parses the effective options, `on` registers event
//! handlers on the bound [`Copier`], and `destroy` releases it. Hosts wire
//! their click plumbing to [`Copier::trigger`], which resolves the text to
//! copy (a static or provided `text` option, or the element's
//! [`TextContent`] payload), writes it through a [`ClipboardDevice`] and
//! emits `success` or `error` events.
//!
//! Use [`ArboardEngine::system`] for the real clipboard and
//! [`MemoryDevice`] in tests or headless environments.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod copier;
pub mod device;

pub use copier::{ArboardEngine, Copier, TextContent};
pub use device::{ClipboardDevice, DeviceError, MemoryDevice};

#[cfg(all(not(target_os = "android"), not(target_family = "wasm")))]
pub use device::ArboardDevice;
