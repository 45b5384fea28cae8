//! Clipboard devices backing the copy engine.
//!
//! ## Usage
//!
//! [`ArboardDevice`] writes to the system clipboard; [`MemoryDevice`] keeps
//! the text in memory for tests and headless hosts.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

/// Errors from the clipboard endpoint itself.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// No clipboard backend could be reached.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The backend rejected the write.
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Writable clipboard endpoint.
pub trait ClipboardDevice: Send {
    /// Replaces the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), DeviceError>;
}

/// System clipboard device backed by `arboard`.
#[cfg(all(not(target_os = "android"), not(target_family = "wasm")))]
pub struct ArboardDevice {
    manager: arboard::Clipboard,
}

#[cfg(all(not(target_os = "android"), not(target_family = "wasm")))]
impl ArboardDevice {
    /// Connects to the system clipboard.
    ///
    /// Fails in environments without one (headless CI, some Wayland
    /// setups); callers that can live without a real clipboard should fall
    /// back to [`MemoryDevice`].
    pub fn new() -> Result<Self, DeviceError> {
        match arboard::Clipboard::new() {
            Ok(manager) => Ok(Self { manager }),
            Err(err) => {
                tracing::warn!("failed to initialize clipboard: {err}");
                Err(DeviceError::Unavailable(err.to_string()))
            }
        }
    }
}

#[cfg(all(not(target_os = "android"), not(target_family = "wasm")))]
impl ClipboardDevice for ArboardDevice {
    fn set_text(&mut self, text: &str) -> Result<(), DeviceError> {
        self.manager
            .set_text(text.to_string())
            .map_err(|err| DeviceError::WriteFailed(err.to_string()))
    }
}

/// In-memory device for tests and headless hosts.
///
/// Clones share contents, so a host can keep one handle for inspection
/// while the engine writes through another.
#[derive(Clone, Default)]
pub struct MemoryDevice {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryDevice {
    /// Creates an empty device.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last written text, when any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl ClipboardDevice for MemoryDevice {
    fn set_text(&mut self, text: &str) -> Result<(), DeviceError> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}
