//! Arboard-backed copy engine and its bound instance.
//!
//! ## Usage
//!
//! Hand an [`ArboardEngine`] to a `clipbind` component; wire the host's
//! click plumbing to [`Copier::trigger`].

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use clipbind::{
    CopyAction, CopyEngine, ElementRef, EngineError, EngineEvent, EngineInstance, EventHandler,
    PropValue, TextProvider,
};

use crate::device::ClipboardDevice;

/// Node payload hosts can place behind an [`ElementRef`] so a copier can
/// fall back to copying the container's text when no `text` option is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextContent {
    text: String,
}

impl TextContent {
    /// Wraps the container's textual content.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The wrapped text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for TextContent {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextContent {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[derive(Clone)]
enum TextSpec {
    /// No `text` option; fall back to the element's [`TextContent`].
    Inherit,
    Fixed(String),
    Provided(TextProvider),
}

#[derive(Clone)]
struct CopierConfig {
    action: CopyAction,
    text: TextSpec,
}

fn parse_options(options: &PropValue) -> Result<CopierConfig, EngineError> {
    let map = match options {
        PropValue::Map(map) => map,
        other => {
            return Err(EngineError::InvalidOptions(format!(
                "expected an object, got {}",
                other.kind()
            )));
        }
    };

    let action = match map.get("action") {
        None => CopyAction::Copy,
        Some(PropValue::Text(name)) => match name.as_str() {
            "copy" => CopyAction::Copy,
            "cut" => CopyAction::Cut,
            other => {
                return Err(EngineError::InvalidOptions(format!(
                    "invalid 'action' value {other:?}, use either 'copy' or 'cut'"
                )));
            }
        },
        Some(other) => {
            return Err(EngineError::InvalidOptions(format!(
                "'action' must be text, got {}",
                other.kind()
            )));
        }
    };

    let text = match map.get("text") {
        None => TextSpec::Inherit,
        Some(PropValue::Provider(provider)) => TextSpec::Provided(provider.clone()),
        Some(PropValue::Text(text)) => TextSpec::Fixed(text.clone()),
        Some(other) => {
            return Err(EngineError::InvalidOptions(format!(
                "'text' must be text or a text provider, got {}",
                other.kind()
            )));
        }
    };

    for key in map.keys() {
        if !matches!(key.as_str(), "action" | "text") {
            debug!(key = key.as_str(), "ignoring unknown option");
        }
    }

    Ok(CopierConfig { action, text })
}

/// Copy engine writing through a [`ClipboardDevice`].
pub struct ArboardEngine<D: ClipboardDevice> {
    device: Arc<Mutex<D>>,
}

impl<D: ClipboardDevice> ArboardEngine<D> {
    /// Wraps a device for use by every instance this engine creates.
    pub fn new(device: D) -> Self {
        Self {
            device: Arc::new(Mutex::new(device)),
        }
    }
}

#[cfg(all(not(target_os = "android"), not(target_family = "wasm")))]
impl ArboardEngine<crate::device::ArboardDevice> {
    /// Engine writing through the system clipboard.
    pub fn system() -> Result<Self, crate::device::DeviceError> {
        Ok(Self::new(crate::device::ArboardDevice::new()?))
    }
}

impl<D: ClipboardDevice> CopyEngine for ArboardEngine<D> {
    type Instance = Copier<D>;

    fn create(&self, element: &ElementRef, options: &PropValue) -> Result<Copier<D>, EngineError> {
        let config = parse_options(options)?;
        Ok(Copier {
            device: self.device.clone(),
            element: element.clone(),
            config,
            listeners: Mutex::new(Vec::new()),
            destroyed: false,
        })
    }
}

/// Bound copy instance; lives for one component mount.
pub struct Copier<D: ClipboardDevice> {
    device: Arc<Mutex<D>>,
    element: ElementRef,
    config: CopierConfig,
    listeners: Mutex<Vec<(String, EventHandler)>>,
    destroyed: bool,
}

impl<D: ClipboardDevice> Copier<D> {
    /// Entry point the host wires to its click plumbing.
    ///
    /// Emits `click`, resolves the text to copy, writes it to the device
    /// and emits `success`, or emits `error` with a detail message.
    pub fn trigger(&self) {
        if self.destroyed {
            warn!("trigger after destroy ignored");
            return;
        }
        let action = self.config.action;
        self.emit("click", &EngineEvent::trigger(action));

        let Some(text) = self.resolve_text() else {
            self.emit("error", &EngineEvent::failure(action, "no text to copy"));
            return;
        };
        let written = self.device.lock().set_text(&text);
        match written {
            Ok(()) => self.emit("success", &EngineEvent::success(action, text)),
            Err(err) => self.emit("error", &EngineEvent::failure(action, err.to_string())),
        }
    }

    fn resolve_text(&self) -> Option<String> {
        match &self.config.text {
            TextSpec::Provided(provider) => Some(provider.call(&self.element)),
            TextSpec::Fixed(text) => Some(text.clone()),
            TextSpec::Inherit => self
                .element
                .downcast_ref::<TextContent>()
                .map(|content| content.text().to_string()),
        }
    }

    // Handlers are dispatched from a snapshot so they can reach back into
    // the copier without holding the listener lock.
    fn emit(&self, event: &str, payload: &EngineEvent) {
        let handlers: Vec<EventHandler> = self
            .listeners
            .lock()
            .iter()
            .filter(|(name, _)| name == event)
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler.call(payload);
        }
    }
}

impl<D: ClipboardDevice> EngineInstance for Copier<D> {
    fn on(&mut self, event: &str, handler: EventHandler) {
        if self.destroyed {
            warn!(event, "subscription after destroy ignored");
            return;
        }
        self.listeners.lock().push((event.to_string(), handler));
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.listeners.lock().clear();
        debug!("copier destroyed");
    }
}
