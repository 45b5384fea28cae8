use clipbind::{
    Children, CopyRegion, ElementRef, ElementSource, EventHandler, PropBag, TextProvider,
};
use clipbind_arboard::{ArboardEngine, MemoryDevice, TextContent};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct DemoHost {
    element: ElementRef,
}

impl ElementSource for DemoHost {
    fn element(&self) -> Option<ElementRef> {
        Some(self.element.clone())
    }
}

fn main() -> Result<(), clipbind::BindError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // The demo writes into an in-memory device so it also runs on machines
    // without a clipboard; swap in `ArboardEngine::system()` for the real
    // thing.
    let device = MemoryDevice::new();
    let engine = ArboardEngine::new(device.clone());

    let props = PropBag::new()
        .with(
            "option-text",
            TextProvider::new(|element| match element.downcast_ref::<TextContent>() {
                Some(content) => content.text().to_string(),
                None => String::new(),
            }),
        )
        .with(
            "onSuccess",
            EventHandler::new(|event| info!(text = ?event.text, action = %event.action, "copied")),
        )
        .with(
            "onError",
            EventHandler::new(|event| info!(detail = ?event.detail, "copy failed")),
        );

    let mut region = CopyRegion::new(engine, props, Children::from("Copy me"));
    let container = region.render();
    info!(?container, "rendered one container");

    let host = DemoHost {
        element: ElementRef::new(TextContent::new("Copy me")),
    };
    region.on_mount(&host)?;

    if let Some(copier) = region.bound() {
        copier.trigger();
    }
    info!(clipboard = ?device.contents(), "device contents after trigger");

    region.on_unmount();
    Ok(())
}
