use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use parking_lot::Mutex;

use crate::{
    BindError, Children, CopyRegion, ElementRef, ElementSource, EngineError, EventHandler,
    LifecycleBinder, PropBag, PropValue,
    engine::{CopyEngine, EngineInstance},
};

#[derive(Clone, Default)]
struct EngineLog {
    created: Arc<AtomicUsize>,
    destroyed: Arc<AtomicUsize>,
    subscriptions: Arc<Mutex<Vec<String>>>,
    options_seen: Arc<Mutex<Vec<PropValue>>>,
}

impl EngineLog {
    fn created_count(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    fn destroyed_count(&self) -> usize {
        self.destroyed.load(Ordering::SeqCst)
    }

    fn subscriptions(&self) -> Vec<String> {
        self.subscriptions.lock().clone()
    }

    fn options_seen(&self) -> Vec<PropValue> {
        self.options_seen.lock().clone()
    }
}

#[derive(Clone, Default)]
struct RecordingEngine {
    log: EngineLog,
    fail_create: bool,
}

impl RecordingEngine {
    fn failing(log: EngineLog) -> Self {
        Self {
            log,
            fail_create: true,
        }
    }
}

struct RecordingInstance {
    log: EngineLog,
    released: bool,
}

impl CopyEngine for RecordingEngine {
    type Instance = RecordingInstance;

    fn create(
        &self,
        _element: &ElementRef,
        options: &PropValue,
    ) -> Result<RecordingInstance, EngineError> {
        if self.fail_create {
            return Err(EngineError::Unavailable("engine configured to fail".into()));
        }
        self.log.created.fetch_add(1, Ordering::SeqCst);
        self.log.options_seen.lock().push(options.clone());
        Ok(RecordingInstance {
            log: self.log.clone(),
            released: false,
        })
    }
}

impl EngineInstance for RecordingInstance {
    fn on(&mut self, event: &str, _handler: EventHandler) {
        self.log.subscriptions.lock().push(event.to_string());
    }

    fn destroy(&mut self) {
        if !self.released {
            self.released = true;
            self.log.destroyed.fetch_add(1, Ordering::SeqCst);
        }
    }
}

struct FixedHost {
    element: Option<ElementRef>,
}

impl FixedHost {
    fn rendered() -> Self {
        Self {
            element: Some(ElementRef::new("container")),
        }
    }

    fn empty() -> Self {
        Self { element: None }
    }
}

impl ElementSource for FixedHost {
    fn element(&self) -> Option<ElementRef> {
        self.element.clone()
    }
}

fn region_with(bag: PropBag) -> (CopyRegion<RecordingEngine>, EngineLog) {
    let engine = RecordingEngine::default();
    let log = engine.log.clone();
    (CopyRegion::new(engine, bag, Children::from("copy me")), log)
}

#[test]
fn mount_then_unmount_creates_and_releases_once() {
    let (mut region, log) = region_with(PropBag::new());
    let host = FixedHost::rendered();

    match region.on_mount(&host) {
        Ok(()) => {}
        Err(err) => panic!("mount failed: {err}"),
    }
    assert!(region.is_mounted());
    assert_eq!(log.created_count(), 1);
    assert_eq!(log.destroyed_count(), 0);

    region.on_unmount();
    assert!(!region.is_mounted());
    assert_eq!(log.created_count(), 1);
    assert_eq!(log.destroyed_count(), 1);
}

#[test]
fn unmount_is_a_noop_without_a_mount_and_when_repeated() {
    let (mut region, log) = region_with(PropBag::new());
    region.on_unmount();
    assert_eq!(log.destroyed_count(), 0);

    let host = FixedHost::rendered();
    match region.on_mount(&host) {
        Ok(()) => {}
        Err(err) => panic!("mount failed: {err}"),
    }
    region.on_unmount();
    region.on_unmount();
    assert_eq!(log.created_count(), 1);
    assert_eq!(log.destroyed_count(), 1);
}

#[test]
fn missing_element_fails_before_construction() {
    let (mut region, log) = region_with(PropBag::new());
    match region.on_mount(&FixedHost::empty()) {
        Err(BindError::MissingElement) => {}
        other => panic!("expected MissingElement, got {other:?}"),
    }
    assert!(!region.is_mounted());
    assert_eq!(log.created_count(), 0);
}

#[test]
fn engine_failure_propagates_and_leaves_the_binder_unmounted() {
    let log = EngineLog::default();
    let engine = RecordingEngine::failing(log.clone());
    let mut region = CopyRegion::new(engine, PropBag::new(), Children::default());

    match region.on_mount(&FixedHost::rendered()) {
        Err(BindError::Engine(EngineError::Unavailable(_))) => {}
        other => panic!("expected an engine failure, got {other:?}"),
    }
    assert!(!region.is_mounted());

    // Unmount after a failed mount stays a no-op.
    region.on_unmount();
    assert_eq!(log.destroyed_count(), 0);
}

#[test]
fn remount_binds_a_fresh_instance() {
    let (mut region, log) = region_with(PropBag::new());
    let host = FixedHost::rendered();

    for _ in 0..2 {
        match region.on_mount(&host) {
            Ok(()) => {}
            Err(err) => panic!("mount failed: {err}"),
        }
        region.on_unmount();
    }
    assert_eq!(log.created_count(), 2);
    assert_eq!(log.destroyed_count(), 2);
}

#[test]
fn mount_while_mounted_releases_the_stale_instance() {
    let engine = RecordingEngine::default();
    let log = engine.log.clone();
    let mut binder = LifecycleBinder::new(engine);
    let element = ElementRef::new("container");
    let bag = PropBag::new();

    match binder.mount(element.clone(), &bag) {
        Ok(()) => {}
        Err(err) => panic!("mount failed: {err}"),
    }
    match binder.mount(element, &bag) {
        Ok(()) => {}
        Err(err) => panic!("remount failed: {err}"),
    }
    assert_eq!(log.created_count(), 2);
    assert_eq!(log.destroyed_count(), 1);
    binder.unmount();
    assert_eq!(log.destroyed_count(), 2);
}

#[test]
fn subscriptions_are_lowercased_with_the_default_click_appended() {
    let bag = PropBag::new()
        .with("onSuccess", EventHandler::noop())
        .with("onError", EventHandler::noop());
    let (mut region, log) = region_with(bag);
    match region.on_mount(&FixedHost::rendered()) {
        Ok(()) => {}
        Err(err) => panic!("mount failed: {err}"),
    }
    assert_eq!(log.subscriptions(), vec!["error", "success", "click"]);
}

#[test]
fn explicit_on_click_yields_exactly_one_click_subscription() {
    let bag = PropBag::new().with("onClick", EventHandler::noop());
    let (mut region, log) = region_with(bag);
    match region.on_mount(&FixedHost::rendered()) {
        Ok(()) => {}
        Err(err) => panic!("mount failed: {err}"),
    }
    assert_eq!(log.subscriptions(), vec!["click"]);
}

#[test]
fn props_are_fixed_at_mount_until_remounted() {
    let bag = PropBag::new().with("option-text", "first");
    let (mut region, log) = region_with(bag);
    let host = FixedHost::rendered();
    match region.on_mount(&host) {
        Ok(()) => {}
        Err(err) => panic!("mount failed: {err}"),
    }
    let subscriptions_at_mount = log.subscriptions();

    region.update(
        PropBag::new().with("option-text", "second"),
        Children::default(),
    );
    assert_eq!(log.options_seen().len(), 1);
    assert_eq!(log.subscriptions(), subscriptions_at_mount);

    region.on_unmount();
    match region.on_mount(&host) {
        Ok(()) => {}
        Err(err) => panic!("remount failed: {err}"),
    }
    let seen = log.options_seen();
    assert_eq!(seen.len(), 2);
    let PropValue::Map(second) = &seen[1] else {
        panic!("expected derived options, got {}", seen[1].kind());
    };
    assert_eq!(second.get("text"), Some(&PropValue::from("second")));
}

#[test]
fn dropping_a_mounted_region_releases_the_instance() {
    let (mut region, log) = region_with(PropBag::new());
    match region.on_mount(&FixedHost::rendered()) {
        Ok(()) => {}
        Err(err) => panic!("mount failed: {err}"),
    }
    drop(region);
    assert_eq!(log.destroyed_count(), 1);
}

#[test]
fn list_options_reach_the_engine_verbatim() {
    let bag = PropBag::new().with("options", vec![PropValue::Number(1.0)]);
    let (mut region, log) = region_with(bag);
    match region.on_mount(&FixedHost::rendered()) {
        Ok(()) => {}
        Err(err) => panic!("mount failed: {err}"),
    }
    let seen = log.options_seen();
    assert_eq!(seen[0].kind(), "list");
}

#[test]
fn render_wraps_children_and_carries_passthrough() {
    let bag = PropBag::new()
        .with("option-foo", 1i64)
        .with("onBar", EventHandler::noop())
        .with("data-baz", 4i64);
    let (region, _log) = region_with(bag);
    let container = region.render();
    assert_eq!(container.children, Children::from("copy me"));
    assert_eq!(container.attrs.len(), 1);
    assert!(container.attrs.contains_key("data-baz"));
}
