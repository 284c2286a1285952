//! Scroll-synchronized animation orchestration.
//!
//! The [`Orchestrator`] receives its engines at construction:
//!
//! - [`SmoothScroll`] - eased scroll position (Lenis)
//! - [`TriggerEngine`] - scroll-position-driven tweens (GSAP ScrollTrigger)
//! - [`FrameScheduler`] - per-animation-frame callback (`requestAnimationFrame`)
//!
//! When any engine is unavailable it is [`Orchestrator::Disabled`] and every
//! operation is a no-op, leaving the page static but fully visible.
//!
//! Bindings are owned by the orchestrator. The renderer reports the regions
//! present after each render through [`Orchestrator::regions_changed`]; all
//! bindings from the previous render are released before new ones are made,
//! so no binding outlives its element.

pub mod binding;
mod frame;
pub mod gsap;

use std::rc::Rc;

use leptos::logging::{log, warn};

use crate::core::error::AnimationError;
use crate::models::ViewportClass;
pub use binding::{AnimationBinding, BindingKind, Region};
pub use frame::AnimationFrameLoop;

/// Handle to a tween created by a [`TriggerEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TweenId(pub u32);

// ============================================================================
// Engine capabilities
// ============================================================================

/// Smooth-scroll engine.
pub trait SmoothScroll {
    /// Advance the engine's internal clock (milliseconds since page load).
    fn advance(&self, time_ms: f64);
    /// Current eased scroll offset in px.
    fn offset(&self) -> f64;
    /// Jump to an offset without easing.
    fn jump_to(&self, offset: f64);
    /// Recompute dimensions after layout changes.
    fn resize(&self);
    /// Register the listener called on every scroll update.
    fn on_scroll(&self, listener: Box<dyn Fn()>) -> Result<(), AnimationError>;
    /// Remove listeners and stop intercepting input.
    fn destroy(&self);
}

/// Scroll-triggered animation engine.
pub trait TriggerEngine {
    /// Read and write scroll position through the given functions instead of
    /// native scroll offset.
    fn set_scroller(
        &self,
        read: Box<dyn Fn() -> f64>,
        write: Box<dyn Fn(f64)>,
    ) -> Result<(), AnimationError>;
    /// Register the listener called whenever trigger boundaries are recomputed.
    fn on_refresh(&self, listener: Box<dyn Fn()>) -> Result<(), AnimationError>;
    /// Re-evaluate triggers against the current scroll position.
    fn update(&self);
    /// Recompute trigger boundaries.
    fn refresh(&self);
    /// Create the tween described by `binding`.
    fn bind(&self, binding: &AnimationBinding) -> Result<TweenId, AnimationError>;
    /// Kill a tween and revert the styles it applied.
    fn release(&self, id: TweenId);
    /// Release everything, including the scroller bridge and listeners.
    fn shutdown(&self);
}

/// Per-animation-frame callback source.
pub trait FrameScheduler {
    fn start(&self, on_frame: Box<dyn Fn(f64)>) -> Result<(), AnimationError>;
    fn stop(&self);
}

/// The engine set handed to the orchestrator.
#[derive(Clone)]
pub struct Engines {
    pub scroll: Rc<dyn SmoothScroll>,
    pub triggers: Rc<dyn TriggerEngine>,
    pub frames: Rc<dyn FrameScheduler>,
}

impl Engines {
    fn shutdown(&self) {
        self.frames.stop();
        self.triggers.shutdown();
        self.scroll.destroy();
    }
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Animation orchestrator, active or disabled.
pub enum Orchestrator {
    Active(ActiveOrchestrator),
    Disabled,
}

impl Orchestrator {
    /// Start the orchestrator, or fall back to [`Orchestrator::Disabled`].
    ///
    /// Engine detection and wiring failures are logged, never surfaced.
    pub fn initialize(
        engines: Result<Engines, AnimationError>,
        viewport: ViewportClass,
    ) -> Self {
        match engines.and_then(|e| ActiveOrchestrator::start(e, viewport)) {
            Ok(active) => Self::Active(active),
            Err(e) => {
                warn!("[animation] {}; rendering without animations", e);
                Self::Disabled
            }
        }
    }

    /// Replace all bindings with those for the regions now rendered.
    pub fn regions_changed(&mut self, regions: &[Region]) {
        if let Self::Active(active) = self {
            active.rebind(regions);
        }
    }

    /// Release every binding while keeping the engines running.
    ///
    /// Called as soon as the rendered regions are removed, before anything
    /// can scroll, so no trigger outlives its element.
    pub fn release_bindings(&mut self) {
        if let Self::Active(active) = self {
            active.release_all();
        }
    }

    /// Rebind viewport-dependent animations when the width class changes.
    pub fn viewport_changed(&mut self, viewport: ViewportClass) {
        if let Self::Active(active) = self {
            active.set_viewport(viewport);
        }
    }

    /// Reset the smooth-scroll offset to the top.
    ///
    /// Returns `false` when disabled; the caller scrolls natively instead.
    pub fn scroll_to_top(&self) -> bool {
        match self {
            Self::Active(active) => {
                active.engines.scroll.jump_to(0.0);
                true
            }
            Self::Disabled => false,
        }
    }

    /// Release every binding, the frame loop and the engines.
    pub fn teardown(&mut self) {
        // Dropping the active orchestrator releases everything it owns.
        *self = Self::Disabled;
    }
}

struct Bound {
    kind: BindingKind,
    id: TweenId,
}

/// Orchestrator state while engines are running.
pub struct ActiveOrchestrator {
    engines: Engines,
    viewport: ViewportClass,
    regions: Vec<Region>,
    bound: Vec<Bound>,
    shut_down: bool,
}

impl ActiveOrchestrator {
    /// Wire the engines together and start the frame loop.
    fn start(engines: Engines, viewport: ViewportClass) -> Result<Self, AnimationError> {
        if let Err(e) = Self::connect(&engines) {
            engines.shutdown();
            return Err(e);
        }
        log!("[animation] smooth scroll and scroll triggers active");
        Ok(Self {
            engines,
            viewport,
            regions: Vec::new(),
            bound: Vec::new(),
            shut_down: false,
        })
    }

    fn connect(engines: &Engines) -> Result<(), AnimationError> {
        // Closures hold weak references so engines never keep each other alive.
        let read = Rc::downgrade(&engines.scroll);
        let write = Rc::downgrade(&engines.scroll);
        engines.triggers.set_scroller(
            Box::new(move || read.upgrade().map_or(0.0, |s| s.offset())),
            Box::new(move |offset| {
                if let Some(s) = write.upgrade() {
                    s.jump_to(offset);
                }
            }),
        )?;

        let triggers = Rc::downgrade(&engines.triggers);
        engines.scroll.on_scroll(Box::new(move || {
            if let Some(t) = triggers.upgrade() {
                t.update();
            }
        }))?;

        let scroll = Rc::downgrade(&engines.scroll);
        engines.triggers.on_refresh(Box::new(move || {
            if let Some(s) = scroll.upgrade() {
                s.resize();
            }
        }))?;

        let scroll = Rc::downgrade(&engines.scroll);
        engines.frames.start(Box::new(move |time| {
            if let Some(s) = scroll.upgrade() {
                s.advance(time);
            }
        }))?;

        engines.triggers.refresh();
        Ok(())
    }

    fn release_all(&mut self) {
        self.release_where(|_| true);
        self.regions.clear();
    }

    fn rebind(&mut self, regions: &[Region]) {
        self.release_all();
        self.regions = regions.to_vec();
        let bindings = binding::plan(&self.regions, self.viewport);
        self.bind_all(&bindings);
        self.engines.triggers.refresh();
    }

    fn set_viewport(&mut self, viewport: ViewportClass) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.release_where(|kind| kind == BindingKind::Parallax);
        let bindings: Vec<_> = self
            .regions
            .iter()
            .filter_map(|region| match *region {
                Region::Hero { anchor } => Some(binding::parallax_bindings(anchor, viewport)),
                _ => None,
            })
            .flatten()
            .collect();
        self.bind_all(&bindings);
        self.engines.triggers.refresh();
    }

    fn bind_all(&mut self, bindings: &[AnimationBinding]) {
        for binding in bindings {
            match self.engines.triggers.bind(binding) {
                Ok(id) => self.bound.push(Bound {
                    kind: binding.kind,
                    id,
                }),
                Err(AnimationError::MissingElement(selector)) => {
                    log!("[animation] skipping binding, {} not rendered", selector);
                }
                Err(e) => warn!("[animation] binding {} failed: {}", binding.target.selector(), e),
            }
        }
    }

    fn release_where(&mut self, pred: impl Fn(BindingKind) -> bool) {
        let triggers = &self.engines.triggers;
        self.bound.retain(|b| {
            if pred(b.kind) {
                triggers.release(b.id);
                false
            } else {
                true
            }
        });
    }
}

impl Drop for ActiveOrchestrator {
    fn drop(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.release_where(|_| true);
        self.engines.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, HashSet};

    use super::*;

    // ------------------------------------------------------------------------
    // Fake engines
    // ------------------------------------------------------------------------

    #[derive(Default)]
    struct FakeScroll {
        offset: Cell<f64>,
        advanced: RefCell<Vec<f64>>,
        resized: Cell<usize>,
        listener: RefCell<Option<Box<dyn Fn()>>>,
        destroyed: Cell<bool>,
        fail_listen: bool,
    }

    impl FakeScroll {
        fn emit_scroll(&self, offset: f64) {
            self.offset.set(offset);
            if let Some(l) = self.listener.borrow().as_ref() {
                l();
            }
        }
    }

    impl SmoothScroll for FakeScroll {
        fn advance(&self, time_ms: f64) {
            self.advanced.borrow_mut().push(time_ms);
        }
        fn offset(&self) -> f64 {
            self.offset.get()
        }
        fn jump_to(&self, offset: f64) {
            self.offset.set(offset);
        }
        fn resize(&self) {
            self.resized.set(self.resized.get() + 1);
        }
        fn on_scroll(&self, listener: Box<dyn Fn()>) -> Result<(), AnimationError> {
            if self.fail_listen {
                return Err(AnimationError::CallFailed("lenis.on".to_string()));
            }
            *self.listener.borrow_mut() = Some(listener);
            Ok(())
        }
        fn destroy(&self) {
            self.destroyed.set(true);
            self.listener.borrow_mut().take();
        }
    }

    type Scroller = (Box<dyn Fn() -> f64>, Box<dyn Fn(f64)>);

    #[derive(Default)]
    struct FakeTriggers {
        present: HashSet<String>,
        live: RefCell<HashMap<TweenId, AnimationBinding>>,
        next_id: Cell<u32>,
        updates: Cell<usize>,
        refreshes: Cell<usize>,
        scroller: RefCell<Option<Scroller>>,
        refresh_listener: RefCell<Option<Box<dyn Fn()>>>,
        shut_down: Cell<bool>,
    }

    impl FakeTriggers {
        fn with_elements(selectors: &[&str]) -> Self {
            Self {
                present: selectors.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }

        fn live_kinds(&self, kind: BindingKind) -> usize {
            self.live.borrow().values().filter(|b| b.kind == kind).count()
        }

        fn emit_refresh(&self) {
            if let Some(l) = self.refresh_listener.borrow().as_ref() {
                l();
            }
        }
    }

    impl TriggerEngine for FakeTriggers {
        fn set_scroller(
            &self,
            read: Box<dyn Fn() -> f64>,
            write: Box<dyn Fn(f64)>,
        ) -> Result<(), AnimationError> {
            *self.scroller.borrow_mut() = Some((read, write));
            Ok(())
        }
        fn on_refresh(&self, listener: Box<dyn Fn()>) -> Result<(), AnimationError> {
            *self.refresh_listener.borrow_mut() = Some(listener);
            Ok(())
        }
        fn update(&self) {
            self.updates.set(self.updates.get() + 1);
        }
        fn refresh(&self) {
            self.refreshes.set(self.refreshes.get() + 1);
        }
        fn bind(&self, binding: &AnimationBinding) -> Result<TweenId, AnimationError> {
            for element in binding.required_elements() {
                if !self.present.contains(element.selector()) {
                    return Err(AnimationError::MissingElement(element.selector().to_string()));
                }
            }
            let id = TweenId(self.next_id.get());
            self.next_id.set(id.0 + 1);
            self.live.borrow_mut().insert(id, binding.clone());
            Ok(id)
        }
        fn release(&self, id: TweenId) {
            self.live.borrow_mut().remove(&id);
        }
        fn shutdown(&self) {
            self.shut_down.set(true);
            self.live.borrow_mut().clear();
            self.scroller.borrow_mut().take();
            self.refresh_listener.borrow_mut().take();
        }
    }

    #[derive(Default)]
    struct FakeFrames {
        callback: RefCell<Option<Box<dyn Fn(f64)>>>,
        stopped: Cell<bool>,
    }

    impl FakeFrames {
        fn tick(&self, time: f64) {
            if let Some(cb) = self.callback.borrow().as_ref() {
                cb(time);
            }
        }
    }

    impl FrameScheduler for FakeFrames {
        fn start(&self, on_frame: Box<dyn Fn(f64)>) -> Result<(), AnimationError> {
            *self.callback.borrow_mut() = Some(on_frame);
            Ok(())
        }
        fn stop(&self) {
            self.stopped.set(true);
            self.callback.borrow_mut().take();
        }
    }

    struct Rig {
        scroll: Rc<FakeScroll>,
        triggers: Rc<FakeTriggers>,
        frames: Rc<FakeFrames>,
    }

    impl Rig {
        fn new(triggers: FakeTriggers) -> Self {
            Self {
                scroll: Rc::new(FakeScroll::default()),
                triggers: Rc::new(triggers),
                frames: Rc::new(FakeFrames::default()),
            }
        }

        fn engines(&self) -> Engines {
            Engines {
                scroll: self.scroll.clone(),
                triggers: self.triggers.clone(),
                frames: self.frames.clone(),
            }
        }
    }

    const HOME_ELEMENTS: &[&str] = &[
        "#home",
        "#hero-title",
        "#hero-subtitle",
        "#hero-description",
        "#hero-cta",
        "#trusted-by",
    ];

    fn home_regions() -> Vec<Region> {
        vec![
            Region::Section { anchor: "home" },
            Region::Hero { anchor: "home" },
            Region::Section {
                anchor: "trusted-by",
            },
        ]
    }

    impl Orchestrator {
        fn is_active(&self) -> bool {
            matches!(self, Self::Active(_))
        }

        fn binding_count(&self) -> usize {
            match self {
                Self::Active(active) => active.bound.len(),
                Self::Disabled => 0,
            }
        }
    }

    // ------------------------------------------------------------------------
    // Tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_unavailable_engines_disable() {
        let mut orch = Orchestrator::initialize(
            Err(AnimationError::EngineUnavailable("gsap")),
            ViewportClass::Desktop,
        );
        assert!(!orch.is_active());
        orch.regions_changed(&home_regions());
        orch.viewport_changed(ViewportClass::Mobile);
        assert_eq!(orch.binding_count(), 0);
        assert!(!orch.scroll_to_top());
        orch.teardown();
    }

    #[test]
    fn test_wiring_failure_disables_and_cleans_up() {
        let rig = Rig {
            scroll: Rc::new(FakeScroll {
                fail_listen: true,
                ..FakeScroll::default()
            }),
            triggers: Rc::new(FakeTriggers::default()),
            frames: Rc::new(FakeFrames::default()),
        };
        let orch = Orchestrator::initialize(Ok(rig.engines()), ViewportClass::Desktop);
        assert!(!orch.is_active());
        assert!(rig.triggers.shut_down.get());
        assert!(rig.scroll.destroyed.get());
        assert!(rig.frames.stopped.get());
    }

    #[test]
    fn test_frame_loop_advances_smooth_scroll() {
        let rig = Rig::new(FakeTriggers::default());
        let _orch = Orchestrator::initialize(Ok(rig.engines()), ViewportClass::Desktop);
        rig.frames.tick(16.0);
        rig.frames.tick(32.5);
        assert_eq!(*rig.scroll.advanced.borrow(), vec![16.0, 32.5]);
    }

    #[test]
    fn test_trigger_engine_reads_smooth_scroll_offset() {
        let rig = Rig::new(FakeTriggers::default());
        let _orch = Orchestrator::initialize(Ok(rig.engines()), ViewportClass::Desktop);

        rig.scroll.emit_scroll(420.0);
        assert_eq!(rig.triggers.updates.get(), 1);

        let scroller = rig.triggers.scroller.borrow();
        let (read, write) = scroller.as_ref().unwrap();
        assert_eq!(read(), 420.0);
        write(10.0);
        assert_eq!(rig.scroll.offset(), 10.0);
    }

    #[test]
    fn test_refresh_resizes_smooth_scroll() {
        let rig = Rig::new(FakeTriggers::default());
        let _orch = Orchestrator::initialize(Ok(rig.engines()), ViewportClass::Desktop);
        assert_eq!(rig.triggers.refreshes.get(), 1);
        rig.triggers.emit_refresh();
        rig.triggers.emit_refresh();
        assert_eq!(rig.scroll.resized.get(), 2);
    }

    #[test]
    fn test_regions_bind_sections_hero_and_skip_missing() {
        // #trusted-by is reported but not in the document.
        let rig = Rig::new(FakeTriggers::with_elements(&HOME_ELEMENTS[..5]));
        let mut orch = Orchestrator::initialize(Ok(rig.engines()), ViewportClass::Desktop);
        orch.regions_changed(&home_regions());

        assert_eq!(rig.triggers.live_kinds(BindingKind::Section), 1);
        assert_eq!(rig.triggers.live_kinds(BindingKind::Intro), 4);
        assert_eq!(rig.triggers.live_kinds(BindingKind::Parallax), 2);
        assert_eq!(orch.binding_count(), 7);
    }

    #[test]
    fn test_rebind_releases_previous_render() {
        let mut triggers = FakeTriggers::with_elements(HOME_ELEMENTS);
        triggers.present.insert("#services".to_string());
        for i in 0..6 {
            let card = binding::ElementRef::card("services", "service", i);
            triggers.present.insert(card.selector().to_string());
        }
        let rig = Rig::new(triggers);
        let mut orch = Orchestrator::initialize(Ok(rig.engines()), ViewportClass::Desktop);

        orch.regions_changed(&home_regions());
        assert_eq!(orch.binding_count(), 8);

        orch.regions_changed(&[
            Region::Section { anchor: "services" },
            Region::Cards {
                scope: "services",
                group: "service",
                count: 6,
            },
        ]);
        assert_eq!(orch.binding_count(), 7);
        assert_eq!(rig.triggers.live.borrow().len(), 7);
        assert!(rig
            .triggers
            .live
            .borrow()
            .values()
            .all(|b| b.target.selector().starts_with("#services")));
    }

    #[test]
    fn test_viewport_change_rebinds_parallax_only() {
        let rig = Rig::new(FakeTriggers::with_elements(HOME_ELEMENTS));
        let mut orch = Orchestrator::initialize(Ok(rig.engines()), ViewportClass::Desktop);
        orch.regions_changed(&home_regions());
        let intro_before: HashSet<_> = rig
            .triggers
            .live
            .borrow()
            .iter()
            .filter(|(_, b)| b.kind == BindingKind::Intro)
            .map(|(id, _)| *id)
            .collect();

        orch.viewport_changed(ViewportClass::Mobile);

        let live = rig.triggers.live.borrow();
        let parallax: Vec<_> = live
            .values()
            .filter(|b| b.kind == BindingKind::Parallax)
            .collect();
        assert_eq!(parallax.len(), 2);
        assert!(parallax.iter().all(|b| b.to.y_percent.unwrap().abs() <= 10.0));
        let intro_after: HashSet<_> = live
            .iter()
            .filter(|(_, b)| b.kind == BindingKind::Intro)
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(intro_before, intro_after);
    }

    #[test]
    fn test_same_viewport_class_is_noop() {
        let rig = Rig::new(FakeTriggers::with_elements(HOME_ELEMENTS));
        let mut orch = Orchestrator::initialize(Ok(rig.engines()), ViewportClass::Desktop);
        orch.regions_changed(&home_regions());
        let refreshes = rig.triggers.refreshes.get();
        orch.viewport_changed(ViewportClass::Desktop);
        assert_eq!(rig.triggers.refreshes.get(), refreshes);
    }

    #[test]
    fn test_release_bindings_frees_every_trigger_and_keeps_engines() {
        let rig = Rig::new(FakeTriggers::with_elements(HOME_ELEMENTS));
        let mut orch = Orchestrator::initialize(Ok(rig.engines()), ViewportClass::Desktop);
        orch.regions_changed(&home_regions());
        assert_eq!(orch.binding_count(), 8);

        orch.release_bindings();

        assert_eq!(orch.binding_count(), 0);
        assert!(rig.triggers.live.borrow().is_empty());
        assert!(orch.is_active());
        assert!(!rig.frames.stopped.get());

        // Scrolling to the top afterwards touches no released trigger.
        assert!(orch.scroll_to_top());
        assert!(rig.triggers.live.borrow().is_empty());

        // The released hero is forgotten, so a width change binds nothing.
        orch.viewport_changed(ViewportClass::Mobile);
        assert!(rig.triggers.live.borrow().is_empty());
    }

    #[test]
    fn test_empty_region_report_releases_every_binding() {
        let rig = Rig::new(FakeTriggers::with_elements(HOME_ELEMENTS));
        let mut orch = Orchestrator::initialize(Ok(rig.engines()), ViewportClass::Desktop);
        orch.regions_changed(&home_regions());
        assert!(orch.binding_count() > 0);

        orch.regions_changed(&[]);

        assert_eq!(orch.binding_count(), 0);
        assert!(rig.triggers.live.borrow().is_empty());
    }

    #[test]
    fn test_teardown_releases_everything() {
        let rig = Rig::new(FakeTriggers::with_elements(HOME_ELEMENTS));
        let mut orch = Orchestrator::initialize(Ok(rig.engines()), ViewportClass::Desktop);
        orch.regions_changed(&home_regions());
        assert!(orch.binding_count() > 0);

        orch.teardown();

        assert!(!orch.is_active());
        assert!(rig.triggers.live.borrow().is_empty());
        assert!(rig.triggers.shut_down.get());
        assert!(rig.frames.stopped.get());
        assert!(rig.scroll.destroyed.get());

        // Frames after teardown do nothing.
        rig.frames.tick(100.0);
        assert!(rig.scroll.advanced.borrow().is_empty());

        // Second teardown is harmless.
        orch.teardown();
    }

    #[test]
    fn test_scroll_to_top_uses_smooth_scroll() {
        let rig = Rig::new(FakeTriggers::default());
        let orch = Orchestrator::initialize(Ok(rig.engines()), ViewportClass::Desktop);
        rig.scroll.emit_scroll(900.0);
        assert!(orch.scroll_to_top());
        assert_eq!(rig.scroll.offset(), 0.0);
    }
}
