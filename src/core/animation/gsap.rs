//! GSAP ScrollTrigger and Lenis engines via JavaScript interop.
//!
//! Both libraries are loaded as page scripts and exposed as the globals
//! `gsap`, `ScrollTrigger` and `Lenis`. They are reached through the
//! Reflect API; a missing global means the script failed to load and
//! [`detect`] reports [`AnimationError::EngineUnavailable`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::Window;

use super::{
    AnimationBinding, AnimationFrameLoop, Engines, SmoothScroll, TriggerEngine, TweenId,
};
use crate::config::smooth_scroll;
use crate::core::error::AnimationError;
use crate::utils::dom;

// ============================================================================
// Interop helpers
// ============================================================================

/// Get a library global from `window`.
fn global(window: &Window, name: &'static str) -> Result<Object, AnimationError> {
    Reflect::get(window, &name.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(AnimationError::EngineUnavailable(name))
}

fn js_error(e: JsValue) -> AnimationError {
    AnimationError::CallFailed(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// Call `target[name](...args)`.
fn call(target: &JsValue, name: &str, args: &[&JsValue]) -> Result<JsValue, AnimationError> {
    let function = Reflect::get(target, &name.into())
        .map_err(js_error)?
        .dyn_into::<Function>()
        .map_err(|_| AnimationError::CallFailed(format!("{} is not a function", name)))?;
    let args: Array = args.iter().copied().collect();
    function.apply(target, &args).map_err(js_error)
}

/// Convert options to a plain JS object.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, AnimationError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| AnimationError::Encode(e.to_string()))
}

/// Find the engine globals and construct the engines.
///
/// Registers the ScrollTrigger plugin and creates the Lenis instance; no
/// animation is bound until the orchestrator is started.
pub fn detect() -> Result<Engines, AnimationError> {
    let window = dom::window().ok_or(AnimationError::NoWindow)?;
    let gsap = global(&window, "gsap")?;
    let scroll_trigger = global(&window, "ScrollTrigger")?;
    let lenis = global(&window, "Lenis")?
        .dyn_into::<Function>()
        .map_err(|_| AnimationError::EngineUnavailable("Lenis"))?;

    let plugin: &JsValue = &scroll_trigger;
    call(&gsap, "registerPlugin", &[plugin])?;

    Ok(Engines {
        scroll: Rc::new(LenisScroll::new(&lenis)?),
        triggers: Rc::new(GsapTriggers::new(gsap, scroll_trigger)),
        frames: Rc::new(AnimationFrameLoop::new()),
    })
}

// ============================================================================
// Lenis
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LenisOptions {
    lerp: f64,
    duration: f64,
    smooth_wheel: bool,
    smooth_touch: bool,
}

#[derive(Serialize)]
struct ScrollToOptions {
    immediate: bool,
}

/// Lenis smooth-scroll instance.
pub struct LenisScroll {
    lenis: JsValue,
    listener: RefCell<Option<Closure<dyn Fn(JsValue)>>>,
}

impl LenisScroll {
    fn new(constructor: &Function) -> Result<Self, AnimationError> {
        let options = to_js(&LenisOptions {
            lerp: smooth_scroll::LERP,
            duration: smooth_scroll::DURATION,
            smooth_wheel: smooth_scroll::SMOOTH_WHEEL,
            smooth_touch: smooth_scroll::SMOOTH_TOUCH,
        })?;
        let lenis = Reflect::construct(constructor, &Array::of1(&options)).map_err(js_error)?;
        Ok(Self {
            lenis,
            listener: RefCell::new(None),
        })
    }
}

impl SmoothScroll for LenisScroll {
    fn advance(&self, time_ms: f64) {
        let _ = call(&self.lenis, "raf", &[&time_ms.into()]);
    }

    fn offset(&self) -> f64 {
        Reflect::get(&self.lenis, &"scroll".into())
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn jump_to(&self, offset: f64) {
        if let Ok(options) = to_js(&ScrollToOptions { immediate: true }) {
            let _ = call(&self.lenis, "scrollTo", &[&offset.into(), &options]);
        }
    }

    fn resize(&self) {
        let _ = call(&self.lenis, "resize", &[]);
    }

    fn on_scroll(&self, listener: Box<dyn Fn()>) -> Result<(), AnimationError> {
        let closure = Closure::wrap(Box::new(move |_event: JsValue| listener()) as Box<dyn Fn(JsValue)>);
        call(&self.lenis, "on", &[&"scroll".into(), closure.as_ref()])?;
        *self.listener.borrow_mut() = Some(closure);
        Ok(())
    }

    fn destroy(&self) {
        let _ = call(&self.lenis, "destroy", &[]);
        self.listener.borrow_mut().take();
    }
}

// ============================================================================
// GSAP ScrollTrigger
// ============================================================================

#[derive(Serialize)]
struct Rect {
    top: f64,
    left: f64,
    width: f64,
    height: f64,
}

/// GSAP tweens driven by ScrollTrigger.
pub struct GsapTriggers {
    gsap: Object,
    scroll_trigger: Object,
    tweens: RefCell<HashMap<TweenId, JsValue>>,
    next_id: Cell<u32>,
    refresh_listener: RefCell<Option<Closure<dyn Fn()>>>,
}

impl GsapTriggers {
    fn new(gsap: Object, scroll_trigger: Object) -> Self {
        Self {
            gsap,
            scroll_trigger,
            tweens: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
            refresh_listener: RefCell::new(None),
        }
    }

    fn kill(tween: &JsValue) {
        if let Ok(trigger) = Reflect::get(tween, &"scrollTrigger".into())
            && trigger.is_object()
        {
            let _ = call(&trigger, "kill", &[]);
        }
        // revert() also restores the inline styles the tween applied.
        if call(tween, "revert", &[]).is_err() {
            let _ = call(tween, "kill", &[]);
        }
    }
}

impl TriggerEngine for GsapTriggers {
    fn set_scroller(
        &self,
        read: Box<dyn Fn() -> f64>,
        write: Box<dyn Fn(f64)>,
    ) -> Result<(), AnimationError> {
        let body: JsValue = dom::document()
            .and_then(|d| d.body())
            .ok_or(AnimationError::NoWindow)?
            .into();

        // Called with no argument to read, with a value to write.
        let scroll_top = Closure::wrap(Box::new(move |value: Option<f64>| match value {
            Some(offset) => {
                write(offset);
                JsValue::UNDEFINED
            }
            None => JsValue::from_f64(read()),
        }) as Box<dyn Fn(Option<f64>) -> JsValue>);

        let bounds = Closure::wrap(Box::new(|| {
            let (width, height) = dom::viewport_size();
            to_js(&Rect {
                top: 0.0,
                left: 0.0,
                width,
                height,
            })
            .unwrap_or(JsValue::NULL)
        }) as Box<dyn Fn() -> JsValue>);

        let proxy = Object::new();
        Reflect::set(&proxy, &"scrollTop".into(), scroll_top.as_ref()).map_err(js_error)?;
        Reflect::set(&proxy, &"getBoundingClientRect".into(), bounds.as_ref())
            .map_err(js_error)?;
        let proxy: JsValue = proxy.into();
        call(&self.scroll_trigger, "scrollerProxy", &[&body, &proxy])?;

        // ScrollTrigger keeps the proxy for the page lifetime. Both closures
        // only hold weak references, so leaking them retains nothing.
        scroll_top.forget();
        bounds.forget();
        Ok(())
    }

    fn on_refresh(&self, listener: Box<dyn Fn()>) -> Result<(), AnimationError> {
        let closure = Closure::wrap(listener);
        call(
            &self.scroll_trigger,
            "addEventListener",
            &[&"refresh".into(), closure.as_ref()],
        )?;
        *self.refresh_listener.borrow_mut() = Some(closure);
        Ok(())
    }

    fn update(&self) {
        let _ = call(&self.scroll_trigger, "update", &[]);
    }

    fn refresh(&self) {
        let _ = call(&self.scroll_trigger, "refresh", &[]);
    }

    fn bind(&self, binding: &AnimationBinding) -> Result<TweenId, AnimationError> {
        let document = dom::document().ok_or(AnimationError::NoWindow)?;
        for element in binding.required_elements() {
            if document.query_selector(element.selector()).ok().flatten().is_none() {
                return Err(AnimationError::MissingElement(element.selector().to_string()));
            }
        }

        let target = JsValue::from_str(binding.target.selector());
        let to = to_js(&binding.vars())?;
        let tween = match &binding.from {
            Some(from) => call(&self.gsap, "fromTo", &[&target, &to_js(from)?, &to])?,
            None => call(&self.gsap, "to", &[&target, &to])?,
        };

        let id = TweenId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        self.tweens.borrow_mut().insert(id, tween);
        Ok(id)
    }

    fn release(&self, id: TweenId) {
        let tween = self.tweens.borrow_mut().remove(&id);
        if let Some(tween) = tween {
            Self::kill(&tween);
        }
    }

    fn shutdown(&self) {
        let tweens: Vec<_> = self.tweens.borrow_mut().drain().map(|(_, t)| t).collect();
        for tween in &tweens {
            Self::kill(tween);
        }
        if let Some(closure) = self.refresh_listener.borrow_mut().take() {
            let _ = call(
                &self.scroll_trigger,
                "removeEventListener",
                &[&"refresh".into(), closure.as_ref()],
            );
        }
    }
}
