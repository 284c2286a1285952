//! `requestAnimationFrame` loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use super::FrameScheduler;
use crate::core::error::AnimationError;
use crate::utils::dom;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Self-rescheduling animation frame callback.
///
/// The closure re-requests a frame each time it runs. [`stop`](FrameScheduler::stop)
/// cancels the pending frame and drops the closure, which breaks the
/// closure's reference to itself.
#[derive(Default)]
pub struct AnimationFrameLoop {
    closure: Rc<RefCell<Option<FrameClosure>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl AnimationFrameLoop {
    pub fn new() -> Self {
        Self::default()
    }
}

fn request_frame(closure: &FrameClosure) -> Option<i32> {
    dom::window()?
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

impl FrameScheduler for AnimationFrameLoop {
    fn start(&self, on_frame: Box<dyn Fn(f64)>) -> Result<(), AnimationError> {
        self.stop();

        let slot = Rc::clone(&self.closure);
        let pending = Rc::clone(&self.pending);
        let closure = Closure::wrap(Box::new(move |time: f64| {
            on_frame(time);
            let next = slot.borrow().as_ref().and_then(request_frame);
            pending.set(next);
        }) as Box<dyn FnMut(f64)>);

        let first = request_frame(&closure).ok_or(AnimationError::NoWindow)?;
        self.pending.set(Some(first));
        *self.closure.borrow_mut() = Some(closure);
        Ok(())
    }

    fn stop(&self) {
        if let Some(id) = self.pending.take()
            && let Some(window) = dom::window()
        {
            let _ = window.cancel_animation_frame(id);
        }
        self.closure.borrow_mut().take();
    }
}
