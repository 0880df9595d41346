// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` tick source.
//!
//! [`RafLoop`] calls back once per display refresh with a [`FrameTick`]. The
//! callback's [`DOMHighResTimeStamp`][mdn] (milliseconds) becomes a
//! microsecond [`HostTime`].
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/DOMHighResTimeStamp

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use carousel_core::time::HostTime;
use carousel_core::timing::FrameTick;

// Direct global bindings, so no Window lookup happens per frame.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// A `requestAnimationFrame` loop that emits [`FrameTick`]s.
///
/// Create with [`RafLoop::new`], then call [`start`](Self::start). The loop
/// re-registers itself every frame until [`stop`](Self::stop) is called or
/// the `RafLoop` is dropped.
pub struct RafLoop {
    inner: Rc<RafInner>,
}

type RafClosure = Closure<dyn FnMut(f64)>;

struct RafInner {
    /// The JS closure registered with `requestAnimationFrame`. Created once,
    /// on first start, and reused by every later registration.
    closure: RefCell<Option<RafClosure>>,

    callback: RefCell<Box<dyn FnMut(FrameTick)>>,

    /// Becomes `FrameTick::frame_index`.
    frame_counter: Cell<u64>,

    running: Cell<bool>,

    /// ID of the pending frame request, if any.
    raf_id: Cell<Option<i32>>,
}

impl RafInner {
    fn request(&self) {
        if let Some(ref closure) = *self.closure.borrow() {
            let id = request_animation_frame(closure.as_ref().unchecked_ref());
            self.raf_id.set(Some(id));
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            cancel_animation_frame(id);
        }
    }
}

impl RafLoop {
    /// Creates a loop that is **not yet running**.
    pub fn new(callback: impl FnMut(FrameTick) + 'static) -> Self {
        Self {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                frame_counter: Cell::new(0),
                running: Cell::new(false),
                raf_id: Cell::new(None),
            }),
        }
    }

    /// Starts the loop.
    ///
    /// Any pending frame request is cancelled first, so calling `start` on a
    /// running loop never leaves two requests outstanding.
    pub fn start(&self) {
        self.inner.cancel();
        self.inner.running.set(true);

        if self.inner.closure.borrow().is_none() {
            let inner = Rc::downgrade(&self.inner);
            let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
                let Some(inner) = inner.upgrade() else {
                    return;
                };
                inner.raf_id.set(None);
                if !inner.running.get() {
                    return;
                }

                let frame_index = inner.frame_counter.get();
                inner.frame_counter.set(frame_index + 1);
                let tick = FrameTick::new(HostTime::from_millis_f64(timestamp_ms), frame_index);

                // Scoped so the borrow ends before re-registering.
                inner.callback.borrow_mut()(tick);

                if inner.running.get() && inner.raf_id.get().is_none() {
                    inner.request();
                }
            }) as Box<dyn FnMut(f64)>);
            *self.inner.closure.borrow_mut() = Some(closure);
        }

        self.inner.request();
    }

    /// Stops the loop and cancels the pending frame. Can be started again.
    pub fn stop(&self) {
        self.inner.running.set(false);
        self.inner.cancel();
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        self.inner.closure.borrow_mut().take();
    }
}

impl std::fmt::Debug for RafLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RafLoop")
            .field("running", &self.inner.running.get())
            .field("frame_counter", &self.inner.frame_counter.get())
            .finish()
    }
}
