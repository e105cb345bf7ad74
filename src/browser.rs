//! Clock and frame scheduler backed by the browser window.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use stopwatch_core::{Clock, FrameHandle, FrameScheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// `Date.now()` in whole milliseconds.
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now().max(0.0) as u64
    }
}

/// `requestAnimationFrame` scheduler.
///
/// Handles are issued here, not taken from the browser, so each request is
/// distinct and the callback can report exactly which frame fired. `live`
/// maps outstanding handles to browser request ids for cancellation.
pub struct AnimationFrameScheduler {
    window: Window,
    on_frame: Rc<dyn Fn(FrameHandle)>,
    next_id: i32,
    live: Rc<RefCell<HashMap<FrameHandle, i32>>>,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window, on_frame: impl Fn(FrameHandle) + 'static) -> Self {
        Self {
            window,
            on_frame: Rc::new(on_frame),
            next_id: 0,
            live: Rc::new(RefCell::new(HashMap::new())),
        }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id = self.next_id.wrapping_add(1);
        let handle = FrameHandle(self.next_id);

        let on_frame = Rc::clone(&self.on_frame);
        let live = Rc::clone(&self.live);
        // Freed by wasm-bindgen after the single invocation.
        let callback = Closure::once_into_js(move |_timestamp: f64| {
            live.borrow_mut().remove(&handle);
            on_frame(handle);
        });

        match self.window.request_animation_frame(callback.unchecked_ref()) {
            Ok(id) => {
                self.live.borrow_mut().insert(handle, id);
            }
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let id = self.live.borrow_mut().remove(&handle);
        if let Some(id) = id {
            self.window.cancel_animation_frame(id).ok();
        }
    }
}
