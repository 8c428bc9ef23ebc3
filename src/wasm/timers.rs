use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;

use crate::schedule::{IntervalId, Millis, Scheduler};

/// [`Scheduler`] backed by `setTimeout` / `setInterval`.
pub struct WindowScheduler {
    window: Window,
    // Interval closures must outlive their JS timer, so they are held here
    // until cancelled. One-shot closures free themselves after running.
    intervals: RefCell<HashMap<i32, Closure<dyn FnMut()>>>,
}

impl WindowScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            intervals: RefCell::new(HashMap::new()),
        }
    }
}

/// Browser timers take an `i32`; longer delays saturate instead of wrapping
/// negative, which would fire immediately.
fn clamp(ms: Millis) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

impl Scheduler for WindowScheduler {
    fn once(&self, delay: Millis, task: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || task());
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), clamp(delay))
        {
            log::warn!("setTimeout failed: {e:?}");
        }
    }

    fn every(&self, period: Millis, task: Box<dyn FnMut()>) -> IntervalId {
        let closure = Closure::wrap(task);
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                clamp(period),
            ) {
            Ok(handle) => {
                self.intervals.borrow_mut().insert(handle, closure);
                IntervalId(handle)
            }
            Err(e) => {
                log::warn!("setInterval failed: {e:?}");
                // Browsers never hand out 0, so cancelling it is a no-op.
                IntervalId(0)
            }
        }
    }

    fn cancel(&self, id: IntervalId) {
        self.window.clear_interval_with_handle(id.0);
        self.intervals.borrow_mut().remove(&id.0);
    }
}
