use js_sys::Function;
use wayfinder_core::Scheduler;
use web_sys::Window;

use crate::dom::js_error_message;

/// `setTimeout`/`clearTimeout` scheduler that always invokes the same callback.
pub struct TimeoutScheduler {
    window: Window,
    callback: Function,
}

impl TimeoutScheduler {
    #[must_use]
    pub const fn new(window: Window, callback: Function) -> Self {
        Self { window, callback }
    }
}

impl Scheduler for TimeoutScheduler {
    /// `None` when the browser refused to arm the timer.
    type Handle = Option<i32>;

    fn schedule(&self, delay_ms: u32) -> Self::Handle {
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&self.callback, delay)
        {
            Ok(id) => Some(id),
            Err(err) => {
                log::warn!("setTimeout failed: {}", js_error_message(&err));
                None
            }
        }
    }

    fn cancel(&self, handle: Self::Handle) {
        if let Some(id) = handle {
            self.window.clear_timeout_with_handle(id);
        }
    }
}
