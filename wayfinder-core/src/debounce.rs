//! Trailing-edge debounce.
//!
//! Every signal cancels the pending timer and arms a new one, so a burst of
//! signals collapses into a single run once the burst has been quiet for the
//! whole window. The host owns the actual timer and reports back through
//! [`Debounce::elapsed`].

/// Timer facility provided by the host (e.g. `setTimeout`/`clearTimeout`).
pub trait Scheduler {
    type Handle;

    /// Arm a timer that fires once after `delay_ms`.
    fn schedule(&self, delay_ms: u32) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

pub struct Debounce<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debounce<S> {
    pub const fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a raw trigger, restarting the quiet window.
    pub fn signal(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.pending = Some(self.scheduler.schedule(self.delay_ms));
    }

    /// Called by the host when the armed timer fires.
    ///
    /// Returns `true` when the debounced action should run. A stale timer
    /// that slipped past cancellation reports `false`.
    pub fn elapsed(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Drop any pending run without executing it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}
