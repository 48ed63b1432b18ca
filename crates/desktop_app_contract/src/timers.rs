//! Owner-scoped cosmetic timers.
//!
//! Both timer kinds register an `on_cleanup` hook with the reactive owner that created them, so
//! a panel's clocks and counters stop when the panel unmounts.

use std::time::Duration;

use leptos::{
    leptos_dom::helpers::{IntervalHandle, TimeoutHandle},
    logging, on_cleanup, set_interval_with_handle, set_timeout_with_handle, store_value,
    StoredValue,
};

/// Repeating callback with explicit start/stop.
#[derive(Clone, Copy)]
pub struct Ticker {
    handle: StoredValue<Option<IntervalHandle>>,
}

impl Ticker {
    /// Starts calling `tick` every `period` until stopped or the owner is cleaned up.
    pub fn start(period: Duration, tick: impl Fn() + 'static) -> Self {
        let handle = store_value(None);
        match set_interval_with_handle(tick, period) {
            Ok(interval) => handle.set_value(Some(interval)),
            Err(err) => logging::warn!("ticker failed to start: {err:?}"),
        }
        let ticker = Self { handle };
        on_cleanup(move || ticker.stop());
        ticker
    }

    /// Stops the ticker. Calling it again is a no-op.
    pub fn stop(&self) {
        if let Some(Some(interval)) = self.handle.try_update_value(Option::take) {
            interval.clear();
        }
    }
}

/// One-shot callback that can be replaced or cancelled before it fires.
#[derive(Clone, Copy)]
pub struct Timeout {
    handle: StoredValue<Option<TimeoutHandle>>,
}

impl Timeout {
    /// Creates an idle timeout slot bound to the current owner.
    pub fn new() -> Self {
        let timeout = Self {
            handle: store_value(None),
        };
        on_cleanup(move || timeout.cancel());
        timeout
    }

    /// Schedules `callback` after `delay`, cancelling any pending callback first.
    pub fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) {
        self.cancel();
        match set_timeout_with_handle(callback, delay) {
            Ok(handle) => self.handle.set_value(Some(handle)),
            Err(err) => logging::warn!("timeout failed to schedule: {err:?}"),
        }
    }

    /// Cancels the pending callback, if any.
    pub fn cancel(&self) {
        if let Some(Some(handle)) = self.handle.try_update_value(Option::take) {
            handle.clear();
        }
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use leptos::create_runtime;

    use super::*;

    #[test]
    fn stopping_twice_is_a_noop() {
        let runtime = create_runtime();
        let ticker = Ticker {
            handle: store_value(None::<IntervalHandle>),
        };
        ticker.stop();
        ticker.stop();
        assert!(ticker.handle.with_value(Option::is_none));
        runtime.dispose();
    }

    #[test]
    fn cancelling_idle_timeout_leaves_slot_empty() {
        let runtime = create_runtime();
        let timeout = Timeout::new();
        timeout.cancel();
        assert!(timeout.handle.with_value(Option::<TimeoutHandle>::is_none));
        runtime.dispose();
    }
}
