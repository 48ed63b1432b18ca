//! Time helpers shared across the runtime and panels.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

thread_local! {
    static LAST_TIMESTAMP_MS: Cell<u64> = const { Cell::new(0) };
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns a unix millisecond timestamp that strictly increases between calls.
///
/// Terminal history entries use this so two submissions within one millisecond still order.
pub fn next_monotonic_timestamp_ms() -> u64 {
    let now = unix_time_ms_now();
    LAST_TIMESTAMP_MS.with(|last| {
        let next = now.max(last.get().saturating_add(1));
        last.set(next);
        next
    })
}

/// Wall-clock reading used by the taskbar clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
    /// Second, 0-59.
    pub second: u32,
}

impl ClockSnapshot {
    /// Reads the local clock in the browser, UTC elsewhere.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_unix_ms_utc(unix_time_ms_now())
        }
    }

    /// Splits a unix timestamp into its UTC time of day.
    pub fn from_unix_ms_utc(unix_ms: u64) -> Self {
        let seconds_of_day = (unix_ms / 1_000) % 86_400;
        Self {
            hour: (seconds_of_day / 3_600) as u32,
            minute: ((seconds_of_day % 3_600) / 60) as u32,
            second: (seconds_of_day % 60) as u32,
        }
    }

    /// `HH:MM` label.
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn monotonic_timestamps_strictly_increase() {
        let a = next_monotonic_timestamp_ms();
        let b = next_monotonic_timestamp_ms();
        let c = next_monotonic_timestamp_ms();
        assert!(a < b && b < c);
    }

    #[test]
    fn utc_snapshot_splits_time_of_day() {
        // 2024-01-01T13:05:09Z
        let snapshot = ClockSnapshot::from_unix_ms_utc(1_704_114_309_000);
        assert_eq!(
            snapshot,
            ClockSnapshot {
                hour: 13,
                minute: 5,
                second: 9,
            }
        );
        assert_eq!(snapshot.label(), "13:05");
    }

    #[test]
    fn midnight_pads_label() {
        assert_eq!(ClockSnapshot::from_unix_ms_utc(0).label(), "00:00");
    }
}
