//! Deadline tracking for time-boxed visual modes.

use system_shell_contract::{ModeActivation, VisualMode};

/// Tracks the currently active visual mode and when it expires.
///
/// A repeated activation replaces the deadline with `now + duration`, so the mode stays on for
/// a full duration after the latest activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualModeState {
    active: Option<(VisualMode, u64)>,
}

impl VisualModeState {
    /// Enters `activation.mode` until `now_ms + activation.duration_ms`.
    pub fn activate(&mut self, activation: ModeActivation, now_ms: u64) {
        let deadline = now_ms.saturating_add(activation.duration_ms);
        self.active = Some((activation.mode, deadline));
    }

    /// Whether `mode` is active at `now_ms`.
    pub fn is_active(&self, mode: VisualMode, now_ms: u64) -> bool {
        matches!(self.active, Some((active, deadline)) if active == mode && now_ms < deadline)
    }

    /// Milliseconds until the active mode expires.
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.active
            .map(|(_, deadline)| deadline.saturating_sub(now_ms))
            .filter(|remaining| *remaining > 0)
    }

    /// Drops the mode once its deadline passed; returns `true` if this call turned it off.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        match self.active {
            Some((_, deadline)) if now_ms >= deadline => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Expiry check for a timer that may fire early.
    ///
    /// Expires the mode when its deadline passed and returns `None`; otherwise returns the
    /// milliseconds still to wait (at least 1) so the caller can check again.
    pub fn settle(&mut self, now_ms: u64) -> Option<u64> {
        if self.active.is_none() || self.expire(now_ms) {
            return None;
        }
        Some(self.remaining_ms(now_ms).unwrap_or(1))
    }

    /// Currently recorded mode, ignoring the deadline.
    pub fn mode(&self) -> Option<VisualMode> {
        self.active.map(|(mode, _)| mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_mode_expires_after_duration() {
        let mut state = VisualModeState::default();
        state.activate(ModeActivation::matrix(), 1_000);

        assert!(state.is_active(VisualMode::Matrix, 1_000));
        assert!(state.is_active(VisualMode::Matrix, 5_999));
        assert!(!state.expire(5_999));
        assert!(state.expire(6_000));
        assert!(!state.is_active(VisualMode::Matrix, 6_000));
        assert_eq!(state.mode(), None);
    }

    #[test]
    fn early_expiry_check_asks_to_wait_again() {
        let mut state = VisualModeState::default();
        state.activate(ModeActivation::matrix(), 1_000);

        assert_eq!(state.settle(5_900), Some(100));
        assert_eq!(state.mode(), Some(VisualMode::Matrix));
        assert_eq!(state.settle(5_999), Some(1));
        assert_eq!(state.settle(6_000), None);
        assert_eq!(state.mode(), None);
        assert_eq!(state.settle(7_000), None);
    }

    #[test]
    fn reactivation_resets_deadline() {
        let mut state = VisualModeState::default();
        state.activate(ModeActivation::matrix(), 0);
        state.activate(ModeActivation::matrix(), 4_000);

        assert!(!state.expire(5_000));
        assert!(state.is_active(VisualMode::Matrix, 8_999));
        assert_eq!(state.remaining_ms(8_000), Some(1_000));
        assert!(state.expire(9_000));
        assert_eq!(state.remaining_ms(9_000), None);
    }
}
