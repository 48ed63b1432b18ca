//! Cosmetic display counters shown by `system`, `ps aux`, `top`, and the status bar.

/// How often the terminal panel recomputes uptime.
pub const UPTIME_REFRESH_INTERVAL_MS: u64 = 60_000;

const MS_PER_MINUTE: u64 = 60 * 1_000;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Derived display counters for one terminal session. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemStats {
    started_at_ms: u64,
    uptime: String,
    projects: u32,
    lines_of_code: &'static str,
    coffee_consumed: &'static str,
}

impl SystemStats {
    /// Counters for a session started at `started_at_ms`.
    pub fn new(started_at_ms: u64) -> Self {
        Self {
            started_at_ms,
            uptime: format_uptime(0),
            projects: 8,
            lines_of_code: "50K+",
            coffee_consumed: "∞",
        }
    }

    /// Recomputes uptime; returns `true` when the rendered value changed.
    pub fn refresh(&mut self, now_ms: u64) -> bool {
        let uptime = format_uptime(now_ms.saturating_sub(self.started_at_ms));
        if uptime == self.uptime {
            return false;
        }
        self.uptime = uptime;
        true
    }

    /// Uptime as last computed by [`SystemStats::refresh`].
    pub fn uptime(&self) -> &str {
        &self.uptime
    }

    /// Active project count.
    pub fn projects(&self) -> u32 {
        self.projects
    }

    /// Lines-of-code label.
    pub fn lines_of_code(&self) -> &'static str {
        self.lines_of_code
    }

    /// Coffee label.
    pub fn coffee_consumed(&self) -> &'static str {
        self.coffee_consumed
    }
}

/// Formats an elapsed duration as `"{d}d {h}h {m}m"`.
pub fn format_uptime(elapsed_ms: u64) -> String {
    let days = elapsed_ms / MS_PER_DAY;
    let hours = (elapsed_ms % MS_PER_DAY) / MS_PER_HOUR;
    let minutes = (elapsed_ms % MS_PER_HOUR) / MS_PER_MINUTE;
    format!("{days}d {hours}h {minutes}m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_days_hours_minutes() {
        assert_eq!(format_uptime(0), "0d 0h 0m");
        assert_eq!(format_uptime(59_999), "0d 0h 0m");
        assert_eq!(format_uptime(MS_PER_DAY + 2 * MS_PER_HOUR + 3 * MS_PER_MINUTE), "1d 2h 3m");
    }

    #[test]
    fn refresh_reports_changes_only() {
        let mut stats = SystemStats::new(1_000);
        assert!(!stats.refresh(1_000 + 30_000));
        assert!(stats.refresh(1_000 + 5 * MS_PER_MINUTE));
        assert_eq!(stats.uptime(), "0d 0h 5m");
        assert!(!stats.refresh(1_000 + 5 * MS_PER_MINUTE + 10));
    }

    #[test]
    fn clock_skew_before_start_reads_as_zero() {
        let mut stats = SystemStats::new(10_000);
        stats.refresh(0);
        assert_eq!(stats.uptime(), "0d 0h 0m");
    }
}
