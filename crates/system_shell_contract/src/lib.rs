//! Shared terminal contracts used by the dispatcher engine and the terminal panel UI.
//!
//! This crate is intentionally runtime-agnostic. It defines serializable history entries,
//! severity tags, dispatch outcomes, and visual-mode signals without depending on Leptos,
//! browser APIs, or desktop runtime internals.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};

/// User name a fresh terminal session starts with.
pub const DEFAULT_USER: &str = "guest";

/// Host name rendered in the prompt.
pub const PROMPT_HOST: &str = "exodus-os";

/// Duration of the matrix visual mode once activated.
pub const MATRIX_MODE_DURATION_MS: u64 = 5_000;

/// Severity tag attached to every history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntrySeverity {
    /// Successful lookup or state mutation.
    Success,
    /// Unknown command or usage error.
    Error,
    /// Neutral output such as a blank line.
    Info,
    /// Reserved; no builtin currently produces it.
    Warning,
}

impl EntrySeverity {
    /// Stable CSS-friendly name for the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// One exchange in the terminal scrollback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalEntry {
    /// Raw input line as typed.
    pub input: String,
    /// Output lines produced for the input.
    pub output: Vec<String>,
    /// Unix timestamp in milliseconds when the entry was recorded.
    pub timestamp_ms: u64,
    /// Severity tag used for coloring.
    pub severity: EntrySeverity,
}

/// Visual modes the surrounding UI can be asked to enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualMode {
    /// Falling-digits overlay.
    Matrix,
}

/// Time-boxed request to enter a [`VisualMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeActivation {
    /// Requested mode.
    pub mode: VisualMode,
    /// How long the mode stays active after activation.
    pub duration_ms: u64,
}

impl ModeActivation {
    /// Matrix mode for the standard duration.
    pub const fn matrix() -> Self {
        Self {
            mode: VisualMode::Matrix,
            duration_ms: MATRIX_MODE_DURATION_MS,
        }
    }
}

/// What a dispatch did to the session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum HistoryEffect {
    /// The entry was appended to history.
    Appended {
        /// The appended entry.
        entry: TerminalEntry,
    },
    /// History was emptied and nothing was appended.
    Cleared,
}

/// Result of dispatching one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchOutcome {
    /// History mutation performed by the dispatch.
    pub history: HistoryEffect,
    /// Optional visual-mode side channel.
    pub mode: Option<ModeActivation>,
}

impl DispatchOutcome {
    /// Returns the appended entry, if any.
    pub fn entry(&self) -> Option<&TerminalEntry> {
        match &self.history {
            HistoryEffect::Appended { entry } => Some(entry),
            HistoryEffect::Cleared => None,
        }
    }

    /// Returns the appended output lines, or an empty slice after a clear.
    pub fn output(&self) -> &[String] {
        self.entry().map(|entry| entry.output.as_slice()).unwrap_or(&[])
    }
}

/// Formats the shell prompt for `user`.
pub fn prompt(user: &str) -> String {
    format!("{user}@{PROMPT_HOST}:~$ ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_user_and_host() {
        assert_eq!(prompt("guest"), "guest@exodus-os:~$ ");
        assert_eq!(prompt("alice"), "alice@exodus-os:~$ ");
    }

    #[test]
    fn severity_serializes_kebab_case() {
        let raw = serde_json::to_string(&EntrySeverity::Warning).expect("serialize");
        assert_eq!(raw, "\"warning\"");
        assert_eq!(EntrySeverity::Success.as_str(), "success");
    }

    #[test]
    fn cleared_outcome_has_no_output() {
        let outcome = DispatchOutcome {
            history: HistoryEffect::Cleared,
            mode: None,
        };
        assert!(outcome.entry().is_none());
        assert!(outcome.output().is_empty());
    }

    #[test]
    fn matrix_activation_uses_standard_duration() {
        let activation = ModeActivation::matrix();
        assert_eq!(activation.mode, VisualMode::Matrix);
        assert_eq!(activation.duration_ms, MATRIX_MODE_DURATION_MS);
    }
}
