//! Per-terminal session state and the line dispatcher.

use system_shell_contract::{
    prompt, DispatchOutcome, EntrySeverity, HistoryEffect, TerminalEntry, DEFAULT_USER,
};

use crate::{
    canned,
    cowsay::cowsay,
    parse::parse_line,
    registry::{BuiltinCommand, RenderContext},
    stats::SystemStats,
};

/// Input recorded for the seeded boot banner entry.
pub const BOOT_ENTRY_INPUT: &str = "system_boot";

/// One terminal's scrollback, user, and display counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSession {
    history: Vec<TerminalEntry>,
    current_user: String,
    stats: SystemStats,
    fortune_cursor: usize,
}

impl TerminalSession {
    /// Creates a session started at `now_ms`, using the start time as the fortune seed.
    pub fn new(now_ms: u64) -> Self {
        Self::with_fortune_seed(now_ms, now_ms)
    }

    /// Creates a session with an explicit fortune rotation seed.
    pub fn with_fortune_seed(now_ms: u64, seed: u64) -> Self {
        let boot = TerminalEntry {
            input: BOOT_ENTRY_INPUT.to_string(),
            output: canned::lines(canned::BOOT_BANNER),
            timestamp_ms: now_ms,
            severity: EntrySeverity::Success,
        };
        Self {
            history: vec![boot],
            current_user: DEFAULT_USER.to_string(),
            stats: SystemStats::new(now_ms),
            fortune_cursor: (seed % canned::FORTUNES.len() as u64) as usize,
        }
    }

    /// Scrollback in submission order.
    pub fn history(&self) -> &[TerminalEntry] {
        &self.history
    }

    /// Name shown in the prompt.
    pub fn current_user(&self) -> &str {
        &self.current_user
    }

    /// Display counters.
    pub fn stats(&self) -> &SystemStats {
        &self.stats
    }

    /// Prompt for the current user.
    pub fn prompt(&self) -> String {
        prompt(&self.current_user)
    }

    /// Recomputes uptime; returns `true` when it changed.
    pub fn refresh_stats(&mut self, now_ms: u64) -> bool {
        self.stats.refresh(now_ms)
    }

    /// Runs one input line and records the exchange.
    ///
    /// Never fails: unrecognized input produces an error-tagged "command not found" entry.
    /// `clear` is the only input that does not append.
    pub fn dispatch(&mut self, input: &str, now_ms: u64) -> DispatchOutcome {
        let parsed = parse_line(input);

        let (output, severity, mode) =
            if let Some(command) = BuiltinCommand::lookup(&parsed.lookup_key()) {
                let fortune = self.next_fortune_if(command == BuiltinCommand::Fortune);
                let context = RenderContext {
                    stats: &self.stats,
                    fortune,
                };
                (command.render(context), EntrySeverity::Success, command.mode())
            } else {
                match parsed.command() {
                    "clear" => {
                        self.history.clear();
                        return DispatchOutcome {
                            history: HistoryEffect::Cleared,
                            mode: None,
                        };
                    }
                    "login" => match parsed.rest() {
                        "" => (canned::lines(canned::LOGIN_USAGE), EntrySeverity::Error, None),
                        user => {
                            self.current_user = user.to_string();
                            (canned::login_success(user), EntrySeverity::Success, None)
                        }
                    },
                    "cowsay" => (cowsay(parsed.rest()), EntrySeverity::Success, None),
                    "" => (vec![String::new()], EntrySeverity::Info, None),
                    _ => (canned::not_found(parsed.trimmed()), EntrySeverity::Error, None),
                }
            };

        let entry = TerminalEntry {
            input: input.to_string(),
            output,
            timestamp_ms: now_ms,
            severity,
        };
        self.history.push(entry.clone());
        DispatchOutcome {
            history: HistoryEffect::Appended { entry },
            mode,
        }
    }

    fn next_fortune_if(&mut self, advance: bool) -> &'static str {
        if !advance {
            return "";
        }
        let quote = canned::FORTUNES[self.fortune_cursor];
        self.fortune_cursor = (self.fortune_cursor + 1) % canned::FORTUNES.len();
        quote
    }
}
