//! Terminal dispatcher engine: an enumerated builtin registry, per-session state, and the
//! deterministic line dispatcher used by the terminal panel.
//!
//! Nothing here touches the browser. Callers pass the current time in, which keeps every
//! dispatch reproducible in tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod canned;
mod cowsay;
mod mode;
mod parse;
mod registry;
mod session;
mod stats;

pub use cowsay::cowsay;
pub use mode::VisualModeState;
pub use parse::{parse_line, ParsedLine};
pub use registry::{BuiltinCommand, RenderContext};
pub use session::{TerminalSession, BOOT_ENTRY_INPUT};
pub use stats::{format_uptime, SystemStats, UPTIME_REFRESH_INTERVAL_MS};
pub use system_shell_contract;
