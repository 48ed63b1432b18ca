//! Host-neutral platform helpers shared by the desktop runtime and panels.
//!
//! Browser builds read the clock through `js_sys`; native builds (tests, tooling) fall back to
//! `std::time` so the same code paths can be exercised off-wasm.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod time;

pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now, ClockSnapshot};
