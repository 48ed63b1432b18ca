//! Terminal panel UI backed by a [`system_shell::TerminalSession`].
//!
//! The session owns dispatch and scrollback; this component renders it, feeds it submitted lines,
//! keeps its uptime counter fresh, and shows the matrix overlay while the mode is active.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use desktop_app_contract::{panel_primary_input_dom_id, PanelMountContext, Ticker, Timeout};
use leptos::*;
use platform_host::{next_monotonic_timestamp_ms, unix_time_ms_now};
use system_shell::{
    system_shell_contract::{HistoryEffect, TerminalEntry, VisualMode},
    TerminalSession, VisualModeState, BOOT_ENTRY_INPUT, UPTIME_REFRESH_INTERVAL_MS,
};

const MATRIX_COLUMNS: usize = 24;
const MATRIX_GLYPHS: &[char] = &['0', '1', 'ア', 'カ', 'サ', 'タ', 'ナ', 'ハ', 'マ', 'ヤ', 'ラ', 'ワ'];

/// One rendered line of an entry: CSS class and text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EntryLine {
    class: &'static str,
    text: String,
}

/// Lines for a history entry: the echoed prompt and input, then output colored by severity.
///
/// The boot banner entry has no prompt line.
fn entry_lines(entry: &TerminalEntry, prompt: &str) -> Vec<EntryLine> {
    let mut lines = Vec::with_capacity(entry.output.len() + 1);
    if entry.input != BOOT_ENTRY_INPUT {
        lines.push(EntryLine {
            class: "terminal-line terminal-command",
            text: format!("{prompt}{}", entry.input),
        });
    }
    let class = match entry.severity.as_str() {
        "success" => "terminal-line terminal-success",
        "error" => "terminal-line terminal-error",
        "warning" => "terminal-line terminal-warning",
        _ => "terminal-line terminal-info",
    };
    lines.extend(entry.output.iter().map(|text| EntryLine {
        class,
        text: text.clone(),
    }));
    lines
}

fn submittable(input: &str) -> Option<&str> {
    (!input.trim().is_empty()).then_some(input)
}

/// A column of rain glyphs; deterministic per column so the overlay is stable across renders.
fn matrix_column(column: usize) -> String {
    (0..MATRIX_COLUMNS)
        .map(|row| MATRIX_GLYPHS[(column * 7 + row * 3) % MATRIX_GLYPHS.len()])
        .collect()
}

/// Schedules the matrix expiry check, rescheduling while the deadline has not passed yet.
fn schedule_matrix_expiry(
    visual_mode: RwSignal<VisualModeState>,
    timeout: Timeout,
    delay_ms: u64,
) {
    timeout.schedule(Duration::from_millis(delay_ms), move || {
        let wait = visual_mode
            .try_update(|mode| mode.settle(next_monotonic_timestamp_ms()))
            .flatten();
        if let Some(wait) = wait {
            schedule_matrix_expiry(visual_mode, timeout, wait);
        }
    });
}

#[component]
/// Terminal window contents.
pub fn TerminalApp(
    /// Mount context from the desktop runtime.
    context: PanelMountContext,
) -> impl IntoView {
    let input_id = panel_primary_input_dom_id(&context.panel_id);
    let session = create_rw_signal(TerminalSession::new(unix_time_ms_now()));
    let input = create_rw_signal(String::new());
    let visual_mode = create_rw_signal(VisualModeState::default());
    let matrix_expiry = Timeout::new();
    let screen_ref = create_node_ref::<html::Div>();

    Ticker::start(Duration::from_millis(UPTIME_REFRESH_INTERVAL_MS), move || {
        let now = unix_time_ms_now();
        session.update(|session| {
            session.refresh_stats(now);
        });
    });

    create_effect(move |_| {
        session.with(|_| ());
        if let Some(screen) = screen_ref.get() {
            screen.set_scroll_top(screen.scroll_height());
        }
    });

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let line = input.get_untracked();
        let Some(line) = submittable(&line) else {
            return;
        };
        let now = next_monotonic_timestamp_ms();
        let Some(outcome) = session.try_update(|session| session.dispatch(line, now)) else {
            return;
        };
        input.set(String::new());

        if let HistoryEffect::Cleared = outcome.history {
            logging::log!("terminal history cleared");
        }
        if let Some(activation) = outcome.mode {
            visual_mode.update(|mode| mode.activate(activation, now));
            let delay = visual_mode.with_untracked(|mode| mode.remaining_ms(now));
            if let Some(delay) = delay {
                schedule_matrix_expiry(visual_mode, matrix_expiry, delay);
            }
        }
    };

    let matrix_active = move || visual_mode.get().mode() == Some(VisualMode::Matrix);
    let prompt = move || session.with(TerminalSession::prompt);
    let history = move || {
        session.with(|session| {
            let prompt = session.prompt();
            session
                .history()
                .iter()
                .enumerate()
                .map(|(idx, entry)| (idx, entry_lines(entry, &prompt)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div
            class=move || {
                if context.small_screen.get() {
                    "app-terminal-shell small-screen"
                } else {
                    "app-terminal-shell"
                }
            }
            data-focused=move || context.focused.get().to_string()
        >
            <div class="terminal-screen" role="log" aria-live="polite" node_ref=screen_ref>
                {move || {
                    history()
                        .into_iter()
                        .map(|(idx, lines)| {
                            view! {
                                <div class="terminal-entry" data-entry=idx>
                                    {lines
                                        .into_iter()
                                        .map(|line| view! { <div class=line.class>{line.text}</div> })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <form class="terminal-input-row" on:submit=submit>
                <label class="terminal-prompt" for=input_id.clone()>{prompt}</label>
                <input
                    id=input_id.clone()
                    class="terminal-input"
                    type="text"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    autocomplete="off"
                    spellcheck="false"
                    placeholder="Type 'help' for commands"
                />
            </form>

            <div class="app-statusbar terminal-statusbar">
                {move || {
                    session.with(|session| {
                        let stats = session.stats();
                        view! {
                            <span>{format!("User: {}", session.current_user())}</span>
                            <span>{format!("Uptime: {}", stats.uptime())}</span>
                            <span>{format!("Projects: {}", stats.projects())}</span>
                            <span>{format!("Lines: {}", stats.lines_of_code())}</span>
                        }
                    })
                }}
            </div>

            <Show when=matrix_active fallback=|| ()>
                <div class="terminal-matrix-overlay" aria-hidden="true">
                    {(0..MATRIX_COLUMNS)
                        .map(|column| view! { <span class="matrix-column">{matrix_column(column)}</span> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
