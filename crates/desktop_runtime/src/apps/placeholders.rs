//! Placeholder bodies for panels whose content is static presentation.

use std::time::Duration;

use desktop_app_contract::{PanelMountContext, Ticker};
use leptos::*;
use platform_host::unix_time_ms_now;

/// How often the analytics placeholder refreshes its live-visitor figure.
pub const LIVE_VISITOR_REFRESH_INTERVAL: Duration = Duration::from_secs(10);

/// Mounts the generic summary placeholder.
pub(super) fn mount_summary_placeholder(context: PanelMountContext) -> View {
    view! { <SummaryPlaceholder context=context /> }.into_view()
}

/// Mounts the analytics placeholder with its live-visitor counter.
pub(super) fn mount_analytics_placeholder(context: PanelMountContext) -> View {
    let visitors = create_rw_signal(live_visitor_count(unix_time_ms_now()));
    let _ticker = Ticker::start(LIVE_VISITOR_REFRESH_INTERVAL, move || {
        visitors.set(live_visitor_count(unix_time_ms_now()));
    });

    view! {
        <SummaryPlaceholder context=context />
        <div class="app-statusbar">
            <span>{move || format!("Live visitors: {}", visitors.get())}</span>
        </div>
    }
    .into_view()
}

/// Mock live-visitor figure in `3..=17`, stable within a second.
pub fn live_visitor_count(now_ms: u64) -> u64 {
    let seconds = now_ms / 1_000;
    3 + (seconds.wrapping_mul(2_654_435_761) >> 16) % 15
}

#[component]
fn SummaryPlaceholder(context: PanelMountContext) -> impl IntoView {
    let lines = context.summary.clone();
    view! {
        <div class="app-shell panel-placeholder" data-panel=context.panel_id.to_string()>
            <h2 class="panel-placeholder-title">{context.title.clone()}</h2>
            <ul class="panel-placeholder-summary">
                {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_visitor_count_stays_in_range() {
        for second in 0..500u64 {
            let count = live_visitor_count(second * 1_000);
            assert!((3..=17).contains(&count), "{count}");
        }
    }

    #[test]
    fn live_visitor_count_is_stable_within_a_second() {
        assert_eq!(live_visitor_count(42_000), live_visitor_count(42_999));
    }
}
