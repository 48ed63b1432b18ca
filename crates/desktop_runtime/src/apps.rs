//! Panel registry: maps catalog ids to the module that renders their window body.

mod placeholders;

use desktop_app_contract::{PanelId, PanelModule, PanelMountContext};
use desktop_app_terminal::TerminalApp;
use leptos::*;

use crate::catalog::{self, TERMINAL_PANEL_ID};

const ANALYTICS_PANEL_ID: &str = "analytics";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Terminal,
    Analytics,
    Summary,
}

pub fn panel_kind(panel_id: &PanelId) -> PanelKind {
    match panel_id.as_str() {
        TERMINAL_PANEL_ID => PanelKind::Terminal,
        ANALYTICS_PANEL_ID => PanelKind::Analytics,
        _ => PanelKind::Summary,
    }
}

pub fn panel_module(kind: PanelKind) -> PanelModule {
    match kind {
        PanelKind::Terminal => PanelModule::new(mount_terminal_panel),
        PanelKind::Analytics => PanelModule::new(placeholders::mount_analytics_placeholder),
        PanelKind::Summary => PanelModule::new(placeholders::mount_summary_placeholder),
    }
}

fn mount_terminal_panel(context: PanelMountContext) -> View {
    view! { <TerminalApp context=context /> }.into_view()
}

/// Mounts the body for `panel_id` with its catalog metadata.
pub fn render_window_contents(
    panel_id: &PanelId,
    title: String,
    focused: Signal<bool>,
    small_screen: Signal<bool>,
) -> View {
    let summary = catalog::panel(panel_id)
        .map(|panel| panel.summary.clone())
        .unwrap_or_default();
    let context = PanelMountContext {
        panel_id: panel_id.clone(),
        title,
        summary,
        focused,
        small_screen,
    };
    panel_module(panel_kind(panel_id)).mount(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_and_analytics_get_dedicated_modules() {
        assert_eq!(panel_kind(&PanelId::trusted("terminal")), PanelKind::Terminal);
        assert_eq!(panel_kind(&PanelId::trusted("analytics")), PanelKind::Analytics);
        assert_eq!(panel_kind(&PanelId::trusted("agrix")), PanelKind::Summary);
    }

    #[test]
    fn every_catalog_panel_resolves_to_a_module() {
        let terminals = catalog::panels()
            .iter()
            .filter(|panel| panel_kind(&panel.id) == PanelKind::Terminal)
            .count();
        assert_eq!(terminals, 1);
    }
}
