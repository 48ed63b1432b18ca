//! Compile-time panel catalog and site metadata generated from `desktop.toml`.

use std::sync::OnceLock;

use desktop_app_contract::PanelId;
use serde::Deserialize;
use thiserror::Error;

use crate::model::WindowSize;

include!(concat!(env!("OUT_DIR"), "/desktop_catalog_generated.rs"));

/// Id of the panel backed by the terminal dispatcher.
pub const TERMINAL_PANEL_ID: &str = "terminal";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Catalog lookup failures.
pub enum CatalogError {
    /// No panel with the requested id exists.
    #[error("unknown panel `{0}`")]
    UnknownPanel(String),
}

/// Site-wide metadata rendered into the document head.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteMetadata {
    /// Document title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Portfolio owner.
    pub owner: String,
}

/// Desktop icon grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelGroup {
    /// Always-visible essentials.
    Essential,
    /// Professional and business tools.
    Professional,
    /// Project showcases.
    Projects,
    /// The featured terminal.
    Featured,
    /// Easter eggs.
    Fun,
}

impl PanelGroup {
    /// Heading shown above the group on the desktop.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Essential => "Essentials",
            Self::Professional => "Professional",
            Self::Projects => "Projects",
            Self::Featured => "Featured",
            Self::Fun => "Fun",
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PanelDescriptor {
    /// Stable id.
    pub id: PanelId,
    /// Window title.
    pub title: String,
    /// Short label for the taskbar entry.
    pub taskbar_label: String,
    /// Label under the desktop icon.
    pub desktop_label: String,
    /// Icon glyph.
    pub icon: String,
    /// Desktop grouping.
    pub group: PanelGroup,
    /// Hover text for the desktop icon.
    pub tooltip: String,
    /// Placeholder content lines.
    pub summary: Vec<String>,
    width: i32,
    height: i32,
}

impl PanelDescriptor {
    /// Default window size for a freshly opened window.
    pub fn default_size(&self) -> WindowSize {
        WindowSize {
            w: self.width,
            h: self.height,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DesktopCatalog {
    site: SiteMetadata,
    panels: Vec<PanelDescriptor>,
}

fn catalog() -> &'static DesktopCatalog {
    static CATALOG: OnceLock<DesktopCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(DESKTOP_CATALOG_JSON).expect("generated desktop catalog should parse")
    })
}

/// Site metadata.
pub fn site_metadata() -> &'static SiteMetadata {
    &catalog().site
}

/// Every panel in declaration order.
pub fn panels() -> &'static [PanelDescriptor] {
    &catalog().panels
}

/// Looks up a panel by id.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownPanel`] when `id` is not in the catalog.
pub fn panel(id: &PanelId) -> Result<&'static PanelDescriptor, CatalogError> {
    panels()
        .iter()
        .find(|panel| panel.id == *id)
        .ok_or_else(|| CatalogError::UnknownPanel(id.to_string()))
}

/// Looks up a panel by its raw string id.
pub fn panel_by_str(id: &str) -> Option<&'static PanelDescriptor> {
    panels().iter().find(|panel| panel.id.as_str() == id)
}

/// Panels grouped for the desktop icon grid, in group order.
///
/// On small screens the featured group comes first.
pub fn grouped_panels(small_screen: bool) -> Vec<(PanelGroup, Vec<&'static PanelDescriptor>)> {
    let mut order = vec![
        PanelGroup::Essential,
        PanelGroup::Professional,
        PanelGroup::Projects,
        PanelGroup::Featured,
        PanelGroup::Fun,
    ];
    if small_screen {
        order.retain(|group| *group != PanelGroup::Featured);
        order.insert(0, PanelGroup::Featured);
    }

    order
        .into_iter()
        .map(|group| {
            let members: Vec<_> = panels().iter().filter(|p| p.group == group).collect();
            (group, members)
        })
        .filter(|(_, members)| !members.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_parses_with_site_metadata() {
        assert_eq!(site_metadata().title, "Exodus OS - Developer Portfolio");
        assert!(site_metadata().description.contains("Exodus Tola"));
        assert!(panels().len() >= 20);
    }

    #[test]
    fn terminal_panel_is_present_once() {
        let terminals = panels()
            .iter()
            .filter(|p| p.id.as_str() == TERMINAL_PANEL_ID)
            .count();
        assert_eq!(terminals, 1);
        assert_eq!(
            panel_by_str(TERMINAL_PANEL_ID).map(|p| p.group),
            Some(PanelGroup::Featured)
        );
    }

    #[test]
    fn lookup_reports_unknown_ids() {
        let missing = PanelId::trusted("nope");
        assert_eq!(
            panel(&missing),
            Err(CatalogError::UnknownPanel("nope".to_string()))
        );
        assert_eq!(
            panel(&PanelId::trusted("skills")).map(|p| p.title.as_str()),
            Ok("Technical Skills")
        );
    }

    #[test]
    fn small_screen_puts_featured_first() {
        let wide = grouped_panels(false);
        let narrow = grouped_panels(true);
        assert_eq!(wide.first().map(|(g, _)| *g), Some(PanelGroup::Essential));
        assert_eq!(narrow.first().map(|(g, _)| *g), Some(PanelGroup::Featured));
        let total: usize = narrow.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, panels().len());
    }

    #[test]
    fn sizes_default_when_not_declared() {
        let about = panel_by_str("about").expect("about panel");
        assert_eq!(about.default_size(), WindowSize { w: 400, h: 300 });
        let terminal = panel_by_str("terminal").expect("terminal panel");
        assert_eq!(terminal.default_size(), WindowSize { w: 640, h: 440 });
    }
}
