//! `?open=` query parsing for links that open panels on load.
//!
//! The value is a comma-separated list of panel ids (`?open=about,terminal`). Project ids may
//! carry a `projects:` prefix (`?open=projects:agrix`) to match canonical project routes.

use desktop_app_contract::{PanelId, PanelIdError};
use thiserror::Error;

use crate::catalog;

/// Query parameter carrying the deep link.
pub const OPEN_QUERY_PARAM: &str = "open";

const PROJECT_PREFIX: &str = "projects:";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// A deep-link target that could not be opened.
pub enum DeepLinkError {
    /// The target is not a valid panel id.
    #[error("malformed deep-link target `{target}`: {source}")]
    Malformed {
        /// Raw target text.
        target: String,
        /// Validation failure.
        source: PanelIdError,
    },
    /// The target is a valid id but no such panel exists.
    #[error("unknown deep-link panel `{0}`")]
    UnknownPanel(String),
}

/// Parsed deep link: panels to open in order plus the targets that were rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeepLink {
    /// Panels to open, deduplicated, in first-seen order.
    pub panels: Vec<PanelId>,
    /// Targets that were skipped.
    pub rejected: Vec<DeepLinkError>,
}

/// Parses an `open` query value.
pub fn parse_deep_link(raw: &str) -> DeepLink {
    let mut link = DeepLink::default();
    for target in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match parse_target(target) {
            Ok(id) if !link.panels.contains(&id) => link.panels.push(id),
            Ok(_) => {}
            Err(err) => link.rejected.push(err),
        }
    }
    link
}

fn parse_target(target: &str) -> Result<PanelId, DeepLinkError> {
    let raw = target.strip_prefix(PROJECT_PREFIX).unwrap_or(target);
    let id = PanelId::new(raw).map_err(|source| DeepLinkError::Malformed {
        target: target.to_string(),
        source,
    })?;
    catalog::panel(&id).map_err(|_| DeepLinkError::UnknownPanel(id.to_string()))?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_ordered_unique_targets() {
        let link = parse_deep_link(" about , terminal,about,projects:agrix ");
        let ids: Vec<_> = link.panels.iter().map(PanelId::as_str).collect();
        assert_eq!(ids, vec!["about", "terminal", "agrix"]);
        assert!(link.rejected.is_empty());
    }

    #[test]
    fn reports_malformed_and_unknown_targets() {
        let link = parse_deep_link("About,warp-drive,,skills");
        assert_eq!(link.panels, vec![PanelId::trusted("skills")]);
        assert_eq!(
            link.rejected,
            vec![
                DeepLinkError::Malformed {
                    target: "About".to_string(),
                    source: PanelIdError::NotKebabCase("About".to_string()),
                },
                DeepLinkError::UnknownPanel("warp-drive".to_string()),
            ]
        );
    }

    #[test]
    fn empty_query_opens_nothing() {
        assert_eq!(parse_deep_link(""), DeepLink::default());
    }
}
