//! Shared contract types between the desktop window manager runtime and the panels it hosts.
//!
//! Panels are identified by a validated kebab-case [`PanelId`], mounted through a static
//! [`PanelModule`], and receive a [`PanelMountContext`] carrying their catalog metadata plus
//! reactive window-state signals. Cosmetic timers live in [`timers`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod timers;

use leptos::{Signal, View};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use timers::{Ticker, Timeout};

/// Longest accepted panel id.
pub const PANEL_ID_MAX_LEN: usize = 64;

/// Why a raw string was rejected as a [`PanelId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelIdError {
    /// The id was empty.
    #[error("panel id is empty")]
    Empty,
    /// The id exceeded [`PANEL_ID_MAX_LEN`].
    #[error("panel id `{0}` exceeds the length limit")]
    TooLong(String),
    /// The id was not lowercase kebab-case.
    #[error("invalid panel id `{0}`; expected lowercase kebab-case segments")]
    NotKebabCase(String),
}

/// Stable identifier for a desktop panel (`about`, `terminal`, `case-studies`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PanelId(String);

impl PanelId {
    /// Returns a panel id when `raw` is lowercase kebab-case.
    pub fn new(raw: impl Into<String>) -> Result<Self, PanelIdError> {
        let raw = raw.into();
        validate_panel_id(&raw)?;
        Ok(Self(raw))
    }

    /// Creates an id without validation for build-time checked catalog constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PanelId {
    type Error = PanelIdError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<PanelId> for String {
    fn from(id: PanelId) -> Self {
        id.0
    }
}

fn validate_panel_id(raw: &str) -> Result<(), PanelIdError> {
    if raw.is_empty() {
        return Err(PanelIdError::Empty);
    }
    if raw.len() > PANEL_ID_MAX_LEN {
        return Err(PanelIdError::TooLong(raw.to_string()));
    }

    let kebab = raw.split('-').all(|segment| {
        let bytes = segment.as_bytes();
        !bytes.is_empty()
            && bytes[0].is_ascii_lowercase()
            && bytes
                .iter()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    });
    if kebab {
        Ok(())
    } else {
        Err(PanelIdError::NotKebabCase(raw.to_string()))
    }
}

/// DOM id of the element that receives keyboard focus when the panel's window is focused.
pub fn panel_primary_input_dom_id(panel_id: &PanelId) -> String {
    format!("panel-primary-input-{panel_id}")
}

#[derive(Clone)]
/// Mount context injected by the desktop runtime per open panel.
pub struct PanelMountContext {
    /// Panel id from the catalog.
    pub panel_id: PanelId,
    /// Window title.
    pub title: String,
    /// Catalog summary lines for panels without bespoke content.
    pub summary: Vec<String>,
    /// Whether this panel's window currently has focus.
    pub focused: Signal<bool>,
    /// Whether the desktop is in the small-screen layout.
    pub small_screen: Signal<bool>,
}

/// Static panel mount function used by the runtime registry.
pub type PanelMountFn = fn(PanelMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable panel descriptor used by the runtime panel registry.
pub struct PanelModule {
    mount_fn: PanelMountFn,
}

impl PanelModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: PanelMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the panel view with a runtime-provided context.
    pub fn mount(self, context: PanelMountContext) -> View {
        (self.mount_fn)(context)
    }
}
