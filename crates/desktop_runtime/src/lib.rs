pub mod apps;
pub mod catalog;
pub mod components;
pub mod deep_link;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use catalog::{site_metadata, SiteMetadata};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use deep_link::OPEN_QUERY_PARAM;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
