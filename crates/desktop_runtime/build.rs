use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const DEFAULT_WIDTH: i32 = 400;
const DEFAULT_HEIGHT: i32 = 300;
const GROUPS: [&str; 5] = ["essential", "professional", "projects", "featured", "fun"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SiteConfig {
    title: String,
    description: String,
    owner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PanelConfig {
    id: String,
    title: String,
    taskbar_label: String,
    desktop_label: String,
    icon: String,
    group: String,
    tooltip: String,
    #[serde(default)]
    summary: Vec<String>,
    #[serde(default = "default_width")]
    width: i32,
    #[serde(default = "default_height")]
    height: i32,
}

#[derive(Debug, Clone, Deserialize)]
struct DesktopConfig {
    schema_version: u32,
    site: SiteConfig,
    panels: Vec<PanelConfig>,
}

#[derive(Debug, Serialize)]
struct GeneratedCatalog<'a> {
    site: &'a SiteConfig,
    panels: &'a [PanelConfig],
}

fn default_width() -> i32 {
    DEFAULT_WIDTH
}

fn default_height() -> i32 {
    DEFAULT_HEIGHT
}

fn is_kebab_case(raw: &str) -> bool {
    !raw.is_empty()
        && raw.split('-').all(|segment| {
            let bytes = segment.as_bytes();
            !bytes.is_empty()
                && bytes[0].is_ascii_lowercase()
                && bytes
                    .iter()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

fn validate(config: &DesktopConfig, source: &str) {
    if config.schema_version != 1 {
        panic!(
            "desktop config schema mismatch in {source}: expected 1 found {}",
            config.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for panel in &config.panels {
        if !is_kebab_case(&panel.id) {
            panic!("panel id `{}` in {source} is not kebab-case", panel.id);
        }
        if !seen.insert(panel.id.as_str()) {
            panic!("duplicate panel id `{}` in {source}", panel.id);
        }
        if !GROUPS.contains(&panel.group.as_str()) {
            panic!(
                "panel `{}` in {source} has unknown group `{}`; expected one of {GROUPS:?}",
                panel.id, panel.group
            );
        }
        if panel.width <= 0 || panel.height <= 0 {
            panic!(
                "panel `{}` in {source} has non-positive size {}x{}",
                panel.id, panel.width, panel.height
            );
        }
        if panel.title.trim().is_empty() || panel.taskbar_label.trim().is_empty() {
            panic!("panel `{}` in {source} is missing a title or taskbar label", panel.id);
        }
    }

    let terminals = config.panels.iter().filter(|p| p.id == "terminal").count();
    if terminals != 1 {
        panic!("{source} must declare exactly one `terminal` panel, found {terminals}");
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: DesktopConfig = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&config, &path.display().to_string());

    let catalog = GeneratedCatalog {
        site: &config.site,
        panels: &config.panels,
    };
    let json = serde_json::to_string_pretty(&catalog).expect("serialize desktop catalog");
    let generated = format!(
        "/// Build-time generated desktop catalog JSON.\n\
const DESKTOP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
