//! Shared test utilities for integration tests.
//!
//! Import from integration test files as:
//! ```ignore
//! mod common;
//! ```

use std::path::PathBuf;
use tempfile::TempDir;

/// Initialize tracing for tests, respecting RUST_LOG env var.
///
/// Safe to call multiple times; subsequent calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

pub const MENUS_JSON: &str = r#"{
  "debug_menu": [
    {"url": "debug/perf.html", "label": "Perf Test", "icon": "⏱"},
    {"url": "debug/pico.html", "label": "Find Pico", "icon": "🔎"}
  ],
  "content_menu": [
    {"url": "1_Intro/index.html", "label": "Introduction", "icon": "👋"},
    {"url": "2_Build/notes.md", "label": "Build Notes", "icon": "📘"},
    {"url": "5_Symbols/send_ble.html", "label": "Send over BLE"},
    {"url": "5_Symbols/Send WiFi.md", "label": "Send over WiFi"}
  ]
}"#;

/// Create a test site with a root `menus.json` and two stage directories.
///
/// Returns the site root (e.g. `<temp_dir>/site/`).
#[allow(dead_code)]
pub fn create_test_site(temp_dir: &TempDir) -> PathBuf {
    let site = temp_dir.path().join("site");
    std::fs::create_dir(&site).unwrap();
    std::fs::create_dir(site.join("1_Intro")).unwrap();
    std::fs::create_dir(site.join("5_Symbols")).unwrap();
    std::fs::write(site.join("menus.json"), MENUS_JSON).unwrap();
    site
}
