//! # sitenav
//!
//! Client-side navigation for a static documentation site, compiled to WebAssembly.
//!
//! ## Overview
//!
//! A site publishes one `menus.json` manifest listing a debug menu and a content menu. On every
//! page, sitenav:
//!
//! - renders the debug menu into a hidden debug strip, followed by a link to the markdown viewer
//! - renders the content menu into the main navigation, routing `.md` files through the viewer
//! - offers a search box that filters both menus by label as the user types
//! - shows or hides the debug strip based on a `debug` cookie or a `?debug=true` query flag
//!
//! ## Architecture
//!
//! - **[`manifest`]**: `MenuItem`, `Manifest`, the combined search list, and manifest loading
//! - **[`paths`]**: base-path rule for nested pages and link-target rewriting
//! - **[`nav`]**: debug bar and content nav builders
//! - **[`search`]**: dropdown search state and keyboard navigation
//! - **[`debug`]**: debug strip toggle and the `DebugPreferenceStore` seam
//! - **[`controller`]**: `NavController`, which owns all page state and turns `NavEvent`s into
//!   `DomEffect`s
//! - **`wasm`** (feature `wasm`): binds the controller to the browser DOM
//!
//! ## Quick Start
//!
//! Driving a page without a browser:
//!
//! ```rust
//! use sitenav::{
//!     config::NavConfig, controller::NavController, debug::CookieJar, event::NavEvent,
//!     manifest::Manifest, paths::PageContext, EnumSet,
//! };
//!
//! let config = NavConfig::default();
//! let page = PageContext::from_location("/index.html", "", &config).unwrap();
//! let store = CookieJar::new(&config.cookie, "");
//! let mut controller = NavController::new(config, page, EnumSet::all(), store);
//!
//! let manifest = Manifest::from_json(
//!     r#"{"debug_menu": [], "content_menu": [{"url": "a.md", "label": "Alpha"}]}"#,
//! );
//! let effects = controller.on_manifest(manifest);
//! assert_eq!(effects.len(), 3); // debug label, tool link, one content link
//!
//! controller.handle(&NavEvent::SearchInput("alp".to_string()));
//! assert_eq!(controller.search().unwrap().results()[0].href, "markdown_renderer.html?file=a.md");
//! ```
//!
//! ## Features
//!
//! - **default**: the platform-neutral core
//! - **wasm**: browser bindings (`initSiteNav`)
//! - **bin**: the `sitenav` authoring CLI

pub mod config;
pub mod controller;
pub mod debug;
pub mod error;
pub mod event;
pub mod manifest;
pub mod nav;
pub mod paths;
pub mod search;
#[cfg(test)]
mod tests;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use enumset::EnumSet;
pub use error::*;
