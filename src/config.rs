//! Page-level configuration for [crate::controller::NavController].
//!
//! Every field has a default matching the documentation site layout the script was written for,
//! so an empty TOML file (or an empty JS object) is a valid configuration.
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::{fs::read_to_string, path::Path};

use crate::{error::SiteNavError, paths::BasePathRule};

/// Default glyph shown for menu items without an `icon`.
pub const DEFAULT_ICON: &str = "📄";

/// Default number of search results rendered in the dropdown.
pub const MAX_SEARCH_RESULTS: usize = 8;

/// One day, in seconds.
pub const DEBUG_COOKIE_MAX_AGE: u32 = 86400;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub elements: ElementIds,
    /// CSS selector of the region that keeps the search dropdown open when clicked.
    pub search_region: String,
    pub manifest_file: String,
    /// Page that renders markdown files passed through its `file` query parameter.
    pub viewer_page: String,
    /// Regex matched against `location.pathname`; a match means the page is nested one level deep.
    pub nested_page_pattern: String,
    pub nested_base: String,
    pub max_results: usize,
    pub default_icon: String,
    pub debug_label: String,
    pub tool_link_label: String,
    pub query_param: String,
    pub cookie: CookieConfig,
    pub classes: ClassNames,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            elements: ElementIds::default(),
            search_region: ".search-wrap".to_string(),
            manifest_file: "menus.json".to_string(),
            viewer_page: "markdown_renderer.html".to_string(),
            nested_page_pattern: r"/\d_".to_string(),
            nested_base: "../".to_string(),
            max_results: MAX_SEARCH_RESULTS,
            default_icon: DEFAULT_ICON.to_string(),
            debug_label: "🐛 Debug".to_string(),
            tool_link_label: "📝 MD Renderer".to_string(),
            query_param: "debug".to_string(),
            cookie: CookieConfig::default(),
            classes: ClassNames::default(),
        }
    }
}

impl NavConfig {
    pub fn from_toml_str(content: &str) -> Result<NavConfig, SiteNavError> {
        Ok(toml::from_str(content)?)
    }

    /// Read a TOML config file. A missing file yields the default configuration.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<NavConfig, SiteNavError> {
        tracing::debug!("Attempting to read config from: {:?}", path.as_ref());
        if !path.as_ref().exists() {
            tracing::debug!("Config file not found, using defaults.");
            return Ok(NavConfig::default());
        }
        NavConfig::from_toml_str(&read_to_string(path)?)
    }

    pub fn base_rule(&self) -> Result<BasePathRule, SiteNavError> {
        BasePathRule::new(&self.nested_page_pattern, &self.nested_base)
    }
}

/// DOM ids of the elements the page is expected to provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub debug_bar: String,
    pub content_nav: String,
    pub search_input: String,
    pub search_dropdown: String,
    pub debug_toggle: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        ElementIds {
            debug_bar: "debug-bar".to_string(),
            content_nav: "content-nav".to_string(),
            search_input: "search-input".to_string(),
            search_dropdown: "search-dropdown".to_string(),
            debug_toggle: "debug-toggle".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieConfig {
    pub name: String,
    pub path: String,
    pub max_age: u32,
}

impl Default for CookieConfig {
    fn default() -> Self {
        CookieConfig {
            name: "debug".to_string(),
            path: "/".to_string(),
            max_age: DEBUG_COOKIE_MAX_AGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub debug_label: String,
    /// Marks the debug bar as shown.
    pub visible: String,
    /// Marks the search dropdown as shown.
    pub open: String,
    /// Marks the keyboard-highlighted search result.
    pub active: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        ClassNames {
            debug_label: "debug-label".to_string(),
            visible: "visible".to_string(),
            open: "open".to_string(),
            active: "active".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = NavConfig::from_toml_str("").unwrap();
        assert_eq!(config, NavConfig::default());
        assert_eq!(config.max_results, 8);
        assert_eq!(config.cookie.max_age, 86400);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = NavConfig::from_toml_str(
            r#"
viewer_page = "viewer.html"
nested_page_pattern = "/stage-\\d+/"

[elements]
content_nav = "main-nav"

[cookie]
max_age = 3600
"#,
        )
        .unwrap();
        assert_eq!(config.viewer_page, "viewer.html");
        assert_eq!(config.nested_page_pattern, r"/stage-\d+/");
        assert_eq!(config.elements.content_nav, "main-nav");
        assert_eq!(config.elements.debug_bar, "debug-bar");
        assert_eq!(config.cookie.max_age, 3600);
        assert_eq!(config.cookie.name, "debug");
    }

    #[test]
    fn invalid_pattern_is_a_config_error() {
        let config = NavConfig {
            nested_page_pattern: "(".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.base_rule(), Err(SiteNavError::Config(_))));
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = NavConfig::load(dir.path().join("sitenav.toml")).unwrap();
        assert_eq!(config, NavConfig::default());
    }
}
