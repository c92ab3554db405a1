//! The menu manifest (`menus.json`) and the list searched by the dropdown.
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    fmt::{Display, Formatter},
    ops::Deref,
    str::FromStr,
};
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use crate::error::SiteNavError;

/// One navigable entry of a menu.
///
/// `url` and `label` are not validated: a missing field renders as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl MenuItem {
    pub fn new(url: &str, label: &str, icon: Option<&str>) -> MenuItem {
        MenuItem {
            url: url.to_string(),
            label: label.to_string(),
            icon: icon.map(str::to_string),
        }
    }

    pub fn icon_or<'a>(&'a self, default_icon: &'a str) -> &'a str {
        self.icon.as_deref().unwrap_or(default_icon)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub debug_menu: Vec<MenuItem>,
    pub content_menu: Vec<MenuItem>,
}

impl Manifest {
    pub fn from_json(data: &str) -> Result<Manifest, SiteNavError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Debug items first, then content items.
    pub fn combined(&self) -> CombinedItemList {
        CombinedItemList(
            self.debug_menu
                .iter()
                .chain(self.content_menu.iter())
                .cloned()
                .collect(),
        )
    }

    /// Authoring checks. The browser never runs these; they back `sitenav check`.
    pub fn lint(&self) -> Vec<ManifestWarning> {
        let mut warnings = Vec::new();
        for (menu, items) in [
            (MenuKind::Debug, &self.debug_menu),
            (MenuKind::Content, &self.content_menu),
        ] {
            let mut seen = BTreeSet::new();
            for (index, item) in items.iter().enumerate() {
                if item.url.trim().is_empty() {
                    warnings.push(ManifestWarning::EmptyUrl { menu, index });
                }
                if item.label.trim().is_empty() {
                    warnings.push(ManifestWarning::EmptyLabel { menu, index });
                }
                if !item.url.is_empty() && !seen.insert(item.url.as_str()) {
                    warnings.push(ManifestWarning::DuplicateUrl {
                        menu,
                        index,
                        url: item.url.clone(),
                    });
                }
            }
        }
        warnings
    }
}

impl FromStr for Manifest {
    type Err = SiteNavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Manifest::from_json(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Debug,
    Content,
}

impl Display for MenuKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            MenuKind::Debug => write!(f, "debug_menu"),
            MenuKind::Content => write!(f, "content_menu"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestWarning {
    EmptyUrl {
        menu: MenuKind,
        index: usize,
    },
    EmptyLabel {
        menu: MenuKind,
        index: usize,
    },
    DuplicateUrl {
        menu: MenuKind,
        index: usize,
        url: String,
    },
}

impl Display for ManifestWarning {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ManifestWarning::EmptyUrl { menu, index } => write!(f, "{menu}[{index}]: empty url"),
            ManifestWarning::EmptyLabel { menu, index } => {
                write!(f, "{menu}[{index}]: empty label")
            }
            ManifestWarning::DuplicateUrl { menu, index, url } => {
                write!(f, "{menu}[{index}]: duplicate url '{url}'")
            }
        }
    }
}

/// Every menu item of a manifest in search order. Built once per page load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedItemList(Vec<MenuItem>);

impl Deref for CombinedItemList {
    type Target = [MenuItem];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<MenuItem>> for CombinedItemList {
    fn from(items: Vec<MenuItem>) -> Self {
        CombinedItemList(items)
    }
}

/// Source of the manifest text. The fetch is the only suspension point of page start-up.
#[allow(async_fn_in_trait)]
pub trait ManifestFetch {
    async fn fetch_text(&self, url: &str) -> Result<String, SiteNavError>;
}

pub async fn load_manifest<F: ManifestFetch>(
    fetcher: &F,
    url: &str,
) -> Result<Manifest, SiteNavError> {
    tracing::debug!("Fetching manifest from '{}'", url);
    let text = fetcher.fetch_text(url).await?;
    let manifest = Manifest::from_json(&text)?;
    tracing::debug!(
        "Loaded manifest: {} debug items, {} content items",
        manifest.debug_menu.len(),
        manifest.content_menu.len()
    );
    Ok(manifest)
}

/// Reads manifests from a local site directory, resolving urls the way the browser would
/// relative to a page in `root`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileFetch {
    root: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileFetch {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        FileFetch { root: root.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ManifestFetch for FileFetch {
    async fn fetch_text(&self, url: &str) -> Result<String, SiteNavError> {
        let path = self.root.join(url);
        tracing::debug!("Reading {:?}", path);
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const EXAMPLE: &str = r#"{
        "debug_menu": [{"url": "d.html", "label": "Debug Page", "icon": "🐞"}],
        "content_menu": [
            {"url": "a.md", "label": "Alpha", "icon": "📘"},
            {"url": "b.html", "label": "Beta"}
        ]
    }"#;

    #[test]
    fn parses_manifest_with_optional_icons() {
        let manifest = Manifest::from_json(EXAMPLE).unwrap();
        assert_eq!(manifest.debug_menu.len(), 1);
        assert_eq!(manifest.content_menu.len(), 2);
        assert_eq!(manifest.content_menu[1].icon, None);
        assert_eq!(manifest.content_menu[1].icon_or("📄"), "📄");
        assert_eq!(manifest.content_menu[0].icon_or("📄"), "📘");
    }

    #[test]
    fn combined_list_puts_debug_items_first() {
        let manifest: Manifest = EXAMPLE.parse().unwrap();
        let combined = manifest.combined();
        let labels: Vec<_> = combined.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Debug Page", "Alpha", "Beta"]);
    }

    #[test]
    fn missing_item_fields_are_empty_strings() {
        let manifest =
            Manifest::from_json(r#"{"debug_menu": [{}], "content_menu": [{"label": "x"}]}"#)
                .unwrap();
        assert_eq!(manifest.debug_menu[0], MenuItem::default());
        assert_eq!(manifest.content_menu[0].url, "");
    }

    #[test]
    fn missing_menu_is_a_parse_error() {
        let err = Manifest::from_json(r#"{"debug_menu": []}"#).unwrap_err();
        assert!(matches!(err, SiteNavError::Serialization(_)));
        assert!(Manifest::from_json("<html>404</html>").is_err());
    }

    #[test]
    fn lint_flags_empty_and_duplicate_entries() {
        let manifest = Manifest {
            debug_menu: vec![MenuItem::new("", "Nothing", None)],
            content_menu: vec![
                MenuItem::new("a.md", "Alpha", None),
                MenuItem::new("a.md", " ", None),
            ],
        };
        let warnings = manifest.lint();
        assert_eq!(
            warnings,
            vec![
                ManifestWarning::EmptyUrl {
                    menu: MenuKind::Debug,
                    index: 0
                },
                ManifestWarning::EmptyLabel {
                    menu: MenuKind::Content,
                    index: 1
                },
                ManifestWarning::DuplicateUrl {
                    menu: MenuKind::Content,
                    index: 1,
                    url: "a.md".to_string()
                },
            ]
        );
        assert_eq!(warnings[2].to_string(), "content_menu[1]: duplicate url 'a.md'");
    }

    #[tokio::test]
    async fn file_fetch_resolves_against_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("menus.json"), EXAMPLE).unwrap();
        let fetch = FileFetch::new(dir.path());
        let manifest = load_manifest(&fetch, "menus.json").await.unwrap();
        assert_eq!(manifest.content_menu[0].label, "Alpha");

        let missing = load_manifest(&fetch, "nope/menus.json").await.unwrap_err();
        assert!(matches!(missing, SiteNavError::NotFound(_)));
    }
}
