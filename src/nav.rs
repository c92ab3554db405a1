//! Debug bar and content navigation builders.
//!
//! Builders produce plain values; appending them to the page is left to the caller (see
//! [crate::event::DomEffect]).
use serde::{Deserialize, Serialize};

use crate::{config::NavConfig, manifest::MenuItem, paths::link_target};

/// A rendered navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub icon: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: String, icon: &str, label: &str) -> NavLink {
        NavLink {
            href,
            icon: icon.to_string(),
            label: label.to_string(),
        }
    }

    /// Text content used by both navigation bars: `icon label`.
    pub fn text(&self) -> String {
        if self.icon.is_empty() {
            self.label.clone()
        } else {
            format!("{} {}", self.icon, self.label)
        }
    }

    /// Link for a menu item, resolving `.md` urls through the viewer page.
    pub fn for_item(item: &MenuItem, base: &str, config: &NavConfig) -> NavLink {
        NavLink::new(
            link_target(base, &item.url, &config.viewer_page),
            item.icon_or(&config.default_icon),
            &item.label,
        )
    }
}

/// One child of the debug bar, in append order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarEntry {
    Label(String),
    Link(NavLink),
}

/// Label, then one link per debug item, then the markdown tool link.
///
/// Debug links are plain `base + url`; they are never routed through the viewer.
pub fn build_debug_bar(items: &[MenuItem], base: &str, config: &NavConfig) -> Vec<BarEntry> {
    let mut entries = Vec::with_capacity(items.len() + 2);
    entries.push(BarEntry::Label(config.debug_label.clone()));
    entries.extend(items.iter().map(|item| {
        BarEntry::Link(NavLink::new(
            format!("{base}{}", item.url),
            item.icon_or(&config.default_icon),
            &item.label,
        ))
    }));
    entries.push(BarEntry::Link(NavLink::new(
        format!("{base}{}", config.viewer_page),
        "",
        &config.tool_link_label,
    )));
    entries
}

pub fn build_content_nav(items: &[MenuItem], base: &str, config: &NavConfig) -> Vec<NavLink> {
    items
        .iter()
        .map(|item| NavLink::for_item(item, base, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn items() -> Vec<MenuItem> {
        vec![
            MenuItem::new("a.md", "Alpha", Some("📘")),
            MenuItem::new("b.html", "Beta", None),
        ]
    }

    #[test]
    fn debug_bar_has_label_items_and_tool_link() {
        let config = NavConfig::default();
        let debug = vec![
            MenuItem::new("d.html", "Debug Page", Some("🐞")),
            MenuItem::new("perf.md", "Perf", Some("⏱")),
        ];
        let entries = build_debug_bar(&debug, "../", &config);
        assert_eq!(entries.len(), debug.len() + 2);
        assert_eq!(entries[0], BarEntry::Label("🐛 Debug".to_string()));
        match &entries[2] {
            BarEntry::Link(link) => {
                assert_eq!(link.href, "../perf.md");
                assert_eq!(link.text(), "⏱ Perf");
            }
            other => panic!("expected link, got {other:?}"),
        }
        match entries.last() {
            Some(BarEntry::Link(link)) => {
                assert_eq!(link.href, "../markdown_renderer.html");
                assert_eq!(link.text(), "📝 MD Renderer");
            }
            other => panic!("expected tool link, got {other:?}"),
        }
    }

    #[test]
    fn empty_debug_menu_still_gets_label_and_tool_link() {
        let entries = build_debug_bar(&[], "", &NavConfig::default());
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn content_nav_rewrites_markdown() {
        let links = build_content_nav(&items(), "", &NavConfig::default());
        let hrefs: Vec<_> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["markdown_renderer.html?file=a.md", "b.html"]);
        assert_eq!(links[0].text(), "📘 Alpha");
        assert_eq!(links[1].text(), "📄 Beta");
    }

    #[test]
    fn content_nav_uses_configured_viewer() {
        let config = NavConfig {
            viewer_page: "view.html".to_string(),
            ..Default::default()
        };
        let links = build_content_nav(&items(), "../", &config);
        assert_eq!(links[0].href, "../view.html?file=a.md");
        assert_eq!(links[1].href, "../b.html");
    }
}
