//! Dropdown search over the combined menu list.
//!
//! Matching is a case-insensitive substring test on labels. Results keep list order (debug items
//! first) and are capped at [NavConfig::max_results]; there is no ranking.
use serde::{Deserialize, Serialize};

use crate::{
    config::NavConfig,
    manifest::{CombinedItemList, MenuItem},
    nav::NavLink,
};

/// Keys the search input reacts to, named after `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other(String),
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        match key {
            "ArrowDown" => Key::ArrowDown,
            "ArrowUp" => Key::ArrowUp,
            "Enter" => Key::Enter,
            "Escape" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

/// What the page should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Mark exactly this result as active (none when `None`).
    Highlight(Option<usize>),
    /// Follow the rendered link at this index.
    Activate(usize),
    /// Hide the dropdown.
    Close,
}

/// Dropdown contents after an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub results: Vec<NavLink>,
    pub open: bool,
}

pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// First `limit` items whose lowercased label contains `query`. `query` must already be
/// normalized.
pub fn filter_items<'a>(items: &'a [MenuItem], query: &str, limit: usize) -> Vec<&'a MenuItem> {
    items
        .iter()
        .filter(|item| item.label.to_lowercase().contains(query))
        .take(limit)
        .collect()
}

#[derive(Debug, Clone)]
pub struct SearchController {
    items: CombinedItemList,
    base: String,
    config: NavConfig,
    results: Vec<NavLink>,
    active_index: Option<usize>,
    open: bool,
}

impl SearchController {
    pub fn new(items: CombinedItemList, base: &str, config: &NavConfig) -> SearchController {
        SearchController {
            items,
            base: base.to_string(),
            config: config.clone(),
            results: Vec::new(),
            active_index: None,
            open: false,
        }
    }

    pub fn on_input(&mut self, raw: &str) -> SearchView {
        let query = normalize_query(raw);
        self.active_index = None;
        self.results = if query.is_empty() {
            Vec::new()
        } else {
            filter_items(&self.items, &query, self.config.max_results)
                .into_iter()
                .map(|item| NavLink::for_item(item, &self.base, &self.config))
                .collect()
        };
        self.open = !self.results.is_empty();
        tracing::trace!("Search '{}' matched {} items", query, self.results.len());
        SearchView {
            results: self.results.clone(),
            open: self.open,
        }
    }

    pub fn on_key(&mut self, key: &Key) -> KeyOutcome {
        let last = self.results.len().checked_sub(1);
        match key {
            Key::ArrowDown => {
                self.active_index = match (self.active_index, last) {
                    (_, None) => None,
                    (None, Some(_)) => Some(0),
                    (Some(idx), Some(last)) => Some((idx + 1).min(last)),
                };
            }
            Key::ArrowUp => {
                self.active_index = last.map(|_| {
                    self.active_index
                        .map_or(0, |idx| idx.saturating_sub(1))
                });
            }
            Key::Enter => {
                if let Some(idx) = self.active_index {
                    return KeyOutcome::Activate(idx);
                }
            }
            Key::Escape => {
                self.close();
                return KeyOutcome::Close;
            }
            Key::Other(_) => {}
        }
        KeyOutcome::Highlight(self.active_index)
    }

    /// Hide the dropdown. Rendered results stay in place until the next input.
    pub fn close(&mut self) {
        self.open = false;
        self.active_index = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn results(&self) -> &[NavLink] {
        &self.results
    }

    pub fn items(&self) -> &CombinedItemList {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn controller_with(labels: &[&str]) -> SearchController {
        let items: Vec<MenuItem> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| MenuItem::new(&format!("p{i}.html"), label, None))
            .collect();
        SearchController::new(items.into(), "", &NavConfig::default())
    }

    #[test]
    fn input_is_trimmed_and_case_insensitive() {
        let mut search = controller_with(&["Debug Page", "Alpha", "Beta"]);
        let view = search.on_input("  ALP ");
        assert!(view.open);
        assert_eq!(view.results.len(), 1);
        assert_eq!(view.results[0].label, "Alpha");
        assert_eq!(view.results[0].icon, "📄");
    }

    #[test]
    fn every_result_contains_the_query() {
        let mut search = controller_with(&["Debug Page", "Alpha", "Beta", "Gamma", "Delta"]);
        let view = search.on_input("a");
        assert!(view
            .results
            .iter()
            .all(|link| link.label.to_lowercase().contains('a')));
        let labels: Vec<_> = view.results.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Debug Page", "Alpha", "Beta", "Gamma", "Delta"]);
    }

    #[test]
    fn results_are_capped_in_list_order() {
        let labels: Vec<String> = (0..20).map(|i| format!("Page {i}")).collect();
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let mut search = controller_with(&refs);
        let view = search.on_input("page");
        assert_eq!(view.results.len(), 8);
        assert_eq!(view.results[0].label, "Page 0");
        assert_eq!(view.results[7].label, "Page 7");
    }

    #[test]
    fn empty_query_or_no_match_closes() {
        let mut search = controller_with(&["Alpha"]);
        assert!(search.on_input("alpha").open);
        let view = search.on_input("   ");
        assert!(!view.open);
        assert!(view.results.is_empty());
        let view = search.on_input("zzz");
        assert!(!view.open);
        assert!(!search.is_open());
    }

    #[test]
    fn arrows_clamp_to_rendered_results() {
        let mut search = controller_with(&["a1", "a2", "a3"]);
        search.on_input("a");
        assert_eq!(search.on_key(&Key::ArrowUp), KeyOutcome::Highlight(Some(0)));
        assert_eq!(search.on_key(&Key::ArrowDown), KeyOutcome::Highlight(Some(1)));
        assert_eq!(search.on_key(&Key::ArrowDown), KeyOutcome::Highlight(Some(2)));
        assert_eq!(search.on_key(&Key::ArrowDown), KeyOutcome::Highlight(Some(2)));
        assert_eq!(search.on_key(&Key::ArrowUp), KeyOutcome::Highlight(Some(1)));
        assert_eq!(search.on_key(&Key::ArrowUp), KeyOutcome::Highlight(Some(0)));
        assert_eq!(search.on_key(&Key::ArrowUp), KeyOutcome::Highlight(Some(0)));
    }

    #[test]
    fn arrows_without_results_select_nothing() {
        let mut search = controller_with(&["Alpha"]);
        search.on_input("zzz");
        assert_eq!(search.on_key(&Key::ArrowDown), KeyOutcome::Highlight(None));
        assert_eq!(search.on_key(&Key::ArrowUp), KeyOutcome::Highlight(None));
    }

    #[test]
    fn enter_activates_only_with_selection() {
        let mut search = controller_with(&["Alpha", "Alps"]);
        search.on_input("al");
        assert_eq!(search.on_key(&Key::Enter), KeyOutcome::Highlight(None));
        search.on_key(&Key::ArrowDown);
        search.on_key(&Key::ArrowDown);
        assert_eq!(search.on_key(&Key::Enter), KeyOutcome::Activate(1));
    }

    #[test]
    fn escape_closes_and_resets_selection() {
        let mut search = controller_with(&["Alpha"]);
        search.on_input("al");
        search.on_key(&Key::ArrowDown);
        assert_eq!(search.on_key(&Key::Escape), KeyOutcome::Close);
        assert!(!search.is_open());
        assert_eq!(search.active_index(), None);
        assert_eq!(search.results().len(), 1);
    }

    #[test]
    fn typing_resets_selection() {
        let mut search = controller_with(&["Alpha", "Alps"]);
        search.on_input("al");
        search.on_key(&Key::ArrowDown);
        assert_eq!(search.active_index(), Some(0));
        search.on_input("alp");
        assert_eq!(search.active_index(), None);
        assert_eq!(search.on_key(&Key::from("a")), KeyOutcome::Highlight(None));
    }

    #[test]
    fn dom_key_names_map_to_keys() {
        assert_eq!(Key::from("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from("Escape"), Key::Escape);
        assert_eq!(Key::from("Tab"), Key::Other("Tab".to_string()));
    }
}
