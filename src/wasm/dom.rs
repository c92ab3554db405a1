use std::collections::BTreeMap;

use enumset::EnumSet;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::{
    config::{ClassNames, NavConfig},
    error::SiteNavError,
    event::{DomEffect, NavElement},
    nav::NavLink,
};

/// The page elements found at start-up, plus what is needed to mutate them.
pub struct PageElements {
    document: Document,
    found: BTreeMap<NavElement, Element>,
    classes: ClassNames,
}

impl PageElements {
    pub fn find(document: &Document, config: &NavConfig) -> PageElements {
        let ids = &config.elements;
        let found = [
            (NavElement::DebugBar, &ids.debug_bar),
            (NavElement::ContentNav, &ids.content_nav),
            (NavElement::SearchInput, &ids.search_input),
            (NavElement::SearchDropdown, &ids.search_dropdown),
            (NavElement::DebugToggle, &ids.debug_toggle),
        ]
        .into_iter()
        .filter_map(|(element, id)| {
            let found = document.get_element_by_id(id);
            if found.is_none() {
                tracing::debug!("No #{} on this page, {:?} disabled", id, element);
            }
            found.map(|el| (element, el))
        })
        .collect();
        PageElements {
            document: document.clone(),
            found,
            classes: config.classes.clone(),
        }
    }

    pub fn present(&self) -> EnumSet<NavElement> {
        self.found.keys().copied().collect()
    }

    pub fn get(&self, element: NavElement) -> Option<&Element> {
        self.found.get(&element)
    }

    pub fn apply_all(&self, effects: Vec<DomEffect>) {
        for effect in effects {
            if let Err(e) = self.apply(&effect) {
                tracing::warn!("Failed to apply {:?}: {e}", effect);
            }
        }
    }

    fn apply(&self, effect: &DomEffect) -> Result<(), SiteNavError> {
        match effect {
            DomEffect::AppendLabel { target, text } => {
                if let Some(container) = self.get(*target) {
                    let label = self.document.create_element("span")?;
                    label.set_class_name(&self.classes.debug_label);
                    label.set_text_content(Some(text.as_str()));
                    container.append_child(&label)?;
                }
            }
            DomEffect::AppendLink { target, link } => {
                if let Some(container) = self.get(*target) {
                    let a = self.anchor(&link.href)?;
                    a.set_text_content(Some(link.text().as_str()));
                    container.append_child(&a)?;
                }
            }
            DomEffect::ReplaceResults(links) => {
                if let Some(dropdown) = self.get(NavElement::SearchDropdown) {
                    dropdown.set_text_content(None);
                    for link in links {
                        dropdown.append_child(&self.result_link(link)?)?;
                    }
                }
            }
            DomEffect::SetDropdownOpen(open) => {
                if let Some(dropdown) = self.get(NavElement::SearchDropdown) {
                    dropdown
                        .class_list()
                        .toggle_with_force(&self.classes.open, *open)?;
                }
            }
            DomEffect::Highlight(index) => {
                for (i, link) in self.result_links().into_iter().enumerate() {
                    link.class_list()
                        .toggle_with_force(&self.classes.active, Some(i) == *index)?;
                }
            }
            DomEffect::Activate(index) => {
                let link = self
                    .result_links()
                    .into_iter()
                    .nth(*index)
                    .ok_or_else(|| SiteNavError::NotFound(format!("search result {index}")))?;
                link.dyn_into::<HtmlElement>()
                    .map_err(|_| SiteNavError::Dom("search result is not clickable".to_string()))?
                    .click();
            }
            DomEffect::SetDebugVisible(visible) => {
                if let Some(bar) = self.get(NavElement::DebugBar) {
                    bar.class_list()
                        .toggle_with_force(&self.classes.visible, *visible)?;
                }
            }
        }
        Ok(())
    }

    fn anchor(&self, href: &str) -> Result<Element, SiteNavError> {
        let a = self.document.create_element("a")?;
        a.set_attribute("href", href)?;
        Ok(a)
    }

    /// `<a href><span>icon</span>label</a>`, built from text nodes.
    fn result_link(&self, link: &NavLink) -> Result<Element, SiteNavError> {
        let a = self.anchor(&link.href)?;
        let icon = self.document.create_element("span")?;
        icon.set_text_content(Some(link.icon.as_str()));
        a.append_child(&icon)?;
        a.append_child(&self.document.create_text_node(&link.label))?;
        Ok(a)
    }

    fn result_links(&self) -> Vec<Element> {
        let Some(dropdown) = self.get(NavElement::SearchDropdown) else {
            return Vec::new();
        };
        let links = dropdown.get_elements_by_tag_name("a");
        (0..links.length()).filter_map(|i| links.item(i)).collect()
    }
}
