use enumset::{EnumSet, EnumSetType};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::{nav::NavLink, search::Key};

/// Elements of the page contract. Each component runs only when its elements are present.
#[derive(Debug, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumSetType)]
pub enum NavElement {
    DebugBar,
    ContentNav,
    SearchInput,
    SearchDropdown,
    DebugToggle,
}

impl NavElement {
    pub fn search() -> EnumSet<NavElement> {
        NavElement::SearchInput | NavElement::SearchDropdown
    }

    pub fn debug() -> EnumSet<NavElement> {
        NavElement::DebugToggle | NavElement::DebugBar
    }
}

/// Browser events the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavEvent {
    /// Current value of the search input after an `input` event.
    SearchInput(String),
    /// `keydown` on the search input.
    SearchKey(Key),
    /// Any click on the document.
    DocumentClick { inside_search: bool },
    DebugToggleClick,
}

impl Display for NavEvent {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            NavEvent::SearchInput(_) => write!(f, "SearchInput"),
            NavEvent::SearchKey(_) => write!(f, "SearchKey"),
            NavEvent::DocumentClick { .. } => write!(f, "DocumentClick"),
            NavEvent::DebugToggleClick => write!(f, "DebugToggleClick"),
        }
    }
}

/// DOM mutations requested by the controller, applied in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomEffect {
    /// Append a text label to a container.
    AppendLabel { target: NavElement, text: String },
    /// Append a `<a href>icon label</a>` to a container.
    AppendLink { target: NavElement, link: NavLink },
    /// Clear the dropdown and render these results as `<a href><span>icon</span>label</a>`.
    ReplaceResults(Vec<NavLink>),
    SetDropdownOpen(bool),
    /// Mark only this result active; `None` clears every mark.
    Highlight(Option<usize>),
    /// Click the result link at this index.
    Activate(usize),
    SetDebugVisible(bool),
}
