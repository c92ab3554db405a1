//! [NavController] owns every piece of page state: the combined menu list, the search selection
//! and the debug strip toggle. It is built once at page load and lives until the page unloads.
//!
//! The controller never touches the DOM. Browser events come in as [NavEvent]s and the required
//! DOM mutations go out as [DomEffect]s, which lets the whole page behaviour run without a
//! browser.
use enumset::EnumSet;

use crate::{
    config::NavConfig,
    debug::{DebugPreferenceStore, DebugState, DebugToggle},
    error::SiteNavError,
    event::{DomEffect, NavElement, NavEvent},
    manifest::{load_manifest, Manifest, ManifestFetch},
    nav::{build_content_nav, build_debug_bar, BarEntry},
    paths::PageContext,
    search::{KeyOutcome, SearchController},
};

#[derive(Debug)]
pub struct NavController<S: DebugPreferenceStore> {
    config: NavConfig,
    page: PageContext,
    elements: EnumSet<NavElement>,
    debug: Option<DebugToggle<S>>,
    search: Option<SearchController>,
}

impl<S: DebugPreferenceStore> NavController<S> {
    /// Build the controller for a page. The debug toggle is initialized here, before any fetch,
    /// when both the toggle button and the debug bar are present.
    pub fn new(
        config: NavConfig,
        page: PageContext,
        elements: EnumSet<NavElement>,
        store: S,
    ) -> NavController<S> {
        let debug = elements
            .is_superset(NavElement::debug())
            .then(|| DebugToggle::init(store, page.debug_query));
        NavController {
            config,
            page,
            elements,
            debug,
            search: None,
        }
    }

    /// Effects of the synchronous start-up step.
    pub fn start(&self) -> Vec<DomEffect> {
        match &self.debug {
            Some(debug) if debug.state().is_visible() => vec![DomEffect::SetDebugVisible(true)],
            _ => Vec::new(),
        }
    }

    pub fn manifest_url(&self) -> String {
        self.page.manifest_url(&self.config)
    }

    /// Fetch the manifest and apply it. See [NavController::on_manifest].
    pub async fn load<F: ManifestFetch>(&mut self, fetcher: &F) -> Vec<DomEffect> {
        let url = self.manifest_url();
        let result = load_manifest(fetcher, &url).await;
        self.on_manifest(result)
    }

    /// Populate both navigation bars and activate search.
    ///
    /// A failed fetch or parse is logged and leaves every container empty.
    pub fn on_manifest(&mut self, result: Result<Manifest, SiteNavError>) -> Vec<DomEffect> {
        let manifest = match result {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::warn!("Could not load {}: {e}", self.config.manifest_file);
                return Vec::new();
            }
        };
        let base = self.page.base.as_str();
        let mut effects = Vec::new();

        if self.elements.contains(NavElement::DebugBar) {
            effects.extend(
                build_debug_bar(&manifest.debug_menu, base, &self.config)
                    .into_iter()
                    .map(|entry| match entry {
                        BarEntry::Label(text) => DomEffect::AppendLabel {
                            target: NavElement::DebugBar,
                            text,
                        },
                        BarEntry::Link(link) => DomEffect::AppendLink {
                            target: NavElement::DebugBar,
                            link,
                        },
                    }),
            );
        }

        if self.elements.contains(NavElement::ContentNav) {
            effects.extend(
                build_content_nav(&manifest.content_menu, base, &self.config)
                    .into_iter()
                    .map(|link| DomEffect::AppendLink {
                        target: NavElement::ContentNav,
                        link,
                    }),
            );
        }

        if self.elements.is_superset(NavElement::search()) {
            self.search = Some(SearchController::new(
                manifest.combined(),
                base,
                &self.config,
            ));
        }

        tracing::debug!(
            "Manifest applied: {} effects, search {}",
            effects.len(),
            if self.search.is_some() { "active" } else { "inactive" }
        );
        effects
    }

    /// Dispatch a browser event to the component that owns it.
    pub fn handle(&mut self, event: &NavEvent) -> Vec<DomEffect> {
        tracing::trace!("Handling {}", event);
        match event {
            NavEvent::SearchInput(value) => match self.search.as_mut() {
                Some(search) => {
                    let view = search.on_input(value);
                    vec![
                        DomEffect::ReplaceResults(view.results),
                        DomEffect::SetDropdownOpen(view.open),
                    ]
                }
                None => Vec::new(),
            },
            NavEvent::SearchKey(key) => match self.search.as_mut().map(|s| s.on_key(key)) {
                Some(KeyOutcome::Highlight(index)) => vec![DomEffect::Highlight(index)],
                Some(KeyOutcome::Activate(index)) => vec![DomEffect::Activate(index)],
                Some(KeyOutcome::Close) => vec![DomEffect::SetDropdownOpen(false)],
                None => Vec::new(),
            },
            NavEvent::DocumentClick { inside_search } => match self.search.as_mut() {
                Some(search) if !inside_search => {
                    search.close();
                    vec![DomEffect::SetDropdownOpen(false)]
                }
                _ => Vec::new(),
            },
            NavEvent::DebugToggleClick => match self.debug.as_mut() {
                Some(debug) => vec![DomEffect::SetDebugVisible(debug.toggle().is_visible())],
                None => Vec::new(),
            },
        }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn page(&self) -> &PageContext {
        &self.page
    }

    pub fn elements(&self) -> EnumSet<NavElement> {
        self.elements
    }

    pub fn debug_state(&self) -> Option<DebugState> {
        self.debug.as_ref().map(DebugToggle::state)
    }

    pub fn debug_store(&self) -> Option<&S> {
        self.debug.as_ref().map(DebugToggle::store)
    }

    pub fn search(&self) -> Option<&SearchController> {
        self.search.as_ref()
    }
}
