//! Shared test utilities for controller scenarios

use crate::{
    config::NavConfig,
    controller::NavController,
    debug::CookieJar,
    event::NavElement,
    manifest::{Manifest, MenuItem},
    paths::PageContext,
    EnumSet,
};

/// Initialize logging for tests
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// The manifest used throughout the scenario tests: one debug page, a markdown page with an icon
/// and an html page without one.
pub fn example_manifest() -> Manifest {
    Manifest {
        debug_menu: vec![MenuItem::new("d.html", "Debug Page", Some("🐞"))],
        content_menu: vec![
            MenuItem::new("a.md", "Alpha", Some("📘")),
            MenuItem::new("b.html", "Beta", None),
        ],
    }
}

/// A manifest with `n` debug items and `m` content items, all labelled `Item <i>`.
pub fn sized_manifest(n: usize, m: usize) -> Manifest {
    let item = |i: usize, ext: &str| {
        MenuItem::new(&format!("item{i}.{ext}"), &format!("Item {i}"), None)
    };
    Manifest {
        debug_menu: (0..n).map(|i| item(i, "html")).collect(),
        content_menu: (n..n + m)
            .map(|i| item(i, if i % 2 == 0 { "md" } else { "html" }))
            .collect(),
    }
}

/// Build a controller for `pathname?search` with the given cookie header and elements.
pub fn page_controller(
    pathname: &str,
    search: &str,
    cookie_header: &str,
    elements: EnumSet<NavElement>,
) -> NavController<CookieJar> {
    init_logging();
    let config = NavConfig::default();
    let page = PageContext::from_location(pathname, search, &config).unwrap();
    let store = CookieJar::new(&config.cookie, cookie_header);
    NavController::new(config, page, elements, store)
}

/// A root page with every element present, no cookie and no query flag.
pub fn root_controller() -> NavController<CookieJar> {
    page_controller("/index.html", "", "", EnumSet::all())
}
