//! WASM bindings for sitenav
//!
//! Binds [crate::controller::NavController] to a real page: looks up the configured elements,
//! fetches the manifest through `window.fetch`, persists the debug preference in
//! `document.cookie`, and forwards DOM events to the controller.
//!
//! ## Usage
//!
//! ```javascript,ignore
//! import init, { initSiteNav } from './sitenav.js';
//!
//! await init();
//! // All fields are optional; omitted ones take their defaults.
//! await initSiteNav({ viewer_page: 'markdown_renderer.html' });
//! ```
//!
//! Listener closures are leaked with `Closure::forget`. They live exactly as long as the page,
//! which is also the lifetime of the controller they share.

mod cookie;
mod dom;

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, HtmlInputElement, KeyboardEvent, Response, Window};

use crate::{
    config::NavConfig,
    controller::NavController,
    error::SiteNavError,
    event::{NavElement, NavEvent},
    manifest::{load_manifest, ManifestFetch},
    paths::PageContext,
    search::Key,
};

use cookie::DocumentCookieStore;
use dom::PageElements;

type SharedController = Rc<RefCell<NavController<DocumentCookieStore>>>;

/// `window.fetch` returning the response body as text. Non-2xx statuses are failures.
pub struct WindowFetch {
    window: Window,
}

impl ManifestFetch for WindowFetch {
    async fn fetch_text(&self, url: &str) -> Result<String, SiteNavError> {
        let response: Response = JsFuture::from(self.window.fetch_with_str(url))
            .await
            .map_err(|e| SiteNavError::Fetch(format!("{url}: {e:?}")))?
            .dyn_into()?;
        if !response.ok() {
            return Err(SiteNavError::Fetch(format!(
                "{url}: HTTP {}",
                response.status()
            )));
        }
        let body = JsFuture::from(response.text()?).await?;
        body.as_string()
            .ok_or_else(|| SiteNavError::Fetch(format!("{url}: response body is not text")))
    }
}

/// Wire navigation, search and the debug strip into the current page.
///
/// Only an unusable configuration is reported as an error; a missing manifest is logged and
/// leaves the page without navigation.
#[wasm_bindgen(js_name = initSiteNav)]
pub async fn init_site_nav(config: JsValue) -> Result<(), JsValue> {
    tracing_wasm::try_set_as_global_default().ok();

    let config: NavConfig = if config.is_undefined() || config.is_null() {
        NavConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(SiteNavError::from)?
    };

    let window = web_sys::window().ok_or_else(|| SiteNavError::Dom("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| SiteNavError::Dom("no document".to_string()))?;
    let location = window.location();
    let page = PageContext::from_location(&location.pathname()?, &location.search()?, &config)?;

    let elements = PageElements::find(&document, &config);
    let present = elements.present();
    let store = DocumentCookieStore::new(&document, &config.cookie)?;
    let controller = Rc::new(RefCell::new(NavController::new(
        config, page, present, store,
    )));
    let elements = Rc::new(elements);

    elements.apply_all(controller.borrow().start());
    if present.is_superset(NavElement::debug()) {
        register_toggle(&controller, &elements)?;
    }

    let url = controller.borrow().manifest_url();
    let result = load_manifest(&WindowFetch { window }, &url).await;
    let effects = controller.borrow_mut().on_manifest(result);
    elements.apply_all(effects);

    if controller.borrow().search().is_some() {
        register_search(&controller, &elements, &document)?;
    }
    Ok(())
}

fn dispatch(controller: &SharedController, elements: &PageElements, event: NavEvent) {
    let effects = controller.borrow_mut().handle(&event);
    elements.apply_all(effects);
}

fn register_toggle(
    controller: &SharedController,
    elements: &Rc<PageElements>,
) -> Result<(), SiteNavError> {
    let Some(button) = elements.get(NavElement::DebugToggle) else {
        return Ok(());
    };
    let (controller, elements) = (controller.clone(), elements.clone());
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        dispatch(&controller, &elements, NavEvent::DebugToggleClick);
    });
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn register_search(
    controller: &SharedController,
    elements: &Rc<PageElements>,
    document: &Document,
) -> Result<(), SiteNavError> {
    let (Some(input), Some(_)) = (
        elements.get(NavElement::SearchInput),
        elements.get(NavElement::SearchDropdown),
    ) else {
        return Ok(());
    };
    let input: HtmlInputElement = input
        .clone()
        .dyn_into()
        .map_err(|_| SiteNavError::Dom("search input is not an <input> element".to_string()))?;

    let on_input = {
        let (controller, elements, input) = (controller.clone(), elements.clone(), input.clone());
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            dispatch(&controller, &elements, NavEvent::SearchInput(input.value()));
        })
    };
    input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();

    let on_keydown = {
        let (controller, elements) = (controller.clone(), elements.clone());
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
            let key = Key::from(e.key().as_str());
            dispatch(&controller, &elements, NavEvent::SearchKey(key));
        })
    };
    input.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();

    let on_document_click = {
        let (controller, elements) = (controller.clone(), elements.clone());
        let region = controller.borrow().config().search_region.clone();
        Closure::<dyn FnMut(Event)>::new(move |e: Event| {
            let inside_search = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(&region).ok().flatten())
                .is_some();
            dispatch(&controller, &elements, NavEvent::DocumentClick { inside_search });
        })
    };
    document
        .add_event_listener_with_callback("click", on_document_click.as_ref().unchecked_ref())?;
    on_document_click.forget();

    tracing::debug!("Search listeners registered");
    Ok(())
}
