use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument};

use crate::{
    config::CookieConfig,
    debug::{format_cookie, parse_cookie_flag, DebugPreferenceStore},
    error::SiteNavError,
};

/// Debug preference persisted in `document.cookie`.
#[derive(Debug)]
pub struct DocumentCookieStore {
    document: HtmlDocument,
    config: CookieConfig,
}

impl DocumentCookieStore {
    pub fn new(document: &Document, config: &CookieConfig) -> Result<Self, SiteNavError> {
        let document = document
            .clone()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| SiteNavError::Dom("document is not an HTML document".to_string()))?;
        Ok(DocumentCookieStore {
            document,
            config: config.clone(),
        })
    }
}

impl DebugPreferenceStore for DocumentCookieStore {
    fn read(&self) -> bool {
        match self.document.cookie() {
            Ok(header) => parse_cookie_flag(&header, &self.config.name),
            Err(e) => {
                tracing::warn!("Could not read document.cookie: {e:?}");
                false
            }
        }
    }

    fn write(&mut self, on: bool) -> Result<(), SiteNavError> {
        self.document
            .set_cookie(&format_cookie(&self.config, on))
            .map_err(SiteNavError::from)
    }
}
