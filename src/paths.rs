//! Base-path resolution and link-target rewriting.
//!
//! Stage pages live one directory below the site root, so everything they fetch or link to must
//! be prefixed with a parent-relative base. [BasePathRule] decides which pages are nested, and
//! [link_target] turns a manifest url into the href the page should use.
use regex::Regex;
use url::form_urlencoded;

use crate::{config::NavConfig, error::SiteNavError};

/// Extension of files that are opened through the markdown viewer page.
pub const MARKDOWN_EXT: &str = ".md";

/// Decides whether a page is nested, and therefore which base prefix it resolves links against.
#[derive(Debug, Clone)]
pub struct BasePathRule {
    pattern: Regex,
    nested_base: String,
}

impl BasePathRule {
    pub fn new(pattern: &str, nested_base: &str) -> Result<BasePathRule, SiteNavError> {
        Ok(BasePathRule {
            pattern: Regex::new(pattern)?,
            nested_base: nested_base.to_string(),
        })
    }

    pub fn is_nested(&self, pathname: &str) -> bool {
        self.pattern.is_match(pathname)
    }

    /// Base prefix for a page: the nested base when `pathname` matches, otherwise `""`.
    pub fn base_for(&self, pathname: &str) -> &str {
        if self.is_nested(pathname) {
            &self.nested_base
        } else {
            ""
        }
    }
}

/// Location-derived facts, evaluated once at page load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub base: String,
    /// True when the query string carries `<query_param>=true`.
    pub debug_query: bool,
}

impl PageContext {
    /// Build the context from `location.pathname` and `location.search`.
    pub fn from_location(
        pathname: &str,
        search: &str,
        config: &NavConfig,
    ) -> Result<PageContext, SiteNavError> {
        let rule = config.base_rule()?;
        let base = rule.base_for(pathname).to_string();
        let debug_query = query_flag(search, &config.query_param);
        tracing::debug!(
            "Page context for '{}': base '{}', debug query {}",
            pathname,
            base,
            debug_query
        );
        Ok(PageContext { base, debug_query })
    }

    pub fn manifest_url(&self, config: &NavConfig) -> String {
        format!("{}{}", self.base, config.manifest_file)
    }
}

/// Whether the first occurrence of `name` in a query string equals `true`.
///
/// Accepts the string with or without its leading `?`.
pub fn query_flag(search: &str, name: &str) -> bool {
    let query = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value == "true")
        .unwrap_or(false)
}

pub fn is_markdown(url: &str) -> bool {
    url.ends_with(MARKDOWN_EXT)
}

/// Resolve a manifest url into the href used on the page.
///
/// Markdown files are routed through `viewer_page` with the original relative path passed as the
/// percent-encoded `file` query parameter. Everything else is simply prefixed with `base`.
pub fn link_target(base: &str, url: &str, viewer_page: &str) -> String {
    if is_markdown(url) {
        format!("{base}{viewer_page}?file={}", urlencoding::encode(url))
    } else {
        format!("{base}{url}")
    }
}
