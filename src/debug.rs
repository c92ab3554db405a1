//! Debug strip visibility and its persisted preference.
//!
//! The strip is [DebugState::Visible] at load when the preference store says so or when the page
//! was opened with the debug query flag. After that only toggle clicks change it.
use serde::{Deserialize, Serialize};

use crate::{config::CookieConfig, error::SiteNavError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebugState {
    #[default]
    Hidden,
    Visible,
}

impl DebugState {
    pub fn is_visible(self) -> bool {
        self == DebugState::Visible
    }

    pub fn flipped(self) -> DebugState {
        match self {
            DebugState::Hidden => DebugState::Visible,
            DebugState::Visible => DebugState::Hidden,
        }
    }
}

impl From<bool> for DebugState {
    fn from(visible: bool) -> Self {
        if visible {
            DebugState::Visible
        } else {
            DebugState::Hidden
        }
    }
}

/// Where the debug preference is persisted between page loads.
pub trait DebugPreferenceStore {
    fn read(&self) -> bool;
    fn write(&mut self, on: bool) -> Result<(), SiteNavError>;
}

/// True when a `name=true` pair appears in a `document.cookie` style header.
pub fn parse_cookie_flag(header: &str, name: &str) -> bool {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .any(|(key, value)| key == name && value == "true")
}

/// A `document.cookie` assignment string for the debug preference.
pub fn format_cookie(config: &CookieConfig, on: bool) -> String {
    format!(
        "{}={}; path={}; max-age={}",
        config.name, on, config.path, config.max_age
    )
}

/// In-memory cookie header.
///
/// Mirrors how `document.cookie` behaves for a single cookie: reads see the current header,
/// writes replace the named pair. Every assignment is recorded in [CookieJar::writes].
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    config: CookieConfig,
    pairs: Vec<(String, String)>,
    writes: Vec<String>,
}

impl CookieJar {
    pub fn new(config: &CookieConfig, header: &str) -> CookieJar {
        let pairs = header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CookieJar {
            config: config.clone(),
            pairs,
            writes: Vec::new(),
        }
    }

    pub fn header(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl DebugPreferenceStore for CookieJar {
    fn read(&self) -> bool {
        parse_cookie_flag(&self.header(), &self.config.name)
    }

    fn write(&mut self, on: bool) -> Result<(), SiteNavError> {
        self.writes.push(format_cookie(&self.config, on));
        let value = on.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == self.config.name) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((self.config.name.clone(), value)),
        }
        Ok(())
    }
}

/// Two-state toggle for the debug strip, backed by a [DebugPreferenceStore].
#[derive(Debug)]
pub struct DebugToggle<S: DebugPreferenceStore> {
    store: S,
    state: DebugState,
}

impl<S: DebugPreferenceStore> DebugToggle<S> {
    /// Evaluate the initial state. An active flag is written back so the preference is refreshed
    /// for another day.
    pub fn init(mut store: S, query_flag: bool) -> DebugToggle<S> {
        let state = DebugState::from(store.read() || query_flag);
        if state.is_visible() {
            persist(&mut store, true);
        }
        tracing::debug!("Debug strip initialized {:?}", state);
        DebugToggle { store, state }
    }

    pub fn toggle(&mut self) -> DebugState {
        self.state = self.state.flipped();
        persist(&mut self.store, self.state.is_visible());
        self.state
    }

    pub fn state(&self) -> DebugState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn persist<S: DebugPreferenceStore>(store: &mut S, on: bool) {
    if let Err(e) = store.write(on) {
        tracing::warn!("Could not persist debug preference: {e}");
    }
}
