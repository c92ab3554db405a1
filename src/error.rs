use std::io;

use regex::Error as RegexError;
use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;

#[cfg(feature = "wasm")]
use serde_wasm_bindgen::Error as WasmError;

#[cfg(feature = "wasm")]
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum SiteNavError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("Fetch failed: {0}")]
    Fetch(String),
    #[error("File System error: {0}")]
    Io(String),
    #[error("Item Not Found: {0}")]
    NotFound(String),
    #[error("(De)Serialization error: {0}")]
    Serialization(String),
}

impl From<JsonError> for SiteNavError {
    fn from(src: JsonError) -> SiteNavError {
        SiteNavError::Serialization(format!("JSON (de)serialization error: {src}"))
    }
}

impl From<toml::de::Error> for SiteNavError {
    fn from(src: toml::de::Error) -> SiteNavError {
        SiteNavError::Config(format!("Toml deserialization error: {src}"))
    }
}

impl From<RegexError> for SiteNavError {
    fn from(x: RegexError) -> Self {
        SiteNavError::Config(format!("Regex parse failed: {x}"))
    }
}

impl From<io::Error> for SiteNavError {
    fn from(x: io::Error) -> Self {
        match x.kind() {
            io::ErrorKind::NotFound => SiteNavError::NotFound(format!("{x}")),
            _ => SiteNavError::Io(format!("IOError: {}", x.kind())),
        }
    }
}

#[cfg(feature = "wasm")]
impl From<WasmError> for SiteNavError {
    fn from(wasm_error: WasmError) -> Self {
        SiteNavError::Serialization(format!("Serde-wasm-bindgen error: {wasm_error}"))
    }
}

#[cfg(feature = "wasm")]
impl From<JsValue> for SiteNavError {
    fn from(js_error: JsValue) -> Self {
        SiteNavError::Dom(
            js_error
                .as_string()
                .unwrap_or_else(|| format!("{js_error:?}")),
        )
    }
}

#[cfg(feature = "wasm")]
impl From<SiteNavError> for JsValue {
    fn from(error: SiteNavError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
