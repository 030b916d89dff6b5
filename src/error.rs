//! Errors raised while mounting the page
//!
//! Anything that reaches the composition root as a `MountError` is handled by
//! the top-level boundary, which swaps the page for a reload prompt.

use thiserror::Error;

use crate::config::ConfigError;
use crate::content::ContentError;

#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window (not running in a browser)")]
    NoWindow,
    #[error("no document attached to the window")]
    NoDocument,
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("javascript exception: {0}")]
    Js(String),
    #[error("site content: {0}")]
    Content(#[from] ContentError),
    #[error("site config: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for MountError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        MountError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
