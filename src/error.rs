//! Browser glue errors.
//!
//! ERROR HANDLING
//! ==============
//! Page behaviors are best-effort: every DOM, storage, or config failure is
//! returned as a [`PageError`] and logged by the caller, never surfaced to the
//! visitor. Contact form validation failures are not errors in this sense;
//! they are user feedback modeled by `state::contact::ValidationError`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// `window` is not available (non-browser host).
    #[error("browser window unavailable")]
    NoWindow,

    /// The window has no document attached.
    #[error("document unavailable")]
    NoDocument,

    /// `localStorage` is disabled or blocked.
    #[error("localStorage unavailable")]
    NoStorage,

    /// A DOM lookup by id found nothing.
    #[error("element not found: #{0}")]
    MissingElement(String),

    /// A browser API threw.
    #[error("browser call failed: {0}")]
    Js(String),

    /// The page config attribute held invalid JSON.
    #[error("config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
