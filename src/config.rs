//! Runtime page configuration.
//!
//! DESIGN
//! ======
//! Every knob has a compiled-in default. A page may override any subset by
//! putting a JSON object in the `data-folio-config` attribute of `<html>`;
//! fields it omits keep their defaults. The parsed config is handed to the
//! component tree through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::error::PageError;

/// Attribute on `<html>` that may carry a JSON config override.
pub const CONFIG_ATTRIBUTE: &str = "data-folio-config";

const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
const DEFAULT_SUBMIT_DELAY_MS: u64 = 800;
const DEFAULT_REVEAL_SELECTOR: &str = ".reveal";
const DEFAULT_REVEAL_CLASS: &str = "visible";
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub theme_storage_key: String,
    /// Simulated network latency for the contact form send.
    pub submit_delay_ms: u64,
    /// Selector for elements that fade in when scrolled into view.
    pub reveal_selector: String,
    /// Class added to a revealed element.
    pub reveal_class: String,
    /// Visible fraction that triggers a reveal.
    pub reveal_threshold: f64,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            reveal_selector: DEFAULT_REVEAL_SELECTOR.to_owned(),
            reveal_class: DEFAULT_REVEAL_CLASS.to_owned(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::ConfigParse`] if `raw` is not a JSON object of
    /// the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the override from the `<html>` element, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is unreachable or the attribute
    /// holds invalid JSON. Outside the browser this always yields defaults.
    pub fn from_document() -> Result<Self, PageError> {
        #[cfg(feature = "csr")]
        {
            let root = crate::util::dom::document()?
                .document_element()
                .ok_or(PageError::NoDocument)?;
            match root.get_attribute(CONFIG_ATTRIBUTE) {
                Some(raw) => Self::from_json(&raw),
                None => Ok(Self::default()),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(Self::default())
        }
    }

    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Reveal threshold clamped to the `[0, 1]` range the observer accepts.
    #[must_use]
    pub fn reveal_threshold(&self) -> f64 {
        if self.reveal_threshold.is_nan() {
            return DEFAULT_REVEAL_THRESHOLD;
        }
        self.reveal_threshold.clamp(0.0, 1.0)
    }

    /// Configured log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
