//! Reveal-on-scroll: add a class to marked sections the first time they
//! enter the viewport.
//!
//! DESIGN
//! ======
//! One `IntersectionObserver` watches every element matching the configured
//! selector. When an element crosses the threshold it gets the reveal class
//! and is unobserved, so each section animates in at most once. The observer
//! callback is leaked and lives for the page lifetime.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::PageConfig;
use crate::error::PageError;

const FALLBACK_SELECTOR: &str = ".reveal";
const FALLBACK_CLASS: &str = "visible";

/// Observer parameters derived from [`PageConfig`].
#[derive(Clone, Debug, PartialEq)]
pub struct RevealSettings {
    pub selector: String,
    pub class: String,
    pub threshold: f64,
}

impl RevealSettings {
    /// Blank selector or class names fall back to `.reveal` / `visible`.
    #[must_use]
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            selector: non_blank_or(&config.reveal_selector, FALLBACK_SELECTOR),
            class: non_blank_or(&config.reveal_class, FALLBACK_CLASS),
            threshold: config.reveal_threshold(),
        }
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { fallback.to_owned() } else { trimmed.to_owned() }
}

/// Start observing every matching element. Returns how many were found.
///
/// # Errors
///
/// Returns an error if the document is unreachable, the selector is invalid,
/// or the observer cannot be created.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn install(settings: &RevealSettings) -> Result<u32, PageError> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;
        use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        let class = settings.class.clone();
        let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Err(err) = target.class_list().add_1(&class) {
                        log::warn!("reveal: could not add class {class}: {err:?}");
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(settings.threshold));
        let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
        on_intersect.forget();

        let nodes = crate::util::dom::document()?.query_selector_all(&settings.selector)?;
        let mut observed = 0;
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<Element>() else {
                continue;
            };
            observer.observe(&element);
            observed += 1;
        }
        log::debug!("reveal: observing {observed} element(s) matching {}", settings.selector);
        Ok(observed)
    }
    #[cfg(not(feature = "csr"))]
    {
        Ok(0)
    }
}
