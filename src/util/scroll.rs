//! Smooth scrolling for in-page `#fragment` links.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::error::PageError;

/// Element id named by an in-page link, or `None` for `"#"` and non-hash
/// hrefs.
#[must_use]
pub fn hash_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Smooth-scroll to the element `href` points at and record the hash in
/// history without reloading.
///
/// Returns `Ok(true)` when the link was handled here and the browser's
/// default navigation should be suppressed, `Ok(false)` when the browser
/// should follow it (no hash, no such element, or no browser). Once the
/// scroll has started the link counts as handled, even if the history
/// update fails.
///
/// # Errors
///
/// Returns an error if the document is unreachable.
pub fn scroll_to_hash(href: &str) -> Result<bool, PageError> {
    let Some(id) = hash_target(href) else {
        return Ok(false);
    };

    #[cfg(feature = "csr")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(target) = crate::util::dom::document()?.get_element_by_id(id) else {
            log::debug!("scroll: no element #{id}, leaving link to the browser");
            return Ok(false);
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);

        let pushed = crate::util::dom::window().and_then(|window| {
            window.history()?.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href))?;
            Ok(())
        });
        Ok(scrolled(href, pushed))
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("scroll: #{id} ignored outside the browser");
        Ok(false)
    }
}

/// Outcome of a link whose scroll already started: handled, whatever
/// happened to the history entry.
pub fn scrolled(href: &str, pushed: Result<(), PageError>) -> bool {
    if let Err(err) = pushed {
        log::warn!("scroll: {href} not recorded in history: {err}");
    }
    true
}
