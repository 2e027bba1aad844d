//! Theme persistence and application.
//!
//! Reads the stored choice from `localStorage` and mirrors the active theme
//! into the `data-theme` attribute of `<html>`. Toggle writes the new choice
//! back. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage failures are logged and the page keeps
//! working with an unsaved theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;

#[cfg(feature = "csr")]
const THEME_ATTRIBUTE: &str = "data-theme";

/// Read the stored theme choice, if a valid one exists.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn read_stored(key: &str) -> Option<Theme> {
    #[cfg(feature = "csr")]
    {
        let stored = crate::util::dom::local_storage().and_then(|storage| Ok(storage.get_item(key)?));
        match stored {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(err) => {
                log::warn!("theme: could not read {key}: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Set the `data-theme` attribute on the `<html>` element.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let applied = crate::util::dom::root_element()
            .and_then(|root| Ok(root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?));
        if let Err(err) = applied {
            log::warn!("theme: could not apply {}: {err}", theme.as_str());
        }
    }
}

/// Write the theme choice to `localStorage`.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn persist(key: &str, theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let saved =
            crate::util::dom::local_storage().and_then(|storage| Ok(storage.set_item(key, theme.as_str())?));
        if let Err(err) = saved {
            log::warn!("theme: could not persist {key}: {err}");
        }
    }
}

/// Restore the stored theme on page load.
///
/// The document is only touched when a valid choice was stored; otherwise the
/// stylesheet default stays in effect and `Theme::default()` is returned.
pub fn restore(key: &str) -> Theme {
    match read_stored(key) {
        Some(theme) => {
            apply(theme);
            log::debug!("theme: restored {}", theme.as_str());
            theme
        }
        None => Theme::default(),
    }
}

/// Switch to the other theme, apply it, and persist it.
pub fn toggle(key: &str, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(key, next);
    log::debug!("theme: {} -> {}", current.as_str(), next.as_str());
    next
}
