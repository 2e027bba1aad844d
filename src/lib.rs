//! # folio
//!
//! Leptos + WASM behavior layer for a personal portfolio page: persisted
//! light/dark theme, collapsible mobile navigation, smooth in-page scrolling,
//! reveal-on-scroll sections, and a contact form with client-side validation
//! and a mocked send.
//!
//! Pure models live in `state`, browser glue in `util`, and Leptos views in
//! `components`. Browser-only code is gated behind the `csr` feature so the
//! rules can be exercised with plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod util;

/// WASM entry point: install logging, then mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();

    let loaded = config::PageConfig::from_document();
    let config = loaded.as_ref().map_or_else(|_| config::PageConfig::default(), Clone::clone);
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("console logger already installed: {err}").into());
    }
    if let Err(err) = loaded {
        log::warn!("using default page config: {err}");
    }
    log::info!("folio mounted");

    leptos::mount::mount_to_body(move || {
        use leptos::prelude::*;

        use crate::app::App;
        view! { <App config=config/> }
    });
}
