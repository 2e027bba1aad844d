//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::state::theme::Theme;
use crate::util::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let config = expect_context::<PageConfig>();
    let current = expect_context::<RwSignal<Theme>>();
    let storage_key = config.theme_storage_key;

    let on_click = move |_: leptos::ev::MouseEvent| {
        let next = theme::toggle(&storage_key, current.get_untracked());
        current.set(next);
    };

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            type="button"
            aria-label="Toggle color theme"
            on:click=on_click
        >
            {move || current.get().toggle_icon()}
        </button>
    }
}
