//! Page footer with the current year.

use leptos::prelude::*;

use crate::util::clock;

#[component]
pub fn SiteFooter(owner: &'static str) -> impl IntoView {
    let year = clock::current_year().map(|y| y.to_string());

    view! {
        <footer class="site-footer">
            <p>"© " <span id="year">{year}</span> " " {owner}</p>
        </footer>
    }
}
