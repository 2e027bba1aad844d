//! Page section that fades in on first scroll into view.

use leptos::prelude::*;

/// `<section>` carrying the `reveal` marker picked up by `util::reveal`.
#[component]
pub fn RevealSection(id: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section id=id class="section reveal">
            <h2 class="section__title">{title}</h2>
            {children()}
        </section>
    }
}
