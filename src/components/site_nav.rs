//! Collapsible site navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! On narrow viewports the nav collapses behind a toggle button. Following
//! any link inside it closes the menu again.

use leptos::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::state::nav::NavMenu;

/// One entry of the site navigation: `(href, label)`.
pub type NavLink = (&'static str, &'static str);

#[component]
pub fn SiteNav(links: &'static [NavLink]) -> impl IntoView {
    let menu = RwSignal::new(NavMenu::default());
    let close = Callback::new(move |()| menu.update(NavMenu::close));

    let on_toggle = move |_: leptos::ev::MouseEvent| {
        menu.update(|m| {
            let open = m.toggle();
            log::debug!("nav: open={open}");
        });
    };

    view! {
        <button
            id="nav-toggle"
            class="nav-toggle"
            type="button"
            aria-controls="nav"
            aria-label="Toggle navigation"
            aria-expanded=move || menu.get().aria_expanded()
            on:click=on_toggle
        >
            "☰"
        </button>
        <nav id="nav" class="nav" class:open=move || menu.get().open>
            {links
                .iter()
                .map(|(href, label)| view! { <AnchorLink href=*href on_follow=close>{*label}</AnchorLink> })
                .collect_view()}
        </nav>
    }
}
