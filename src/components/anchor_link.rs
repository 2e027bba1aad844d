//! In-page link with smooth scrolling.

use leptos::prelude::*;

use crate::util::scroll;

/// `<a>` that smooth-scrolls to its `#fragment` target when one exists and
/// falls back to normal navigation otherwise.
///
/// `on_follow` runs after every click, handled or not.
#[component]
pub fn AnchorLink(
    href: &'static str,
    #[prop(optional)] class: Option<&'static str>,
    #[prop(optional)] on_follow: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        match scroll::scroll_to_hash(href) {
            Ok(true) => ev.prevent_default(),
            Ok(false) => {}
            Err(err) => log::warn!("scroll: could not follow {href}: {err}"),
        }
        if let Some(callback) = on_follow {
            callback.run(());
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
