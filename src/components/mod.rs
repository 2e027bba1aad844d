//! Leptos view components for the portfolio page.
//!
//! ARCHITECTURE
//! ============
//! Components read page-wide state (`PageConfig`, the theme signal) from
//! context and keep their own local signals. Rules live in `state`; browser
//! side effects go through `util`.

pub mod anchor_link;
pub mod contact_form;
pub mod reveal_section;
pub mod site_footer;
pub mod site_nav;
pub mod theme_toggle;
