//! Pure page models.
//!
//! DESIGN
//! ======
//! State is split by page behavior (`contact`, `theme`, `nav`) so each
//! component depends on a small focused model that can be tested without a
//! browser.

pub mod contact;
pub mod nav;
pub mod theme;
