//! Browser helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from component logic. Each helper
//! compiles to a no-op outside the `csr` build so components and their pure
//! rules stay testable natively.

pub mod clock;
#[cfg(feature = "csr")]
pub mod dom;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod validation;
