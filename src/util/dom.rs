//! Fallible accessors for the browser globals.

use web_sys::{Document, Element, Storage, Window};

use crate::error::PageError;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

/// The `<html>` element.
pub fn root_element() -> Result<Element, PageError> {
    document()?.document_element().ok_or(PageError::NoDocument)
}

pub fn local_storage() -> Result<Storage, PageError> {
    window()?.local_storage()?.ok_or(PageError::NoStorage)
}
