#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_stored_is_none_outside_browser() {
    assert_eq!(read_stored("theme"), None);
}

#[test]
fn restore_falls_back_to_dark() {
    assert_eq!(restore("theme"), Theme::Dark);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle("theme", Theme::Dark), Theme::Light);
    assert_eq!(toggle("theme", Theme::Light), Theme::Dark);
}

#[test]
fn apply_and_persist_are_callable() {
    apply(Theme::Light);
    persist("theme", Theme::Dark);
}
