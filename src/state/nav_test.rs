use super::*;

#[test]
fn nav_starts_closed() {
    let nav = NavMenu::default();
    assert!(!nav.open);
    assert_eq!(nav.aria_expanded(), "false");
}

#[test]
fn toggle_opens_then_closes() {
    let mut nav = NavMenu::default();
    assert!(nav.toggle());
    assert_eq!(nav.aria_expanded(), "true");
    assert!(!nav.toggle());
    assert_eq!(nav.aria_expanded(), "false");
}

#[test]
fn close_is_idempotent() {
    let mut nav = NavMenu { open: true };
    nav.close();
    nav.close();
    assert_eq!(nav, NavMenu::default());
}
