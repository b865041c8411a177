#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn nothing_is_stored_outside_the_browser() {
    assert_eq!(read_stored(), None);
}

#[test]
fn persist_and_apply_are_noops_but_callable() {
    apply(Locale::Id);
    persist(Locale::En);
}

#[test]
fn storage_key_is_stable() {
    assert_eq!(STORAGE_KEY, "cmp-locale");
}
