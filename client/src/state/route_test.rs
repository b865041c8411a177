use super::*;
use crate::i18n::Locale;

#[test]
fn canonical_paths_round_trip() {
    for page in Page::ALL {
        assert_eq!(Page::from_path(page.path()), page);
        assert_eq!(Page::parse(page.as_str()), Some(page));
    }
}

#[test]
fn unknown_paths_resolve_to_home() {
    for path in ["", "/", "//", "/nope", "/about/team", "/PRODUCTS"] {
        assert_eq!(Page::from_path(path), Page::Home, "{path}");
    }
}

#[test]
fn trailing_slash_and_query_are_ignored() {
    assert_eq!(Page::from_path("/products/"), Page::Products);
    assert_eq!(Page::from_path("/contact?ref=footer"), Page::Contact);
    assert_eq!(Page::from_path("/about#top"), Page::About);
}

#[test]
fn valid_fragment_wins_over_path() {
    assert_eq!(Page::from_location("/", "#products"), Page::Products);
    assert_eq!(Page::from_location("/about", "contact"), Page::Contact);
}

#[test]
fn invalid_fragment_falls_back_to_path() {
    assert_eq!(Page::from_location("/about", "#team"), Page::About);
    assert_eq!(Page::from_location("/nowhere", "#"), Page::Home);
    assert_eq!(Page::from_location("/contact", ""), Page::Contact);
}

#[test]
fn nav_labels_come_from_translations() {
    let nav = &Locale::Id.translations().nav;
    assert_eq!(Page::About.nav_label(nav), nav.about);
    assert_eq!(Page::Home.nav_label(nav), nav.home);
}
