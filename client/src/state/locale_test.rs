use super::*;

#[test]
fn default_is_english() {
    assert_eq!(LocaleState::default().locale, Locale::En);
}

#[test]
fn toggle_alternates_between_locales() {
    let mut state = LocaleState::default();
    assert_eq!(state.toggle(), Locale::Id);
    assert_eq!(state.toggle(), Locale::En);
}

#[test]
fn set_reports_change() {
    let mut state = LocaleState::new(Locale::En);
    assert!(state.set(Locale::Id));
    assert!(!state.set(Locale::Id));
    assert_eq!(state.locale, Locale::Id);
}

#[test]
fn stored_preference_beats_fallback() {
    assert_eq!(LocaleState::from_stored(Some("id"), Locale::En).locale, Locale::Id);
    assert_eq!(LocaleState::from_stored(Some("en"), Locale::Id).locale, Locale::En);
    assert_eq!(LocaleState::from_stored(None, Locale::Id).locale, Locale::Id);
}

#[test]
fn garbage_stored_value_degrades_to_english() {
    assert_eq!(LocaleState::from_stored(Some("fr"), Locale::Id).locale, Locale::En);
}

#[test]
fn t_follows_active_locale() {
    let mut state = LocaleState::default();
    let en_home = state.t().nav.home;
    state.toggle();
    assert!(std::ptr::eq(state.t(), Locale::Id.translations()));
    assert_ne!(state.t().nav.home, en_home);
}
