use super::*;

#[test]
fn parse_only_accepts_id_for_indonesian() {
    assert_eq!(Locale::parse("id"), Locale::Id);
    assert_eq!(Locale::parse(" id "), Locale::Id);
    assert_eq!(Locale::parse("en"), Locale::En);
    assert_eq!(Locale::parse("ID"), Locale::En);
    assert_eq!(Locale::parse("fr"), Locale::En);
    assert_eq!(Locale::parse(""), Locale::En);
}

#[test]
fn toggled_alternates_between_locales() {
    assert_eq!(Locale::En.toggled(), Locale::Id);
    assert_eq!(Locale::Id.toggled(), Locale::En);
    assert_eq!(Locale::En.toggled().toggled(), Locale::En);
}

#[test]
fn as_str_round_trips_through_parse() {
    for locale in Locale::ALL {
        assert_eq!(Locale::parse(locale.as_str()), locale);
    }
}

#[test]
fn every_translation_entry_is_present() {
    for locale in Locale::ALL {
        let strings = locale.translations().all_strings();
        assert!(strings.iter().all(|s| !s.trim().is_empty()), "blank entry in {locale:?}");
    }
}

#[test]
fn tables_have_the_same_shape() {
    assert_eq!(
        Locale::En.translations().all_strings().len(),
        Locale::Id.translations().all_strings().len()
    );
}

#[test]
fn tables_differ_per_locale() {
    assert_eq!(Locale::En.translations().nav.home, "Home");
    assert_eq!(Locale::Id.translations().nav.home, "Beranda");
    assert_eq!(Locale::En.translations().locale.other_label, "ID");
    assert_eq!(Locale::Id.translations().locale.other_label, "EN");
}

#[test]
fn locale_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Locale::Id).unwrap(), "\"id\"");
    assert_eq!(serde_json::from_str::<Locale>("\"en\"").unwrap(), Locale::En);
}
