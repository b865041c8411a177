use std::collections::HashSet;

use super::*;
use crate::i18n::Locale;

fn assert_localized(field: &LocalizedField) {
    for locale in Locale::ALL {
        assert!(!field.get(locale).trim().is_empty(), "missing {locale:?} text in {field:?}");
    }
}

#[test]
fn catalog_has_fifteen_products_with_unique_ids() {
    assert_eq!(all_products().len(), 15);
    let ids = all_products().iter().map(|p| p.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), 15);
}

#[test]
fn products_never_use_the_all_filter_as_category() {
    assert!(all_products().iter().all(|p| p.category != ProductCategory::All));
}

#[test]
fn every_record_is_fully_localized() {
    for product in all_products() {
        assert_localized(&product.name);
        assert_localized(&product.description);
    }
    for event in timeline() {
        assert_localized(&event.title);
        assert_localized(&event.description);
    }
    for stat in stats() {
        assert_localized(&stat.label);
    }
    assert_localized(&contact_info(&SiteConfig::default()).address);
}

#[test]
fn all_category_returns_full_catalog() {
    assert_eq!(products_by_category(ProductCategory::All).len(), all_products().len());
}

#[test]
fn specific_category_returns_exact_subset() {
    for category in ProductCategory::ALL.into_iter().skip(1) {
        let filtered = products_by_category(category);
        let expected = all_products().iter().filter(|p| p.category == category).count();
        assert_eq!(filtered.len(), expected, "{category:?}");
        assert!(filtered.iter().all(|p| p.category == category));
    }
    assert_eq!(products_by_category(ProductCategory::Household).len(), 3);
    assert!(products_by_category(ProductCategory::Cnc).is_empty());
}

#[test]
fn featured_products_are_flagged() {
    let featured = featured_products();
    assert_eq!(featured.len(), 8);
    assert!(featured.iter().all(|p| p.featured));
}

#[test]
fn product_by_id_finds_known_and_rejects_unknown() {
    assert_eq!(product_by_id("prod-004").map(|p| p.name.en), Some("Car Door Hinge"));
    assert!(product_by_id("prod-999").is_none());
}

#[test]
fn static_section_sizes() {
    assert_eq!(stats().len(), 4);
    assert_eq!(timeline().len(), 6);
    assert_eq!(client_logos().len(), 9);
}

#[test]
fn contact_info_uses_defaults_without_overrides() {
    let info = contact_info(&SiteConfig::default());
    assert_eq!(info.email, DEFAULT_CONTACT_EMAIL);
    assert_eq!(info.phone, CONTACT_PHONE);
    assert_eq!(info.map_embed_url, DEFAULT_MAP_EMBED_URL);
}

#[test]
fn contact_info_applies_overrides() {
    let config = SiteConfig {
        contact_email: Some("sales@example.test".to_owned()),
        maps_embed_url: Some("https://maps.example.test/embed".to_owned()),
        ..SiteConfig::default()
    };
    let info = contact_info(&config);
    assert_eq!(info.email, "sales@example.test");
    assert_eq!(info.map_embed_url, "https://maps.example.test/embed");
}

#[test]
fn category_slugs_round_trip() {
    for category in ProductCategory::ALL {
        assert_eq!(ProductCategory::parse(category.as_str()), Some(category));
    }
    assert_eq!(ProductCategory::parse("boats"), None);
    assert_eq!(
        serde_json::to_string(&ProductCategory::ScreenOil).unwrap(),
        "\"screenOil\""
    );
}
