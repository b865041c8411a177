use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> SiteConfig {
    let map = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    SiteConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.cloudinary_cloud_name, DEFAULT_CLOUDINARY_CLOUD_NAME);
    assert_eq!(cfg.cms_provider, CmsProvider::Static);
    assert_eq!(cfg.cms_api_url, "");
    assert_eq!(cfg.cms_api_key, "");
    assert_eq!(cfg.maps_embed_url, None);
    assert_eq!(cfg.contact_form_endpoint, DEFAULT_CONTACT_FORM_ENDPOINT);
    assert_eq!(cfg.contact_email, None);
    assert_eq!(cfg.default_locale, Locale::En);
    assert_eq!(cfg.site_url, DEFAULT_SITE_URL);
    assert!(!cfg.analytics_enabled());
}

#[test]
fn overrides_are_trimmed_and_applied() {
    let cfg = config_from(&[
        (ENV_CLOUDINARY_CLOUD_NAME, " cmp-cloud "),
        (ENV_CMS_PROVIDER, "strapi"),
        (ENV_CMS_API_URL, "https://cms.example.test/api/"),
        (ENV_CMS_API_KEY, "secret"),
        (ENV_CONTACT_FORM_ENDPOINT, "https://forms.example.test/submit"),
        (ENV_DEFAULT_LOCALE, "id"),
        (ENV_SITE_URL, "https://cmpindustri.com/"),
        (ENV_GTM_ID, "GTM-123"),
    ]);
    assert_eq!(cfg.cloudinary_cloud_name, "cmp-cloud");
    assert_eq!(cfg.cms_provider, CmsProvider::Remote("strapi".to_owned()));
    assert_eq!(cfg.cms_api_url, "https://cms.example.test/api");
    assert_eq!(cfg.cms_api_key, "secret");
    assert_eq!(cfg.contact_form_endpoint, "https://forms.example.test/submit");
    assert_eq!(cfg.default_locale, Locale::Id);
    assert_eq!(cfg.site_url, "https://cmpindustri.com");
    assert!(cfg.analytics_enabled());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[(ENV_CLOUDINARY_CLOUD_NAME, "   "), (ENV_CONTACT_EMAIL, "")]);
    assert_eq!(cfg.cloudinary_cloud_name, DEFAULT_CLOUDINARY_CLOUD_NAME);
    assert_eq!(cfg.contact_email, None);
}

#[test]
fn unknown_default_locale_degrades_to_english() {
    assert_eq!(config_from(&[(ENV_DEFAULT_LOCALE, "de")]).default_locale, Locale::En);
}

#[test]
fn current_is_stable_across_calls() {
    assert!(std::ptr::eq(SiteConfig::current(), SiteConfig::current()));
}
