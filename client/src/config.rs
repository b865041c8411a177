//! Site configuration parsed from `CMP_*` variables.
//!
//! The WASM bundle cannot read the process environment, so the values are
//! captured at build time with `option_env!`. SSR and hydration compile from
//! the same environment and therefore render identical markup. Parsing goes
//! through [`SiteConfig::from_lookup`] so tests can feed arbitrary maps.
//!
//! Every option is optional; missing or blank values fall back to the
//! documented defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::LazyLock;

use crate::i18n::Locale;
use crate::net::cms::CmsProvider;

pub const ENV_CLOUDINARY_CLOUD_NAME: &str = "CMP_CLOUDINARY_CLOUD_NAME";
pub const ENV_CMS_PROVIDER: &str = "CMP_CMS_PROVIDER";
pub const ENV_CMS_API_URL: &str = "CMP_CMS_API_URL";
pub const ENV_CMS_API_KEY: &str = "CMP_CMS_API_KEY";
pub const ENV_MAPS_EMBED_URL: &str = "CMP_MAPS_EMBED_URL";
pub const ENV_CONTACT_FORM_ENDPOINT: &str = "CMP_CONTACT_FORM_ENDPOINT";
pub const ENV_CONTACT_EMAIL: &str = "CMP_CONTACT_EMAIL";
pub const ENV_GA_MEASUREMENT_ID: &str = "CMP_GA_MEASUREMENT_ID";
pub const ENV_GTM_ID: &str = "CMP_GTM_ID";
pub const ENV_DEFAULT_LOCALE: &str = "CMP_DEFAULT_LOCALE";
pub const ENV_SITE_URL: &str = "CMP_SITE_URL";

pub const DEFAULT_CLOUDINARY_CLOUD_NAME: &str = "demo";
pub const DEFAULT_CONTACT_FORM_ENDPOINT: &str = "https://formspree.io/f/meelvrlp";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub cloudinary_cloud_name: String,
    pub cms_provider: CmsProvider,
    pub cms_api_url: String,
    pub cms_api_key: String,
    pub maps_embed_url: Option<String>,
    pub contact_form_endpoint: String,
    pub contact_email: Option<String>,
    pub ga_measurement_id: Option<String>,
    pub gtm_id: Option<String>,
    pub default_locale: Locale,
    pub site_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SiteConfig {
    /// Build a config from a key lookup.
    ///
    /// Optional (all):
    /// - `CMP_CLOUDINARY_CLOUD_NAME`: default `demo`
    /// - `CMP_CMS_PROVIDER`: `static` (default) or a remote provider name
    /// - `CMP_CMS_API_URL`, `CMP_CMS_API_KEY`: unused in static mode
    /// - `CMP_MAPS_EMBED_URL`: replaces the built-in map iframe URL
    /// - `CMP_CONTACT_FORM_ENDPOINT`: default Formspree form
    /// - `CMP_CONTACT_EMAIL`: replaces the built-in contact address
    /// - `CMP_GA_MEASUREMENT_ID`, `CMP_GTM_ID`: recorded only
    /// - `CMP_DEFAULT_LOCALE`: `en` (default) or `id`
    /// - `CMP_SITE_URL`: default `http://localhost:3000`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        Self {
            cloudinary_cloud_name: get(ENV_CLOUDINARY_CLOUD_NAME)
                .unwrap_or_else(|| DEFAULT_CLOUDINARY_CLOUD_NAME.to_owned()),
            cms_provider: CmsProvider::parse(get(ENV_CMS_PROVIDER).as_deref()),
            cms_api_url: get(ENV_CMS_API_URL)
                .map(|url| url.trim_end_matches('/').to_owned())
                .unwrap_or_default(),
            cms_api_key: get(ENV_CMS_API_KEY).unwrap_or_default(),
            maps_embed_url: get(ENV_MAPS_EMBED_URL),
            contact_form_endpoint: get(ENV_CONTACT_FORM_ENDPOINT)
                .unwrap_or_else(|| DEFAULT_CONTACT_FORM_ENDPOINT.to_owned()),
            contact_email: get(ENV_CONTACT_EMAIL),
            ga_measurement_id: get(ENV_GA_MEASUREMENT_ID),
            gtm_id: get(ENV_GTM_ID),
            default_locale: get(ENV_DEFAULT_LOCALE).map_or(Locale::En, |raw| Locale::parse(&raw)),
            site_url: get(ENV_SITE_URL)
                .map(|url| url.trim_end_matches('/').to_owned())
                .unwrap_or_else(|| DEFAULT_SITE_URL.to_owned()),
        }
    }

    /// Process-wide config captured from the build environment.
    #[must_use]
    pub fn current() -> &'static SiteConfig {
        static CURRENT: LazyLock<SiteConfig> = LazyLock::new(|| SiteConfig::from_lookup(build_env));
        &CURRENT
    }

    /// Whether any analytics identifier is configured.
    #[must_use]
    pub fn analytics_enabled(&self) -> bool {
        self.ga_measurement_id.is_some() || self.gtm_id.is_some()
    }
}

fn build_env(key: &str) -> Option<String> {
    let raw = match key {
        ENV_CLOUDINARY_CLOUD_NAME => option_env!("CMP_CLOUDINARY_CLOUD_NAME"),
        ENV_CMS_PROVIDER => option_env!("CMP_CMS_PROVIDER"),
        ENV_CMS_API_URL => option_env!("CMP_CMS_API_URL"),
        ENV_CMS_API_KEY => option_env!("CMP_CMS_API_KEY"),
        ENV_MAPS_EMBED_URL => option_env!("CMP_MAPS_EMBED_URL"),
        ENV_CONTACT_FORM_ENDPOINT => option_env!("CMP_CONTACT_FORM_ENDPOINT"),
        ENV_CONTACT_EMAIL => option_env!("CMP_CONTACT_EMAIL"),
        ENV_GA_MEASUREMENT_ID => option_env!("CMP_GA_MEASUREMENT_ID"),
        ENV_GTM_ID => option_env!("CMP_GTM_ID"),
        ENV_DEFAULT_LOCALE => option_env!("CMP_DEFAULT_LOCALE"),
        ENV_SITE_URL => option_env!("CMP_SITE_URL"),
        _ => None,
    };
    raw.map(str::to_owned)
}
