//! Static site content and the accessors pages read it through.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no data backend: products, statistics, milestones, client
//! logos and contact details are literals compiled into the binary. Pages go
//! through these functions rather than the raw tables so a remote source can
//! replace them later without touching components (see `net::cms`).

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

mod about;
mod contact;
mod homepage;
mod products;
pub mod types;

pub use contact::{CONTACT_PHONE, DEFAULT_CONTACT_EMAIL, DEFAULT_MAP_EMBED_URL};
pub use types::{ClientLogo, ContactInfo, LocalizedField, Product, ProductCategory, Stat, TimelineEvent};

use crate::config::SiteConfig;

/// Every catalog product, in catalog order.
#[must_use]
pub fn all_products() -> &'static [Product] {
    &products::PRODUCTS
}

/// Products flagged for the home page highlight.
#[must_use]
pub fn featured_products() -> Vec<&'static Product> {
    all_products().iter().filter(|p| p.featured).collect()
}

/// Products passing `category`; `All` passes everything through.
#[must_use]
pub fn products_by_category(category: ProductCategory) -> Vec<&'static Product> {
    all_products().iter().filter(|p| category.matches(p.category)).collect()
}

#[must_use]
pub fn product_by_id(id: &str) -> Option<&'static Product> {
    all_products().iter().find(|p| p.id == id)
}

#[must_use]
pub fn stats() -> &'static [Stat] {
    &about::STATS
}

#[must_use]
pub fn timeline() -> &'static [TimelineEvent] {
    &about::TIMELINE
}

#[must_use]
pub fn client_logos() -> &'static [ClientLogo] {
    &homepage::CLIENT_LOGOS
}

/// Contact details with the configured email and map overrides applied.
#[must_use]
pub fn contact_info(config: &SiteConfig) -> ContactInfo {
    ContactInfo {
        email: config
            .contact_email
            .clone()
            .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_owned()),
        phone: CONTACT_PHONE,
        address: contact::CONTACT_ADDRESS,
        map_embed_url: config
            .maps_embed_url
            .clone()
            .unwrap_or_else(|| DEFAULT_MAP_EMBED_URL.to_owned()),
    }
}
