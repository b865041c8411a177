//! Locale selection and static translation tables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user-facing string the site renders lives in one of two static
//! tables (`en`, `id`). Components read the active table through the locale
//! store in `state::locale` and never hard-code copy.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

mod en;
mod id;

use serde::{Deserialize, Serialize};

/// Language variant of displayed text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Id,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Id];

    /// Parse a stored or configured locale string.
    ///
    /// Only `"id"` selects Indonesian; anything else degrades to English.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "id" { Self::Id } else { Self::En }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Id => "id",
        }
    }

    /// The other supported locale.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Id,
            Self::Id => Self::En,
        }
    }

    /// Active translation table for this locale.
    #[must_use]
    pub fn translations(self) -> &'static Translations {
        match self {
            Self::En => &en::EN,
            Self::Id => &id::ID,
        }
    }
}

/// Full translation table for one locale.
#[derive(Debug)]
pub struct Translations {
    pub nav: NavText,
    pub hero: HeroText,
    pub home: HomeText,
    pub about: AboutText,
    pub products: ProductsText,
    pub contact: ContactText,
    pub footer: FooterText,
    pub locale: LocaleText,
}

#[derive(Debug)]
pub struct NavText {
    pub home: &'static str,
    pub about: &'static str,
    pub products: &'static str,
    pub contact: &'static str,
}

#[derive(Debug)]
pub struct HeroText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
}

#[derive(Debug)]
pub struct HomeText {
    pub trusted_by: &'static str,
    pub featured_products: &'static str,
    pub featured_desc: &'static str,
    pub view_all: &'static str,
}

#[derive(Debug)]
pub struct AboutText {
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub who_we_are: &'static str,
    pub company_title: &'static str,
    pub company_desc: &'static str,
    pub company_desc2: &'static str,
    pub iso_certified: &'static str,
    pub global_reach: &'static str,
    pub certified: &'static str,
    pub stats_years: &'static str,
    pub by_the_numbers: &'static str,
    pub impact_title: &'static str,
    pub our_purpose: &'static str,
    pub vision_mission: &'static str,
    pub vision_title: &'static str,
    pub vision_desc: &'static str,
    pub mission_title: &'static str,
    pub missions: [&'static str; 4],
    pub our_journey: &'static str,
    pub timeline_title: &'static str,
    pub timeline_desc: &'static str,
    pub cta_title: &'static str,
    pub cta_desc: &'static str,
    pub cta_button: &'static str,
}

#[derive(Debug)]
pub struct ProductsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub showing: &'static str,
    pub of: &'static str,
    pub products_label: &'static str,
    pub grid_view: &'static str,
    pub list_view: &'static str,
    pub view_details: &'static str,
    pub no_products: &'static str,
    pub prev: &'static str,
    pub next: &'static str,
    pub categories: CategoryText,
}

/// Localized labels for every product category.
#[derive(Debug)]
pub struct CategoryText {
    pub all: &'static str,
    pub two_wheel: &'static str,
    pub four_wheel: &'static str,
    pub household: &'static str,
    pub screen_oil: &'static str,
    pub rubber: &'static str,
    pub cnc: &'static str,
    pub pvc: &'static str,
    pub others: &'static str,
}

#[derive(Debug)]
pub struct ContactText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub send_us_message: &'static str,
    pub contact_information: &'static str,
    pub reach_out: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub office_hours: &'static str,
    pub office_hours_value: &'static str,
    pub form_name: &'static str,
    pub form_email: &'static str,
    pub form_subject: &'static str,
    pub form_message: &'static str,
    pub placeholder_name: &'static str,
    pub placeholder_email: &'static str,
    pub placeholder_subject: &'static str,
    pub placeholder_message: &'static str,
    pub form_submit: &'static str,
    pub form_sending: &'static str,
    pub form_success: &'static str,
    pub form_error: &'static str,
}

#[derive(Debug)]
pub struct FooterText {
    pub description: &'static str,
    pub quick_links: &'static str,
    pub contact_info: &'static str,
    pub location: &'static str,
    pub rights: &'static str,
    pub privacy: &'static str,
    pub terms: &'static str,
}

/// Copy for the locale switcher.
#[derive(Debug)]
pub struct LocaleText {
    /// Short code of the current language, shown bold in the switch.
    pub switch_label: &'static str,
    /// Full name of the current language, used in the mobile menu.
    pub current: &'static str,
    /// Short code of the language a toggle switches to.
    pub other_label: &'static str,
    /// Full name of the language a toggle switches to.
    pub other_name: &'static str,
}

impl Translations {
    /// Every string in the table, used to check that no entry is blank.
    #[must_use]
    pub fn all_strings(&self) -> Vec<&'static str> {
        let Self { nav, hero, home, about, products, contact, footer, locale } = self;
        let mut out = vec![
            nav.home,
            nav.about,
            nav.products,
            nav.contact,
            hero.title,
            hero.subtitle,
            hero.cta,
            home.trusted_by,
            home.featured_products,
            home.featured_desc,
            home.view_all,
            about.hero_title,
            about.hero_subtitle,
            about.who_we_are,
            about.company_title,
            about.company_desc,
            about.company_desc2,
            about.iso_certified,
            about.global_reach,
            about.certified,
            about.stats_years,
            about.by_the_numbers,
            about.impact_title,
            about.our_purpose,
            about.vision_mission,
            about.vision_title,
            about.vision_desc,
            about.mission_title,
            about.our_journey,
            about.timeline_title,
            about.timeline_desc,
            about.cta_title,
            about.cta_desc,
            about.cta_button,
            products.title,
            products.subtitle,
            products.showing,
            products.of,
            products.products_label,
            products.grid_view,
            products.list_view,
            products.view_details,
            products.no_products,
            products.prev,
            products.next,
            products.categories.all,
            products.categories.two_wheel,
            products.categories.four_wheel,
            products.categories.household,
            products.categories.screen_oil,
            products.categories.rubber,
            products.categories.cnc,
            products.categories.pvc,
            products.categories.others,
            contact.title,
            contact.subtitle,
            contact.send_us_message,
            contact.contact_information,
            contact.reach_out,
            contact.phone,
            contact.email,
            contact.address,
            contact.office_hours,
            contact.office_hours_value,
            contact.form_name,
            contact.form_email,
            contact.form_subject,
            contact.form_message,
            contact.placeholder_name,
            contact.placeholder_email,
            contact.placeholder_subject,
            contact.placeholder_message,
            contact.form_submit,
            contact.form_sending,
            contact.form_success,
            contact.form_error,
            footer.description,
            footer.quick_links,
            footer.contact_info,
            footer.location,
            footer.rights,
            footer.privacy,
            footer.terms,
            locale.switch_label,
            locale.current,
            locale.other_label,
            locale.other_name,
        ];
        out.extend(about.missions);
        out
    }
}
