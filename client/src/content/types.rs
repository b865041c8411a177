//! Content records shared by pages and components.
//!
//! All records are `'static` literals; nothing here is mutated after startup.

use serde::{Deserialize, Serialize};

use crate::i18n::{CategoryText, Locale};

/// A pair of strings keyed by locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LocalizedField {
    pub en: &'static str,
    pub id: &'static str,
}

impl LocalizedField {
    #[must_use]
    pub const fn new(en: &'static str, id: &'static str) -> Self {
        Self { en, id }
    }

    #[must_use]
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Id => self.id,
        }
    }
}

/// Fixed product classification.
///
/// `All` is a filter value only; catalog records always carry a concrete
/// category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "2wheel")]
    TwoWheel,
    #[serde(rename = "4wheel")]
    FourWheel,
    #[serde(rename = "household")]
    Household,
    #[serde(rename = "screenOil")]
    ScreenOil,
    #[serde(rename = "rubber")]
    Rubber,
    #[serde(rename = "cnc")]
    Cnc,
    #[serde(rename = "pvc")]
    Pvc,
    #[serde(rename = "others")]
    Others,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 9] = [
        Self::All,
        Self::TwoWheel,
        Self::FourWheel,
        Self::Household,
        Self::ScreenOil,
        Self::Rubber,
        Self::Cnc,
        Self::Pvc,
        Self::Others,
    ];

    /// Categories offered as catalog tabs, in display order.
    pub const TABS: [ProductCategory; 7] = [
        Self::All,
        Self::TwoWheel,
        Self::FourWheel,
        Self::Household,
        Self::ScreenOil,
        Self::Rubber,
        Self::Others,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::TwoWheel => "2wheel",
            Self::FourWheel => "4wheel",
            Self::Household => "household",
            Self::ScreenOil => "screenOil",
            Self::Rubber => "rubber",
            Self::Cnc => "cnc",
            Self::Pvc => "pvc",
            Self::Others => "others",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }

    #[must_use]
    pub fn label(self, text: &CategoryText) -> &'static str {
        match self {
            Self::All => text.all,
            Self::TwoWheel => text.two_wheel,
            Self::FourWheel => text.four_wheel,
            Self::Household => text.household,
            Self::ScreenOil => text.screen_oil,
            Self::Rubber => text.rubber,
            Self::Cnc => text.cnc,
            Self::Pvc => text.pvc,
            Self::Others => text.others,
        }
    }

    /// Whether a product in category `other` passes this filter.
    #[must_use]
    pub fn matches(self, other: ProductCategory) -> bool {
        self == Self::All || self == other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: LocalizedField,
    pub description: LocalizedField,
    pub category: ProductCategory,
    pub image: &'static str,
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    pub year: &'static str,
    pub title: LocalizedField,
    pub description: LocalizedField,
}

/// Headline figure on the about page. `value` is a display string like `"500K+"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: LocalizedField,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClientLogo {
    pub name: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: &'static str,
    pub address: LocalizedField,
    pub map_embed_url: String,
}
