//! Active locale store.
//!
//! Provided app-wide as `RwSignal<LocaleState>`. Transitions are pure; the
//! component that calls them is responsible for persisting the result with
//! `util::locale_pref`.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use crate::i18n::{Locale, Translations};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocaleState {
    pub locale: Locale,
}

impl LocaleState {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Start from a stored preference when there is one, else `fallback`.
    pub fn from_stored(stored: Option<&str>, fallback: Locale) -> Self {
        Self::new(stored.map_or(fallback, Locale::parse))
    }

    /// Switch to the other locale and return it.
    pub fn toggle(&mut self) -> Locale {
        self.locale = self.locale.toggled();
        self.locale
    }

    /// Select `locale`. Returns whether anything changed.
    pub fn set(&mut self, locale: Locale) -> bool {
        let changed = self.locale != locale;
        self.locale = locale;
        changed
    }

    /// Translation table for the active locale.
    pub fn t(&self) -> &'static Translations {
        self.locale.translations()
    }
}
