//! Locale preference persistence.
//!
//! Reads and writes the chosen locale under a `localStorage` key and mirrors
//! it onto `<html lang>`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op so the
//! server always renders the configured default locale.

#[cfg(test)]
#[path = "locale_pref_test.rs"]
mod locale_pref_test;

use crate::i18n::Locale;

pub const STORAGE_KEY: &str = "cmp-locale";

/// Raw stored preference, if any.
pub fn read_stored() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Set `lang` on the `<html>` element.
pub fn apply(locale: Locale) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", locale.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locale;
    }
}

/// Apply `locale` and write it back to localStorage.
pub fn persist(locale: Locale) {
    apply(locale);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, locale.as_str());
            }
        }
    }
}
