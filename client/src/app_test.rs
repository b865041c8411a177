use super::*;
use crate::i18n::Locale;

#[test]
fn home_title_is_company_name() {
    assert_eq!(page_title(Page::Home, Locale::En.translations()), COMPANY_NAME);
}

#[test]
fn other_titles_are_prefixed_with_localized_label() {
    for locale in Locale::ALL {
        let t = locale.translations();
        assert_eq!(
            page_title(Page::Products, t),
            format!("{} | {COMPANY_NAME}", t.nav.products)
        );
    }
}
