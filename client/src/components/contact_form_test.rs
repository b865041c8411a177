use super::*;
use crate::i18n::Locale;

#[test]
fn banners_only_show_for_results() {
    assert_eq!(banner_class(SubmitStatus::Idle), None);
    assert_eq!(banner_class(SubmitStatus::Sending), None);
    assert!(banner_class(SubmitStatus::Succeeded).is_some_and(|c| c.ends_with("--success")));
    assert!(banner_class(SubmitStatus::Failed).is_some_and(|c| c.ends_with("--error")));
}

#[test]
fn banner_text_follows_status_and_locale() {
    for locale in Locale::ALL {
        let text = &locale.translations().contact;
        assert_eq!(banner_text(SubmitStatus::Succeeded, text), text.form_success);
        assert_eq!(banner_text(SubmitStatus::Failed, text), text.form_error);
    }
}
