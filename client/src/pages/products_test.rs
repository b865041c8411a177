use super::*;
use crate::i18n::Locale;

#[test]
fn showing_label_reads_naturally() {
    let text = &Locale::En.translations().products;
    let label = showing_label(text, (1, 6, 15));
    assert_eq!(
        label,
        format!("{} 1–6 {} 15 {}", text.showing, text.of, text.products_label)
    );
}

#[test]
fn items_stagger_by_sixty_ms() {
    assert_eq!(item_delay_style(0), "animation-delay: 0ms");
    assert_eq!(item_delay_style(5), "animation-delay: 300ms");
}

#[test]
fn layout_classes_follow_view_mode() {
    assert_eq!(list_class(ViewMode::Grid), "catalog__grid");
    assert_eq!(list_class(ViewMode::List), "catalog__list");
    assert!(view_button_class(true).ends_with("--active"));
    assert!(page_button_class(true).ends_with("--current"));
    assert_eq!(page_button_class(false), "pagination__page");
}
