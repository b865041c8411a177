use super::*;

#[test]
fn delays_step_two_hundred_ms_per_item() {
    assert_eq!(dot_delay_ms(0), 100);
    assert_eq!(card_delay_ms(0), 300);
    assert_eq!(dot_delay_ms(3), 700);
    assert_eq!(card_delay_ms(3), 900);
    assert_eq!(end_dot_delay_ms(6), 1_600);
}

#[test]
fn items_alternate_sides() {
    assert!(is_left(0));
    assert!(!is_left(1));
    assert!(is_left(4));
}

#[test]
fn icons_fall_back_to_first() {
    assert_eq!(icon_path(9), ICONS[0]);
    assert_eq!(icon_path(5), ICONS[5]);
}

#[test]
fn visible_class_is_appended() {
    assert_eq!(with_visible("timeline-dot", false), "timeline-dot");
    assert_eq!(with_visible("timeline-dot", true), "timeline-dot anim-visible");
}

#[test]
fn fill_style_is_percentage() {
    assert_eq!(fill_style(0.0), "height: 0.00%");
    assert_eq!(fill_style(0.5), "height: 50.00%");
    assert_eq!(fill_style(1.0), "height: 100.00%");
}
