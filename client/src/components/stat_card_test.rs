use super::*;

#[test]
fn value_is_rendered_with_suffix() {
    assert_eq!(format_stat(0, "K+"), "0K+");
    assert_eq!(format_stat(500, "K+"), "500K+");
    assert_eq!(format_stat(11, "+"), "11+");
}

#[test]
fn cards_stagger_by_120_ms() {
    assert_eq!(card_delay_ms(0), 0);
    assert_eq!(card_delay_ms(3), 360);
}

#[test]
fn icons_cycle() {
    assert_eq!(icon_path(0), ICONS[0]);
    assert_eq!(icon_path(5), ICONS[1]);
}
