use super::*;

#[test]
fn header_turns_solid_when_scrolled_or_menu_open() {
    assert_eq!(header_class(false, false), "site-header");
    assert_eq!(header_class(true, false), "site-header site-header--solid");
    assert_eq!(header_class(false, true), "site-header site-header--solid");
}

#[test]
fn active_links_are_marked() {
    assert!(nav_link_class(true).contains("--active"));
    assert!(!nav_link_class(false).contains("--active"));
    assert!(mobile_link_class(true).contains("--active"));
}

#[test]
fn mobile_links_stagger_by_fifty_ms() {
    assert_eq!(mobile_delay_style(0), "transition-delay: 0ms");
    assert_eq!(mobile_delay_style(3), "transition-delay: 150ms");
}

#[test]
fn burger_lines_flag_open_state() {
    assert_eq!(burger_line_class(false, 1), "burger__line burger__line--1");
    assert_eq!(burger_line_class(true, 2), "burger__line burger__line--2 burger__line--open");
}
