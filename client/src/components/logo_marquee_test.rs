use super::*;

#[test]
fn track_shifts_left_by_offset() {
    assert_eq!(track_style(0.0), "transform: translateX(-0.0px)");
    assert_eq!(track_style(12.5), "transform: translateX(-12.5px)");
}
