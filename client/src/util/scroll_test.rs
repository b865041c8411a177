use super::*;

#[test]
fn header_compacts_strictly_after_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(20.0));
    assert!(is_scrolled(20.5));
    assert!(is_scrolled(400.0));
}

#[test]
fn timeline_progress_is_zero_before_entering() {
    assert_eq!(timeline_progress(900.0, 1200.0, 800.0), 0.0);
    assert_eq!(timeline_progress(800.0, 1200.0, 800.0), 0.0);
}

#[test]
fn timeline_progress_grows_while_scrolling() {
    // span = 1200 + 240 = 1440
    let p = timeline_progress(80.0, 1200.0, 800.0);
    assert!((p - 0.5).abs() < 1e-9);
    assert!(timeline_progress(-100.0, 1200.0, 800.0) > p);
}

#[test]
fn timeline_progress_saturates_at_one() {
    assert_eq!(timeline_progress(-2000.0, 1200.0, 800.0), 1.0);
}

#[test]
fn timeline_progress_handles_degenerate_sizes() {
    assert_eq!(timeline_progress(0.0, 0.0, 0.0), 0.0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_reads_default_to_zero() {
    assert_eq!(scroll_y(), 0.0);
    assert_eq!(viewport_height(), 0.0);
    scroll_to_top();
}
