use super::*;

#[test]
fn easing_hits_endpoints() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(3.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
}

#[test]
fn value_starts_at_zero_and_ends_at_target() {
    assert_eq!(value_at(500, 0.0, COUNT_UP_DURATION_MS), 0);
    assert_eq!(value_at(500, COUNT_UP_DURATION_MS, COUNT_UP_DURATION_MS), 500);
    assert_eq!(value_at(500, 10_000.0, COUNT_UP_DURATION_MS), 500);
}

#[test]
fn value_is_monotonic_over_time() {
    let mut last = 0;
    for step in 0..=130 {
        let v = value_at(150, f64::from(step) * 16.0, COUNT_UP_DURATION_MS);
        assert!(v >= last, "dropped from {last} to {v} at step {step}");
        last = v;
    }
    assert_eq!(last, 150);
}

#[test]
fn value_rounds_to_nearest() {
    // 11 * 0.875 = 9.625
    assert_eq!(value_at(11, 1_000.0, COUNT_UP_DURATION_MS), 10);
}

#[test]
fn zero_duration_jumps_to_target() {
    assert_eq!(value_at(42, 0.0, 0.0), 42);
}

#[test]
fn stat_values_split_into_number_and_suffix() {
    assert_eq!(split_stat_value("500K+"), (500, "K+"));
    assert_eq!(split_stat_value("11+"), (11, "+"));
    assert_eq!(split_stat_value("200"), (200, ""));
    assert_eq!(split_stat_value("ISO"), (0, "ISO"));
    assert_eq!(split_stat_value(""), (0, ""));
}

#[test]
fn latch_starts_once() {
    let mut latch = CountUp::default();
    assert!(latch.try_start());
    assert!(!latch.try_start());
    assert!(!latch.try_start());
}
