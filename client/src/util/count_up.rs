//! Count-up animation math.
//!
//! Values run from 0 to the target over [`COUNT_UP_DURATION_MS`] with a cubic
//! ease-out and are rounded to whole numbers. The [`CountUp`] latch makes the
//! animation start at most once per element.

#[cfg(test)]
#[path = "count_up_test.rs"]
mod count_up_test;

pub const COUNT_UP_DURATION_MS: f64 = 2_000.0;

/// `1 - (1 - p)^3` with `p` clamped to `[0, 1]`.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Displayed value `elapsed_ms` into an animation towards `target`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn value_at(target: u64, elapsed_ms: f64, duration_ms: f64) -> u64 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    let eased = ease_out_cubic(elapsed_ms / duration_ms);
    ((target as f64) * eased).round().max(0.0) as u64
}

/// Split a stat display string into its leading number and suffix.
///
/// `"500K+"` gives `(500, "K+")`. A string with no leading digits counts
/// from zero to zero and keeps the whole text as suffix.
pub fn split_stat_value(raw: &str) -> (u64, &str) {
    let digits = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
    let number = raw[..digits].parse().unwrap_or(0);
    (number, &raw[digits..])
}

/// One-shot start latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountUp {
    started: bool,
}

impl CountUp {
    /// True exactly once, on the first call.
    pub fn try_start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }
}
