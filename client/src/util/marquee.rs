//! Logo marquee offset.
//!
//! The strip holds three copies of the logo list. Advancing past one copy's
//! width jumps back to zero, which looks seamless because the next copy is
//! identical.

#[cfg(test)]
#[path = "marquee_test.rs"]
mod marquee_test;

pub const MARQUEE_SPEED_PX: f64 = 0.5;
pub const MARQUEE_COPIES: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Marquee {
    pub offset: f64,
}

impl Marquee {
    /// Advance one frame given the strip's full `scroll_width`.
    pub fn tick(&mut self, scroll_width: f64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let set_width = scroll_width / MARQUEE_COPIES as f64;
        self.offset += MARQUEE_SPEED_PX;
        if set_width <= 0.0 || self.offset >= set_width {
            self.offset = 0.0;
        }
        self.offset
    }
}
