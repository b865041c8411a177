//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and animation math
//! from page and component logic to improve reuse and testability.

pub mod animation_frame;
pub mod clock;
pub mod cloudinary;
pub mod count_up;
pub mod locale_pref;
pub mod marquee;
pub mod reveal;
pub mod scroll;
