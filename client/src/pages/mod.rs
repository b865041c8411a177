//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its page-local state and delegates rendering details to
//! `components`. `app::ActivePage` picks one per location.

pub mod about;
pub mod contact;
pub mod home;
pub mod products;
