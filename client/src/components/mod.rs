//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and page sections. They read the active
//! locale and site config from Leptos context providers set up in `app`.

pub mod cloudinary_image;
pub mod contact_form;
pub mod footer;
pub mod header;
pub mod hero_section;
pub mod logo_marquee;
pub mod map_embed;
pub mod product_card;
pub mod product_tabs;
pub mod reveal;
pub mod stat_card;
pub mod timeline;
