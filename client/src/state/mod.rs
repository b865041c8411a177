//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs with pure transitions. The app wraps the shared ones
//! (`LocaleState`) in `RwSignal` context; page-local ones (`CatalogState`,
//! `ContactFormState`) live in a signal owned by their page component.

pub mod catalog;
pub mod contact_form;
pub mod locale;
pub mod route;
