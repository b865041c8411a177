//! Networking modules for outbound HTTP.
//!
//! SYSTEM CONTEXT
//! ==============
//! `contact` posts the contact form to the third-party form endpoint, and
//! `cms` is the seam a remote content source would plug into. Both do real
//! work only in hydrate builds; SSR and native tests get deterministic errors.

pub mod cms;
pub mod contact;
