//! Domain models for the notes service.
//!
//! [`Note`] is the sole entity: an id, text content, an importance flag
//! and a creation timestamp. Notes are created and deleted but never
//! updated in place.

mod note;

pub use note::*;
