//! `anketa-core` — foundation types for the form core.
//!
//! This crate contains **pure data** building blocks: the stable entry
//! identifier, field-path addressing, and the validation-error model.
//! No I/O, no rendering, no knowledge of drafts or catalogs.

pub mod error;
pub mod id;
pub mod path;

pub use error::{ErrorMap, FormError, FormResult, ValidationError, ValidationKind};
pub use id::EntryId;
pub use path::{CharacteristicField, FieldPath};
