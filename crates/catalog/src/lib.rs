//! Option catalog: advisory choices for characteristic names and the
//! dependent type suggestions derived from them.
//!
//! Pure data and exact-match lookup; no knowledge of form state.

pub mod catalog;

pub use catalog::{Catalog, Choice};
