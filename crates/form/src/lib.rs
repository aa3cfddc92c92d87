//! Product-entry form core: drafts, validation, the entry list, and the
//! orchestrator that ties them together.
//!
//! Business rules only, implemented as deterministic synchronous logic
//! (no IO, no rendering, no transport).

pub mod draft;
pub mod entries;
pub mod orchestrator;
pub mod validate;

pub use draft::{CODE_PREFIX, CharacteristicDraft, ProductDraft, SubmissionRecord};
pub use entries::EntryList;
pub use orchestrator::{FormState, NoopSink, ProductForm, SubmitSink};
pub use validate::validate;
