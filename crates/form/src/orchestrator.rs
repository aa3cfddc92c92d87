//! The form state orchestrator.
//!
//! Sole owner of the draft, the error map, and the per-entry dependent
//! option snapshots. Every mutation runs to completion before it returns:
//! option re-resolution and re-validation are part of the same step as the
//! write itself, so a snapshot read afterwards is never stale.

use std::collections::HashMap;

use anketa_catalog::{Catalog, Choice};
use anketa_core::{CharacteristicField, EntryId, ErrorMap, FieldPath, FormError, FormResult};

use crate::draft::{CharacteristicDraft, ProductDraft, SubmissionRecord};
use crate::validate::validate;

/// Where the form sits in its lifecycle.
///
/// `Editing -> Validating -> Editing` on rejection, `-> Submitted` on
/// acceptance; validation is synchronous, so `Validating` is never
/// observable from outside.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitted,
}

/// Boundary-supplied submission side effect.
///
/// Called exactly once per accepted submission, never when the error map is
/// non-empty.
pub trait SubmitSink {
    fn deliver(&mut self, record: &SubmissionRecord);
}

impl<F: FnMut(&SubmissionRecord)> SubmitSink for F {
    fn deliver(&mut self, record: &SubmissionRecord) {
        self(record)
    }
}

/// Sink that drops the record; transport is out of scope for the core.
#[derive(Debug, Default)]
pub struct NoopSink;

impl SubmitSink for NoopSink {
    fn deliver(&mut self, _record: &SubmissionRecord) {}
}

/// Top-level coordinator between the entry list, the validator, and the
/// dependent option resolver.
pub struct ProductForm {
    draft: ProductDraft,
    errors: ErrorMap,
    options: HashMap<EntryId, Vec<Choice>>,
    catalog: Catalog,
    state: FormState,
    sink: Box<dyn SubmitSink>,
}

impl ProductForm {
    /// A fresh form: one empty characteristic, pristine (empty) error map.
    pub fn new(catalog: Catalog, sink: Box<dyn SubmitSink>) -> Self {
        let draft = ProductDraft::new();
        let options = draft
            .characteristics
            .ids()
            .iter()
            .map(|id| (*id, Vec::new()))
            .collect();
        Self {
            draft,
            errors: ErrorMap::new(),
            options,
            catalog,
            state: FormState::Editing,
            sink,
        }
    }

    /// A form with no submission transport attached.
    pub fn detached(catalog: Catalog) -> Self {
        Self::new(catalog, Box::new(NoopSink))
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Stable ids of the live entries, in display order.
    pub fn entry_ids(&self) -> &[EntryId] {
        self.draft.characteristics.ids()
    }

    /// Advisory choices for the `name` field (fixed at construction).
    pub fn name_choices(&self) -> &[Choice] {
        self.catalog.name_choices()
    }

    /// Current type suggestions for one entry.
    pub fn options_for_entry(&self, id: EntryId) -> &[Choice] {
        self.options.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Write one field value.
    ///
    /// When the path is an entry's `name`, that entry's type suggestions are
    /// re-resolved against the catalog in the same step; the entry's current
    /// `type` value is preserved either way, since free text stays valid.
    /// The validator runs before this returns.
    pub fn set_field(&mut self, path: FieldPath, value: impl Into<String>) -> FormResult<()> {
        let value = value.into();
        match path {
            FieldPath::ProductName => self.draft.product_name = value,
            FieldPath::ProductCode => self.draft.product_code = value,
            FieldPath::Characteristics => {
                // The collection path carries errors; it holds no value.
                return Err(FormError::unknown_path(path.to_string()));
            }
            FieldPath::Characteristic { index, field } => {
                let len = self.draft.characteristics.len();
                let Some((id, entry)) = self.draft.characteristics.at_mut(index) else {
                    return Err(FormError::out_of_range(index, len));
                };
                match field {
                    CharacteristicField::Name => {
                        entry.name = value;
                        let resolved = self.catalog.options_for(&entry.name).to_vec();
                        self.options.insert(id, resolved);
                    }
                    CharacteristicField::Type => entry.kind = value,
                }
            }
        }
        self.refresh();
        tracing::debug!(field = %path, "field updated");
        Ok(())
    }

    /// Append one empty characteristic; returns its stable id.
    pub fn append(&mut self) -> EntryId {
        self.append_with(CharacteristicDraft::default())
    }

    /// Append a pre-filled characteristic; its type suggestions are resolved
    /// from the initial name.
    pub fn append_with(&mut self, initial: CharacteristicDraft) -> EntryId {
        let resolved = self.catalog.options_for(&initial.name).to_vec();
        let id = self.draft.characteristics.append(initial);
        self.options.insert(id, resolved);
        self.refresh();
        tracing::debug!(entry = %id, "characteristic appended");
        id
    }

    /// Remove the entry at `position`; its id is retired with it.
    pub fn remove_at(&mut self, position: usize) -> FormResult<EntryId> {
        let id = self.draft.characteristics.remove_at(position)?;
        self.options.remove(&id);
        self.refresh();
        tracing::debug!(entry = %id, position, "characteristic removed");
        Ok(id)
    }

    /// Validate and, on a clean draft, deliver the prefixed record to the
    /// sink. A non-empty map rejects the submission with no side effect.
    pub fn submit(&mut self) -> Result<SubmissionRecord, ErrorMap> {
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            tracing::info!(fields = self.errors.len(), "submission rejected");
            return Err(self.errors.clone());
        }
        let record = SubmissionRecord::from_draft(&self.draft);
        self.sink.deliver(&record);
        self.state = FormState::Submitted;
        tracing::info!(code = %record.product_code, "submission accepted");
        Ok(record)
    }

    // Every mutation lands here: back to editing, error map recomputed.
    fn refresh(&mut self) {
        self.state = FormState::Editing;
        self.errors = validate(&self.draft);
    }
}
