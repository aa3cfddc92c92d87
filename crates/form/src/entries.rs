//! The list field controller: ordered entries with stable identity.

use std::collections::HashMap;

use anketa_core::{EntryId, FormError};

use crate::draft::CharacteristicDraft;

/// Ordered collection of characteristic entries.
///
/// Arena-style storage: values live in a map keyed by [`EntryId`], display
/// order is a parallel sequence of ids. Removal shifts positions but never
/// touches surviving ids, and a retired id is never handed to another entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    slots: HashMap<EntryId, CharacteristicDraft>,
    order: Vec<EntryId>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in display order.
    pub fn ids(&self) -> &[EntryId] {
        &self.order
    }

    /// Add one entry at the end under a freshly minted id.
    pub fn append(&mut self, initial: CharacteristicDraft) -> EntryId {
        let id = EntryId::new();
        self.slots.insert(id, initial);
        self.order.push(id);
        id
    }

    /// Remove the entry at `position`, returning its retired id.
    ///
    /// Removing the last remaining entry is allowed at this level; the
    /// resulting empty collection is the validator's concern.
    pub fn remove_at(&mut self, position: usize) -> Result<EntryId, FormError> {
        if position >= self.order.len() {
            return Err(FormError::out_of_range(position, self.order.len()));
        }
        let id = self.order.remove(position);
        self.slots.remove(&id);
        Ok(id)
    }

    pub fn get(&self, id: EntryId) -> Option<&CharacteristicDraft> {
        self.slots.get(&id)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut CharacteristicDraft> {
        self.slots.get_mut(&id)
    }

    /// Resolve a position to its id.
    pub fn id_at(&self, position: usize) -> Option<EntryId> {
        self.order.get(position).copied()
    }

    /// Mutable access by position, resolving to the id internally.
    pub fn at_mut(&mut self, position: usize) -> Option<(EntryId, &mut CharacteristicDraft)> {
        let id = *self.order.get(position)?;
        let entry = self.slots.get_mut(&id)?;
        Some((id, entry))
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &CharacteristicDraft)> {
        self.order.iter().map(|id| (*id, &self.slots[id]))
    }
}
