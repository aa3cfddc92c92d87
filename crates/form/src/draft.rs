//! Draft values and the boundary-out submission record.

use serde::{Deserialize, Serialize};

use crate::entries::EntryList;

/// Fixed prefix applied to the product code at submission time only.
///
/// The draft always stores the unprefixed digits; validation runs against
/// those, never against the prefixed form.
pub const CODE_PREFIX: &str = "A2-";

/// One characteristic entry as edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacteristicDraft {
    pub name: String,
    /// The dependent field. Free text; catalog suggestions only advise it.
    #[serde(rename = "type")]
    pub kind: String,
}

impl CharacteristicDraft {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// The full mutable form value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub product_name: String,
    pub product_code: String,
    pub characteristics: EntryList,
}

impl ProductDraft {
    /// A fresh draft starts with exactly one empty characteristic.
    pub fn new() -> Self {
        let mut characteristics = EntryList::new();
        characteristics.append(CharacteristicDraft::default());
        Self {
            product_name: String::new(),
            product_code: String::new(),
            characteristics,
        }
    }
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// The one structured record emitted on accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub product_name: String,
    /// Carries [`CODE_PREFIX`]; the only place the prefix exists.
    pub product_code: String,
    pub characteristics: Vec<CharacteristicDraft>,
}

impl SubmissionRecord {
    pub fn from_draft(draft: &ProductDraft) -> Self {
        Self {
            product_name: draft.product_name.clone(),
            product_code: format!("{CODE_PREFIX}{}", draft.product_code),
            characteristics: draft
                .characteristics
                .iter()
                .map(|(_, entry)| entry.clone())
                .collect(),
        }
    }
}
