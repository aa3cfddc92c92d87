use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One selectable option offered by a choice widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Option whose label and value coincide (the common case here).
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            label: text.clone(),
            value: text,
        }
    }
}

/// Category → suggested values table.
///
/// `Default` carries the fixed data set; additional mappings can be inserted
/// at construction time. Lookups are exact-match and suggestions are advisory
/// only: the dependent field always accepts free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<Choice>,
    types: BTreeMap<String, Vec<Choice>>,
}

impl Catalog {
    /// A catalog with no categories at all.
    pub fn empty() -> Self {
        Self {
            names: Vec::new(),
            types: BTreeMap::new(),
        }
    }

    /// Register a category and the type suggestions it maps to.
    ///
    /// The category also becomes an advisory name choice (once).
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        options: impl IntoIterator<Item = Choice>,
    ) {
        let name = name.into();
        if !self.names.iter().any(|c| c.value == name) {
            self.names.push(Choice::plain(name.clone()));
        }
        self.types.insert(name, options.into_iter().collect());
    }

    /// Advisory choices for the `name` field, in registration order.
    pub fn name_choices(&self) -> &[Choice] {
        &self.names
    }

    /// Type suggestions for the given name value.
    ///
    /// Exact match only; the empty string and unrecognized values resolve to
    /// the empty slice, meaning the dependent field offers no suggestions.
    pub fn options_for(&self, name_value: &str) -> &[Choice] {
        self.types
            .get(name_value)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The fixed data set used by the product form.
    pub fn standard() -> Self {
        let mut catalog = Self::empty();
        catalog.insert("Цвет", ["Красный", "Синий", "Зелёный"].map(Choice::plain));
        catalog.insert("Прочность", ["Низкая", "Средняя", "Высокая"].map(Choice::plain));
        catalog.insert(
            "Тип упаковки",
            [
                "Картонная коробка",
                "Пластиковая упаковка",
                "Металлическая банка",
            ]
            .map(Choice::plain),
        );
        catalog
    }
}
