//! Declarative draft validation.
//!
//! Every rule is a pure predicate paired with a fixed-locale message. All
//! rules run on every call and the violations are merged into a
//! path-addressed map; nothing here short-circuits, so the boundary can
//! render every failure at once. Expected failures are data, never `Err`.

use std::collections::BTreeSet;

use anketa_core::{CharacteristicField, ErrorMap, FieldPath, ValidationError, ValidationKind};

use crate::draft::ProductDraft;

/// Fixed-locale validation messages.
pub mod msg {
    pub const REQUIRED: &str = "Обязательное поле";
    pub const NAME_TOO_LONG: &str = "Не более 20 символов";
    pub const CYRILLIC_ONLY: &str = "Используйте только кириллицу";
    pub const MIN_THREE: &str = "Минимум 3 символа";
    pub const CODE_TOO_LONG: &str = "Максимум 10 символов";
    pub const DIGITS_ONLY: &str = "Используйте только цифры";
    pub const NEED_ONE_ENTRY: &str = "Добавьте хотя бы одну характеристику";
    pub const UNIQUE_NAMES: &str = "Названия характеристик должны быть уникальными";
}

/// One field-level rule: the violation recorded when `failed` says so.
struct FieldRule {
    kind: ValidationKind,
    message: &'static str,
    failed: fn(&str) -> bool,
}

const PRODUCT_NAME_RULES: &[FieldRule] = &[
    FieldRule {
        kind: ValidationKind::Required,
        message: msg::REQUIRED,
        failed: str::is_empty,
    },
    FieldRule {
        kind: ValidationKind::TooLong,
        message: msg::NAME_TOO_LONG,
        failed: longer_than_twenty,
    },
    FieldRule {
        kind: ValidationKind::InvalidFormat,
        message: msg::CYRILLIC_ONLY,
        failed: outside_script,
    },
];

const PRODUCT_CODE_RULES: &[FieldRule] = &[
    FieldRule {
        kind: ValidationKind::TooShort,
        message: msg::MIN_THREE,
        failed: shorter_than_three,
    },
    FieldRule {
        kind: ValidationKind::TooLong,
        message: msg::CODE_TOO_LONG,
        failed: longer_than_ten,
    },
    FieldRule {
        kind: ValidationKind::InvalidFormat,
        message: msg::DIGITS_ONLY,
        failed: not_digits,
    },
];

const CHARACTERISTIC_RULES: &[FieldRule] = &[
    FieldRule {
        kind: ValidationKind::TooShort,
        message: msg::MIN_THREE,
        failed: shorter_than_three,
    },
    FieldRule {
        kind: ValidationKind::InvalidFormat,
        message: msg::CYRILLIC_ONLY,
        failed: outside_script,
    },
];

// Lengths count code points, not bytes.
fn code_points(value: &str) -> usize {
    value.chars().count()
}

fn shorter_than_three(value: &str) -> bool {
    code_points(value) < 3
}

fn longer_than_ten(value: &str) -> bool {
    code_points(value) > 10
}

fn longer_than_twenty(value: &str) -> bool {
    code_points(value) > 20
}

fn not_digits(value: &str) -> bool {
    !value.chars().all(|c| c.is_ascii_digit())
}

/// Anything outside `А`..=`я` plus whitespace. `Ё`/`ё` sit outside that
/// range and are rejected. The empty string has no offending character and
/// passes; emptiness is the length rules' concern.
fn outside_script(value: &str) -> bool {
    !value
        .chars()
        .all(|c| matches!(c, 'А'..='я') || c.is_whitespace())
}

fn apply(errors: &mut ErrorMap, path: FieldPath, value: &str, rules: &[FieldRule]) {
    for rule in rules {
        if (rule.failed)(value) {
            errors.push(path, ValidationError::new(rule.kind, rule.message));
        }
    }
}

/// Validate the whole draft, returning every violation.
///
/// Pure and deterministic: the map is rebuilt from scratch on each call.
pub fn validate(draft: &ProductDraft) -> ErrorMap {
    let mut errors = ErrorMap::new();

    apply(
        &mut errors,
        FieldPath::ProductName,
        &draft.product_name,
        PRODUCT_NAME_RULES,
    );
    apply(
        &mut errors,
        FieldPath::ProductCode,
        &draft.product_code,
        PRODUCT_CODE_RULES,
    );

    if draft.characteristics.is_empty() {
        errors.push(
            FieldPath::Characteristics,
            ValidationError::new(ValidationKind::EmptyCollection, msg::NEED_ONE_ENTRY),
        );
    }

    let unique_names: BTreeSet<&str> = draft
        .characteristics
        .iter()
        .map(|(_, entry)| entry.name.as_str())
        .collect();
    if unique_names.len() != draft.characteristics.len() {
        errors.push(
            FieldPath::Characteristics,
            ValidationError::new(ValidationKind::DuplicateKey, msg::UNIQUE_NAMES),
        );
    }

    for (position, (_, entry)) in draft.characteristics.iter().enumerate() {
        apply(
            &mut errors,
            FieldPath::characteristic(position, CharacteristicField::Name),
            &entry.name,
            CHARACTERISTIC_RULES,
        );
        apply(
            &mut errors,
            FieldPath::characteristic(position, CharacteristicField::Type),
            &entry.kind,
            CHARACTERISTIC_RULES,
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::CharacteristicDraft;
    use crate::entries::EntryList;

    fn draft(name: &str, code: &str, entries: &[(&str, &str)]) -> ProductDraft {
        let mut characteristics = EntryList::new();
        for (entry_name, entry_kind) in entries {
            characteristics.append(CharacteristicDraft::new(*entry_name, *entry_kind));
        }
        ProductDraft {
            product_name: name.to_string(),
            product_code: code.to_string(),
            characteristics,
        }
    }

    #[test]
    fn valid_draft_yields_an_empty_map() {
        let errors = validate(&draft("Стол", "421", &[("Цвет", "Красный")]));
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn short_code_is_the_only_violation() {
        let errors = validate(&draft("Стол", "42", &[("Цвет", "Красный")]));
        assert_eq!(errors.len(), 1);
        let code_errors = errors.get(&FieldPath::ProductCode);
        assert_eq!(code_errors.len(), 1);
        assert_eq!(code_errors[0].kind, ValidationKind::TooShort);
        assert_eq!(code_errors[0].message, msg::MIN_THREE);
    }

    #[test]
    fn empty_product_name_fails_required_but_not_format() {
        let errors = validate(&draft("", "421", &[("Цвет", "Красный")]));
        assert!(errors.contains(&FieldPath::ProductName, ValidationKind::Required));
        assert!(!errors.contains(&FieldPath::ProductName, ValidationKind::InvalidFormat));
        assert!(!errors.contains(&FieldPath::ProductName, ValidationKind::TooLong));
    }

    #[test]
    fn product_name_limits_and_script() {
        let long = "Стол".repeat(6); // 24 code points
        let errors = validate(&draft(&long, "421", &[("Цвет", "Красный")]));
        assert!(errors.contains(&FieldPath::ProductName, ValidationKind::TooLong));

        let errors = validate(&draft("Table", "421", &[("Цвет", "Красный")]));
        assert!(errors.contains(&FieldPath::ProductName, ValidationKind::InvalidFormat));

        let errors = validate(&draft("Стол для кухни", "421", &[("Цвет", "Красный")]));
        assert!(!errors.contains(&FieldPath::ProductName, ValidationKind::InvalidFormat));
    }

    #[test]
    fn product_code_limits_and_digits() {
        let errors = validate(&draft("Стол", "12345678901", &[("Цвет", "Красный")]));
        assert!(errors.contains(&FieldPath::ProductCode, ValidationKind::TooLong));

        let errors = validate(&draft("Стол", "12a4", &[("Цвет", "Красный")]));
        assert!(errors.contains(&FieldPath::ProductCode, ValidationKind::InvalidFormat));
    }

    #[test]
    fn a_field_can_fail_several_rules_at_once() {
        let errors = validate(&draft("Стол", "a", &[("Цвет", "Красный")]));
        let code_errors = errors.get(&FieldPath::ProductCode);
        assert_eq!(code_errors.len(), 2);
        assert!(errors.contains(&FieldPath::ProductCode, ValidationKind::TooShort));
        assert!(errors.contains(&FieldPath::ProductCode, ValidationKind::InvalidFormat));
    }

    #[test]
    fn duplicate_names_attach_to_the_collection_path() {
        let errors = validate(&draft(
            "Стол",
            "421",
            &[("Цвет", "Красный"), ("Цвет", "Синий")],
        ));
        assert!(errors.contains(&FieldPath::Characteristics, ValidationKind::DuplicateKey));
        // The individual entries are clean; only the collection is flagged.
        assert!(
            errors
                .get(&FieldPath::characteristic(0, CharacteristicField::Type))
                .is_empty()
        );
        assert!(
            errors
                .get(&FieldPath::characteristic(1, CharacteristicField::Type))
                .is_empty()
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn unique_names_carry_no_duplicate_error() {
        let errors = validate(&draft(
            "Стол",
            "421",
            &[("Цвет", "Красный"), ("Прочность", "Высокая")],
        ));
        assert!(!errors.contains(&FieldPath::Characteristics, ValidationKind::DuplicateKey));
    }

    #[test]
    fn empty_collection_is_flagged_on_the_collection_path() {
        let errors = validate(&draft("Стол", "421", &[]));
        assert!(errors.contains(&FieldPath::Characteristics, ValidationKind::EmptyCollection));
        assert_eq!(
            errors.get(&FieldPath::Characteristics)[0].message,
            msg::NEED_ONE_ENTRY
        );
    }

    #[test]
    fn entry_fields_check_length_and_script() {
        let errors = validate(&draft("Стол", "421", &[("Цв", "Red")]));
        assert!(errors.contains(
            &FieldPath::characteristic(0, CharacteristicField::Name),
            ValidationKind::TooShort
        ));
        assert!(errors.contains(
            &FieldPath::characteristic(0, CharacteristicField::Type),
            ValidationKind::InvalidFormat
        ));
    }

    #[test]
    fn yo_is_outside_the_permitted_set() {
        // `ё` is not in the А..я range, so a suggested value like
        // "Зелёный" does not pass the format rule.
        let errors = validate(&draft("Стол", "421", &[("Цвет", "Зелёный")]));
        assert!(errors.contains(
            &FieldPath::characteristic(0, CharacteristicField::Type),
            ValidationKind::InvalidFormat
        ));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arbitrary_draft() -> impl Strategy<Value = ProductDraft> {
            let entry_name = prop::sample::select(vec!["Цвет", "Прочность", "Вес", "Цв", ""]);
            let entry = (entry_name, "[а-яА-Яa-z0-9 ]{0,6}")
                .prop_map(|(name, kind)| (name.to_string(), kind));
            (
                "[а-яА-Яa-z ]{0,25}",
                "[0-9a-z]{0,12}",
                prop::collection::vec(entry, 0..5),
            )
                .prop_map(|(name, code, entries)| {
                    let mut characteristics = EntryList::new();
                    for (entry_name, entry_kind) in &entries {
                        characteristics.append(CharacteristicDraft::new(
                            entry_name.as_str(),
                            entry_kind.as_str(),
                        ));
                    }
                    ProductDraft {
                        product_name: name,
                        product_code: code,
                        characteristics,
                    }
                })
        }

        proptest! {
            /// Validation is a pure function of the draft: two runs without
            /// an intervening mutation yield identical maps.
            #[test]
            fn validate_is_idempotent(draft in arbitrary_draft()) {
                prop_assert_eq!(validate(&draft), validate(&draft));
            }

            /// DuplicateKey is present iff two entries share a name.
            #[test]
            fn duplicate_key_tracks_name_collisions(draft in arbitrary_draft()) {
                let names: Vec<&str> = draft
                    .characteristics
                    .iter()
                    .map(|(_, e)| e.name.as_str())
                    .collect();
                let unique: std::collections::BTreeSet<&str> =
                    names.iter().copied().collect();
                let errors = validate(&draft);
                prop_assert_eq!(
                    errors.contains(&FieldPath::Characteristics, ValidationKind::DuplicateKey),
                    unique.len() != names.len()
                );
            }
        }
    }
}
