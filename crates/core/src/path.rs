//! Field-path addressing.
//!
//! The rendering layer speaks in string paths (`characteristics[2].name`);
//! the core speaks in [`FieldPath`] values. `Display` and `FromStr` are the
//! two sides of that contract.

use core::fmt;
use core::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::FormError;

/// Which half of a characteristic entry a path addresses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacteristicField {
    Name,
    Type,
}

impl CharacteristicField {
    fn as_str(self) -> &'static str {
        match self {
            CharacteristicField::Name => "name",
            CharacteristicField::Type => "type",
        }
    }
}

/// Address of one draft field, or of the characteristics collection itself.
///
/// The bare `Characteristics` path carries collection-level validation
/// errors (empty collection, duplicate names); it never holds a value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    ProductName,
    ProductCode,
    Characteristics,
    Characteristic {
        index: usize,
        field: CharacteristicField,
    },
}

impl FieldPath {
    pub fn characteristic(index: usize, field: CharacteristicField) -> Self {
        FieldPath::Characteristic { index, field }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::ProductName => f.write_str("productName"),
            FieldPath::ProductCode => f.write_str("productCode"),
            FieldPath::Characteristics => f.write_str("characteristics"),
            FieldPath::Characteristic { index, field } => {
                write!(f, "characteristics[{index}].{}", field.as_str())
            }
        }
    }
}

impl FromStr for FieldPath {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "productName" => Ok(FieldPath::ProductName),
            "productCode" => Ok(FieldPath::ProductCode),
            "characteristics" => Ok(FieldPath::Characteristics),
            other => parse_characteristic(other).ok_or_else(|| FormError::unknown_path(other)),
        }
    }
}

fn parse_characteristic(s: &str) -> Option<FieldPath> {
    let rest = s.strip_prefix("characteristics[")?;
    let (index, rest) = rest.split_once(']')?;
    let index: usize = index.parse().ok()?;
    let field = match rest {
        ".name" => CharacteristicField::Name,
        ".type" => CharacteristicField::Type,
        _ => return None,
    };
    Some(FieldPath::Characteristic { index, field })
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_canonical_forms() {
        assert_eq!(FieldPath::ProductName.to_string(), "productName");
        assert_eq!(FieldPath::ProductCode.to_string(), "productCode");
        assert_eq!(FieldPath::Characteristics.to_string(), "characteristics");
        assert_eq!(
            FieldPath::characteristic(2, CharacteristicField::Name).to_string(),
            "characteristics[2].name"
        );
        assert_eq!(
            FieldPath::characteristic(0, CharacteristicField::Type).to_string(),
            "characteristics[0].type"
        );
    }

    #[test]
    fn from_str_round_trips_every_form() {
        let paths = [
            FieldPath::ProductName,
            FieldPath::ProductCode,
            FieldPath::Characteristics,
            FieldPath::characteristic(0, CharacteristicField::Name),
            FieldPath::characteristic(17, CharacteristicField::Type),
        ];
        for path in paths {
            let parsed: FieldPath = path.to_string().parse().unwrap();
            assert_eq!(parsed, path);
        }
    }

    #[test]
    fn malformed_paths_are_rejected() {
        for s in [
            "",
            "product_name",
            "characteristics[0]",
            "characteristics[0].color",
            "characteristics[x].name",
            "characteristics[0.name",
        ] {
            let err = s.parse::<FieldPath>().unwrap_err();
            assert!(matches!(err, FormError::UnknownPath(_)), "{s:?}");
        }
    }

    #[test]
    fn serializes_as_the_display_string() {
        let json =
            serde_json::to_string(&FieldPath::characteristic(1, CharacteristicField::Type))
                .unwrap();
        assert_eq!(json, "\"characteristics[1].type\"");
    }
}
