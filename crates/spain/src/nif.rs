//! NIF and NIE: Spanish personal tax identifiers.
//!
//! A NIF is 8 digits plus a control letter taken from a fixed 23-letter
//! table indexed by the number modulo 23. A NIE maps its leading X/Y/Z to
//! 0/1/2 and then applies the NIF computation unchanged.

use taxid_core::strategy::reject_unknown_segments;
use taxid_core::{
    CharClass, GenerateError, IdentifierKind, IdentifierStrategy, Schema, Segment, SegmentRole,
    SegmentValues, ValidationError, ValidationResult,
};

const CONTROL_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// Control letter for a NIF/NIE numeric body.
pub(crate) fn control_letter(number: u32) -> char {
    CONTROL_LETTERS[(number % 23) as usize] as char
}

const NIF_SCHEMA: Schema = Schema::new(&[
    Segment::new("number", 8, CharClass::Digit, SegmentRole::Body),
    Segment::new("control", 1, CharClass::Alpha, SegmentRole::CheckDigit),
]);

const NIE_SCHEMA: Schema = Schema::new(&[
    Segment::new("prefix", 1, CharClass::Alpha, SegmentRole::Prefix),
    Segment::new("number", 7, CharClass::Digit, SegmentRole::Body),
    Segment::new("control", 1, CharClass::Alpha, SegmentRole::CheckDigit),
]);

/// NIF strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nif;

impl IdentifierStrategy for Nif {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Nif
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        let value = self.normalize(raw);
        if value.is_empty() {
            return ValidationResult::invalid(value, ValidationError::missing_value());
        }
        if let Err(err) = NIF_SCHEMA.check_structure(&value) {
            return ValidationResult::invalid(value, err);
        }
        // 8 digits always fit u32.
        let number: u32 = match value[..8].parse() {
            Ok(n) => n,
            Err(_) => {
                let err = ValidationError::invalid_format("number must be digits");
                return ValidationResult::invalid(value, err);
            }
        };
        let expected = control_letter(number);
        if value.as_bytes()[8] as char != expected {
            let err =
                ValidationError::invalid_check_digit(format!("expected control letter `{expected}`"));
            return ValidationResult::invalid(value, err);
        }
        let segments = NIF_SCHEMA.extract(&value);
        ValidationResult::valid(value, segments)
    }

    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError> {
        reject_unknown_segments(parts, &["number"])?;
        let number = parts.get("number").unwrap_or("12345678");
        if number.len() != 8 || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(GenerateError::invalid_segment("number", "must be 8 digits"));
        }
        let parsed: u32 = number
            .parse()
            .map_err(|_| GenerateError::invalid_segment("number", "must be 8 digits"))?;
        Ok(format!("{number}{}", control_letter(parsed)))
    }
}

/// NIE strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nie;

/// X/Y/Z become the leading digit of the 8-digit number the NIF
/// computation runs over.
fn nie_prefix_digit(prefix: char) -> Option<u32> {
    match prefix {
        'X' => Some(0),
        'Y' => Some(1),
        'Z' => Some(2),
        _ => None,
    }
}

impl IdentifierStrategy for Nie {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Nie
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        let value = self.normalize(raw);
        if value.is_empty() {
            return ValidationResult::invalid(value, ValidationError::missing_value());
        }
        if let Err(err) = NIE_SCHEMA.check_structure(&value) {
            return ValidationResult::invalid(value, err);
        }
        let prefix = value.as_bytes()[0] as char;
        let Some(prefix_digit) = nie_prefix_digit(prefix) else {
            let err =
                ValidationError::invalid_format(format!("prefix must be X, Y or Z, got `{prefix}`"));
            return ValidationResult::invalid(value, err);
        };
        // 7 digits always fit u32.
        let body: u32 = match value[1..8].parse() {
            Ok(n) => n,
            Err(_) => {
                let err = ValidationError::invalid_format("number must be digits");
                return ValidationResult::invalid(value, err);
            }
        };
        let number = prefix_digit * 10_000_000 + body;
        let expected = control_letter(number);
        if value.as_bytes()[8] as char != expected {
            let err =
                ValidationError::invalid_check_digit(format!("expected control letter `{expected}`"));
            return ValidationResult::invalid(value, err);
        }
        let segments = NIE_SCHEMA.extract(&value);
        ValidationResult::valid(value, segments)
    }

    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError> {
        reject_unknown_segments(parts, &["prefix", "number"])?;
        let prefix = parts.get("prefix").unwrap_or("X");
        let number = parts.get("number").unwrap_or("1234567");
        let prefix_char = match prefix.chars().next() {
            Some(c) if prefix.len() == 1 => c,
            _ => return Err(GenerateError::invalid_segment("prefix", "must be X, Y or Z")),
        };
        let Some(prefix_digit) = nie_prefix_digit(prefix_char) else {
            return Err(GenerateError::invalid_segment("prefix", "must be X, Y or Z"));
        };
        if number.len() != 7 || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(GenerateError::invalid_segment("number", "must be 7 digits"));
        }
        let body: u32 = number
            .parse()
            .map_err(|_| GenerateError::invalid_segment("number", "must be 7 digits"))?;
        let control = control_letter(prefix_digit * 10_000_000 + body);
        Ok(format!("{prefix_char}{number}{control}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxid_core::ValidationErrorKind;

    #[test]
    fn accepts_known_valid_nif() {
        // 12345678 % 23 = 14 → Z
        let result = Nif.validate("12345678Z");
        assert!(result.is_valid);
        assert_eq!(result.segments.get("number"), Some("12345678"));
        assert_eq!(result.segments.get("control"), Some("Z"));
    }

    #[test]
    fn rejects_wrong_control_letter() {
        let result = Nif.validate("12345678X");
        assert_eq!(
            result.error_kind(),
            Some(ValidationErrorKind::InvalidCheckDigit)
        );
    }

    #[test]
    fn control_table_boundaries() {
        // 0 % 23 = 0 → T, 99999999 % 23 = 1 → R
        assert!(Nif.validate("00000000T").is_valid);
        assert!(Nif.validate("99999999R").is_valid);
    }

    #[test]
    fn lowercase_and_hyphens_normalize() {
        let result = Nif.validate("12345678-z");
        assert!(result.is_valid);
        assert_eq!(result.normalized_value, "12345678Z");
    }

    #[test]
    fn rejects_wrong_length_and_format() {
        assert_eq!(
            Nif.validate("1234567Z").error_kind(),
            Some(ValidationErrorKind::InvalidLength)
        );
        assert_eq!(
            Nif.validate("1234567AZ").error_kind(),
            Some(ValidationErrorKind::InvalidFormat)
        );
    }

    #[test]
    fn nie_maps_prefix_before_control_computation() {
        // X0000000 → number 0 → T
        assert!(Nie.validate("X0000000T").is_valid);
        // Y0000000 → number 10000000; 10000000 % 23 = 14 → Z
        assert!(Nie.validate("Y0000000Z").is_valid);
    }

    #[test]
    fn nie_rejects_non_xyz_prefix() {
        let result = Nie.validate("A0000000T");
        assert_eq!(result.error_kind(), Some(ValidationErrorKind::InvalidFormat));
    }

    #[test]
    fn nie_rejects_wrong_control() {
        let result = Nie.validate("X0000000R");
        assert_eq!(
            result.error_kind(),
            Some(ValidationErrorKind::InvalidCheckDigit)
        );
    }

    #[test]
    fn generate_round_trips() {
        let nif = Nif.generate(&SegmentValues::new()).unwrap();
        assert_eq!(nif, "12345678Z");
        assert!(Nif.validate(&nif).is_valid);

        let nie = Nie
            .generate(&SegmentValues::new().with("prefix", "Z").with("number", "7654321"))
            .unwrap();
        assert!(Nie.validate(&nie).is_valid);
    }

    #[test]
    fn generate_rejects_bad_prefix() {
        let parts = SegmentValues::new().with("prefix", "Q");
        assert!(Nie.generate(&parts).is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every generated NIF validates.
            #[test]
            fn generated_nifs_validate(number in "[0-9]{8}") {
                let parts = SegmentValues::new().with("number", number);
                let nif = Nif.generate(&parts).unwrap();
                prop_assert!(Nif.validate(&nif).is_valid);
            }

            /// Property: every generated NIE validates.
            #[test]
            fn generated_nies_validate(prefix in "[XYZ]", number in "[0-9]{7}") {
                let parts = SegmentValues::new().with("prefix", prefix).with("number", number);
                let nie = Nie.generate(&parts).unwrap();
                prop_assert!(Nie.validate(&nie).is_valid);
            }
        }
    }
}
