//! Unique Taxpayer Reference: 10 digits with a mod-11 weighted check.

use taxid_core::strategy::reject_unknown_segments;
use taxid_core::{
    CharClass, GenerateError, IdentifierKind, IdentifierStrategy, Schema, Segment, SegmentRole,
    SegmentValues, ValidationError, ValidationResult,
};

const WEIGHTS: [u32; 9] = [6, 7, 8, 9, 10, 5, 4, 3, 2];

const SCHEMA: Schema = Schema::new(&[
    Segment::new("reference", 9, CharClass::Digit, SegmentRole::Body),
    Segment::new("check_digit", 1, CharClass::Digit, SegmentRole::CheckDigit),
]);

/// Check digit over the first 9 digits: `(11 - sum % 11) % 11`, with a
/// computed 10 mapped to 0.
pub(crate) fn check_digit(reference: &str) -> Option<u32> {
    let mut sum = 0u32;
    for (digit, weight) in reference.chars().zip(WEIGHTS) {
        sum += digit.to_digit(10)? * weight;
    }
    let check = (11 - sum % 11) % 11;
    Some(if check == 10 { 0 } else { check })
}

/// UTR strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UkUtr;

impl IdentifierStrategy for UkUtr {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::UkUtr
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        let value = self.normalize(raw);
        if value.is_empty() {
            return ValidationResult::invalid(value, ValidationError::missing_value());
        }
        if let Err(err) = SCHEMA.check_structure(&value) {
            return ValidationResult::invalid(value, err);
        }
        // Structure guarantees 10 ASCII digits.
        let expected = check_digit(&value[..9]);
        let actual = value.chars().nth(9).and_then(|c| c.to_digit(10));
        if expected != actual {
            let err = ValidationError::invalid_check_digit(format!(
                "expected check digit `{}`",
                expected.unwrap_or(0)
            ));
            return ValidationResult::invalid(value, err);
        }
        let segments = SCHEMA.extract(&value);
        ValidationResult::valid(value, segments)
    }

    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError> {
        reject_unknown_segments(parts, &["reference"])?;
        let reference = parts.get("reference").unwrap_or("123456789");
        if reference.len() != 9 || !reference.chars().all(|c| c.is_ascii_digit()) {
            return Err(GenerateError::invalid_segment("reference", "must be 9 digits"));
        }
        // Inputs validated above.
        let check = check_digit(reference)
            .ok_or_else(|| GenerateError::invalid_segment("reference", "must be 9 digits"))?;
        Ok(format!("{reference}{check}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxid_core::ValidationErrorKind;

    #[test]
    fn generated_reference_validates() {
        // Weighted sum of 123456789 is 230; 230 % 11 = 10 → check 1.
        let utr = UkUtr.generate(&SegmentValues::new()).unwrap();
        assert_eq!(utr, "1234567891");
        let result = UkUtr.validate(&utr);
        assert!(result.is_valid);
        assert_eq!(result.segments.get("check_digit"), Some("1"));
    }

    #[test]
    fn rejects_wrong_check_digit() {
        let result = UkUtr.validate("1234567890");
        assert_eq!(
            result.error_kind(),
            Some(ValidationErrorKind::InvalidCheckDigit)
        );
    }

    #[test]
    fn computed_ten_maps_to_zero() {
        // 000000006 → weighted sum 12, 12 % 11 = 1 → raw check 10 → digit 0.
        assert_eq!(check_digit("000000006"), Some(0));
        let utr = UkUtr
            .generate(&SegmentValues::new().with("reference", "000000006"))
            .unwrap();
        assert_eq!(utr, "0000000060");
        assert!(UkUtr.validate(&utr).is_valid);
    }

    #[test]
    fn rejects_structural_errors() {
        assert_eq!(
            UkUtr.validate("123456789").error_kind(),
            Some(ValidationErrorKind::InvalidLength)
        );
        assert_eq!(
            UkUtr.validate("12345678A1").error_kind(),
            Some(ValidationErrorKind::InvalidFormat)
        );
    }

    #[test]
    fn spacing_normalizes() {
        let result = UkUtr.validate("12345 67891");
        assert!(result.is_valid);
        assert_eq!(result.normalized_value, "1234567891");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: generate → validate round-trips for any reference.
            #[test]
            fn generated_utrs_validate(reference in "[0-9]{9}") {
                let parts = SegmentValues::new().with("reference", reference);
                let utr = UkUtr.generate(&parts).unwrap();
                prop_assert!(UkUtr.validate(&utr).is_valid);
            }

            /// Property: mutating the check digit is always detected.
            #[test]
            fn check_digit_mutation_is_detected(reference in "[0-9]{9}", offset in 1u32..10) {
                let parts = SegmentValues::new().with("reference", reference);
                let utr = UkUtr.generate(&parts).unwrap();
                let check = utr.chars().last().unwrap().to_digit(10).unwrap();
                let mutated = format!("{}{}", &utr[..9], (check + offset) % 10);
                let result = UkUtr.validate(&mutated);
                prop_assert_eq!(
                    result.error_kind(),
                    Some(ValidationErrorKind::InvalidCheckDigit)
                );
            }
        }
    }
}
