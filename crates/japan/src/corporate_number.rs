//! Corporate Number: 13 digits, a leading check digit over 12 base digits.

use taxid_core::strategy::reject_unknown_segments;
use taxid_core::{
    group, CharClass, GenerateError, IdentifierKind, IdentifierStrategy, Schema, Segment,
    SegmentRole, SegmentValues, ValidationError, ValidationResult,
};

const SCHEMA: Schema = Schema::new(&[
    Segment::new("check_digit", 1, CharClass::Digit, SegmentRole::CheckDigit),
    Segment::new("base_number", 12, CharClass::Digit, SegmentRole::Body),
]);

/// Check digit over the 12 base digits.
///
/// Weights alternate 1 and 2 starting from the rightmost digit;
/// `9 - (sum % 9)`, with a raw result of 9 mapped to 0.
pub(crate) fn check_digit(base: &str) -> Option<u32> {
    let mut sum = 0u32;
    for (i, c) in base.chars().rev().enumerate() {
        let digit = c.to_digit(10)?;
        let weight = if i % 2 == 0 { 1 } else { 2 };
        sum += digit * weight;
    }
    Some((9 - sum % 9) % 9)
}

/// Corporate Number strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpCorporateNumber;

impl IdentifierStrategy for JpCorporateNumber {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::JpCorporateNumber
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        let value = self.normalize(raw);
        if value.is_empty() {
            return ValidationResult::invalid(value, ValidationError::missing_value());
        }
        if let Err(err) = SCHEMA.check_structure(&value) {
            return ValidationResult::invalid(value, err);
        }
        // Structure guarantees 13 ASCII digits.
        let expected = check_digit(&value[1..]);
        let actual = value.chars().next().and_then(|c| c.to_digit(10));
        if expected != actual {
            let err = ValidationError::invalid_check_digit(format!(
                "expected leading check digit `{}`",
                expected.unwrap_or(0)
            ));
            return ValidationResult::invalid(value, err);
        }
        let segments = SCHEMA.extract(&value);
        ValidationResult::valid(value, segments)
    }

    /// Display form `1-2345-6789-0123`.
    fn format(&self, raw: &str, separator: Option<&str>) -> String {
        group(&self.normalize(raw), &[1, 4, 4], separator.unwrap_or("-"))
    }

    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError> {
        reject_unknown_segments(parts, &["base_number"])?;
        let base = parts.get("base_number").unwrap_or("000012345678");
        if base.len() != 12 || !base.chars().all(|c| c.is_ascii_digit()) {
            return Err(GenerateError::invalid_segment("base_number", "must be 12 digits"));
        }
        // Inputs validated above.
        let check = check_digit(base)
            .ok_or_else(|| GenerateError::invalid_segment("base_number", "must be 12 digits"))?;
        Ok(format!("{check}{base}"))
    }
}
