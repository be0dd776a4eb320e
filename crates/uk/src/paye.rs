//! PAYE employer reference: 3-digit tax office number, `/`, and a 1–10
//! character alphanumeric office reference. Structural only.

use taxid_core::strategy::reject_unknown_segments;
use taxid_core::{
    GenerateError, IdentifierKind, IdentifierStrategy, SegmentValues, ValidationError,
    ValidationResult,
};

const MIN_LEN: usize = 5;
const MAX_LEN: usize = 14;

/// UK PAYE reference strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UkPaye;

impl IdentifierStrategy for UkPaye {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::UkPaye
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        let value = self.normalize(raw);
        if value.is_empty() {
            return ValidationResult::invalid(value, ValidationError::missing_value());
        }
        let len = value.chars().count();
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            let err = ValidationError::invalid_length("5 to 14", len);
            return ValidationResult::invalid(value, err);
        }
        if !value.is_ascii() {
            let err = ValidationError::invalid_format("identifier contains non-ASCII characters");
            return ValidationResult::invalid(value, err);
        }
        if !value[..3].chars().all(|c| c.is_ascii_digit()) {
            let err = ValidationError::invalid_format("office number must be 3 digits");
            return ValidationResult::invalid(value, err);
        }
        if !value[4..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        {
            let err = ValidationError::invalid_format("reference must be letters or digits");
            return ValidationResult::invalid(value, err);
        }
        if value.as_bytes()[3] as char != '/' {
            let err = ValidationError::invalid_prefix("office number and reference are separated by `/`");
            return ValidationResult::invalid(value, err);
        }
        let segments = SegmentValues::new()
            .with("office_number", &value[..3])
            .with("reference", &value[4..]);
        ValidationResult::valid(value, segments)
    }

    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError> {
        reject_unknown_segments(parts, &["office_number", "reference"])?;
        let office = parts.get("office_number").unwrap_or("123");
        let reference = parts.get("reference").unwrap_or("AB456");
        if office.len() != 3 || !office.chars().all(|c| c.is_ascii_digit()) {
            return Err(GenerateError::invalid_segment("office_number", "must be 3 digits"));
        }
        if reference.is_empty()
            || reference.len() > 10
            || !reference
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        {
            return Err(GenerateError::invalid_segment(
                "reference",
                "must be 1 to 10 letters or digits",
            ));
        }
        Ok(format!("{office}/{reference}"))
    }
}
