//! Qualified Invoice Registration Number: `T` + Corporate Number.
//!
//! Validation strips the prefix and delegates entirely to the Corporate
//! Number validator.

use taxid_core::strategy::reject_unknown_segments;
use taxid_core::{
    group, GenerateError, IdentifierKind, IdentifierStrategy, SegmentValues, ValidationError,
    ValidationResult,
};

use crate::corporate_number::JpCorporateNumber;

const TOTAL_LEN: usize = 14;

/// Invoice Registration Number strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpInvoiceRegistration;

impl IdentifierStrategy for JpInvoiceRegistration {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::JpInvoiceRegistration
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        // Normalization uppercases, so a lowercase `t` is accepted.
        let value = self.normalize(raw);
        if value.is_empty() {
            return ValidationResult::invalid(value, ValidationError::missing_value());
        }
        if value.chars().count() != TOTAL_LEN {
            let err = ValidationError::invalid_length(TOTAL_LEN, value.chars().count());
            return ValidationResult::invalid(value, err);
        }
        if !value.is_ascii() {
            let err = ValidationError::invalid_format("identifier contains non-ASCII characters");
            return ValidationResult::invalid(value, err);
        }
        if !value[1..].chars().all(|c| c.is_ascii_digit()) {
            let err = ValidationError::invalid_format("body must be 13 digits");
            return ValidationResult::invalid(value, err);
        }
        if !value.starts_with('T') {
            let err =
                ValidationError::invalid_prefix("invoice registration numbers start with `T`");
            return ValidationResult::invalid(value, err);
        }
        let inner = JpCorporateNumber.validate(&value[1..]);
        match inner.error {
            Some(err) => ValidationResult::invalid(value, err),
            None => {
                let mut segments = SegmentValues::new().with("prefix", "T");
                for entry in inner.segments.iter() {
                    segments.set(entry.name.as_str(), entry.value.as_str());
                }
                ValidationResult::valid(value, segments)
            }
        }
    }

    /// Display form `T-1234-5678-90123`.
    fn format(&self, raw: &str, separator: Option<&str>) -> String {
        group(&self.normalize(raw), &[1, 4, 4], separator.unwrap_or("-"))
    }

    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError> {
        reject_unknown_segments(parts, &["base_number"])?;
        let number = JpCorporateNumber.generate(parts)?;
        Ok(format!("T{number}"))
    }
}
