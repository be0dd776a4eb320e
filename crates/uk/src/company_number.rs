//! Companies House registration number.
//!
//! 8 digits for England and Wales, `SC`/`NI` + 6 digits for Scotland and
//! Northern Ireland, or a legacy 6-digit form. Structural only.

use taxid_core::strategy::reject_unknown_segments;
use taxid_core::{
    GenerateError, IdentifierKind, IdentifierStrategy, SegmentValues, ValidationError,
    ValidationResult,
};

/// UK Company Number strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UkCompanyNumber;

impl IdentifierStrategy for UkCompanyNumber {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::UkCompanyNumber
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        let value = self.normalize(raw);
        if value.is_empty() {
            return ValidationResult::invalid(value, ValidationError::missing_value());
        }
        if !matches!(value.chars().count(), 6 | 8) {
            let err = ValidationError::invalid_length("6 or 8", value.chars().count());
            return ValidationResult::invalid(value, err);
        }
        if !value.is_ascii() {
            let err = ValidationError::invalid_format("identifier contains non-ASCII characters");
            return ValidationResult::invalid(value, err);
        }
        let mut segments = SegmentValues::new();
        if value.len() == 6 {
            if !value.chars().all(|c| c.is_ascii_digit()) {
                let err = ValidationError::invalid_format("legacy numbers must be 6 digits");
                return ValidationResult::invalid(value, err);
            }
            segments.set("number", value.as_str());
        } else if value.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            if !value.chars().all(|c| c.is_ascii_digit()) {
                let err = ValidationError::invalid_format("number must be 8 digits");
                return ValidationResult::invalid(value, err);
            }
            segments.set("number", value.as_str());
        } else {
            if !value[2..].chars().all(|c| c.is_ascii_digit()) {
                let err = ValidationError::invalid_format("number must be digits");
                return ValidationResult::invalid(value, err);
            }
            if !matches!(&value[..2], "SC" | "NI") {
                let err = ValidationError::invalid_prefix(
                    "registry prefix must be `SC` or `NI`",
                );
                return ValidationResult::invalid(value, err);
            }
            segments.set("registry_prefix", &value[..2]);
            segments.set("number", &value[2..]);
        }
        ValidationResult::valid(value, segments)
    }

    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError> {
        reject_unknown_segments(parts, &["registry_prefix", "number"])?;
        let number = parts.get("number").unwrap_or("12345678");
        match parts.get("registry_prefix") {
            Some(prefix) => {
                if !matches!(prefix, "SC" | "NI") {
                    return Err(GenerateError::invalid_segment(
                        "registry_prefix",
                        "must be SC or NI",
                    ));
                }
                let number = if parts.get("number").is_none() { "123456" } else { number };
                if number.len() != 6 || !number.chars().all(|c| c.is_ascii_digit()) {
                    return Err(GenerateError::invalid_segment("number", "must be 6 digits"));
                }
                Ok(format!("{prefix}{number}"))
            }
            None => {
                if !matches!(number.len(), 6 | 8) || !number.chars().all(|c| c.is_ascii_digit()) {
                    return Err(GenerateError::invalid_segment(
                        "number",
                        "must be 6 or 8 digits",
                    ));
                }
                Ok(number.to_string())
            }
        }
    }
}
