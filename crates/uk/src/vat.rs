//! UK VAT registration number.
//!
//! `GB` followed by one of: 9 digits (standard), 12 digits (branch
//! traders), `GD` + 3 digits (government departments) or `HA` + 3 digits
//! (health authorities). Structural matching only; no checksum.

use taxid_core::strategy::reject_unknown_segments;
use taxid_core::{
    group, GenerateError, IdentifierKind, IdentifierStrategy, SegmentValues, ValidationError,
    ValidationResult,
};

/// UK VAT strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UkVat;

impl IdentifierStrategy for UkVat {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::UkVat
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        let value = self.normalize(raw);
        if value.is_empty() {
            return ValidationResult::invalid(value, ValidationError::missing_value());
        }
        // 2 + 9, 2 + 12, or 2 + 2 + 3 characters.
        if !matches!(value.chars().count(), 11 | 14 | 7) {
            let err = ValidationError::invalid_length("7, 11 or 14", value.chars().count());
            return ValidationResult::invalid(value, err);
        }
        if !value.is_ascii() {
            let err = ValidationError::invalid_format("identifier contains non-ASCII characters");
            return ValidationResult::invalid(value, err);
        }
        let body = &value[2..];
        match value.len() {
            11 | 14 => {
                if !body.chars().all(|c| c.is_ascii_digit()) {
                    let err = ValidationError::invalid_format("number must be digits");
                    return ValidationResult::invalid(value, err);
                }
            }
            _ => {
                if !body[2..].chars().all(|c| c.is_ascii_digit()) {
                    let err = ValidationError::invalid_format("scheme suffix must be digits");
                    return ValidationResult::invalid(value, err);
                }
            }
        }
        if &value[..2] != "GB" {
            let err = ValidationError::invalid_prefix("UK VAT numbers start with `GB`");
            return ValidationResult::invalid(value, err);
        }
        if value.len() == 7 && !matches!(&value[2..4], "GD" | "HA") {
            let err = ValidationError::invalid_prefix(
                "5-character bodies must start with `GD` or `HA`",
            );
            return ValidationResult::invalid(value, err);
        }
        let mut segments = SegmentValues::new().with("country_prefix", "GB");
        match value.len() {
            11 => {
                segments.set("number", &value[2..11]);
            }
            14 => {
                segments.set("number", &value[2..11]);
                segments.set("branch_code", &value[11..14]);
            }
            _ => {
                segments.set("scheme", &value[2..4]);
                segments.set("number", &value[4..7]);
            }
        }
        ValidationResult::valid(value, segments)
    }

    /// Display form `GB 123 4567 89`.
    fn format(&self, raw: &str, separator: Option<&str>) -> String {
        let value = self.normalize(raw);
        let sep = separator.unwrap_or(" ");
        match value.len() {
            11 => group(&value, &[2, 3, 4, 2], sep),
            14 => group(&value, &[2, 3, 4, 2, 3], sep),
            _ => value,
        }
    }

    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError> {
        reject_unknown_segments(parts, &["scheme", "number", "branch_code"])?;
        let scheme = parts.get("scheme");
        let number = parts.get("number").unwrap_or("123456789");
        let branch = parts.get("branch_code");

        if let Some(scheme) = scheme {
            if !matches!(scheme, "GD" | "HA") {
                return Err(GenerateError::invalid_segment("scheme", "must be GD or HA"));
            }
            if number.len() != 3 || !number.chars().all(|c| c.is_ascii_digit()) {
                return Err(GenerateError::invalid_segment("number", "must be 3 digits"));
            }
            return Ok(format!("GB{scheme}{number}"));
        }
        if number.len() != 9 || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(GenerateError::invalid_segment("number", "must be 9 digits"));
        }
        match branch {
            Some(branch) => {
                if branch.len() != 3 || !branch.chars().all(|c| c.is_ascii_digit()) {
                    return Err(GenerateError::invalid_segment("branch_code", "must be 3 digits"));
                }
                Ok(format!("GB{number}{branch}"))
            }
            None => Ok(format!("GB{number}")),
        }
    }
}
