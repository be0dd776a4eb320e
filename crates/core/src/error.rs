//! Validation and construction error model.
//!
//! Validation failures are **values** carried on a
//! [`ValidationResult`](crate::result::ValidationResult); malformed user
//! input never raises. The `Result` channel ([`GenerateError`]) exists only
//! for `generate`, whose arguments come from internal callers (fixtures,
//! tests) and are never untrusted end-user text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Primary cause of a validation failure.
///
/// Checks run in this fixed order; the first failure wins and is the only
/// error reported on a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Empty input after trimming.
    MissingValue,
    /// Wrong character count after normalization.
    InvalidLength,
    /// A segment's characters don't match its declared class.
    InvalidFormat,
    /// A segment resolves to a code absent from (or inactive in) its lookup table.
    InvalidLookupCode,
    /// A required fixed-literal segment is wrong.
    InvalidPrefix,
    /// Checksum mismatch.
    InvalidCheckDigit,
}

/// A validation failure: the primary cause plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_value() -> Self {
        Self::new(ValidationErrorKind::MissingValue, "value is empty")
    }

    pub fn invalid_length(expected: impl core::fmt::Display, actual: usize) -> Self {
        Self::new(
            ValidationErrorKind::InvalidLength,
            format!("expected {expected} characters, got {actual}"),
        )
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::InvalidFormat, message)
    }

    pub fn invalid_lookup_code(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::InvalidLookupCode, message)
    }

    pub fn invalid_prefix(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::InvalidPrefix, message)
    }

    pub fn invalid_check_digit(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::InvalidCheckDigit, message)
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Construction error returned by `generate`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The caller supplied a segment name the schema doesn't know.
    #[error("unknown segment `{name}`")]
    UnknownSegment { name: String },

    /// A supplied segment value doesn't satisfy the segment's grammar.
    #[error("segment `{name}` is malformed: {reason}")]
    InvalidSegment { name: &'static str, reason: String },

    /// A supplied segment value isn't present in its lookup table.
    #[error("unknown lookup code `{code}` for segment `{name}`")]
    UnknownLookupCode { name: &'static str, code: String },
}

impl GenerateError {
    pub fn unknown_segment(name: impl Into<String>) -> Self {
        Self::UnknownSegment { name: name.into() }
    }

    pub fn invalid_segment(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSegment {
            name,
            reason: reason.into(),
        }
    }

    pub fn unknown_lookup_code(name: &'static str, code: impl Into<String>) -> Self {
        Self::UnknownLookupCode {
            name,
            code: code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_order_matches_check_order() {
        // The enum's declaration order is the documented check order.
        assert!(ValidationErrorKind::MissingValue < ValidationErrorKind::InvalidLength);
        assert!(ValidationErrorKind::InvalidLength < ValidationErrorKind::InvalidFormat);
        assert!(ValidationErrorKind::InvalidFormat < ValidationErrorKind::InvalidLookupCode);
        assert!(ValidationErrorKind::InvalidLookupCode < ValidationErrorKind::InvalidPrefix);
        assert!(ValidationErrorKind::InvalidPrefix < ValidationErrorKind::InvalidCheckDigit);
    }

    #[test]
    fn validation_error_serializes_with_snake_case_kind() {
        let err = ValidationError::invalid_check_digit("checksum mismatch");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "invalid_check_digit");
        assert_eq!(json["message"], "checksum mismatch");
    }

    #[test]
    fn generate_error_messages_name_the_segment() {
        let err = GenerateError::unknown_lookup_code("state_code", "00");
        assert_eq!(
            err.to_string(),
            "unknown lookup code `00` for segment `state_code`"
        );
    }
}
