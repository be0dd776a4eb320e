//! National Insurance Number.
//!
//! Two prefix letters, six digits, and a suffix letter A–D. HMRC never
//! issues certain prefix letters or two-letter combinations; those
//! exclusion sets are the lookup tables this validator checks after the
//! structural rules.

use taxid_core::strategy::reject_unknown_segments;
use taxid_core::{
    group, CharClass, GenerateError, IdentifierKind, IdentifierStrategy, Schema, Segment,
    SegmentRole, SegmentValues, ValidationError, ValidationResult,
};

const SCHEMA: Schema = Schema::new(&[
    Segment::new("prefix", 2, CharClass::Alpha, SegmentRole::Prefix),
    Segment::new("digits", 6, CharClass::Digit, SegmentRole::Sequence),
    Segment::new("suffix", 1, CharClass::Alpha, SegmentRole::Suffix),
]);

const EXCLUDED_FIRST_LETTERS: [char; 6] = ['D', 'F', 'I', 'Q', 'U', 'V'];
const EXCLUDED_SECOND_LETTERS: [char; 7] = ['D', 'F', 'I', 'O', 'Q', 'U', 'V'];
const EXCLUDED_PREFIXES: [&str; 7] = ["BG", "GB", "NK", "KN", "TN", "NT", "ZZ"];
const SUFFIX_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

fn check_prefix_policy(prefix: &str) -> Result<(), ValidationError> {
    let mut chars = prefix.chars();
    let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
        return Err(ValidationError::invalid_format("prefix must be 2 letters"));
    };
    if EXCLUDED_FIRST_LETTERS.contains(&first) {
        return Err(ValidationError::invalid_lookup_code(format!(
            "`{first}` is never used as the first prefix letter"
        )));
    }
    if EXCLUDED_SECOND_LETTERS.contains(&second) {
        return Err(ValidationError::invalid_lookup_code(format!(
            "`{second}` is never used as the second prefix letter"
        )));
    }
    if EXCLUDED_PREFIXES.contains(&prefix) {
        return Err(ValidationError::invalid_lookup_code(format!(
            "prefix `{prefix}` is never issued"
        )));
    }
    Ok(())
}

/// NINO strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UkNino;

impl IdentifierStrategy for UkNino {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::UkNino
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        let value = self.normalize(raw);
        if value.is_empty() {
            return ValidationResult::invalid(value, ValidationError::missing_value());
        }
        if let Err(err) = SCHEMA.check_structure(&value) {
            return ValidationResult::invalid(value, err);
        }
        let suffix = value.as_bytes()[8] as char;
        if !SUFFIX_LETTERS.contains(&suffix) {
            let err =
                ValidationError::invalid_format(format!("suffix must be A, B, C or D, got `{suffix}`"));
            return ValidationResult::invalid(value, err);
        }
        if let Err(err) = check_prefix_policy(&value[..2]) {
            return ValidationResult::invalid(value, err);
        }
        let segments = SCHEMA.extract(&value);
        ValidationResult::valid(value, segments)
    }

    /// Display form `AA 12 34 56 C`.
    fn format(&self, raw: &str, separator: Option<&str>) -> String {
        group(&self.normalize(raw), &[2, 2, 2, 2], separator.unwrap_or(" "))
    }

    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError> {
        reject_unknown_segments(parts, &["prefix", "digits", "suffix"])?;
        let prefix = parts.get("prefix").unwrap_or("AA");
        let digits = parts.get("digits").unwrap_or("123456");
        let suffix = parts.get("suffix").unwrap_or("C");

        if prefix.len() != 2 || !prefix.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(GenerateError::invalid_segment("prefix", "must be 2 letters"));
        }
        if let Err(err) = check_prefix_policy(prefix) {
            return Err(GenerateError::invalid_segment("prefix", err.message));
        }
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(GenerateError::invalid_segment("digits", "must be 6 digits"));
        }
        let suffix_char = suffix.chars().next();
        if suffix.len() != 1 || !suffix_char.is_some_and(|c| SUFFIX_LETTERS.contains(&c)) {
            return Err(GenerateError::invalid_segment("suffix", "must be A, B, C or D"));
        }
        Ok(format!("{prefix}{digits}{suffix}"))
    }
}
