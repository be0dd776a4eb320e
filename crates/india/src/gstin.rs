//! Goods and Services Tax Identification Number (GSTIN).
//!
//! 15 characters: 2-digit state code, 10-character PAN, entity number,
//! the fixed marker `Z` and a mod-36 check character computed over the
//! first 14 characters.

use taxid_core::strategy::reject_unknown_segments;
use taxid_core::{
    group, CharClass, GenerateError, IdentifierKind, IdentifierStrategy, LookupEntry, Schema,
    Segment, SegmentRole, SegmentValues, ValidationError, ValidationResult,
};

use crate::{pan, states};

pub(crate) const SCHEMA: Schema = Schema::new(&[
    Segment::new("state_code", 2, CharClass::Digit, SegmentRole::StateCode),
    Segment::new("pan", 10, CharClass::Alphanumeric, SegmentRole::Pan),
    Segment::new("entity_number", 1, CharClass::Alphanumeric, SegmentRole::EntityNumber),
    Segment::new("z_marker", 1, CharClass::Literal('Z'), SegmentRole::FixedMarker),
    Segment::new("check_digit", 1, CharClass::Alphanumeric, SegmentRole::CheckDigit),
]);

/// Mod-36 check character over the first 14 characters.
///
/// Characters take their value in the `0-9A-Z` alphabet (0–35). Weights
/// alternate 1 and 2 from position 0; each product is folded as
/// `p / 36 + p % 36` before summing.
pub(crate) fn check_character(body: &str) -> Option<char> {
    let mut sum = 0u32;
    for (i, c) in body.chars().enumerate() {
        let value = c.to_digit(36)?;
        let weight = if i % 2 == 0 { 1 } else { 2 };
        let product = value * weight;
        sum += product / 36 + product % 36;
    }
    let check = (36 - sum % 36) % 36;
    char::from_digit(check, 36).map(|c| c.to_ascii_uppercase())
}

/// GSTIN strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gstin;

impl IdentifierStrategy for Gstin {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Gstin
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        let value = self.normalize(raw);
        if value.is_empty() {
            return ValidationResult::invalid(value, ValidationError::missing_value());
        }
        if let Err(err) = SCHEMA.check_structure(&value) {
            return ValidationResult::invalid(value, err);
        }
        if let Err(err) = pan::check_structure(&value[2..12]) {
            return ValidationResult::invalid(value, err);
        }
        let state_code = &value[0..2];
        match states::by_code(state_code) {
            Some(entry) if entry.active => {}
            Some(entry) => {
                let err = ValidationError::invalid_lookup_code(format!(
                    "state code `{}` ({}) is no longer active",
                    entry.code, entry.name
                ));
                return ValidationResult::invalid(value, err);
            }
            None => {
                let err = ValidationError::invalid_lookup_code(format!(
                    "unknown state code `{state_code}`"
                ));
                return ValidationResult::invalid(value, err);
            }
        }
        if let Err(err) = pan::check_holder_type(&value[2..12]) {
            return ValidationResult::invalid(value, err);
        }
        if let Err(err) = SCHEMA.check_markers(&value) {
            return ValidationResult::invalid(value, err);
        }
        // Structure passed, so every body character is base-36 and
        // check_character cannot return None here.
        let expected = check_character(&value[..14]);
        let actual = value.chars().nth(14);
        if expected != actual {
            let err = ValidationError::invalid_check_digit(format!(
                "expected check character `{}`",
                expected.unwrap_or('?')
            ));
            return ValidationResult::invalid(value, err);
        }
        let segments = SCHEMA.extract(&value);
        ValidationResult::valid(value, segments)
    }

    fn resolve_lookups(&self, segments: &SegmentValues) -> Vec<LookupEntry> {
        let mut lookups = Vec::new();
        if let Some(entry) = segments.get("state_code").and_then(states::by_code) {
            lookups.push(*entry);
        }
        if let Some(pan_value) = segments.get("pan") {
            if let Some(entry) = pan_value.get(3..4).and_then(pan::holder_type_by_code) {
                lookups.push(*entry);
            }
        }
        lookups
    }

    /// Display form `27-AAPFU0939F-1ZV`.
    fn format(&self, raw: &str, separator: Option<&str>) -> String {
        group(&self.normalize(raw), &[2, 10], separator.unwrap_or("-"))
    }

    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError> {
        reject_unknown_segments(parts, &["state_code", "pan", "entity_number"])?;
        let state_code = parts.get("state_code").unwrap_or("27");
        let pan_value = parts.get("pan").unwrap_or("AAAPA1234A");
        let entity_number = parts.get("entity_number").unwrap_or("1");

        match states::by_code(state_code) {
            Some(entry) if entry.active => {}
            _ => return Err(GenerateError::unknown_lookup_code("state_code", state_code)),
        }
        if pan::check_structure(pan_value).is_err() || pan::check_holder_type(pan_value).is_err() {
            return Err(GenerateError::invalid_segment("pan", "not a well-formed PAN"));
        }
        if entity_number.len() != 1
            || !entity_number
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        {
            return Err(GenerateError::invalid_segment(
                "entity_number",
                "must be 1 letter or digit",
            ));
        }

        let body = format!("{state_code}{pan_value}{entity_number}Z");
        // Inputs validated above; every character is base-36.
        let check = check_character(&body)
            .ok_or_else(|| GenerateError::invalid_segment("pan", "not base-36"))?;
        Ok(format!("{body}{check}"))
    }
}
