//! CIF: Spanish legal-entity tax identifier.
//!
//! One organization-type letter, 7 digits, and a control character whose
//! rendering (digit vs. letter) depends on the type letter's class.

use taxid_core::strategy::reject_unknown_segments;
use taxid_core::{
    group, CharClass, GenerateError, IdentifierKind, IdentifierStrategy, LookupEntry, Schema,
    Segment, SegmentRole, SegmentValues, ValidationError, ValidationResult,
};

use crate::org_types;

const CONTROL_LETTERS: &[u8; 10] = b"JABCDEFGHI";

const SCHEMA: Schema = Schema::new(&[
    Segment::new("organization_type", 1, CharClass::Alpha, SegmentRole::EntityType),
    Segment::new("number", 7, CharClass::Digit, SegmentRole::Body),
    Segment::new("control", 1, CharClass::Alphanumeric, SegmentRole::CheckDigit),
]);

/// How a type letter renders its control character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlClass {
    /// Always a digit: A, B, E, H.
    Digit,
    /// Always a letter: N, P, Q, R, S, W.
    Letter,
    /// Documented as accepting either; this engine renders and accepts
    /// only the digit form, matching the system it replaces.
    Either,
}

/// Control class for a documented organization-type letter.
pub fn control_class(type_letter: char) -> Option<ControlClass> {
    match type_letter {
        'A' | 'B' | 'E' | 'H' => Some(ControlClass::Digit),
        'N' | 'P' | 'Q' | 'R' | 'S' | 'W' => Some(ControlClass::Letter),
        'C' | 'D' | 'F' | 'G' | 'J' | 'U' | 'V' => Some(ControlClass::Either),
        _ => None,
    }
}

/// Control digit over the 7-digit body.
///
/// Digits at 0-indexed even positions are doubled and digit-summed,
/// digits at odd positions are added directly;
/// `control = unit == 0 ? 0 : 10 - unit` where `unit = total % 10`.
pub(crate) fn control_digit(digits: &str) -> u32 {
    let mut total = 0u32;
    for (i, c) in digits.chars().enumerate() {
        // Callers validate the body first; non-digits contribute zero.
        let d = c.to_digit(10).unwrap_or(0);
        if i % 2 == 0 {
            let doubled = d * 2;
            total += doubled / 10 + doubled % 10;
        } else {
            total += d;
        }
    }
    let unit = total % 10;
    if unit == 0 { 0 } else { 10 - unit }
}

fn rendered_control(class: ControlClass, digit: u32) -> char {
    match class {
        // The "either" class renders the digit form, never the letter.
        ControlClass::Digit | ControlClass::Either => {
            char::from_digit(digit, 10).unwrap_or('0')
        }
        ControlClass::Letter => CONTROL_LETTERS[digit as usize] as char,
    }
}

/// CIF strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cif;

impl IdentifierStrategy for Cif {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Cif
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        let value = self.normalize(raw);
        if value.is_empty() {
            return ValidationResult::invalid(value, ValidationError::missing_value());
        }
        if let Err(err) = SCHEMA.check_structure(&value) {
            return ValidationResult::invalid(value, err);
        }
        let type_letter = value.as_bytes()[0] as char;
        let Some(class) = control_class(type_letter) else {
            let err = ValidationError::invalid_lookup_code(format!(
                "`{type_letter}` is not a CIF organization type"
            ));
            return ValidationResult::invalid(value, err);
        };
        let expected = rendered_control(class, control_digit(&value[1..8]));
        if value.as_bytes()[8] as char != expected {
            let err = ValidationError::invalid_check_digit(format!(
                "expected control character `{expected}`"
            ));
            return ValidationResult::invalid(value, err);
        }
        let segments = SCHEMA.extract(&value);
        ValidationResult::valid(value, segments)
    }

    fn resolve_lookups(&self, segments: &SegmentValues) -> Vec<LookupEntry> {
        segments
            .get("organization_type")
            .and_then(org_types::by_code)
            .map(|entry| vec![*entry])
            .unwrap_or_default()
    }

    /// Display form `B-1234567-4`.
    fn format(&self, raw: &str, separator: Option<&str>) -> String {
        group(&self.normalize(raw), &[1, 7], separator.unwrap_or("-"))
    }

    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError> {
        reject_unknown_segments(parts, &["organization_type", "number"])?;
        let type_letter = parts.get("organization_type").unwrap_or("B");
        let number = parts.get("number").unwrap_or("1234567");
        let class = match type_letter.chars().next() {
            Some(c) if type_letter.len() == 1 => control_class(c).ok_or_else(|| {
                GenerateError::unknown_lookup_code("organization_type", type_letter)
            })?,
            _ => {
                return Err(GenerateError::invalid_segment(
                    "organization_type",
                    "must be 1 letter",
                ));
            }
        };
        if number.len() != 7 || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(GenerateError::invalid_segment("number", "must be 7 digits"));
        }
        let control = rendered_control(class, control_digit(number));
        Ok(format!("{type_letter}{number}{control}"))
    }
}
