//! Permanent Account Number (PAN).
//!
//! 10 characters: 3-letter series, 1 holder-type letter, the first letter
//! of the holder's name, a 4-digit sequence and a check letter. The check
//! letter's algorithm is not published, so it is format-checked only.

use taxid_core::{
    CharClass, GenerateError, IdentifierKind, IdentifierStrategy, LookupEntry, Schema, Segment,
    SegmentRole, SegmentValues, ValidationError, ValidationResult,
};

pub(crate) const SCHEMA: Schema = Schema::new(&[
    Segment::new("series", 3, CharClass::Alpha, SegmentRole::Body),
    Segment::new("holder_type", 1, CharClass::Alpha, SegmentRole::EntityType),
    Segment::new("name_initial", 1, CharClass::Alpha, SegmentRole::Body),
    Segment::new("sequence", 4, CharClass::Digit, SegmentRole::Sequence),
    Segment::new("check_letter", 1, CharClass::Alpha, SegmentRole::CheckDigit),
]);

/// PAN holder types, keyed by the 4th character.
pub static HOLDER_TYPES: &[LookupEntry] = &[
    holder("A", "Association of persons"),
    holder("B", "Body of individuals"),
    holder("C", "Company"),
    holder("F", "Firm"),
    holder("G", "Government"),
    holder("H", "Hindu undivided family"),
    holder("J", "Artificial juridical person"),
    holder("L", "Local authority"),
    holder("P", "Individual"),
    holder("T", "Trust"),
];

const fn holder(code: &'static str, name: &'static str) -> LookupEntry {
    LookupEntry {
        code,
        name,
        active: true,
        class: taxid_core::LookupClass::OrganizationType,
    }
}

pub fn holder_type_by_code(code: &str) -> Option<&'static LookupEntry> {
    HOLDER_TYPES.iter().find(|entry| entry.code == code)
}

/// Character-class check only; also used for the PAN embedded in a GSTIN.
pub(crate) fn check_structure(value: &str) -> Result<(), ValidationError> {
    SCHEMA.check_structure(value)
}

/// Holder-type letter must resolve in [`HOLDER_TYPES`].
pub(crate) fn check_holder_type(value: &str) -> Result<(), ValidationError> {
    let letter = &value[3..4];
    if holder_type_by_code(letter).is_none() {
        return Err(ValidationError::invalid_lookup_code(format!(
            "`{letter}` is not a PAN holder type"
        )));
    }
    Ok(())
}

/// PAN strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pan;

impl IdentifierStrategy for Pan {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Pan
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        let value = self.normalize(raw);
        if value.is_empty() {
            return ValidationResult::invalid(value, ValidationError::missing_value());
        }
        if let Err(err) = check_structure(&value) {
            return ValidationResult::invalid(value, err);
        }
        if let Err(err) = check_holder_type(&value) {
            return ValidationResult::invalid(value, err);
        }
        let segments = SCHEMA.extract(&value);
        ValidationResult::valid(value, segments)
    }

    fn resolve_lookups(&self, segments: &SegmentValues) -> Vec<LookupEntry> {
        segments
            .get("holder_type")
            .and_then(holder_type_by_code)
            .map(|entry| vec![*entry])
            .unwrap_or_default()
    }

    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError> {
        taxid_core::strategy::reject_unknown_segments(
            parts,
            &["series", "holder_type", "name_initial", "sequence", "check_letter"],
        )?;
        let series = parts.get("series").unwrap_or("AAA");
        let holder_type = parts.get("holder_type").unwrap_or("P");
        let name_initial = parts.get("name_initial").unwrap_or("A");
        let sequence = parts.get("sequence").unwrap_or("1234");
        let check_letter = parts.get("check_letter").unwrap_or("A");

        if series.len() != 3 || !series.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(GenerateError::invalid_segment("series", "must be 3 letters"));
        }
        if holder_type_by_code(holder_type).is_none() {
            return Err(GenerateError::unknown_lookup_code("holder_type", holder_type));
        }
        if name_initial.len() != 1 || !name_initial.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(GenerateError::invalid_segment("name_initial", "must be 1 letter"));
        }
        if sequence.len() != 4 || !sequence.chars().all(|c| c.is_ascii_digit()) {
            return Err(GenerateError::invalid_segment("sequence", "must be 4 digits"));
        }
        if check_letter.len() != 1 || !check_letter.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(GenerateError::invalid_segment("check_letter", "must be 1 letter"));
        }
        Ok(format!("{series}{holder_type}{name_initial}{sequence}{check_letter}"))
    }
}
