//! Spanish VAT number: `ES` followed by a NIF, NIE or CIF.
//!
//! The wrapper strips the country prefix and dispatches to the matching
//! sub-validator, chosen by the first body character.

use taxid_core::strategy::reject_unknown_segments;
use taxid_core::{
    GenerateError, IdentifierKind, IdentifierStrategy, LookupEntry, SegmentValues,
    ValidationError, ValidationResult,
};

use crate::cif::Cif;
use crate::nif::{Nie, Nif};
use crate::org_types;

const TOTAL_LEN: usize = 11;

fn body_strategy(first: char) -> Option<&'static dyn IdentifierStrategy> {
    match first {
        c if c.is_ascii_digit() => Some(&Nif),
        'X' | 'Y' | 'Z' => Some(&Nie),
        c if c.is_ascii_uppercase() => Some(&Cif),
        _ => None,
    }
}

/// Spanish VAT strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishVat;

impl IdentifierStrategy for SpanishVat {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::SpanishVat
    }

    fn validate(&self, raw: &str) -> ValidationResult {
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
        // The prefix gates which sub-grammar applies, so it is checked
        // before the body can be classified at all.
        if &value[..2] != "ES" {
            let err = ValidationError::invalid_prefix("Spanish VAT numbers start with `ES`");
            return ValidationResult::invalid(value, err);
        }
        let body = &value[2..];
        let Some(strategy) = body_strategy(body.as_bytes()[0] as char) else {
            let err = ValidationError::invalid_format(
                "body must start with a digit, X/Y/Z, or a CIF type letter",
            );
            return ValidationResult::invalid(value, err);
        };
        let inner = strategy.validate(body);
        match inner.error {
            Some(err) => ValidationResult::invalid(value, err),
            None => {
                let mut segments = SegmentValues::new().with("country_prefix", "ES");
                for entry in inner.segments.iter() {
                    segments.set(entry.name.as_str(), entry.value.as_str());
                }
                ValidationResult::valid(value, segments)
            }
        }
    }

    fn resolve_lookups(&self, segments: &SegmentValues) -> Vec<LookupEntry> {
        segments
            .get("organization_type")
            .and_then(org_types::by_code)
            .map(|entry| vec![*entry])
            .unwrap_or_default()
    }

    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError> {
        reject_unknown_segments(parts, &["scheme", "prefix", "number", "organization_type"])?;
        let scheme = parts.get("scheme").unwrap_or("nif");
        let mut inner = SegmentValues::new();
        for entry in parts.iter() {
            if entry.name != "scheme" {
                inner.set(entry.name.as_str(), entry.value.as_str());
            }
        }
        let body = match scheme {
            "nif" => Nif.generate(&inner)?,
            "nie" => Nie.generate(&inner)?,
            "cif" => Cif.generate(&inner)?,
            other => {
                return Err(GenerateError::invalid_segment(
                    "scheme",
                    format!("must be nif, nie or cif, got `{other}`"),
                ));
            }
        };
        Ok(format!("ES{body}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxid_core::ValidationErrorKind;

    #[test]
    fn dispatches_to_nif_for_digit_bodies() {
        let result = SpanishVat.validate("ES12345678Z");
        assert!(result.is_valid);
        assert_eq!(result.segments.get("country_prefix"), Some("ES"));
        assert_eq!(result.segments.get("number"), Some("12345678"));
    }

    #[test]
    fn dispatches_to_nie_for_xyz_bodies() {
        assert!(SpanishVat.validate("ESX0000000T").is_valid);
    }

    #[test]
    fn dispatches_to_cif_for_type_letter_bodies() {
        let result = SpanishVat.validate("ESB12345674");
        assert!(result.is_valid);
        assert_eq!(result.segments.get("organization_type"), Some("B"));
    }

    #[test]
    fn rejects_missing_prefix() {
        let result = SpanishVat.validate("FR12345678Z");
        assert_eq!(result.error_kind(), Some(ValidationErrorKind::InvalidPrefix));
    }

    #[test]
    fn rejects_wrong_length_before_prefix() {
        let result = SpanishVat.validate("ES12345678");
        assert_eq!(result.error_kind(), Some(ValidationErrorKind::InvalidLength));
    }

    #[test]
    fn body_errors_surface_with_full_normalized_value() {
        let result = SpanishVat.validate("es 12345678-x");
        assert_eq!(
            result.error_kind(),
            Some(ValidationErrorKind::InvalidCheckDigit)
        );
        assert_eq!(result.normalized_value, "ES12345678X");
    }

    #[test]
    fn parse_resolves_cif_organization_type() {
        let parsed = SpanishVat.parse("ESB12345674").unwrap();
        assert_eq!(parsed.lookups[0].code, "B");
    }

    #[test]
    fn generate_per_scheme_round_trips() {
        for scheme in ["nif", "nie", "cif"] {
            let vat = SpanishVat
                .generate(&SegmentValues::new().with("scheme", scheme))
                .unwrap();
            assert!(SpanishVat.validate(&vat).is_valid, "{scheme} should round-trip");
        }
    }

    #[test]
    fn generate_rejects_unknown_scheme() {
        let parts = SegmentValues::new().with("scheme", "dni");
        assert!(SpanishVat.generate(&parts).is_err());
    }
}
