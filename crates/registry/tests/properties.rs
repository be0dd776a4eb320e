//! Cross-kind properties: determinism, normalization invariance and
//! generate/validate round-trips through the public facade.

use proptest::prelude::*;

use taxid_registry::{generate, validate, IdentifierKind, SegmentValues, ValidationErrorKind};

/// Decorate a canonical value with the noise normalization must absorb:
/// leading/trailing blanks, per-character case flips and hyphen/space
/// insertions driven by the mask bits.
fn decorate(value: &str, mask: u64) -> String {
    let mut out = String::from("  ");
    for (i, c) in value.chars().enumerate() {
        if mask & (1 << (i % 64)) != 0 {
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
        if mask & (1 << ((i + 1) % 64)) != 0 {
            out.push(if i % 2 == 0 { '-' } else { ' ' });
        }
    }
    out.push(' ');
    out
}

fn kinds_with_default_generation() -> &'static [IdentifierKind] {
    // Every registered kind generates from defaults.
    IdentifierKind::all()
}

#[test]
fn generate_with_defaults_round_trips_for_every_kind() {
    for kind in kinds_with_default_generation() {
        let value = generate(*kind, &SegmentValues::new())
            .unwrap_or_else(|err| panic!("{kind} default generation failed: {err}"));
        let result = validate(*kind, &value);
        assert!(
            result.is_valid,
            "{kind}: generated `{value}` should validate, got {:?}",
            result.error
        );
    }
}

proptest! {
    /// Property: validation is deterministic.
    #[test]
    fn validation_is_deterministic(raw in "\\PC{0,20}") {
        for kind in IdentifierKind::all() {
            let first = validate(*kind, &raw);
            let second = validate(*kind, &raw);
            prop_assert_eq!(first, second);
        }
    }

    /// Property: case/whitespace/hyphen variants of a valid identifier
    /// validate identically to the canonical form.
    #[test]
    fn normalization_variants_validate_identically(
        pan_body in "[A-Z]{3}[ABCFGHJLPT][A-Z][0-9]{4}[A-Z]",
        nif_number in "[0-9]{8}",
        base_number in "[0-9]{12}",
        mask in any::<u64>(),
    ) {
        let cases = [
            (
                IdentifierKind::Gstin,
                generate(IdentifierKind::Gstin, &SegmentValues::new().with("pan", pan_body)).unwrap(),
            ),
            (
                IdentifierKind::Nif,
                generate(IdentifierKind::Nif, &SegmentValues::new().with("number", nif_number)).unwrap(),
            ),
            (
                IdentifierKind::JpCorporateNumber,
                generate(
                    IdentifierKind::JpCorporateNumber,
                    &SegmentValues::new().with("base_number", base_number),
                )
                .unwrap(),
            ),
            (IdentifierKind::UkNino, "AA123456C".to_string()),
        ];
        for (kind, canonical) in cases {
            let decorated = decorate(&canonical, mask);
            let result = validate(kind, &decorated);
            prop_assert!(result.is_valid, "{}: `{}` should validate", kind, decorated);
            prop_assert_eq!(result.normalized_value, canonical);
        }
    }

    /// Property: empty-ish inputs always report a missing value, for every kind.
    #[test]
    fn blank_input_is_missing_value(blanks in "[ \\t-]{0,6}") {
        for kind in IdentifierKind::all() {
            let result = validate(*kind, &blanks);
            prop_assert_eq!(result.error_kind(), Some(ValidationErrorKind::MissingValue));
        }
    }
}
