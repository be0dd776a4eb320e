//! HSN goods codes and SAC service codes.
//!
//! HSN codes classify goods at 4, 6 or 8 digits; SAC codes classify
//! services at exactly 6 digits and always start `99`. How many digits a
//! business must report is gated by annual turnover.

use taxid_core::strategy::reject_unknown_segments;
use taxid_core::{
    GenerateError, IdentifierKind, IdentifierStrategy, SegmentValues, ValidationError,
    ValidationResult,
};

/// Annual turnover above which 6-digit HSN reporting is mandatory (₹5 crore).
pub const HSN_SIX_DIGIT_TURNOVER_RUPEES: u64 = 50_000_000;
/// Annual turnover above which 4-digit HSN reporting is mandatory (₹50 lakh).
pub const HSN_FOUR_DIGIT_TURNOVER_RUPEES: u64 = 5_000_000;

/// Mandatory HSN digit count for a given annual turnover in rupees;
/// `None` means reporting is optional.
pub fn required_hsn_digits(annual_turnover_rupees: u64) -> Option<u8> {
    if annual_turnover_rupees > HSN_SIX_DIGIT_TURNOVER_RUPEES {
        Some(6)
    } else if annual_turnover_rupees > HSN_FOUR_DIGIT_TURNOVER_RUPEES {
        Some(4)
    } else {
        None
    }
}

fn digits_only(value: &str) -> Result<(), ValidationError> {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::invalid_format("code must be digits"));
    }
    Ok(())
}

/// HSN strategy (goods).
#[derive(Debug, Clone, Copy, Default)]
pub struct Hsn;

impl IdentifierStrategy for Hsn {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Hsn
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        let value = self.normalize(raw);
        if value.is_empty() {
            return ValidationResult::invalid(value, ValidationError::missing_value());
        }
        if !matches!(value.chars().count(), 4 | 6 | 8) {
            let err = ValidationError::invalid_length("4, 6 or 8", value.chars().count());
            return ValidationResult::invalid(value, err);
        }
        if let Err(err) = digits_only(&value) {
            return ValidationResult::invalid(value, err);
        }
        let segments = SegmentValues::new()
            .with("chapter", &value[..2])
            .with("code", value.as_str());
        ValidationResult::valid(value, segments)
    }

    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError> {
        reject_unknown_segments(parts, &["code"])?;
        let code = parts.get("code").unwrap_or("8471");
        if !matches!(code.len(), 4 | 6 | 8) || code.chars().any(|c| !c.is_ascii_digit()) {
            return Err(GenerateError::invalid_segment("code", "must be 4, 6 or 8 digits"));
        }
        Ok(code.to_string())
    }
}

/// SAC strategy (services).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sac;

impl IdentifierStrategy for Sac {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Sac
    }

    fn validate(&self, raw: &str) -> ValidationResult {
        let value = self.normalize(raw);
        if value.is_empty() {
            return ValidationResult::invalid(value, ValidationError::missing_value());
        }
        if value.chars().count() != 6 {
            let err = ValidationError::invalid_length(6, value.chars().count());
            return ValidationResult::invalid(value, err);
        }
        if let Err(err) = digits_only(&value) {
            return ValidationResult::invalid(value, err);
        }
        if !value.starts_with("99") {
            let err = ValidationError::invalid_prefix("SAC codes start with `99`");
            return ValidationResult::invalid(value, err);
        }
        let segments = SegmentValues::new()
            .with("heading", &value[..4])
            .with("code", value.as_str());
        ValidationResult::valid(value, segments)
    }

    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError> {
        reject_unknown_segments(parts, &["code"])?;
        let code = parts.get("code").unwrap_or("998314");
        if code.len() != 6 || code.chars().any(|c| !c.is_ascii_digit()) {
            return Err(GenerateError::invalid_segment("code", "must be 6 digits"));
        }
        if !code.starts_with("99") {
            return Err(GenerateError::invalid_segment("code", "must start with `99`"));
        }
        Ok(code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxid_core::ValidationErrorKind;

    #[test]
    fn hsn_accepts_4_6_and_8_digit_codes() {
        for code in ["8471", "847130", "84713000"] {
            assert!(Hsn.validate(code).is_valid, "{code} should validate");
        }
    }

    #[test]
    fn hsn_rejects_other_lengths() {
        for code in ["84", "84713", "8471300", "847130001"] {
            assert_eq!(
                Hsn.validate(code).error_kind(),
                Some(ValidationErrorKind::InvalidLength),
                "{code}"
            );
        }
    }

    #[test]
    fn hsn_rejects_non_digits() {
        assert_eq!(
            Hsn.validate("84A1").error_kind(),
            Some(ValidationErrorKind::InvalidFormat)
        );
    }

    #[test]
    fn hsn_exposes_chapter_segment() {
        let result = Hsn.validate("84713000");
        assert_eq!(result.segments.get("chapter"), Some("84"));
    }

    #[test]
    fn sac_requires_six_digits_starting_99() {
        assert!(Sac.validate("998314").is_valid);
        assert_eq!(
            Sac.validate("98314").error_kind(),
            Some(ValidationErrorKind::InvalidLength)
        );
        assert_eq!(
            Sac.validate("988314").error_kind(),
            Some(ValidationErrorKind::InvalidPrefix)
        );
        assert_eq!(
            Sac.validate("99831A").error_kind(),
            Some(ValidationErrorKind::InvalidFormat)
        );
    }

    #[test]
    fn turnover_gates_required_digits() {
        // > ₹5 crore: 6 digits; > ₹50 lakh: 4 digits; otherwise optional.
        assert_eq!(required_hsn_digits(60_000_000), Some(6));
        assert_eq!(required_hsn_digits(50_000_001), Some(6));
        assert_eq!(required_hsn_digits(50_000_000), Some(4));
        assert_eq!(required_hsn_digits(5_000_001), Some(4));
        assert_eq!(required_hsn_digits(5_000_000), None);
        assert_eq!(required_hsn_digits(0), None);
    }

    #[test]
    fn generate_defaults_validate() {
        let hsn = Hsn.generate(&SegmentValues::new()).unwrap();
        assert!(Hsn.validate(&hsn).is_valid);
        let sac = Sac.generate(&SegmentValues::new()).unwrap();
        assert!(Sac.validate(&sac).is_valid);
    }

    #[test]
    fn sac_generate_rejects_wrong_prefix() {
        let parts = SegmentValues::new().with("code", "128314");
        assert!(Sac.generate(&parts).is_err());
    }
}
