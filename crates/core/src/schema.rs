//! Fixed-grammar schemas: ordered segment definitions that drive
//! structural validation and extraction.
//!
//! Kinds whose grammar has alternation (UK VAT, Company Number, HSN/SAC,
//! PAYE) validate by hand in their strategy; everything fixed-length is
//! described declaratively here.

use crate::error::ValidationError;
use crate::result::SegmentValues;

/// Character class a segment's characters must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Alpha,
    Alphanumeric,
    /// A fixed literal character (e.g. GSTIN's `Z`, Japan's `T`).
    Literal(char),
}

impl CharClass {
    pub fn matches(&self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::Alpha => c.is_ascii_uppercase(),
            Self::Alphanumeric => c.is_ascii_digit() || c.is_ascii_uppercase(),
            Self::Literal(expected) => c == *expected,
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Self::Digit => "digits",
            Self::Alpha => "letters",
            Self::Alphanumeric => "letters or digits",
            Self::Literal(_) => "a fixed literal",
        }
    }
}

/// Semantic role of a segment, surfaced through `parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRole {
    StateCode,
    Pan,
    EntityType,
    EntityNumber,
    Sequence,
    CheckDigit,
    FixedMarker,
    Prefix,
    Suffix,
    Body,
}

/// One positional segment of a fixed-grammar identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub name: &'static str,
    pub len: usize,
    pub class: CharClass,
    pub role: SegmentRole,
}

impl Segment {
    pub const fn new(name: &'static str, len: usize, class: CharClass, role: SegmentRole) -> Self {
        Self {
            name,
            len,
            class,
            role,
        }
    }

    fn is_marker(&self) -> bool {
        matches!(self.class, CharClass::Literal(_))
    }
}

/// Ordered segment list with a fixed total length.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub segments: &'static [Segment],
}

impl Schema {
    pub const fn new(segments: &'static [Segment]) -> Self {
        Self { segments }
    }

    pub fn total_len(&self) -> usize {
        self.segments.iter().map(|s| s.len).sum()
    }

    /// Length and character-class check, in the documented error order.
    ///
    /// Fixed-literal markers are **not** checked here: the order mandates
    /// lookup-code checks before marker checks, so strategies call
    /// [`Schema::check_markers`] separately, after cross-field validation.
    pub fn check_structure(&self, value: &str) -> Result<(), ValidationError> {
        let total = self.total_len();
        if value.chars().count() != total {
            return Err(ValidationError::invalid_length(total, value.chars().count()));
        }
        // Non-ASCII can't match any class and would break positional slicing.
        if !value.is_ascii() {
            return Err(ValidationError::invalid_format(
                "identifier contains non-ASCII characters",
            ));
        }
        let mut offset = 0;
        for segment in self.segments {
            let piece = &value[offset..offset + segment.len];
            if !segment.is_marker() && !piece.chars().all(|c| segment.class.matches(c)) {
                return Err(ValidationError::invalid_format(format!(
                    "segment `{}` must be {}",
                    segment.name,
                    segment.class.describe()
                )));
            }
            offset += segment.len;
        }
        Ok(())
    }

    /// Fixed-literal marker check. Call only after `check_structure`.
    pub fn check_markers(&self, value: &str) -> Result<(), ValidationError> {
        let mut offset = 0;
        for segment in self.segments {
            if let CharClass::Literal(expected) = segment.class {
                let piece = &value[offset..offset + segment.len];
                if piece != expected.to_string() {
                    return Err(ValidationError::invalid_prefix(format!(
                        "segment `{}` must be `{}`",
                        segment.name, expected
                    )));
                }
            }
            offset += segment.len;
        }
        Ok(())
    }

    /// Decompose a structurally valid value into named segments.
    ///
    /// Fixed markers carry no information and are omitted.
    pub fn extract(&self, value: &str) -> SegmentValues {
        let mut segments = SegmentValues::new();
        let mut offset = 0;
        for segment in self.segments {
            if !segment.is_marker() {
                segments.set(segment.name, &value[offset..offset + segment.len]);
            }
            offset += segment.len;
        }
        segments
    }
}
