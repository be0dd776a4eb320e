//! Strategy seam: one implementation per identifier family.

use crate::error::GenerateError;
use crate::kind::IdentifierKind;
use crate::lookup::LookupEntry;
use crate::normalize;
use crate::result::{ParsedIdentifier, SegmentValues, ValidationResult};

/// Capability set every identifier family implements.
///
/// Strategies are stateless unit structs selected by the registry; every
/// public operation is a pure function of its input and the static lookup
/// tables. `Send + Sync` is free (no state) and lets callers fan out
/// batch validation across threads without coordination.
pub trait IdentifierStrategy: Send + Sync {
    fn kind(&self) -> IdentifierKind;

    /// Canonical normalization. The shared normalizer fits every kind;
    /// override only if a family ever needs more.
    fn normalize(&self, raw: &str) -> String {
        normalize::normalize(raw)
    }

    /// Full pipeline: normalize → structure → segments → cross-field
    /// lookups → checksum. Never panics on malformed input.
    fn validate(&self, raw: &str) -> ValidationResult;

    /// Lookup entries referenced by a valid identifier's segments.
    fn resolve_lookups(&self, segments: &SegmentValues) -> Vec<LookupEntry> {
        let _ = segments;
        Vec::new()
    }

    /// Decompose into named segments plus resolved lookup entries;
    /// `None` for anything invalid.
    fn parse(&self, raw: &str) -> Option<ParsedIdentifier> {
        let result = self.validate(raw);
        if !result.is_valid {
            return None;
        }
        let lookups = self.resolve_lookups(&result.segments);
        Some(ParsedIdentifier {
            kind: self.kind(),
            normalized_value: result.normalized_value,
            segments: result.segments,
            lookups,
        })
    }

    /// Re-insert canonical display separators. Does not check or alter
    /// validity; kinds without a display convention return the normalized
    /// value unchanged.
    fn format(&self, raw: &str, separator: Option<&str>) -> String {
        let _ = separator;
        self.normalize(raw)
    }

    /// Compose a canonical identifier from (possibly partial) named
    /// segments, computing the check digit rather than accepting one.
    /// Unsupplied segments take deterministic defaults. Fails on the
    /// construction channel only; its inputs are never end-user text.
    fn generate(&self, parts: &SegmentValues) -> Result<String, GenerateError>;
}

/// Reject segment names the schema doesn't know, so fixture typos surface
/// as construction errors instead of silently ignored fields.
pub fn reject_unknown_segments(
    parts: &SegmentValues,
    known: &[&str],
) -> Result<(), GenerateError> {
    for entry in parts.iter() {
        if !known.contains(&entry.name.as_str()) {
            return Err(GenerateError::unknown_segment(&entry.name));
        }
    }
    Ok(())
}
