//! Validation outputs: results, parsed identifiers and segment maps.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationErrorKind};
use crate::kind::IdentifierKind;
use crate::lookup::LookupEntry;

/// One named semantic segment of an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentEntry {
    pub name: String,
    pub value: String,
}

/// Ordered name → value mapping of an identifier's semantic segments.
///
/// Preserves schema order. Also used as the (possibly partial) input to
/// `generate`. Small enough that linear lookup beats a map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentValues(Vec<SegmentEntry>);

impl SegmentValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for fixture call sites.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or replace a segment value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.value = value,
            None => self.0.push(SegmentEntry { name, value }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SegmentEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome of validating one identifier.
///
/// Created fresh per call; nothing outlives the invocation. Exactly one
/// primary error is reported for an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// The input after normalization, regardless of validity.
    pub normalized_value: String,
    /// Extracted segments; empty when validation failed before extraction.
    pub segments: SegmentValues,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl ValidationResult {
    pub fn valid(normalized_value: impl Into<String>, segments: SegmentValues) -> Self {
        Self {
            is_valid: true,
            normalized_value: normalized_value.into(),
            segments,
            error: None,
        }
    }

    pub fn invalid(normalized_value: impl Into<String>, error: ValidationError) -> Self {
        Self {
            is_valid: false,
            normalized_value: normalized_value.into(),
            segments: SegmentValues::new(),
            error: Some(error),
        }
    }

    /// The primary error kind, if invalid.
    pub fn error_kind(&self) -> Option<ValidationErrorKind> {
        self.error.as_ref().map(|e| e.kind)
    }
}

/// A structurally valid identifier decomposed into semantic fields, plus
/// any lookup entries its segments resolved to (e.g. the state behind a
/// GSTIN's state code).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedIdentifier {
    pub kind: IdentifierKind,
    pub normalized_value: String,
    pub segments: SegmentValues,
    pub lookups: Vec<LookupEntry>,
}

impl ParsedIdentifier {
    /// Resolved lookup entry for a given segment-backed code, if any.
    pub fn lookup(&self, code: &str) -> Option<&LookupEntry> {
        self.lookups.iter().find(|entry| entry.code == code)
    }
}
