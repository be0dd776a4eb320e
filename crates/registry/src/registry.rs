//! Strategy dispatch and the facade operations built on it.

use tracing::{debug, trace};

use taxid_core::{
    GenerateError, IdentifierKind, IdentifierStrategy, ParsedIdentifier, SegmentValues,
    ValidationResult,
};

/// The strategy registered for a kind.
///
/// Strategies are stateless unit structs, so the references are promoted
/// statics; adding a country's format means adding one strategy and one
/// arm here.
pub fn strategy(kind: IdentifierKind) -> &'static dyn IdentifierStrategy {
    match kind {
        IdentifierKind::Gstin => &taxid_india::Gstin,
        IdentifierKind::Pan => &taxid_india::Pan,
        IdentifierKind::Hsn => &taxid_india::Hsn,
        IdentifierKind::Sac => &taxid_india::Sac,
        IdentifierKind::Nif => &taxid_spain::Nif,
        IdentifierKind::Nie => &taxid_spain::Nie,
        IdentifierKind::Cif => &taxid_spain::Cif,
        IdentifierKind::SpanishVat => &taxid_spain::SpanishVat,
        IdentifierKind::JpCorporateNumber => &taxid_japan::JpCorporateNumber,
        IdentifierKind::JpInvoiceRegistration => &taxid_japan::JpInvoiceRegistration,
        IdentifierKind::UkVat => &taxid_uk::UkVat,
        IdentifierKind::UkCompanyNumber => &taxid_uk::UkCompanyNumber,
        IdentifierKind::UkUtr => &taxid_uk::UkUtr,
        IdentifierKind::UkNino => &taxid_uk::UkNino,
        IdentifierKind::UkPaye => &taxid_uk::UkPaye,
    }
}

/// Validate one identifier.
///
/// Identifier values are tax data: only the kind and error kind are
/// logged at `debug`, the value itself only at `trace`.
pub fn validate(kind: IdentifierKind, raw: &str) -> ValidationResult {
    let result = strategy(kind).validate(raw);
    match &result.error {
        None => trace!(%kind, value = %result.normalized_value, "identifier validated"),
        Some(err) => debug!(%kind, error = ?err.kind, "identifier failed validation"),
    }
    result
}

/// Convenience wrapper over [`validate`].
pub fn is_valid(kind: IdentifierKind, raw: &str) -> bool {
    validate(kind, raw).is_valid
}

/// Decompose a valid identifier into segments and resolved lookups.
pub fn parse(kind: IdentifierKind, raw: &str) -> Option<ParsedIdentifier> {
    strategy(kind).parse(raw)
}

/// Re-insert canonical display separators.
pub fn format(kind: IdentifierKind, raw: &str, separator: Option<&str>) -> String {
    strategy(kind).format(raw, separator)
}

/// Compose a canonical identifier from (possibly partial) segments.
pub fn generate(
    kind: IdentifierKind,
    parts: &SegmentValues,
) -> Result<String, GenerateError> {
    let generated = strategy(kind).generate(parts)?;
    trace!(%kind, value = %generated, "identifier generated");
    Ok(generated)
}

/// Validate a batch, index-aligned with the input.
pub fn validate_many<S: AsRef<str>>(kind: IdentifierKind, raw_values: &[S]) -> Vec<ValidationResult> {
    raw_values
        .iter()
        .map(|raw| validate(kind, raw.as_ref()))
        .collect()
}
