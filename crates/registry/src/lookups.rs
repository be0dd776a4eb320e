//! Lookup-table accessors, keyed by the identifier kind whose segments
//! the table backs.
//!
//! GSTIN resolves against the GST state table, PAN against holder types,
//! CIF (and the `ES` VAT wrapper) against CIF organization types. Kinds
//! without a lookup-backed segment resolve to nothing.

use taxid_core::{IdentifierKind, LookupEntry, LookupFilter};

fn table(kind: IdentifierKind) -> &'static [LookupEntry] {
    match kind {
        IdentifierKind::Gstin => taxid_india::states::all(),
        IdentifierKind::Pan => taxid_india::pan::HOLDER_TYPES,
        IdentifierKind::Cif | IdentifierKind::SpanishVat => taxid_spain::org_types::all(),
        _ => &[],
    }
}

/// Entry whose code matches exactly.
pub fn by_code(kind: IdentifierKind, code: &str) -> Option<&'static LookupEntry> {
    table(kind).iter().find(|entry| entry.code == code)
}

/// Entry whose display name matches, case-insensitively.
pub fn by_name(kind: IdentifierKind, name: &str) -> Option<&'static LookupEntry> {
    let needle = name.trim();
    table(kind)
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(needle))
}

/// All entries for a kind, optionally filtered.
pub fn list(kind: IdentifierKind, filter: Option<LookupFilter>) -> Vec<&'static LookupEntry> {
    let filter = filter.unwrap_or_default();
    table(kind)
        .iter()
        .filter(|entry| filter.matches(entry))
        .collect()
}
