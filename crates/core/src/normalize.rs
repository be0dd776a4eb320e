//! Input normalization and display grouping shared by every identifier kind.

/// Uppercase the input and strip ASCII whitespace and hyphens.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`. All other
/// characters (including separators like `/` that are part of a grammar)
/// are preserved for the structural validator to judge.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Re-insert display separators by splitting `value` into groups of the
/// given widths.
///
/// Characters beyond the widths are appended as a trailing group; a value
/// shorter than the widths is grouped as far as it reaches. Validity is
/// neither checked nor altered.
pub fn group(value: &str, widths: &[usize], separator: &str) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(widths.len() + 1);
    let mut rest = value;
    for &width in widths {
        if rest.is_empty() {
            break;
        }
        let cut = width.min(rest.len());
        // Widths only ever split normalized ASCII identifiers.
        let (head, tail) = rest.split_at(cut);
        parts.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        parts.push(rest);
    }
    parts.join(separator)
}
