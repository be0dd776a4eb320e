//! CIF organization-type letters.
//!
//! Seventeen documented type letters with business meaning; used for
//! `parse()` output and to pick the control character's rendering class,
//! never for the control computation itself.

use taxid_core::{LookupClass, LookupEntry};

const fn org(code: &'static str, name: &'static str) -> LookupEntry {
    LookupEntry {
        code,
        name,
        active: true,
        class: LookupClass::OrganizationType,
    }
}

pub static ORG_TYPES: &[LookupEntry] = &[
    org("A", "Public limited company"),
    org("B", "Limited liability company"),
    org("C", "General partnership"),
    org("D", "Limited partnership"),
    org("E", "Community of property"),
    org("F", "Cooperative"),
    org("G", "Association"),
    org("H", "Homeowners' association"),
    org("J", "Civil society"),
    org("N", "Foreign entity"),
    org("P", "Local government body"),
    org("Q", "Public organism"),
    org("R", "Religious congregation"),
    org("S", "Central government body"),
    org("U", "Temporary joint venture"),
    org("V", "Other entity type"),
    org("W", "Permanent establishment of a non-resident entity"),
];

pub fn by_code(code: &str) -> Option<&'static LookupEntry> {
    ORG_TYPES.iter().find(|entry| entry.code == code)
}

pub fn by_name(name: &str) -> Option<&'static LookupEntry> {
    let needle = name.trim();
    ORG_TYPES
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(needle))
}

pub fn all() -> &'static [LookupEntry] {
    ORG_TYPES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seventeen_documented_type_letters() {
        assert_eq!(ORG_TYPES.len(), 17);
    }

    #[test]
    fn codes_and_names_resolve() {
        assert_eq!(by_code("B").unwrap().name, "Limited liability company");
        assert_eq!(by_name("cooperative").unwrap().code, "F");
        assert!(by_code("K").is_none());
    }
}
