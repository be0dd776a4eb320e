//! GST state and jurisdiction code table.
//!
//! Codes 01–38 cover states and union territories; 97 (Other Territory)
//! and 99 (Centre Jurisdiction) are non-physical jurisdiction codes and
//! carry a distinct class so downstream rules can treat them specially.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use taxid_core::{LookupClass, LookupEntry};

const STATE: LookupClass = LookupClass::State;
const UT: LookupClass = LookupClass::UnionTerritory;
const SPECIAL: LookupClass = LookupClass::SpecialJurisdiction;

const fn entry(code: &'static str, name: &'static str, active: bool, class: LookupClass) -> LookupEntry {
    LookupEntry {
        code,
        name,
        active,
        class,
    }
}

/// All GST jurisdiction codes.
///
/// Code 25 (Daman and Diu) and code 28 (pre-division Andhra Pradesh) are
/// retained for parsing old registrations but are inactive: 25 merged into
/// 26, and Andhra Pradesh re-registered under 37 after the Telangana split.
pub static STATES: &[LookupEntry] = &[
    entry("01", "Jammu and Kashmir", true, STATE),
    entry("02", "Himachal Pradesh", true, STATE),
    entry("03", "Punjab", true, STATE),
    entry("04", "Chandigarh", true, UT),
    entry("05", "Uttarakhand", true, STATE),
    entry("06", "Haryana", true, STATE),
    entry("07", "Delhi", true, STATE),
    entry("08", "Rajasthan", true, STATE),
    entry("09", "Uttar Pradesh", true, STATE),
    entry("10", "Bihar", true, STATE),
    entry("11", "Sikkim", true, STATE),
    entry("12", "Arunachal Pradesh", true, STATE),
    entry("13", "Nagaland", true, STATE),
    entry("14", "Manipur", true, STATE),
    entry("15", "Mizoram", true, STATE),
    entry("16", "Tripura", true, STATE),
    entry("17", "Meghalaya", true, STATE),
    entry("18", "Assam", true, STATE),
    entry("19", "West Bengal", true, STATE),
    entry("20", "Jharkhand", true, STATE),
    entry("21", "Odisha", true, STATE),
    entry("22", "Chhattisgarh", true, STATE),
    entry("23", "Madhya Pradesh", true, STATE),
    entry("24", "Gujarat", true, STATE),
    entry("25", "Daman and Diu", false, UT),
    entry("26", "Dadra and Nagar Haveli and Daman and Diu", true, UT),
    entry("27", "Maharashtra", true, STATE),
    entry("28", "Andhra Pradesh (before division)", false, STATE),
    entry("29", "Karnataka", true, STATE),
    entry("30", "Goa", true, STATE),
    entry("31", "Lakshadweep", true, UT),
    entry("32", "Kerala", true, STATE),
    entry("33", "Tamil Nadu", true, STATE),
    entry("34", "Puducherry", true, STATE),
    entry("35", "Andaman and Nicobar Islands", true, UT),
    entry("36", "Telangana", true, STATE),
    entry("37", "Andhra Pradesh", true, STATE),
    entry("38", "Ladakh", true, UT),
    entry("97", "Other Territory", true, SPECIAL),
    entry("99", "Centre Jurisdiction", true, SPECIAL),
];

static BY_CODE: Lazy<HashMap<&'static str, &'static LookupEntry>> =
    Lazy::new(|| STATES.iter().map(|entry| (entry.code, entry)).collect());

static BY_NAME: Lazy<HashMap<String, &'static LookupEntry>> = Lazy::new(|| {
    STATES
        .iter()
        .map(|entry| (entry.name.to_ascii_lowercase(), entry))
        .collect()
});

pub fn by_code(code: &str) -> Option<&'static LookupEntry> {
    BY_CODE.get(code).copied()
}

/// Case-insensitive name lookup.
pub fn by_name(name: &str) -> Option<&'static LookupEntry> {
    BY_NAME.get(&name.trim().to_ascii_lowercase()).copied()
}

pub fn all() -> &'static [LookupEntry] {
    STATES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_resolve_to_entries() {
        assert_eq!(by_code("27").unwrap().name, "Maharashtra");
        assert_eq!(by_code("38").unwrap().name, "Ladakh");
        assert!(by_code("00").is_none());
        assert!(by_code("39").is_none());
    }

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(by_name("maharashtra").unwrap().code, "27");
        assert_eq!(by_name("  TAMIL NADU ").unwrap().code, "33");
        assert!(by_name("atlantis").is_none());
    }

    #[test]
    fn special_jurisdictions_are_not_states() {
        assert_eq!(by_code("97").unwrap().class, LookupClass::SpecialJurisdiction);
        assert_eq!(by_code("99").unwrap().class, LookupClass::SpecialJurisdiction);
    }

    #[test]
    fn merged_territories_stay_resolvable_but_inactive() {
        let daman = by_code("25").unwrap();
        assert!(!daman.active);
        assert!(by_code("26").unwrap().active);
    }

    #[test]
    fn union_territories_are_flagged() {
        for code in ["04", "26", "31", "35", "38"] {
            assert_eq!(by_code(code).unwrap().class, LookupClass::UnionTerritory);
        }
        assert_eq!(by_code("07").unwrap().class, LookupClass::State);
    }
}
