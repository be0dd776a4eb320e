//! Static lookup-table entry types.
//!
//! Tables themselves live in the country crates as `&'static` slices built
//! once at load; entries are immutable and shared by reference, so lookups
//! need no locking regardless of caller threading.

use serde::Serialize;

/// Classification of a lookup entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupClass {
    /// Ordinary state or region.
    State,
    /// Union territory (attracts UTGST rather than SGST in India).
    UnionTerritory,
    /// Non-physical jurisdiction code (e.g. GST codes 97/99).
    SpecialJurisdiction,
    /// Legal-entity or holder type (Spain CIF letters, India PAN letters).
    OrganizationType,
}

/// One immutable row of a static lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LookupEntry {
    pub code: &'static str,
    pub name: &'static str,
    /// Inactive entries stay in the table for parsing old data but fail
    /// cross-field validation.
    pub active: bool,
    pub class: LookupClass,
}

/// Filter for list-style lookup accessors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupFilter {
    pub active_only: bool,
    pub class: Option<LookupClass>,
}

impl LookupFilter {
    /// Only entries currently usable for new registrations.
    pub fn active() -> Self {
        Self {
            active_only: true,
            class: None,
        }
    }

    /// Only entries of the given class.
    pub fn of_class(class: LookupClass) -> Self {
        Self {
            active_only: false,
            class: Some(class),
        }
    }

    pub fn matches(&self, entry: &LookupEntry) -> bool {
        if self.active_only && !entry.active {
            return false;
        }
        if let Some(class) = self.class {
            if entry.class != class {
                return false;
            }
        }
        true
    }
}
