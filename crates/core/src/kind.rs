//! Identifier kinds and the countries that issue them.

use serde::{Deserialize, Serialize};

/// Issuing country of a tax identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    India,
    Spain,
    Japan,
    UnitedKingdom,
}

/// Category of tax identifier.
///
/// Each kind maps to exactly one grammar and one checksum family; the
/// registry selects the matching strategy from this key alone (the country
/// is derivable, see [`IdentifierKind::country`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// India: Goods and Services Tax Identification Number (15 characters).
    Gstin,
    /// India: Permanent Account Number (10 characters).
    Pan,
    /// India: Harmonized System goods code (4, 6 or 8 digits).
    Hsn,
    /// India: Service Accounting Code (6 digits starting `99`).
    Sac,
    /// Spain: NIF for resident individuals (8 digits + control letter).
    Nif,
    /// Spain: NIE for foreign individuals (X/Y/Z + 7 digits + control letter).
    Nie,
    /// Spain: CIF for legal entities (type letter + 7 digits + control).
    Cif,
    /// Spain: VAT number (`ES` followed by a NIF, NIE or CIF).
    SpanishVat,
    /// Japan: Corporate Number (13 digits, leading check digit).
    JpCorporateNumber,
    /// Japan: Qualified Invoice Registration Number (`T` + Corporate Number).
    JpInvoiceRegistration,
    /// United Kingdom: VAT registration number.
    UkVat,
    /// United Kingdom: Companies House registration number.
    UkCompanyNumber,
    /// United Kingdom: Unique Taxpayer Reference (10 digits, mod-11 check).
    UkUtr,
    /// United Kingdom: National Insurance Number.
    UkNino,
    /// United Kingdom: PAYE employer reference.
    UkPaye,
}

impl IdentifierKind {
    /// Issuing country for this kind.
    pub fn country(&self) -> Country {
        match self {
            Self::Gstin | Self::Pan | Self::Hsn | Self::Sac => Country::India,
            Self::Nif | Self::Nie | Self::Cif | Self::SpanishVat => Country::Spain,
            Self::JpCorporateNumber | Self::JpInvoiceRegistration => Country::Japan,
            Self::UkVat | Self::UkCompanyNumber | Self::UkUtr | Self::UkNino | Self::UkPaye => {
                Country::UnitedKingdom
            }
        }
    }

    /// All supported kinds, in registry order.
    pub fn all() -> &'static [IdentifierKind] {
        &[
            Self::Gstin,
            Self::Pan,
            Self::Hsn,
            Self::Sac,
            Self::Nif,
            Self::Nie,
            Self::Cif,
            Self::SpanishVat,
            Self::JpCorporateNumber,
            Self::JpInvoiceRegistration,
            Self::UkVat,
            Self::UkCompanyNumber,
            Self::UkUtr,
            Self::UkNino,
            Self::UkPaye,
        ]
    }
}

impl core::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Gstin => "GSTIN",
            Self::Pan => "PAN",
            Self::Hsn => "HSN",
            Self::Sac => "SAC",
            Self::Nif => "NIF",
            Self::Nie => "NIE",
            Self::Cif => "CIF",
            Self::SpanishVat => "ES VAT",
            Self::JpCorporateNumber => "Corporate Number",
            Self::JpInvoiceRegistration => "Invoice Registration Number",
            Self::UkVat => "UK VAT",
            Self::UkCompanyNumber => "Company Number",
            Self::UkUtr => "UTR",
            Self::UkNino => "NINO",
            Self::UkPaye => "PAYE reference",
        };
        f.write_str(name)
    }
}
