//! GST transaction-type derivation and rate splitting.
//!
//! Business rules consumed by tax calculation: comparing the state codes
//! of supplier and recipient GSTINs decides whether a supply is taxed as
//! intra-state (CGST + SGST/UTGST) or inter-state (IGST), and how a total
//! rate is split across those components.

use serde::{Deserialize, Serialize};

use taxid_core::{IdentifierStrategy, LookupClass, ValidationError};

use crate::gstin::Gstin;
use crate::states;

/// Supply classification derived from two GSTINs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GstTransactionType {
    IntraState,
    InterState,
}

/// Tax components a supply attracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GstComponent {
    Cgst,
    Sgst,
    Utgst,
    Igst,
}

/// Transaction type plus the components the rate splits into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstTransaction {
    #[serde(rename = "type")]
    pub transaction_type: GstTransactionType,
    pub tax_components: Vec<GstComponent>,
}

/// Per-component rate split, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GstRateSplit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cgst: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sgst: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utgst: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub igst: Option<f64>,
}

/// Classify a supply between two GSTINs.
///
/// Both identifiers must be valid GSTINs; the first validation failure is
/// returned as-is. A special jurisdiction code (97/99) on either side is
/// classified inter-state even when both codes match, since those codes
/// are not physical states.
pub fn determine_transaction_type(
    supplier_gstin: &str,
    recipient_gstin: &str,
) -> Result<GstTransaction, ValidationError> {
    let supplier = validated_state_code(supplier_gstin)?;
    let recipient = validated_state_code(recipient_gstin)?;

    let special = is_special_jurisdiction(&supplier) || is_special_jurisdiction(&recipient);

    if supplier != recipient || special {
        return Ok(GstTransaction {
            transaction_type: GstTransactionType::InterState,
            tax_components: vec![GstComponent::Igst],
        });
    }

    let recipient_is_ut = states::by_code(&recipient)
        .map(|entry| entry.class == LookupClass::UnionTerritory)
        .unwrap_or(false);
    let state_component = if recipient_is_ut {
        GstComponent::Utgst
    } else {
        GstComponent::Sgst
    };

    Ok(GstTransaction {
        transaction_type: GstTransactionType::IntraState,
        tax_components: vec![GstComponent::Cgst, state_component],
    })
}

fn is_special_jurisdiction(code: &str) -> bool {
    states::by_code(code)
        .map(|entry| entry.class == LookupClass::SpecialJurisdiction)
        .unwrap_or(false)
}

fn validated_state_code(gstin: &str) -> Result<String, ValidationError> {
    let result = Gstin.validate(gstin);
    match result.error {
        Some(err) => Err(err),
        None => Ok(result
            .segments
            .get("state_code")
            .unwrap_or_default()
            .to_string()),
    }
}

/// Split a total rate across components.
///
/// Intra-state supplies halve the rate equally between CGST and SGST
/// (UTGST for union territories); inter-state supplies assign the full
/// rate to IGST.
pub fn split_rate(
    total_rate: f64,
    transaction_type: GstTransactionType,
    is_union_territory: bool,
) -> GstRateSplit {
    match transaction_type {
        GstTransactionType::InterState => GstRateSplit {
            cgst: None,
            sgst: None,
            utgst: None,
            igst: Some(total_rate),
        },
        GstTransactionType::IntraState => {
            let half = total_rate / 2.0;
            GstRateSplit {
                cgst: Some(half),
                sgst: (!is_union_territory).then_some(half),
                utgst: is_union_territory.then_some(half),
                igst: None,
            }
        }
    }
}
