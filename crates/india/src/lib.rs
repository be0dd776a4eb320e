//! Indian tax identifiers: GSTIN, PAN, HSN/SAC.
//!
//! Pure deterministic domain logic (no IO, no HTTP, no storage), plus the
//! GST transaction-type derivation and rate-split rules consumed by the
//! host's tax calculation.

pub mod gst;
pub mod gstin;
pub mod hsn;
pub mod pan;
pub mod states;

pub use gst::{
    determine_transaction_type, split_rate, GstComponent, GstRateSplit, GstTransaction,
    GstTransactionType,
};
pub use gstin::Gstin;
pub use hsn::{required_hsn_digits, Hsn, Sac};
pub use pan::Pan;
