//! `taxid-registry` — dispatch table and public facade for the
//! tax-identifier toolkit.
//!
//! Callers address every identifier family through one API keyed by
//! [`IdentifierKind`]; the registry selects the matching strategy and
//! delegates. All operations are synchronous, pure and side-effect-free
//! over immutable inputs and load-once lookup tables, so batch callers may
//! fan out across threads without coordination.

pub mod lookups;
pub mod registry;

pub use lookups::{by_code, by_name, list};
pub use registry::{format, generate, is_valid, parse, strategy, validate, validate_many};

pub use taxid_core::{
    Country, GenerateError, IdentifierKind, IdentifierStrategy, LookupClass, LookupEntry,
    LookupFilter, ParsedIdentifier, SegmentValues, ValidationError, ValidationErrorKind,
    ValidationResult,
};

pub use taxid_india::{
    determine_transaction_type, required_hsn_digits, split_rate, GstComponent, GstRateSplit,
    GstTransaction, GstTransactionType,
};
