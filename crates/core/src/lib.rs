//! `taxid-core` — shared tax-identifier domain primitives.
//!
//! This crate contains **pure domain** building blocks (no infrastructure
//! concerns): identifier kinds, segment schemas, validation results, lookup
//! entry types, the shared normalizer, and the strategy trait every country
//! module implements.

pub mod error;
pub mod kind;
pub mod lookup;
pub mod normalize;
pub mod result;
pub mod schema;
pub mod strategy;

pub use error::{GenerateError, ValidationError, ValidationErrorKind};
pub use kind::{Country, IdentifierKind};
pub use lookup::{LookupClass, LookupEntry, LookupFilter};
pub use normalize::{group, normalize};
pub use result::{ParsedIdentifier, SegmentValues, ValidationResult};
pub use schema::{CharClass, Schema, Segment, SegmentRole};
pub use strategy::IdentifierStrategy;
