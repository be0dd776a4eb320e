//! Spanish tax identifiers: NIF, NIE, CIF and the `ES` VAT wrapper.
//!
//! Pure deterministic domain logic (no IO, no HTTP, no storage).

pub mod cif;
pub mod nif;
pub mod org_types;
pub mod vat;

pub use cif::{Cif, ControlClass};
pub use nif::{Nie, Nif};
pub use vat::SpanishVat;
