//! Japanese tax identifiers: Corporate Number and the Qualified Invoice
//! Registration Number.
//!
//! Pure deterministic domain logic (no IO, no HTTP, no storage).

pub mod corporate_number;
pub mod invoice_registration;

pub use corporate_number::JpCorporateNumber;
pub use invoice_registration::JpInvoiceRegistration;
