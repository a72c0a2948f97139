//! Error handling.
//!
//! Error types are split by how fatal they are:
//! - [`InvalidDomainError`]: the input has no registrable domain; the run stops
//! - [`LookupError`]: one TXT query failed; that check evaluates to false
//! - [`InitializationError`]: ambient setup (logger) failed

mod types;

// Re-export public API
pub use types::{InitializationError, InvalidDomainError, InvalidDomainReason, LookupError};
