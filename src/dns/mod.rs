//! DNS TXT record querying.
//!
//! This module provides async TXT lookups behind the [`TxtResolver`] trait:
//! - [`HickoryTxtResolver`]: queries DNS through `hickory-resolver`, honouring
//!   the system resolver configuration
//! - [`StaticTxtResolver`]: answers from an in-memory table
//!
//! plus [`find_record_with_prefix`] for picking a versioned record out of a
//! TXT record set.

mod extract;
mod fixture;
mod records;

// Re-export public API
pub use extract::find_record_with_prefix;
pub use fixture::StaticTxtResolver;
pub use records::{lookup_txt_records, HickoryTxtResolver, TxtResolver};
