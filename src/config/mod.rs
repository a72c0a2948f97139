//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (record prefixes, default selector, messages)
//! - CLI option types and parsing
//! - The CLI-independent [`Config`] used by the library

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{normalize_args, Config, LogFormat, LogLevel, Opt};
