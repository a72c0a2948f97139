//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Why a domain could not be reduced to a registrable base domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDomainReason {
    /// Nothing left after trimming.
    #[error("domain is empty")]
    Empty,

    /// Input looked like a URL but could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// URL parsed but carries no host.
    #[error("URL has no host component")]
    MissingHost,

    /// Leading dot, trailing dots or `..`.
    #[error("empty label in domain")]
    EmptyLabel,

    /// IP literals have no registrable domain.
    #[error("IP addresses do not have registrable domains")]
    IpAddress,

    /// Label over 63 bytes or name over 253 bytes.
    #[error("domain or label exceeds the maximum DNS length")]
    TooLong,

    /// Character outside `[a-z0-9_-]`.
    #[error("invalid character {0:?} in domain")]
    InvalidCharacter(char),

    /// The suffix is not a public-suffix-list entry.
    #[error("no recognizable public suffix")]
    UnknownSuffix,

    /// The input is a public suffix itself (`com`, `co.uk`, ...).
    #[error("cannot derive eTLD+1 for domain")]
    NoRegistrableDomain,
}

/// The input cannot be reduced to a registrable base domain.
///
/// Fatal to a run: no DNS queries are performed once this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot determine base domain for {input:?}: {reason}")]
pub struct InvalidDomainError {
    /// Raw input as supplied by the user.
    pub input: String,
    /// What was wrong with it.
    pub reason: InvalidDomainReason,
}

impl InvalidDomainError {
    pub(crate) fn new(input: &str, reason: InvalidDomainReason) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// A TXT lookup that did not return an answer.
///
/// Recovered per check: the record counts as not found and a diagnostic is
/// printed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// NXDOMAIN, or the name exists but has no TXT records.
    #[error("no TXT records found for {name}")]
    NoRecords {
        /// Queried name.
        name: String,
    },

    /// The resolver gave up waiting for an answer.
    #[error("TXT lookup for {name} timed out")]
    Timeout {
        /// Queried name.
        name: String,
    },

    /// Any other resolver failure (network, malformed response, ...).
    #[error("TXT lookup for {name} failed: {message}")]
    Resolver {
        /// Queried name.
        name: String,
        /// Resolver error text.
        message: String,
    },
}

impl LookupError {
    /// Returns `true` when the answer proves the record does not exist.
    ///
    /// Timeouts and resolver failures leave the question open.
    pub fn is_definitive(&self) -> bool {
        matches!(self, LookupError::NoRecords { .. })
    }
}
