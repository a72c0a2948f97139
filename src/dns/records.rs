//! TXT record queries.
//!
//! [`TxtResolver`] is the seam between the record checks and the network.
//! [`HickoryTxtResolver`] answers from DNS; tests and offline callers use
//! [`super::StaticTxtResolver`] instead.

use std::future::Future;
use std::sync::Arc;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::LookupError;

/// Answers TXT queries by name.
pub trait TxtResolver: Send + Sync {
    /// Returns every TXT record published at `name`, each record's character
    /// strings joined into a single string.
    fn lookup_txt(&self, name: &str)
        -> impl Future<Output = Result<Vec<String>, LookupError>> + Send;
}

/// TXT lookups through a shared hickory resolver.
#[derive(Clone)]
pub struct HickoryTxtResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryTxtResolver {
    /// Wraps an already configured resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

impl TxtResolver for HickoryTxtResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        lookup_txt_records(name, &self.resolver).await
    }
}

/// Queries TXT (text) records for a domain.
///
/// # Arguments
///
/// * `domain` - The name to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of TXT record strings.
///
/// # Errors
///
/// NXDOMAIN and NOERROR-with-no-answers are [`LookupError::NoRecords`].
/// Timeouts are [`LookupError::Timeout`]. Any other response code (SERVFAIL,
/// REFUSED, ...) or transport failure is [`LookupError::Resolver`] carrying
/// the resolver's message.
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, LookupError> {
    match resolver.txt_lookup(domain).await {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .map(|txt| {
                    // TXT records can contain multiple strings - join them
                    txt.iter()
                        .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                        .collect::<Vec<String>>()
                        .join("")
                })
                .collect();
            log::debug!("TXT lookup for {domain} returned {} records", txt_records.len());
            Ok(txt_records)
        }
        Err(e) => {
            let err = classify_resolve_error(domain, &e);
            log::debug!("TXT lookup for {domain} failed: {e}");
            Err(err)
        }
    }
}

pub(super) fn classify_resolve_error(domain: &str, e: &ResolveError) -> LookupError {
    let name = domain.to_string();
    match e.kind() {
        // hickory also reports SERVFAIL, REFUSED and friends as NoRecordsFound
        ResolveErrorKind::NoRecordsFound {
            response_code: ResponseCode::NXDomain | ResponseCode::NoError,
            ..
        } => LookupError::NoRecords { name },
        ResolveErrorKind::Timeout => LookupError::Timeout { name },
        _ => {
            let message = e.to_string();
            if message.contains("timed out") {
                LookupError::Timeout { name }
            } else {
                LookupError::Resolver { name, message }
            }
        }
    }
}
