//! In-memory TXT resolver.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::TxtResolver;
use crate::error_handling::LookupError;

/// Answers TXT queries from a fixed table, without touching the network.
///
/// Names that were never registered answer like NXDOMAIN. Every query is
/// counted and remembered, so callers can assert exactly which names were
/// looked up.
///
/// ```
/// use spoof_check::dns::StaticTxtResolver;
///
/// let resolver = StaticTxtResolver::new()
///     .with_records("example.com", ["v=spf1 -all"])
///     .with_records("_dmarc.example.com", ["v=DMARC1; p=reject"]);
/// assert_eq!(resolver.query_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct StaticTxtResolver {
    records: HashMap<String, Vec<String>>,
    failures: HashMap<String, LookupError>,
    queries: AtomicUsize,
    queried_names: Mutex<Vec<String>>,
}

impl StaticTxtResolver {
    /// Creates an empty resolver; every name answers NXDOMAIN.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `records` at `name`, appending to anything already there.
    pub fn with_records<I, S>(mut self, name: &str, records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.records
            .entry(normalize_name(name))
            .or_default()
            .extend(records.into_iter().map(Into::into));
        self
    }

    /// Makes every query for `name` fail with `error`.
    pub fn with_failure(mut self, name: &str, error: LookupError) -> Self {
        self.failures.insert(normalize_name(name), error);
        self
    }

    /// Number of queries answered so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Names queried so far, in the order the queries arrived.
    pub fn queried_names(&self) -> Vec<String> {
        self.queried_names
            .lock()
            .map(|names| names.clone())
            .unwrap_or_default()
    }

    fn answer(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut names) = self.queried_names.lock() {
            names.push(name.to_string());
        }

        let key = normalize_name(name);
        if let Some(error) = self.failures.get(&key) {
            return Err(error.clone());
        }
        self.records
            .get(&key)
            .cloned()
            .ok_or_else(|| LookupError::NoRecords {
                name: name.to_string(),
            })
    }
}

impl TxtResolver for StaticTxtResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.answer(name)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}
