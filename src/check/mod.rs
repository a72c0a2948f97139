//! SPF, DKIM and DMARC presence checks.
//!
//! Each check issues one TXT query for a name derived from the base domain and
//! looks for a record starting with the kind's version tag. Lookup failures
//! never escape a check: they are kept on the [`RecordCheck`] so the caller can
//! print a diagnostic, and the record counts as not found.

use strum_macros::{Display, EnumIter};

use crate::config::{DKIM_LABEL, DKIM_PREFIX, DMARC_LABEL, DMARC_PREFIX, SPF_PREFIX};
use crate::dns::{find_record_with_prefix, TxtResolver};
use crate::error_handling::LookupError;

/// The three record kinds, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum RecordKind {
    /// Sender Policy Framework, published at the domain itself
    #[strum(to_string = "SPF")]
    Spf,
    /// DomainKeys Identified Mail key, published per selector
    #[strum(to_string = "DKIM")]
    Dkim,
    /// DMARC policy, published at `_dmarc.<domain>`
    #[strum(to_string = "DMARC")]
    Dmarc,
}

impl RecordKind {
    /// Version tag a record of this kind starts with.
    pub fn prefix(self) -> &'static str {
        match self {
            RecordKind::Spf => SPF_PREFIX,
            RecordKind::Dkim => DKIM_PREFIX,
            RecordKind::Dmarc => DMARC_PREFIX,
        }
    }

    /// Name to query for this kind. `selector` only matters for DKIM.
    pub fn query_name(self, domain: &str, selector: &str) -> String {
        match self {
            RecordKind::Spf => domain.to_string(),
            RecordKind::Dkim => format!("{selector}.{DKIM_LABEL}.{domain}"),
            RecordKind::Dmarc => format!("{DMARC_LABEL}.{domain}"),
        }
    }
}

/// Outcome of a single record check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordStatus {
    /// A record with the expected prefix is published.
    Present {
        /// The matching TXT record.
        record: String,
    },
    /// The name answered and holds no matching record.
    ///
    /// `lookup_error` is set when the answer was NXDOMAIN or "no records".
    Absent {
        /// Negative answer from the resolver, if any.
        lookup_error: Option<LookupError>,
    },
    /// The lookup failed, so presence is unknown.
    Indeterminate(LookupError),
}

/// One record kind checked against one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCheck {
    /// Which record was looked for.
    pub kind: RecordKind,
    /// The TXT name that was queried.
    pub query_name: String,
    /// What the query turned up.
    pub status: RecordStatus,
}

impl RecordCheck {
    /// `true` only when a matching record was seen. Absent and
    /// indeterminate both read as `false`.
    pub fn found(&self) -> bool {
        matches!(self.status, RecordStatus::Present { .. })
    }

    /// The lookup error behind this result, if the query failed.
    pub fn lookup_error(&self) -> Option<&LookupError> {
        match &self.status {
            RecordStatus::Present { .. } => None,
            RecordStatus::Absent { lookup_error } => lookup_error.as_ref(),
            RecordStatus::Indeterminate(err) => Some(err),
        }
    }
}

/// Overall spoofing estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// All three records are published.
    SpoofingUnlikely,
    /// At least one record is missing or could not be checked.
    SpoofingPossible,
}

/// Results of all three checks for one base domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Registrable domain the checks ran against.
    pub base_domain: String,
    /// SPF check
    pub spf: RecordCheck,
    /// DKIM check
    pub dkim: RecordCheck,
    /// DMARC check
    pub dmarc: RecordCheck,
}

impl CheckReport {
    /// The checks in report order: SPF, DKIM, DMARC.
    pub fn checks(&self) -> [&RecordCheck; 3] {
        [&self.spf, &self.dkim, &self.dmarc]
    }

    /// Spoofing is unlikely only if every record was found.
    pub fn verdict(&self) -> Verdict {
        if self.checks().iter().all(|check| check.found()) {
            Verdict::SpoofingUnlikely
        } else {
            Verdict::SpoofingPossible
        }
    }
}

/// Looks up `kind` for `domain` and classifies the answer.
pub async fn check_record<R: TxtResolver>(
    resolver: &R,
    kind: RecordKind,
    domain: &str,
    selector: &str,
) -> RecordCheck {
    let query_name = kind.query_name(domain, selector);
    let status = match resolver.lookup_txt(&query_name).await {
        Ok(txt_records) => match find_record_with_prefix(&txt_records, kind.prefix()) {
            Some(record) => RecordStatus::Present {
                record: record.to_string(),
            },
            None => RecordStatus::Absent { lookup_error: None },
        },
        Err(e) if e.is_definitive() => RecordStatus::Absent {
            lookup_error: Some(e),
        },
        Err(e) => RecordStatus::Indeterminate(e),
    };
    log::debug!("{kind} check for {query_name}: {status:?}");

    RecordCheck {
        kind,
        query_name,
        status,
    }
}

/// Checks for an SPF record (`v=spf1`) at `domain`.
pub async fn check_spf<R: TxtResolver>(resolver: &R, domain: &str) -> RecordCheck {
    check_record(resolver, RecordKind::Spf, domain, "").await
}

/// Checks for a DKIM key (`v=DKIM1`) at `<selector>._domainkey.<domain>`.
///
/// Only the given selector is tried, so keys published under any other
/// selector are not seen.
pub async fn check_dkim<R: TxtResolver>(resolver: &R, domain: &str, selector: &str) -> RecordCheck {
    check_record(resolver, RecordKind::Dkim, domain, selector).await
}

/// Checks for a DMARC record (`v=DMARC1`) at `_dmarc.<domain>`.
pub async fn check_dmarc<R: TxtResolver>(resolver: &R, domain: &str) -> RecordCheck {
    check_record(resolver, RecordKind::Dmarc, domain, "").await
}

/// Runs all three checks for `base_domain` concurrently.
pub async fn check_domain<R: TxtResolver>(
    resolver: &R,
    base_domain: &str,
    dkim_selector: &str,
) -> CheckReport {
    let (spf, dkim, dmarc) = futures::join!(
        check_spf(resolver, base_domain),
        check_dkim(resolver, base_domain, dkim_selector),
        check_dmarc(resolver, base_domain)
    );

    CheckReport {
        base_domain: base_domain.to_string(),
        spf,
        dkim,
        dmarc,
    }
}
