//! spoof_check library: SPF, DKIM and DMARC presence checks
//!
//! Given a domain, this library computes its registrable base domain with the
//! Public Suffix List and looks up three TXT records under it:
//!
//! - SPF at `<domain>` (`v=spf1`)
//! - DKIM at `default._domainkey.<domain>` (`v=DKIM1`)
//! - DMARC at `_dmarc.<domain>` (`v=DMARC1`)
//!
//! Spoofing is reported as unlikely only when all three are published.
//!
//! # Example
//!
//! ```
//! use spoof_check::dns::StaticTxtResolver;
//! use spoof_check::{run_check, Config, RunOutcome};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let resolver = StaticTxtResolver::new()
//!     .with_records("example.com", ["v=spf1 -all"])
//!     .with_records("default._domainkey.example.com", ["v=DKIM1; p=MIGf"])
//!     .with_records("_dmarc.example.com", ["v=DMARC1; p=reject"]);
//! let config = Config {
//!     domain: "mail.example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let mut out = Vec::new();
//! let outcome = run_check(&config, &resolver, &mut out).await?;
//! assert!(matches!(outcome, RunOutcome::Checked(_)));
//! assert!(String::from_utf8(out)?.ends_with("Spoofing is unlikely for this domain.\n"));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The DNS-backed resolver requires a Tokio runtime.

#![warn(missing_docs)]

pub mod app;
pub mod check;
pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod initialization;

// Re-export public API
pub use check::{CheckReport, RecordCheck, RecordKind, RecordStatus, Verdict};
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use domain::resolve_base_domain;
pub use error_handling::{InvalidDomainError, LookupError};
pub use run::{run_check, RunOutcome};

// Internal run module (contains the top-level check flow)
mod run {
    use std::io::Write;

    use anyhow::{Context, Result};
    use log::{debug, info};

    use crate::app::{write_invalid_domain, write_report, write_usage};
    use crate::check::{check_domain, CheckReport};
    use crate::config::Config;
    use crate::dns::TxtResolver;
    use crate::domain::resolve_base_domain;
    use crate::error_handling::InvalidDomainError;

    /// How a run ended.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RunOutcome {
        /// No domain was given; the usage reminder was printed.
        MissingDomain,
        /// No base domain could be derived; nothing was looked up.
        InvalidDomain(InvalidDomainError),
        /// All three checks ran.
        Checked(CheckReport),
    }

    /// Runs one spoofing check and writes the user-facing output to `out`.
    ///
    /// This is the main entry point for the library. It resolves the base
    /// domain of `config.domain`, runs the SPF, DKIM and DMARC checks through
    /// `resolver`, and writes diagnostics, results and the verdict.
    ///
    /// An empty domain or one without a registrable base domain is not an
    /// error: the corresponding message is written, no DNS query is made, and
    /// the outcome says what happened.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails.
    pub async fn run_check<R, W>(config: &Config, resolver: &R, out: &mut W) -> Result<RunOutcome>
    where
        R: TxtResolver,
        W: Write,
    {
        if config.domain.is_empty() {
            write_usage(out).context("Failed to write usage message")?;
            return Ok(RunOutcome::MissingDomain);
        }

        let base_domain = match resolve_base_domain(&config.domain) {
            Ok(base_domain) => base_domain,
            Err(e) => {
                info!("Skipping checks: {e}");
                write_invalid_domain(out, &e).context("Failed to write invalid domain message")?;
                return Ok(RunOutcome::InvalidDomain(e));
            }
        };

        debug!(
            "Checking {base_domain} (input {}, DKIM selector {})",
            config.domain, config.dkim_selector
        );
        let report = check_domain(resolver, &base_domain, &config.dkim_selector).await;
        info!("{base_domain}: {:?}", report.verdict());

        write_report(out, &report).context("Failed to write report")?;
        out.flush().context("Failed to flush output")?;

        Ok(RunOutcome::Checked(report))
    }
}
