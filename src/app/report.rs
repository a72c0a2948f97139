//! Report rendering.
//!
//! Everything the user sees on standard output goes through these functions,
//! written to any [`Write`] sink so callers and tests choose the destination.

use std::io::{self, Write};

use crate::check::{CheckReport, Verdict};
use crate::config::USAGE_MESSAGE;
use crate::error_handling::InvalidDomainError;

/// Writes the usage reminder shown when no domain was given.
pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{USAGE_MESSAGE}")
}

/// Writes the message shown when no base domain can be derived.
pub fn write_invalid_domain<W: Write>(out: &mut W, err: &InvalidDomainError) -> io::Result<()> {
    writeln!(
        out,
        "Failed to determine base domain for {}: {}",
        err.input, err.reason
    )
}

/// Writes one diagnostic line per failed lookup, in SPF, DKIM, DMARC order.
pub fn write_diagnostics<W: Write>(out: &mut W, report: &CheckReport) -> io::Result<()> {
    for check in report.checks() {
        if let Some(err) = check.lookup_error() {
            writeln!(
                out,
                "Failed to lookup {} TXT records for domain {}: {}",
                check.kind, check.query_name, err
            )?;
        }
    }
    Ok(())
}

/// Writes diagnostics, the three result lines and the verdict.
pub fn write_report<W: Write>(out: &mut W, report: &CheckReport) -> io::Result<()> {
    write_diagnostics(out, report)?;

    for check in report.checks() {
        writeln!(
            out,
            "{} record found for {}: {}",
            check.kind,
            report.base_domain,
            check.found()
        )?;
    }

    let verdict = match report.verdict() {
        Verdict::SpoofingPossible => "Spoofing is possible for this domain.",
        Verdict::SpoofingUnlikely => "Spoofing is unlikely for this domain.",
    };
    writeln!(out, "{verdict}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{RecordCheck, RecordKind, RecordStatus};
    use crate::error_handling::{InvalidDomainReason, LookupError};

    fn present(kind: RecordKind, query_name: &str) -> RecordCheck {
        RecordCheck {
            kind,
            query_name: query_name.to_string(),
            status: RecordStatus::Present {
                record: kind.prefix().to_string(),
            },
        }
    }

    fn render(report: &CheckReport) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_report_all_present() {
        let report = CheckReport {
            base_domain: "example.com".to_string(),
            spf: present(RecordKind::Spf, "example.com"),
            dkim: present(RecordKind::Dkim, "default._domainkey.example.com"),
            dmarc: present(RecordKind::Dmarc, "_dmarc.example.com"),
        };
        assert_eq!(
            render(&report),
            "SPF record found for example.com: true\n\
             DKIM record found for example.com: true\n\
             DMARC record found for example.com: true\n\
             Spoofing is unlikely for this domain.\n"
        );
    }

    #[test]
    fn test_write_report_with_failed_lookup() {
        let report = CheckReport {
            base_domain: "example.com".to_string(),
            spf: present(RecordKind::Spf, "example.com"),
            dkim: RecordCheck {
                kind: RecordKind::Dkim,
                query_name: "default._domainkey.example.com".to_string(),
                status: RecordStatus::Indeterminate(LookupError::Timeout {
                    name: "default._domainkey.example.com".to_string(),
                }),
            },
            dmarc: RecordCheck {
                kind: RecordKind::Dmarc,
                query_name: "_dmarc.example.com".to_string(),
                status: RecordStatus::Absent { lookup_error: None },
            },
        };
        let output = render(&report);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "Failed to lookup DKIM TXT records for domain default._domainkey.example.com: \
             TXT lookup for default._domainkey.example.com timed out"
        );
        assert_eq!(lines[2], "DKIM record found for example.com: false");
        assert_eq!(lines[3], "DMARC record found for example.com: false");
        assert_eq!(lines[4], "Spoofing is possible for this domain.");
    }

    #[test]
    fn test_write_usage() {
        let mut buf = Vec::new();
        write_usage(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Please provide a domain name using the -domain flag.\n"
        );
    }

    #[test]
    fn test_write_invalid_domain() {
        let err = InvalidDomainError {
            input: "localhost".to_string(),
            reason: InvalidDomainReason::NoRegistrableDomain,
        };
        let mut buf = Vec::new();
        write_invalid_domain(&mut buf, &err).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Failed to determine base domain for localhost: cannot derive eTLD+1 for domain\n"
        );
    }
}
