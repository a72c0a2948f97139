//! Base domain computation.
//!
//! Reduces user input (a hostname, or a URL) to its registrable domain using
//! the Public Suffix List, e.g. `mail.example.co.uk` → `example.co.uk`. All
//! three record checks run against this base domain.

use psl::{List, Psl};

use crate::config::{MAX_DOMAIN_LEN, MAX_LABEL_LEN};
use crate::error_handling::{InvalidDomainError, InvalidDomainReason};

/// Computes the registrable base domain (eTLD+1) of `input`.
///
/// Accepts a bare hostname (`mail.example.com`, `example.com.`) or a URL
/// (`https://www.example.com/path`), in any letter case. The result is
/// lowercase without a trailing dot, so feeding it back in returns it
/// unchanged.
///
/// # Errors
///
/// Returns [`InvalidDomainError`] if the input is empty, is an IP address,
/// is not a syntactically valid hostname, is itself a public suffix, or ends
/// in a suffix the Public Suffix List does not know.
pub fn resolve_base_domain(input: &str) -> Result<String, InvalidDomainError> {
    let invalid = |reason| InvalidDomainError::new(input, reason);

    let host = extract_host(input.trim()).map_err(invalid)?;
    let host = host.strip_suffix('.').unwrap_or(&host).to_ascii_lowercase();

    if host.is_empty() {
        return Err(invalid(InvalidDomainReason::Empty));
    }
    if host.starts_with('.') || host.ends_with('.') || host.contains("..") {
        return Err(invalid(InvalidDomainReason::EmptyLabel));
    }
    if host.parse::<std::net::Ipv4Addr>().is_ok() || host.parse::<std::net::Ipv6Addr>().is_ok() {
        return Err(invalid(InvalidDomainReason::IpAddress));
    }
    if host.len() > MAX_DOMAIN_LEN || host.split('.').any(|label| label.len() > MAX_LABEL_LEN) {
        return Err(invalid(InvalidDomainReason::TooLong));
    }
    if let Some(c) = host
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(invalid(InvalidDomainReason::InvalidCharacter(c)));
    }

    let domain = List
        .domain(host.as_bytes())
        .ok_or_else(|| invalid(InvalidDomainReason::NoRegistrableDomain))?;
    if !domain.suffix().is_known() {
        return Err(invalid(InvalidDomainReason::UnknownSuffix));
    }

    let base = String::from_utf8_lossy(domain.as_bytes()).to_string();
    log::debug!("Base domain for {input}: {base}");
    Ok(base)
}

/// Pulls the host out of URL-shaped input; anything else is returned as-is.
fn extract_host(input: &str) -> Result<String, InvalidDomainReason> {
    if input.is_empty() {
        return Err(InvalidDomainReason::Empty);
    }
    if !input.contains("://") {
        return Ok(input.to_string());
    }
    // url would punycode the host; reject it the same way as bare input
    if let Some(c) = input.chars().find(|c| !c.is_ascii()) {
        return Err(InvalidDomainReason::InvalidCharacter(c));
    }

    let parsed =
        url::Url::parse(input).map_err(|e| InvalidDomainReason::InvalidUrl(e.to_string()))?;
    match parsed.host() {
        Some(url::Host::Domain(domain)) => Ok(domain.to_string()),
        Some(url::Host::Ipv4(_)) | Some(url::Host::Ipv6(_)) => Err(InvalidDomainReason::IpAddress),
        None => Err(InvalidDomainReason::MissingHost),
    }
}
