// Domain module tests.

use super::*;

fn reason(input: &str) -> InvalidDomainReason {
    resolve_base_domain(input)
        .expect_err("input should be rejected")
        .reason
}

#[test]
fn test_resolve_base_domain_basic() {
    assert_eq!(resolve_base_domain("example.com").unwrap(), "example.com");
    assert_eq!(resolve_base_domain("mail.example.com").unwrap(), "example.com");
    assert_eq!(
        resolve_base_domain("a.b.c.example.com").unwrap(),
        "example.com"
    );
}

#[test]
fn test_resolve_base_domain_multi_part_suffix() {
    assert_eq!(
        resolve_base_domain("mail.example.co.uk").unwrap(),
        "example.co.uk"
    );
    assert_eq!(resolve_base_domain("example.co.uk").unwrap(), "example.co.uk");
}

#[test]
fn test_resolve_base_domain_normalizes_case_and_trailing_dot() {
    assert_eq!(resolve_base_domain("Mail.Example.COM.").unwrap(), "example.com");
    assert_eq!(resolve_base_domain("  example.org \n").unwrap(), "example.org");
}

#[test]
fn test_resolve_base_domain_from_url() {
    assert_eq!(
        resolve_base_domain("https://www.example.com/path?q=1").unwrap(),
        "example.com"
    );
    assert_eq!(
        resolve_base_domain("http://shop.example.co.uk:8080/").unwrap(),
        "example.co.uk"
    );
}

#[test]
fn test_resolve_base_domain_is_idempotent() {
    for input in [
        "example.com",
        "mail.example.com",
        "deep.sub.example.co.uk",
        "WWW.EXAMPLE.NET.",
        "https://www.example.org/",
        "_dmarc.example.com",
    ] {
        let once = resolve_base_domain(input).unwrap();
        let twice = resolve_base_domain(&once).unwrap();
        assert_eq!(once, twice, "not idempotent for {input}");
    }
}

#[test]
fn test_resolve_base_domain_rejects_empty() {
    assert_eq!(reason(""), InvalidDomainReason::Empty);
    assert_eq!(reason("   "), InvalidDomainReason::Empty);
}

#[test]
fn test_resolve_base_domain_rejects_no_dot() {
    assert_eq!(reason("localhost"), InvalidDomainReason::NoRegistrableDomain);
}

#[test]
fn test_resolve_base_domain_rejects_bare_suffix() {
    assert_eq!(reason("com"), InvalidDomainReason::NoRegistrableDomain);
    assert_eq!(reason("co.uk"), InvalidDomainReason::NoRegistrableDomain);
}

#[test]
fn test_resolve_base_domain_rejects_unknown_suffix() {
    assert_eq!(
        reason("example.notarealtld"),
        InvalidDomainReason::UnknownSuffix
    );
}

#[test]
fn test_resolve_base_domain_rejects_empty_labels() {
    assert_eq!(reason(".example.com"), InvalidDomainReason::EmptyLabel);
    assert_eq!(reason("example..com"), InvalidDomainReason::EmptyLabel);
    assert_eq!(reason("example.com.."), InvalidDomainReason::EmptyLabel);
}

#[test]
fn test_resolve_base_domain_rejects_ip_addresses() {
    assert_eq!(reason("192.168.1.1"), InvalidDomainReason::IpAddress);
    assert_eq!(reason("::1"), InvalidDomainReason::IpAddress);
    assert_eq!(reason("http://127.0.0.1/"), InvalidDomainReason::IpAddress);
    assert_eq!(reason("http://[2001:db8::1]/"), InvalidDomainReason::IpAddress);
}

#[test]
fn test_resolve_base_domain_rejects_invalid_characters() {
    assert_eq!(
        reason("exa mple.com"),
        InvalidDomainReason::InvalidCharacter(' ')
    );
    assert_eq!(
        reason("user@example.com"),
        InvalidDomainReason::InvalidCharacter('@')
    );
}

#[test]
fn test_non_ascii_rejected_in_bare_and_url_input() {
    assert_eq!(
        reason("münchen.de"),
        InvalidDomainReason::InvalidCharacter('ü')
    );
    assert_eq!(
        reason("https://münchen.de/"),
        InvalidDomainReason::InvalidCharacter('ü')
    );
}

#[test]
fn test_punycode_url_host_is_accepted() {
    assert_eq!(
        resolve_base_domain("https://www.xn--mnchen-3ya.de/").unwrap(),
        "xn--mnchen-3ya.de"
    );
}

#[test]
fn test_resolve_base_domain_rejects_overlong_label() {
    let label = "a".repeat(64);
    assert_eq!(
        reason(&format!("{label}.example.com")),
        InvalidDomainReason::TooLong
    );
}

#[test]
fn test_resolve_base_domain_rejects_url_without_host() {
    assert_eq!(reason("file:///etc/passwd"), InvalidDomainReason::MissingHost);
}

#[test]
fn test_invalid_domain_error_keeps_raw_input() {
    let err = resolve_base_domain("Not A Domain").unwrap_err();
    assert_eq!(err.input, "Not A Domain");
}
