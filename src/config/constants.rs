//! Configuration constants.
//!
//! Record prefixes, the default DKIM selector, and the fixed user-facing
//! messages printed by the binary.

/// DKIM selector queried when none is configured.
///
/// Only this one selector is checked. A domain that publishes its key under a
/// different selector is reported as having no DKIM record.
pub const DEFAULT_DKIM_SELECTOR: &str = "default";

/// Prefix an SPF record must start with.
pub const SPF_PREFIX: &str = "v=spf1";
/// Prefix a DKIM key record must start with.
pub const DKIM_PREFIX: &str = "v=DKIM1";
/// Prefix a DMARC record must start with.
pub const DMARC_PREFIX: &str = "v=DMARC1";

/// Label inserted between the selector and the domain for DKIM queries.
pub const DKIM_LABEL: &str = "_domainkey";
/// Label prepended to the domain for DMARC queries.
pub const DMARC_LABEL: &str = "_dmarc";

/// Printed when `-domain` is missing or empty.
pub const USAGE_MESSAGE: &str = "Please provide a domain name using the -domain flag.";

/// Longest DNS label, in bytes (RFC 1035).
pub const MAX_LABEL_LEN: usize = 63;
/// Longest domain name in presentation form, in bytes.
pub const MAX_DOMAIN_LEN: usize = 253;
