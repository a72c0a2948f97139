//! DNS resolver initialization.

use std::sync::Arc;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver used for TXT lookups.
///
/// Nameservers, timeout and attempt count come from the host configuration
/// (`/etc/resolv.conf` or the platform equivalent). If that cannot be read,
/// the resolver falls back to hickory's default upstreams with default
/// options.
///
/// Search-domain expansion is disabled (`ndots = 0`) so a query for
/// `_dmarc.example.com` is never rewritten into `_dmarc.example.com.corp.lan`.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across
/// concurrent lookups.
pub fn init_resolver() -> Arc<TokioAsyncResolver> {
    let (config, mut opts) = match read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };
    opts.ndots = 0;

    log::debug!(
        "DNS resolver: {} nameservers, timeout {:?}, {} attempts",
        config.name_servers().len(),
        opts.timeout,
        opts.attempts
    );

    Arc::new(TokioAsyncResolver::tokio(config, opts))
}
