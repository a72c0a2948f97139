//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_DKIM_SELECTOR;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// Flags are declared in clap's `--flag` form. The binary passes its raw
/// arguments through [`normalize_args`] first, so the single-dash spelling
/// (`-domain example.com`) is accepted as well.
///
/// # Examples
///
/// ```bash
/// spoof_check -domain example.com
/// spoof_check --domain=mail.example.co.uk --log-level debug
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "spoof_check",
    about = "Checks whether a domain publishes SPF, DKIM and DMARC records."
)]
pub struct Opt {
    /// The domain name to check for spoofing
    #[arg(long, default_value = "")]
    pub domain: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use spoof_check::Config;
///
/// let config = Config {
///     domain: "mail.example.co.uk".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(config.dkim_selector, "default");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain (or URL) to check. Empty means "not provided".
    pub domain: String,

    /// DKIM selector queried under `<selector>._domainkey.<domain>`
    pub dkim_selector: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: String::new(),
            dkim_selector: DEFAULT_DKIM_SELECTOR.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            domain: opt.domain,
            log_level: opt.log_level,
            log_format: opt.log_format,
            ..Default::default()
        }
    }
}

/// Rewrites single-dash long flags (`-domain`, `-domain=x`) into clap's
/// double-dash form.
///
/// The first element (program name) is left alone, as are single-letter
/// flags such as `-h`, negative numbers, and everything after a bare `--`.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut end_of_flags = false;
    args.into_iter()
        .enumerate()
        .map(|(idx, arg)| {
            if idx == 0 || end_of_flags {
                return arg;
            }
            if arg == "--" {
                end_of_flags = true;
                return arg;
            }
            let is_single_dash_long = arg.starts_with('-')
                && !arg.starts_with("--")
                && arg.len() > 2
                && arg[1..].starts_with(|c: char| c.is_ascii_alphabetic());
            if is_single_dash_long {
                format!("-{arg}")
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default_selector() {
        let config = Config::default();
        assert_eq!(config.dkim_selector, DEFAULT_DKIM_SELECTOR);
        assert!(config.domain.is_empty());
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_config_from_opt_keeps_default_selector() {
        let opt = Opt::parse_from(args(&["spoof_check", "--domain", "example.com"]));
        let config = Config::from(opt);
        assert_eq!(config.domain, "example.com");
        assert_eq!(config.dkim_selector, "default");
    }

    #[test]
    fn test_normalize_single_dash_long_flag() {
        let normalized = normalize_args(args(&["spoof_check", "-domain", "example.com"]));
        assert_eq!(normalized, args(&["spoof_check", "--domain", "example.com"]));
    }

    #[test]
    fn test_normalize_single_dash_with_equals() {
        let normalized = normalize_args(args(&["spoof_check", "-domain=example.com"]));
        assert_eq!(normalized, args(&["spoof_check", "--domain=example.com"]));
    }

    #[test]
    fn test_normalize_leaves_double_dash_and_short_flags() {
        let input = args(&["spoof_check", "--domain", "example.com", "-h"]);
        assert_eq!(normalize_args(input.clone()), input);
    }

    #[test]
    fn test_normalize_stops_after_separator() {
        let normalized = normalize_args(args(&["spoof_check", "--", "-domain"]));
        assert_eq!(normalized, args(&["spoof_check", "--", "-domain"]));
    }

    #[test]
    fn test_normalize_does_not_touch_program_name() {
        let normalized = normalize_args(args(&["-weird-name", "-domain", "x.com"]));
        assert_eq!(normalized[0], "-weird-name");
        assert_eq!(normalized[1], "--domain");
    }
}
