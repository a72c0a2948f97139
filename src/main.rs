//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `spoof_check` library that handles:
//! - Command-line argument parsing (Go-style `-domain` accepted)
//! - Logger initialization
//! - DNS resolver setup
//!
//! All core functionality is implemented in the library crate. The process
//! exits with status 0 whether or not the domain could be checked.

use std::io;

use clap::Parser;

use spoof_check::config::normalize_args;
use spoof_check::dns::HickoryTxtResolver;
use spoof_check::initialization::{init_logger_with, init_resolver};
use spoof_check::{run_check, Config, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let opt = Opt::parse_from(normalize_args(std::env::args()));
    let config = Config::from(opt);

    if let Err(e) = init_logger_with(config.log_level.clone().into(), config.log_format.clone()) {
        eprintln!("spoof_check: {e}");
    }

    let resolver = HickoryTxtResolver::new(init_resolver());

    let mut out = io::stdout().lock();
    if let Err(e) = run_check(&config, &resolver, &mut out).await {
        eprintln!("spoof_check error: {:#}", e);
    }
}
