//! Firewall configuration audit CLI
//!
//! This binary parses an exported firewall configuration, reports security
//! risks and a risk score, and exports them (text, CSV, JSON).
//!
//! # Example
//! ```sh
//! fwconfig_audit --config firewall.exp --export csv --output risks.csv
//! ```

use clap::Parser;
use fwconfig_audit::{run_config_audit, Args};
use std::process;
use tracing::{error, Level};

/// Entry point for the fwconfig_audit CLI.
fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_max_level(if args.quiet { Level::WARN } else { Level::INFO })
        .init();

    if let Err(e) = run_config_audit(args) {
        error!("{}", e);
        process::exit(1);
    }
}
