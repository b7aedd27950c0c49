use clap::Parser;
use tracing::info;

use crate::export::{export_results, ExportError, ExportFormat};
use crate::parser::parse_config_bytes;
use crate::risk::{calculate_risk_score, RiskEngine};
use crate::settings::{load_risk_settings, LoaderError};

/// Error type for `fwconfig_audit` operations.
#[derive(Debug, thiserror::Error)]
pub enum FwConfigAuditError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Settings loader error
    #[error("Loader error: {0}")]
    LoaderError(#[from] LoaderError),
    /// Export error
    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),
}

/// Firewall configuration audit CLI arguments
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Firewall configuration risk audit (text/CSV/JSON export)",
    long_about = "This program parses an exported firewall configuration, detects \
                  security risks and computes a risk score. Results can be exported \
                  in various formats."
)]
pub struct Args {
    /// Path to the exported firewall configuration file.
    #[arg(long, short = 'c', required = true)]
    pub config: String,

    /// Path to the risk settings file (YAML or JSON).
    /// Optional; if not provided, the default settings will be used.
    #[arg(long, short = 's')]
    pub settings: Option<String>,

    /// Export format (csv, json, stdout)
    #[arg(long, short = 'e', default_value = "stdout")]
    pub export: ExportFormat,

    /// Specify output filename
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Only print warnings and errors to the log
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Runs a full configuration audit based on the provided CLI arguments.
///
/// Steps performed:
/// 1. Load risk settings from a YAML or JSON file (or the defaults).
/// 2. Read the configuration file as raw bytes and parse it.
/// 3. Run every risk detector and compute the score.
/// 4. Export the findings in the requested format (CSV, JSON, or stdout).
///
/// # Errors
/// Returns `FwConfigAuditError` variants if:
/// * The configuration file cannot be read.
/// * The settings file cannot be read or parsed.
/// * The exporter encounters an error.
pub fn run_config_audit(args: Args) -> Result<(), FwConfigAuditError> {
    let settings = load_risk_settings(args.settings)?;
    info!(
        "Loaded risk settings ({} outdated firmware release(s)).",
        settings.outdated_firmware_versions.len()
    );

    let bytes = std::fs::read(&args.config)?;
    let config = parse_config_bytes(&bytes);
    info!(
        "Parsed {} entities ({} access rule(s)) from {}.",
        config.entity_count(),
        config.rules.len(),
        args.config
    );

    let risks = RiskEngine::new(settings).analyze(&config);
    let score = calculate_risk_score(&risks);

    export_results(&risks, score, &args.export, args.output)?;

    Ok(())
}
