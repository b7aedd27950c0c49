use clap::ValueEnum;

pub mod csv;
pub mod json;
pub mod summary;
pub mod text;

pub use csv::export_csv;
pub use json::{export_json, JsonRiskReport, JsonRiskSummary};
pub use summary::{count_by_severity, risk_summary_phrase, SeverityCounts};
pub use text::export_text;
use tracing::info;

use crate::risk::ConfigRisk;

/// Error type for `export` operations.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Formatting error
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
    /// JSON serialization error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Supported export formats
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values, one finding per line
    Csv,
    /// Report object with score, summary and findings
    Json,
    /// Human-readable text on standard output
    Stdout,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Stdout => "txt",
        }
    }
}

/// Default file name for a file export, stamped with the current UTC time.
pub fn default_output_path(export: &ExportFormat) -> String {
    format!(
        "fwconfig_audit_{}.{}",
        chrono::Utc::now().format("%Y%m%d_%H%M%S"),
        export.extension()
    )
}

/// Writes the findings in the requested format and logs the summary phrase.
///
/// File formats go to `output_path`, or to [`default_output_path`] when it is
/// `None`. `Stdout` prints the text report and ignores `output_path`.
///
/// # Errors
/// Returns an error if formatting, serializing or writing the report fails.
pub fn export_results(
    risks: &[ConfigRisk],
    score: u8,
    export: &ExportFormat,
    output_path: Option<String>,
) -> Result<(), ExportError> {
    match export {
        ExportFormat::Stdout => println!("{}", export_text(risks, score)?),
        ExportFormat::Csv | ExportFormat::Json => {
            let output_path = output_path.unwrap_or_else(|| default_output_path(export));
            if *export == ExportFormat::Csv {
                export_csv(risks, Some(&output_path))?;
            } else {
                export_json(risks, score, Some(&output_path))?;
            }
            info!("Export successful to {}", output_path);
        }
    }

    info!("{}", risk_summary_phrase(risks, score));

    Ok(())
}
