//! CSV export module for `fwconfig_audit`
//!
//! One line per finding, in catalog order.

use crate::risk::ConfigRisk;
use std::fs::File;
use std::io::{self, Write};

const HEADER: &str = "risk_type,category,severity,description,remediation\n";

fn escape(field: &str) -> String {
    let mut s = field.replace('"', "\"\"");
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        s = format!("\"{s}\"");
    }
    s
}

/// Export the findings to CSV format in a file or return the CSV as a String.
///
/// # Arguments
/// * `risks` - The findings, as returned by the risk engine
/// * `path` - Optional output file path. If None, only returns the CSV.
///
/// # Errors
/// Returns an error if writing to the file fails.
pub fn export_csv(risks: &[ConfigRisk], path: Option<&str>) -> io::Result<String> {
    let mut csv = String::from(HEADER);
    for risk in risks {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            risk.risk_type,
            risk.risk_category,
            risk.severity,
            escape(&risk.description),
            escape(&risk.remediation)
        ));
    }
    if let Some(path) = path {
        let mut file = File::create(path)?;
        file.write_all(csv.as_bytes())?;
    }
    Ok(csv)
}
