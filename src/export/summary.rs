//! Console summary module for `fwconfig_audit`

use crate::risk::{ConfigRisk, Severity};

/// Number of findings per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    /// Critical findings
    pub critical: usize,
    /// High findings
    pub high: usize,
    /// Medium findings
    pub medium: usize,
    /// Low findings
    pub low: usize,
}

impl SeverityCounts {
    /// Sum over all severities.
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Counts findings by severity.
pub fn count_by_severity(risks: &[ConfigRisk]) -> SeverityCounts {
    risks
        .iter()
        .fold(SeverityCounts::default(), |mut counts, risk| {
            match risk.severity {
                Severity::Critical => counts.critical += 1,
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
            }
            counts
        })
}

/// Returns a one-line summary of the findings and score (for console display).
pub fn risk_summary_phrase(risks: &[ConfigRisk], score: u8) -> String {
    let counts = count_by_severity(risks);
    let total = counts.total();
    if total > 0 {
        format!(
            "{total} risk(s) detected: {} critical, {} high, {} medium, {} low. Risk score: {score}/100.",
            counts.critical, counts.high, counts.medium, counts.low
        )
    } else {
        format!("No risk detected. Risk score: {score}/100.")
    }
}
