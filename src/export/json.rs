//! JSON export module for `fwconfig_audit`

use crate::export::summary::count_by_severity;
use crate::export::ExportError;
use crate::risk::ConfigRisk;
use serde::Serialize;
use std::fs::File;
use std::io::Write;

/// Number of findings per severity for JSON export.
#[derive(Debug, Serialize)]
pub struct JsonRiskSummary {
    /// Number of critical findings
    pub critical: usize,
    /// Number of high findings
    pub high: usize,
    /// Number of medium findings
    pub medium: usize,
    /// Number of low findings
    pub low: usize,
    /// Total number of findings
    pub total: usize,
}

/// Full analysis report for JSON export.
#[derive(Debug, Serialize)]
pub struct JsonRiskReport<'a> {
    /// Risk score, 0 to 100
    pub score: u8,
    /// Severity breakdown
    pub summary: JsonRiskSummary,
    /// Findings in catalog order
    pub risks: &'a [ConfigRisk],
}

/// Export the findings to JSON format in a file or return the JSON as a String.
///
/// # Errors
/// Returns an error if serializing or writing to the file fails.
pub fn export_json(
    risks: &[ConfigRisk],
    score: u8,
    path: Option<&str>,
) -> Result<String, ExportError> {
    let counts = count_by_severity(risks);
    let report = JsonRiskReport {
        score,
        summary: JsonRiskSummary {
            critical: counts.critical,
            high: counts.high,
            medium: counts.medium,
            low: counts.low,
            total: counts.total(),
        },
        risks,
    };
    let json = serde_json::to_string_pretty(&report)?;
    if let Some(path) = path {
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
    }
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::{RiskCategory, RiskType, Severity};

    #[test]
    fn test_export_json_format() {
        let risks = vec![
            ConfigRisk {
                risk_category: RiskCategory::SecurityFeatureDisabled,
                risk_type: RiskType::IpsDisabled,
                severity: Severity::Critical,
                description: "IPS is disabled.".into(),
                remediation: "Enable IPS.".into(),
            },
            ConfigRisk {
                risk_category: RiskCategory::BestPracticeViolation,
                risk_type: RiskType::NoNtp,
                severity: Severity::Low,
                description: "No NTP.".into(),
                remediation: "Configure NTP.".into(),
            },
        ];
        let json = export_json(&risks, 74, None).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["score"], 74);
        assert_eq!(v["summary"]["critical"], 1);
        assert_eq!(v["summary"]["low"], 1);
        assert_eq!(v["summary"]["total"], 2);
        let items = v["risks"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["risk_type"], "IPS_DISABLED");
        assert_eq!(items[0]["risk_category"], "security_feature_disabled");
        assert_eq!(items[1]["severity"], "low");

        let back: Vec<ConfigRisk> = serde_json::from_value(v["risks"].clone()).unwrap();
        assert_eq!(back, risks);
    }

    #[test]
    fn test_export_json_empty() {
        let json = export_json(&[], 100, None).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["score"], 100);
        assert_eq!(v["summary"]["total"], 0);
        assert!(v["risks"].as_array().unwrap().is_empty());
    }
}
