use std::fmt::Write;

use crate::risk::ConfigRisk;

/// Formats findings and score as a human-readable report for CLI output.
///
/// # Errors
/// Returns an error only if writing into the string buffer fails.
pub fn export_text(risks: &[ConfigRisk], score: u8) -> Result<String, std::fmt::Error> {
    let mut output = String::new();
    for risk in risks {
        writeln!(output, "\nRisk: {}", risk.risk_type)?;
        writeln!(output, "Category: {}", risk.risk_category)?;
        writeln!(output, "Severity: {}", risk.severity)?;
        writeln!(output, "  Description: {}", risk.description)?;
        writeln!(output, "  Remediation: {}", risk.remediation)?;
    }
    write!(output, "\nRisk score: {score}/100")?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::{RiskCategory, RiskType, Severity};

    #[test]
    fn test_export_text_empty() {
        let result = export_text(&[], 100).unwrap();
        assert_eq!(result.trim(), "Risk score: 100/100");
    }

    #[test]
    fn test_export_text_one_risk() {
        let risk = ConfigRisk {
            risk_category: RiskCategory::NetworkMisconfiguration,
            risk_type: RiskType::DhcpOnWan,
            severity: Severity::Critical,
            description: "Interface 'X1' in the WAN zone runs a DHCP server.".into(),
            remediation: "Disable the DHCP server on interface 'X1'.".into(),
        };
        let result = export_text(&[risk], 75).unwrap();
        assert!(result.contains("Risk: DHCP_ON_WAN"));
        assert!(result.contains("Category: network_misconfiguration"));
        assert!(result.contains("Severity: critical"));
        assert!(result.contains("Interface 'X1'"));
        assert!(result.ends_with("Risk score: 75/100"));
    }

    #[test]
    fn test_export_text_special_characters() {
        let risk = ConfigRisk {
            risk_category: RiskCategory::BestPracticeViolation,
            risk_type: RiskType::DefaultAdminUsername,
            severity: Severity::Medium,
            description: "Compte 'équipe !@#'".into(),
            remediation: String::new(),
        };
        assert!(export_text(&[risk], 95).unwrap().contains("équipe !@#"));
    }
}
