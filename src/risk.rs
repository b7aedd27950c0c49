//! Risk engine: a fixed catalog of independent detectors plus a
//! deterministic score.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::ParsedConfig;
use crate::settings::RiskSettings;

mod catalog;
mod firmware;
mod score;
mod tests;

use catalog::CATALOG;
pub use firmware::outdated_firmware_reasons;
pub use score::calculate_risk_score;

/// Coarse grouping of a finding.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::AsRefStr,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RiskCategory {
    /// Something is reachable that should not be
    ExposureRisk,
    /// A protection service is turned off
    SecurityFeatureDisabled,
    /// Traffic or addressing is set up unsafely
    NetworkMisconfiguration,
    /// A hardening recommendation is not followed
    BestPracticeViolation,
}

/// Finding severity and its score weight.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::AsRefStr,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// Weight 25
    Critical,
    /// Weight 15
    High,
    /// Weight 5
    Medium,
    /// Weight 1
    Low,
}

impl Severity {
    /// Points deducted from the score per finding of this severity.
    pub fn weight(self) -> u32 {
        match self {
            Severity::Critical => 25,
            Severity::High => 15,
            Severity::Medium => 5,
            Severity::Low => 1,
        }
    }
}

/// Stable code of each detector, in catalog order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::AsRefStr,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskType {
    /// WAN to LAN allow rule towards any destination
    OpenInbound,
    /// Allow rule from any source to any destination
    AnyAnyRule,
    /// GUEST zone allowed into LAN
    GuestNotIsolated,
    /// DHCP server on a WAN interface
    DhcpOnWan,
    /// Administrators without MFA
    AdminNoMfa,
    /// Well-known administrator username
    DefaultAdminUsername,
    /// HTTPS management on port 443
    DefaultAdminPort,
    /// SSH management with a WAN interface present
    SshOnWan,
    /// Intrusion prevention off
    IpsDisabled,
    /// Gateway anti-virus off
    GavDisabled,
    /// DPI-SSL off
    DpiSslDisabled,
    /// Botnet filter off
    BotnetFilterDisabled,
    /// Application control off
    AppControlDisabled,
    /// Content filter off
    ContentFilterDisabled,
    /// Access rule without a comment
    RuleNoDescription,
    /// VPN using DES or 3DES
    VpnWeakEncryption,
    /// VPN authenticated by pre-shared key only
    VpnPskOnly,
    /// Firmware too old
    OutdatedFirmware,
    /// No NTP server
    NoNtp,
}

/// A single configuration risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRisk {
    /// Category of the finding
    pub risk_category: RiskCategory,
    /// Stable detector code
    pub risk_type: RiskType,
    /// Severity of the finding
    pub severity: Severity,
    /// What was found, naming the offending entity
    pub description: String,
    /// How to fix it, naming the offending entity
    pub remediation: String,
}

/// Inputs a detector needs beyond the parsed configuration.
#[derive(Debug, Clone)]
pub(crate) struct DetectionContext {
    pub reference_date: NaiveDate,
    pub firmware_max_age_months: u32,
    pub outdated_firmware_versions: Vec<String>,
}

/// Runs the detector catalog with a given set of [`RiskSettings`].
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    settings: RiskSettings,
}

impl RiskEngine {
    /// Creates an engine using `settings`.
    pub fn new(settings: RiskSettings) -> Self {
        Self { settings }
    }

    /// Settings in use.
    pub fn settings(&self) -> &RiskSettings {
        &self.settings
    }

    fn context(&self) -> DetectionContext {
        DetectionContext {
            reference_date: self
                .settings
                .reference_date
                .unwrap_or_else(|| Utc::now().date_naive()),
            firmware_max_age_months: self.settings.firmware_max_age_months,
            outdated_firmware_versions: self.settings.outdated_firmware_versions.clone(),
        }
    }

    /// Runs every detector in catalog order and concatenates the findings.
    pub fn analyze(&self, config: &ParsedConfig) -> Vec<ConfigRisk> {
        let context = self.context();
        let risks: Vec<ConfigRisk> = CATALOG
            .iter()
            .flat_map(|definition| {
                (definition.detect)(config, &context)
                    .into_iter()
                    .map(move |finding| definition.risk(finding))
            })
            .collect();
        debug!(
            "Analysis produced {} finding(s) from {} detector(s).",
            risks.len(),
            CATALOG.len()
        );
        risks
    }
}

/// Analyzes a configuration with default settings and today's date.
pub fn analyze_config(config: &ParsedConfig) -> Vec<ConfigRisk> {
    RiskEngine::default().analyze(config)
}
