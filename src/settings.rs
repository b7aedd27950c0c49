//! Risk engine settings: firmware policy and the analysis reference date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::settings::load::load_risk_settings_from_path;

mod load;

pub use load::{load_risk_settings_json, load_risk_settings_yaml};

const DEFAULT_OUTDATED_RELEASES: &[&str] = &[
    "5.8", "5.9", "6.1", "6.2", "6.5.0", "6.5.1", "6.5.2", "6.5.3",
];

/// Error type for settings loading.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
    /// Unsupported file format
    #[error("Unsupported file format: {path}")]
    UnsupportedFileFormat {
        /// File path
        path: String,
    },
}

/// Tunables of the risk engine. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskSettings {
    /// Embedded firmware dates older than this many months are outdated
    pub firmware_max_age_months: u32,
    /// Release trains reported as outdated (`6.2` matches `6.2.x`)
    pub outdated_firmware_versions: Vec<String>,
    /// Fixed "today" for reproducible analysis; the current UTC date if unset
    pub reference_date: Option<NaiveDate>,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            firmware_max_age_months: 6,
            outdated_firmware_versions: DEFAULT_OUTDATED_RELEASES
                .iter()
                .map(|v| v.to_string())
                .collect(),
            reference_date: None,
        }
    }
}

impl RiskSettings {
    /// Returns these settings with `reference_date` fixed.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }
}

/// Loads settings from a YAML or JSON file, or the defaults when no path is
/// given.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed, or has an
/// unsupported extension.
pub fn load_risk_settings(path: Option<String>) -> Result<RiskSettings, LoaderError> {
    let settings = match path {
        Some(path) => load_risk_settings_from_path(&path)?,
        None => RiskSettings::default(),
    };
    Ok(validate(settings))
}

/// Drops release entries that cannot match a dotted version.
fn validate(mut settings: RiskSettings) -> RiskSettings {
    settings.outdated_firmware_versions.retain(|release| {
        let release = release.trim();
        let valid = !release.is_empty()
            && release
                .split('.')
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
        if !valid {
            warn!("Outdated firmware entry '{}' ignored: not a dotted version", release);
        }
        valid
    });
    settings
}
