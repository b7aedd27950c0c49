use crate::settings::{LoaderError, RiskSettings};
use std::path::Path;

fn get_extension(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Loads settings from a YAML file.
///
/// # Errors
/// Returns an error if reading or parsing fails.
pub fn load_risk_settings_yaml(path: &str) -> Result<RiskSettings, LoaderError> {
    let contents = std::fs::read_to_string(path).map_err(LoaderError::Io)?;
    serde_yaml::from_str(&contents).map_err(LoaderError::YamlParse)
}

/// Loads settings from a JSON file.
///
/// # Errors
/// Returns an error if reading or parsing fails.
pub fn load_risk_settings_json(path: &str) -> Result<RiskSettings, LoaderError> {
    let contents = std::fs::read_to_string(path).map_err(LoaderError::Io)?;
    serde_json::from_str(&contents).map_err(LoaderError::JsonParse)
}

/// Loads settings, picking the format from the file extension.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if its
/// extension is neither YAML nor JSON.
pub fn load_risk_settings_from_path(path: &str) -> Result<RiskSettings, LoaderError> {
    match get_extension(path).as_deref() {
        Some("yaml" | "yml") => load_risk_settings_yaml(path),
        Some("json") => load_risk_settings_json(path),
        _ => Err(LoaderError::UnsupportedFileFormat {
            path: path.to_string(),
        }),
    }
}
