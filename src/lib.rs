#![crate_type = "lib"]
#![forbid(unsafe_code)]
#![forbid(missing_debug_implementations)]
#![forbid(missing_docs)]
#![doc = include_str!("../README.md")]

mod app;
mod export;
mod model;
mod parser;
mod risk;
mod settings;

pub use app::{run_config_audit, Args, FwConfigAuditError};
pub use export::{
    count_by_severity, default_output_path, export_csv, export_json, export_results,
    export_text, risk_summary_phrase, ExportError, ExportFormat, JsonRiskReport,
    JsonRiskSummary, SeverityCounts,
};
pub use model::{
    AddressObject, AdminSettings, FirewallRule, InterfaceConfig, NatPolicy, ParsedConfig,
    RuleAction, SecuritySettings, ServiceObject, SystemSettings, VpnConfig, ANY,
    DEFAULT_ADMIN_USERNAME, DEFAULT_HTTPS_ADMIN_PORT,
};
pub use parser::{normalize_lines, parse_config, parse_config_bytes};
pub use risk::{
    analyze_config, calculate_risk_score, outdated_firmware_reasons, ConfigRisk, RiskCategory,
    RiskEngine, RiskType, Severity,
};
pub use settings::{
    load_risk_settings, load_risk_settings_json, load_risk_settings_yaml, LoaderError,
    RiskSettings,
};
