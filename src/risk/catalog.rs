//! The detector table. Row order is the order findings are reported in.

use super::firmware::outdated_firmware_reasons;
use super::RiskCategory::{
    BestPracticeViolation, ExposureRisk, NetworkMisconfiguration, SecurityFeatureDisabled,
};
use super::Severity::{Critical, High, Low, Medium};
use super::{ConfigRisk, DetectionContext, RiskCategory, RiskType, Severity};
use crate::model::{same_opt_token, same_token, FirewallRule, ParsedConfig, ANY};

/// Description and remediation of one detector match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Finding {
    pub description: String,
    pub remediation: String,
}

fn finding(description: impl Into<String>, remediation: impl Into<String>) -> Finding {
    Finding {
        description: description.into(),
        remediation: remediation.into(),
    }
}

type Detector = fn(&ParsedConfig, &DetectionContext) -> Vec<Finding>;

/// A catalog row: code, category and severity are fixed per detector.
pub(crate) struct RiskDefinition {
    pub risk_type: RiskType,
    pub category: RiskCategory,
    pub severity: Severity,
    pub detect: Detector,
}

impl RiskDefinition {
    pub fn risk(&self, finding: Finding) -> ConfigRisk {
        ConfigRisk {
            risk_category: self.category,
            risk_type: self.risk_type,
            severity: self.severity,
            description: finding.description,
            remediation: finding.remediation,
        }
    }
}

const fn row(
    risk_type: RiskType,
    category: RiskCategory,
    severity: Severity,
    detect: Detector,
) -> RiskDefinition {
    RiskDefinition {
        risk_type,
        category,
        severity,
        detect,
    }
}

pub(crate) const CATALOG: &[RiskDefinition] = &[
    row(RiskType::OpenInbound, ExposureRisk, Critical, open_inbound),
    row(RiskType::AnyAnyRule, NetworkMisconfiguration, High, any_any_rule),
    row(RiskType::GuestNotIsolated, NetworkMisconfiguration, High, guest_not_isolated),
    row(RiskType::DhcpOnWan, NetworkMisconfiguration, Critical, dhcp_on_wan),
    row(RiskType::AdminNoMfa, BestPracticeViolation, High, admin_no_mfa),
    row(RiskType::DefaultAdminUsername, BestPracticeViolation, Medium, default_admin_username),
    row(RiskType::DefaultAdminPort, BestPracticeViolation, Low, default_admin_port),
    row(RiskType::SshOnWan, ExposureRisk, High, ssh_on_wan),
    row(RiskType::IpsDisabled, SecurityFeatureDisabled, Critical, ips_disabled),
    row(RiskType::GavDisabled, SecurityFeatureDisabled, Critical, gav_disabled),
    row(RiskType::DpiSslDisabled, SecurityFeatureDisabled, Medium, dpi_ssl_disabled),
    row(RiskType::BotnetFilterDisabled, SecurityFeatureDisabled, High, botnet_filter_disabled),
    row(RiskType::AppControlDisabled, SecurityFeatureDisabled, Medium, app_control_disabled),
    row(RiskType::ContentFilterDisabled, SecurityFeatureDisabled, Medium, content_filter_disabled),
    row(RiskType::RuleNoDescription, BestPracticeViolation, Low, rule_no_description),
    row(RiskType::VpnWeakEncryption, SecurityFeatureDisabled, High, vpn_weak_encryption),
    row(RiskType::VpnPskOnly, BestPracticeViolation, Medium, vpn_psk_only),
    row(RiskType::OutdatedFirmware, BestPracticeViolation, Medium, outdated_firmware),
    row(RiskType::NoNtp, BestPracticeViolation, Low, no_ntp),
];

const DEFAULT_ADMIN_NAMES: &[&str] = &["admin", "root", "administrator"];
const WEAK_CIPHERS: &[&str] = &["des", "3des"];
const PSK_MARKERS: &[&str] = &["psk", "pre-shared-key", "preshared", "shared-key", "shared-secret"];
const CERTIFICATE_MARKERS: &[&str] = &["certificate", "x509", "x.509", "rsa-certificate"];

/// One finding per rule matching `predicate`, in rule order.
fn rule_findings(
    config: &ParsedConfig,
    predicate: impl Fn(&FirewallRule) -> bool,
    build: impl Fn(&FirewallRule, String) -> Finding,
) -> Vec<Finding> {
    config
        .rules
        .iter()
        .enumerate()
        .filter(|&(_, rule)| predicate(rule))
        .map(|(position, rule)| build(rule, rule.label(position)))
        .collect()
}

fn latent(rule: &FirewallRule) -> &'static str {
    if rule.enabled {
        ""
    } else {
        " (currently disabled, active again if re-enabled)"
    }
}

fn open_inbound(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    rule_findings(
        config,
        |rule| {
            rule.is_allow()
                && same_token(&rule.source_zone, "WAN")
                && same_token(&rule.destination_zone, "LAN")
                && same_token(&rule.destination_address, ANY)
        },
        |rule, label| {
            finding(
                format!(
                    "Access rule {label} allows inbound traffic from WAN to any LAN destination{}.",
                    latent(rule)
                ),
                format!(
                    "Restrict access rule {label} to specific destination hosts and services, or change its action to deny."
                ),
            )
        },
    )
}

fn any_any_rule(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    rule_findings(
        config,
        |rule| {
            rule.is_allow()
                && same_token(&rule.source_address, ANY)
                && same_token(&rule.destination_address, ANY)
        },
        |rule, label| {
            finding(
                format!(
                    "Access rule {label} allows traffic from any source address to any destination address{}.",
                    latent(rule)
                ),
                format!(
                    "Limit the source and destination of access rule {label} to the networks that need it."
                ),
            )
        },
    )
}

fn guest_not_isolated(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    rule_findings(
        config,
        |rule| {
            rule.is_allow()
                && same_token(&rule.source_zone, "GUEST")
                && same_token(&rule.destination_zone, "LAN")
        },
        |rule, label| {
            finding(
                format!(
                    "Access rule {label} allows GUEST zone traffic into the LAN zone{}.",
                    latent(rule)
                ),
                format!(
                    "Change access rule {label} to deny so the GUEST zone stays isolated from LAN."
                ),
            )
        },
    )
}

fn dhcp_on_wan(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    config
        .interfaces
        .iter()
        .filter(|iface| iface.dhcp_server_enabled && same_opt_token(iface.zone.as_deref(), "WAN"))
        .map(|iface| {
            finding(
                format!(
                    "Interface '{}' in the WAN zone runs a DHCP server.",
                    iface.interface_name
                ),
                format!(
                    "Disable the DHCP server on interface '{}'.",
                    iface.interface_name
                ),
            )
        })
        .collect()
}

fn admin_no_mfa(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    let admin = &config.admin_settings;
    if admin.mfa_enabled {
        return Vec::new();
    }
    vec![finding(
        "Administrator logins do not require multi-factor authentication.",
        format!(
            "Enable MFA for administrator account(s): {}.",
            admin.admin_usernames.join(", ")
        ),
    )]
}

fn default_admin_username(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    config
        .admin_settings
        .admin_usernames
        .iter()
        .filter(|name| DEFAULT_ADMIN_NAMES.iter().any(|d| same_token(name, d)))
        .map(|name| {
            finding(
                format!("Administrator account '{name}' uses a well-known default username."),
                format!("Rename administrator account '{name}' to a unique, non-default username."),
            )
        })
        .collect()
}

fn default_admin_port(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    let port = config.admin_settings.https_admin_port;
    if port != 443 {
        return Vec::new();
    }
    vec![finding(
        format!("HTTPS management listens on the default port {port}."),
        "Move HTTPS management to a non-standard port and restrict which zones may reach it.",
    )]
}

fn ssh_on_wan(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    if !config.admin_settings.ssh_enabled {
        return Vec::new();
    }
    let wan: Vec<&str> = config
        .interfaces
        .iter()
        .filter(|iface| same_opt_token(iface.zone.as_deref(), "WAN"))
        .map(|iface| iface.interface_name.as_str())
        .collect();
    if wan.is_empty() {
        return Vec::new();
    }
    let names = wan.join(", ");
    vec![finding(
        format!("SSH management is enabled while WAN interface(s) {names} exist."),
        format!(
            "Disable SSH management on WAN interface(s) {names}, or restrict it to trusted source addresses."
        ),
    )]
}

fn feature_disabled(enabled: bool, feature: &str, remediation: &str) -> Vec<Finding> {
    if enabled {
        return Vec::new();
    }
    vec![finding(format!("{feature} is disabled."), remediation)]
}

fn ips_disabled(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    feature_disabled(
        config.security_settings.ips_enabled,
        "Intrusion Prevention Service (IPS)",
        "Enable IPS and apply it to traffic entering from the WAN zone.",
    )
}

fn gav_disabled(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    feature_disabled(
        config.security_settings.gav_enabled,
        "Gateway Anti-Virus",
        "Enable Gateway Anti-Virus on all zones that carry user traffic.",
    )
}

fn dpi_ssl_disabled(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    feature_disabled(
        config.security_settings.dpi_ssl_enabled,
        "DPI-SSL inspection of encrypted traffic",
        "Enable client DPI-SSL so that security services can inspect TLS traffic.",
    )
}

fn botnet_filter_disabled(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    feature_disabled(
        config.security_settings.botnet_filter_enabled,
        "Botnet filtering",
        "Enable the botnet filter to block connections to known command-and-control hosts.",
    )
}

fn app_control_disabled(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    feature_disabled(
        config.security_settings.app_control_enabled,
        "Application control",
        "Enable application control and block high-risk application categories.",
    )
}

fn content_filter_disabled(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    feature_disabled(
        config.security_settings.content_filter_enabled,
        "Content filtering",
        "Enable the content filter service and apply a policy to user zones.",
    )
}

fn rule_no_description(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    rule_findings(
        config,
        |rule| rule.comment.as_deref().map_or(true, |c| c.trim().is_empty()),
        |_, label| {
            finding(
                format!("Access rule {label} has no description."),
                format!("Add a comment to access rule {label} stating its purpose and owner."),
            )
        },
    )
}

fn contains_any(value: &str, markers: &[&str]) -> bool {
    let value = value.to_ascii_lowercase();
    markers.iter().any(|m| value.contains(m))
}

fn vpn_weak_encryption(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    config
        .vpn_policies
        .iter()
        .filter_map(|vpn| {
            let encryption = vpn.encryption.as_deref()?;
            contains_any(encryption, WEAK_CIPHERS).then(|| {
                finding(
                    format!(
                        "VPN policy '{}' uses weak encryption '{encryption}'.",
                        vpn.policy_name
                    ),
                    format!(
                        "Switch VPN policy '{}' to AES-256 or AES-GCM encryption.",
                        vpn.policy_name
                    ),
                )
            })
        })
        .collect()
}

fn vpn_psk_only(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    config
        .vpn_policies
        .iter()
        .filter_map(|vpn| {
            let method = vpn.authentication_method.as_deref()?;
            (contains_any(method, PSK_MARKERS) && !contains_any(method, CERTIFICATE_MARKERS)).then(
                || {
                    finding(
                        format!(
                            "VPN policy '{}' authenticates with a pre-shared key only.",
                            vpn.policy_name
                        ),
                        format!(
                            "Use certificate-based authentication for VPN policy '{}'.",
                            vpn.policy_name
                        ),
                    )
                },
            )
        })
        .collect()
}

fn outdated_firmware(config: &ParsedConfig, context: &DetectionContext) -> Vec<Finding> {
    let firmware = &config.system_settings.firmware_version;
    let reasons = outdated_firmware_reasons(
        firmware,
        context.reference_date,
        context.firmware_max_age_months,
        &context.outdated_firmware_versions,
    );
    if reasons.is_empty() {
        return Vec::new();
    }
    vec![finding(
        format!("Firmware '{firmware}' is outdated: {}.", reasons.join("; ")),
        "Upgrade the device to the latest supported firmware release.",
    )]
}

fn no_ntp(config: &ParsedConfig, _: &DetectionContext) -> Vec<Finding> {
    if !config.system_settings.ntp_servers.is_empty() {
        return Vec::new();
    }
    let device = config
        .system_settings
        .hostname
        .as_deref()
        .map(|h| format!(" on '{h}'"))
        .unwrap_or_default();
    vec![finding(
        format!("No NTP server is configured{device}."),
        "Configure at least one NTP server so logs and certificates carry accurate time.",
    )]
}
