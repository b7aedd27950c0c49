//! Structured representation of a parsed firewall configuration.
//!
//! Every type here is plain data: the parser builds a fresh [`ParsedConfig`]
//! per call and the risk engine only reads it.

use serde::{Deserialize, Serialize};

/// Value used for zones, addresses and services a rule leaves unspecified.
pub const ANY: &str = "any";

/// Username a device ships with when no administrator is configured.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// HTTPS management port used when none (or an invalid one) is configured.
pub const DEFAULT_HTTPS_ADMIN_PORT: u16 = 443;

/// Aggregate of every entity extracted from one configuration text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedConfig {
    /// Access rules, in source order
    pub rules: Vec<FirewallRule>,
    /// NAT policies, in source order
    pub nat_policies: Vec<NatPolicy>,
    /// Address objects, in source order
    pub address_objects: Vec<AddressObject>,
    /// Service objects, in source order
    pub service_objects: Vec<ServiceObject>,
    /// Interfaces, in source order (same-named entries are kept)
    pub interfaces: Vec<InterfaceConfig>,
    /// VPN policies, in source order
    pub vpn_policies: Vec<VpnConfig>,
    /// Security service toggles
    pub security_settings: SecuritySettings,
    /// Management plane settings
    pub admin_settings: AdminSettings,
    /// Firmware, naming and time/name service settings
    pub system_settings: SystemSettings,
}

impl ParsedConfig {
    /// Total number of list entities (rules, objects, interfaces, ...).
    pub fn entity_count(&self) -> usize {
        self.rules.len()
            + self.nat_policies.len()
            + self.address_objects.len()
            + self.service_objects.len()
            + self.interfaces.len()
            + self.vpn_policies.len()
    }
}

/// Verdict of an access rule.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::AsRefStr,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RuleAction {
    /// Traffic is permitted
    #[default]
    Allow,
    /// Traffic is dropped or rejected
    Deny,
}

/// An access rule between two zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallRule {
    /// Rule name, when the line carries one
    pub rule_name: Option<String>,
    /// Source zone
    pub source_zone: String,
    /// Destination zone
    pub destination_zone: String,
    /// Source address or object
    pub source_address: String,
    /// Destination address or object
    pub destination_address: String,
    /// Service or service object
    pub service: String,
    /// Allow or deny
    pub action: RuleAction,
    /// False only when the line explicitly disables the rule
    pub enabled: bool,
    /// Free-text comment
    pub comment: Option<String>,
}

impl Default for FirewallRule {
    fn default() -> Self {
        Self {
            rule_name: None,
            source_zone: ANY.to_string(),
            destination_zone: ANY.to_string(),
            source_address: ANY.to_string(),
            destination_address: ANY.to_string(),
            service: ANY.to_string(),
            action: RuleAction::Allow,
            enabled: true,
            comment: None,
        }
    }
}

impl FirewallRule {
    /// Human-readable identifier used in findings.
    ///
    /// `position` is the zero-based index of the rule in [`ParsedConfig::rules`].
    pub fn label(&self, position: usize) -> String {
        match self.rule_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => format!("'{name}'"),
            _ => format!(
                "#{} ({} -> {})",
                position + 1,
                self.source_zone,
                self.destination_zone
            ),
        }
    }

    /// Returns true if the rule permits traffic.
    pub fn is_allow(&self) -> bool {
        self.action == RuleAction::Allow
    }
}

/// A NAT translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatPolicy {
    /// Original source
    pub original_source: Option<String>,
    /// Translated source
    pub translated_source: Option<String>,
    /// Original destination
    pub original_destination: Option<String>,
    /// Translated destination
    pub translated_destination: Option<String>,
    /// Interface the policy is bound to
    pub interface: String,
}

impl Default for NatPolicy {
    fn default() -> Self {
        Self {
            original_source: None,
            translated_source: None,
            original_destination: None,
            translated_destination: None,
            interface: ANY.to_string(),
        }
    }
}

/// A named host, network or range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressObject {
    /// Object name
    pub object_name: String,
    /// Host address
    pub ip_address: Option<String>,
    /// Network or range
    pub network: Option<String>,
    /// Zone the object belongs to
    pub zone: Option<String>,
}

impl Default for AddressObject {
    fn default() -> Self {
        Self {
            object_name: "unknown".to_string(),
            ip_address: None,
            network: None,
            zone: None,
        }
    }
}

/// A named protocol/port combination. Values are kept as raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceObject {
    /// Service name
    pub service_name: String,
    /// Protocol token
    pub protocol: Option<String>,
    /// Port or `low-high` range
    pub port_range: Option<String>,
}

impl Default for ServiceObject {
    fn default() -> Self {
        Self {
            service_name: "unknown".to_string(),
            protocol: None,
            port_range: None,
        }
    }
}

/// Security service toggles. Absent keywords leave a flag `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySettings {
    /// Intrusion prevention
    pub ips_enabled: bool,
    /// Gateway anti-virus
    pub gav_enabled: bool,
    /// TLS deep packet inspection
    pub dpi_ssl_enabled: bool,
    /// Application control
    pub app_control_enabled: bool,
    /// Content filtering
    pub content_filter_enabled: bool,
    /// Botnet filtering
    pub botnet_filter_enabled: bool,
    /// Anti-spyware
    pub anti_spyware_enabled: bool,
    /// Geo-IP filtering
    pub geo_ip_enabled: bool,
}

/// Management plane settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSettings {
    /// Administrator accounts, first-seen order, no duplicates
    pub admin_usernames: Vec<String>,
    /// Multi-factor authentication for administrators
    pub mfa_enabled: bool,
    /// Management reachable from WAN
    pub wan_management_enabled: bool,
    /// HTTPS management port (1-65535)
    pub https_admin_port: u16,
    /// SSH management
    pub ssh_enabled: bool,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            admin_usernames: vec![DEFAULT_ADMIN_USERNAME.to_string()],
            mfa_enabled: false,
            wan_management_enabled: false,
            https_admin_port: DEFAULT_HTTPS_ADMIN_PORT,
            ssh_enabled: false,
        }
    }
}

/// A physical or virtual interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceConfig {
    /// Interface name (e.g. `X1`)
    pub interface_name: String,
    /// Zone assignment
    pub zone: Option<String>,
    /// Interface address
    pub ip_address: Option<String>,
    /// DHCP server running on this interface
    pub dhcp_server_enabled: bool,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            interface_name: "unknown".to_string(),
            zone: None,
            ip_address: None,
            dhcp_server_enabled: false,
        }
    }
}

/// A VPN policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpnConfig {
    /// Policy name
    pub policy_name: String,
    /// Encryption algorithm token
    pub encryption: Option<String>,
    /// Authentication method token
    pub authentication_method: Option<String>,
}

impl Default for VpnConfig {
    fn default() -> Self {
        Self {
            policy_name: "unknown".to_string(),
            encryption: None,
            authentication_method: None,
        }
    }
}

/// Firmware, naming and time/name service settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    /// Firmware version string, empty when unknown
    pub firmware_version: String,
    /// Device hostname
    pub hostname: Option<String>,
    /// Configured timezone
    pub timezone: Option<String>,
    /// NTP servers, first-seen order
    pub ntp_servers: Vec<String>,
    /// DNS servers, first-seen order
    pub dns_servers: Vec<String>,
}

/// Case-insensitive comparison used for zones and addresses.
pub(crate) fn same_token(value: &str, expected: &str) -> bool {
    value.trim().eq_ignore_ascii_case(expected)
}

/// Case-insensitive check for an optional value.
pub(crate) fn same_opt_token(value: Option<&str>, expected: &str) -> bool {
    value.is_some_and(|v| same_token(v, expected))
}
