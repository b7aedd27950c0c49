use super::{all_values, last_toggle, last_value};
use crate::model::{
    AdminSettings, SecuritySettings, SystemSettings, DEFAULT_ADMIN_USERNAME,
    DEFAULT_HTTPS_ADMIN_PORT,
};
use crate::parser::token::{Phrase, TokenLine};

const IPS: &[Phrase] = &[&["intrusion-prevention"], &["ips"]];
const GATEWAY_AV: &[Phrase] = &[
    &["gateway", "av"],
    &["gateway-av"],
    &["gateway-antivirus"],
    &["gav"],
];
const DPI_SSL: &[Phrase] = &[&["dpi-ssl"]];
const APP_CONTROL: &[Phrase] = &[
    &["app", "control"],
    &["app-control"],
    &["application-control"],
];
const CONTENT_FILTER: &[Phrase] = &[&["content", "filter"], &["content-filter"], &["cfs"]];
const BOTNET: &[Phrase] = &[&["botnet", "filter"], &["botnet-filter"], &["botnet"]];
const ANTI_SPYWARE: &[Phrase] = &[&["anti-spyware"], &["anti", "spyware"]];
const GEO_IP: &[Phrase] = &[&["geo-ip", "filter"], &["geo-ip-filter"], &["geo-ip"]];

const ADMIN_USER: &[Phrase] = &[
    &["admin", "username"],
    &["admin", "user"],
    &["admin", "name"],
];
const MFA: &[Phrase] = &[&["mfa"], &["two-factor"], &["2fa"], &["multi-factor"]];
const WAN_MANAGEMENT: &[Phrase] = &[&["wan", "management"], &["wan-management"]];
const HTTPS_ADMIN_PORT: &[Phrase] = &[
    &["https", "admin", "port"],
    &["admin", "https", "port"],
    &["https-admin-port"],
];
const SSH: &[Phrase] = &[&["ssh-management"], &["ssh"]];

const FIRMWARE: &[Phrase] = &[&["firmware", "version"], &["firmware-version"]];
const HOSTNAME: &[Phrase] = &[&["hostname"]];
const TIMEZONE: &[Phrase] = &[&["timezone"], &["time-zone"]];
const NTP: &[Phrase] = &[&["ntp", "server"], &["ntp-server"]];
const DNS: &[Phrase] = &[&["dns", "server"], &["dns-server"], &["nameserver"]];

fn flag(lines: &[TokenLine<'_>], phrases: &[Phrase]) -> bool {
    last_toggle(lines, phrases).unwrap_or(false)
}

/// Extracts security service toggles. Absent keywords leave a flag off.
pub fn extract_security_settings(lines: &[TokenLine<'_>]) -> SecuritySettings {
    SecuritySettings {
        ips_enabled: flag(lines, IPS),
        gav_enabled: flag(lines, GATEWAY_AV),
        dpi_ssl_enabled: flag(lines, DPI_SSL),
        app_control_enabled: flag(lines, APP_CONTROL),
        content_filter_enabled: flag(lines, CONTENT_FILTER),
        botnet_filter_enabled: flag(lines, BOTNET),
        anti_spyware_enabled: flag(lines, ANTI_SPYWARE),
        geo_ip_enabled: flag(lines, GEO_IP),
    }
}

/// Reads a management port, falling back to 443 for anything outside 1-65535.
fn parse_port(value: Option<&str>) -> u16 {
    value
        .and_then(|v| v.parse::<u16>().ok())
        .filter(|port| *port != 0)
        .unwrap_or(DEFAULT_HTTPS_ADMIN_PORT)
}

/// Extracts management settings.
///
/// Without any `admin username` line the device default account applies.
pub fn extract_admin_settings(lines: &[TokenLine<'_>]) -> AdminSettings {
    let mut admin_usernames = all_values(lines, ADMIN_USER);
    if admin_usernames.is_empty() {
        admin_usernames.push(DEFAULT_ADMIN_USERNAME.to_string());
    }
    let https_admin_port = match last_value(lines, HTTPS_ADMIN_PORT) {
        Some(value) => parse_port(value.as_deref()),
        None => DEFAULT_HTTPS_ADMIN_PORT,
    };
    AdminSettings {
        admin_usernames,
        mfa_enabled: flag(lines, MFA),
        wan_management_enabled: flag(lines, WAN_MANAGEMENT),
        https_admin_port,
        ssh_enabled: flag(lines, SSH),
    }
}

/// Extracts firmware, naming and time/name service settings.
pub fn extract_system_settings(lines: &[TokenLine<'_>]) -> SystemSettings {
    SystemSettings {
        firmware_version: last_value(lines, FIRMWARE).flatten().unwrap_or_default(),
        hostname: last_value(lines, HOSTNAME).flatten(),
        timezone: last_value(lines, TIMEZONE).flatten(),
        ntp_servers: all_values(lines, NTP),
        dns_servers: all_values(lines, DNS),
    }
}
