//! Tolerant configuration parser.
//!
//! Parsing never fails: unrecognized lines are skipped and missing fields
//! take their defaults. Every extractor sees the full normalized line
//! sequence.

use tracing::debug;

use crate::model::ParsedConfig;

mod extract;
mod normalize;
mod token;

pub use normalize::normalize_lines;

use extract::{
    extract_address_objects, extract_admin_settings, extract_interfaces, extract_nat_policies,
    extract_rules, extract_security_settings, extract_service_objects, extract_system_settings,
    extract_vpn_policies,
};
use token::TokenLine;

/// Parses configuration text into a fresh [`ParsedConfig`].
pub fn parse_config(text: &str) -> ParsedConfig {
    let lines: Vec<TokenLine<'_>> = normalize_lines(text)
        .into_iter()
        .map(TokenLine::new)
        .collect();

    let config = ParsedConfig {
        rules: extract_rules(&lines),
        nat_policies: extract_nat_policies(&lines),
        address_objects: extract_address_objects(&lines),
        service_objects: extract_service_objects(&lines),
        interfaces: extract_interfaces(&lines),
        vpn_policies: extract_vpn_policies(&lines),
        security_settings: extract_security_settings(&lines),
        admin_settings: extract_admin_settings(&lines),
        system_settings: extract_system_settings(&lines),
    };

    debug!(
        "Parsed {} line(s): {} rule(s), {} NAT polic(ies), {} address object(s), {} service object(s), {} interface(s), {} VPN polic(ies).",
        lines.len(),
        config.rules.len(),
        config.nat_policies.len(),
        config.address_objects.len(),
        config.service_objects.len(),
        config.interfaces.len(),
        config.vpn_policies.len()
    );
    config
}

/// Parses raw bytes of unknown encoding. Invalid UTF-8 sequences are
/// replaced before parsing.
pub fn parse_config_bytes(bytes: &[u8]) -> ParsedConfig {
    parse_config(&String::from_utf8_lossy(bytes))
}
