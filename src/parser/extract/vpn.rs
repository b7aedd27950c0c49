use crate::model::VpnConfig;
use crate::parser::token::{Phrase, TokenLine};

const VPN_KEYWORDS: &[Phrase] = &[&["vpn", "policy"], &["vpn-policy"]];

const POLICY_KINDS: &[&str] = &["site-to-site", "tunnel", "ipv4", "ipv6"];

/// Extracts every `vpn policy` line, in source order.
pub fn extract_vpn_policies(lines: &[TokenLine<'_>]) -> Vec<VpnConfig> {
    lines
        .iter()
        .filter_map(|line| line.leading(VPN_KEYWORDS).map(|start| parse_vpn(line, start)))
        .collect()
}

fn parse_vpn(line: &TokenLine<'_>, start: usize) -> VpnConfig {
    let mut vpn = VpnConfig::default();
    let mut named = false;
    let mut cursor = line.cursor(start);
    while cursor.peek().is_some_and(|t| t.is_any(POLICY_KINDS)) {
        cursor.bump();
    }

    while let Some(token) = cursor.bump() {
        let key = if token.quoted {
            String::new()
        } else {
            token.text.to_ascii_lowercase()
        };
        match key.as_str() {
            "name" => {
                if let Some(v) = cursor.value(&[]) {
                    vpn.policy_name = v;
                    named = true;
                }
            }
            "encryption" | "encrypt" | "cipher" => {
                if let Some(v) = cursor.value(&[]) {
                    vpn.encryption = Some(v);
                }
            }
            "auth" | "authentication" | "auth-method" | "authentication-method" => {
                if let Some(v) = cursor.value(&["method"]) {
                    vpn.authentication_method = Some(v);
                }
            }
            _ if !named => {
                vpn.policy_name = token.text.to_string();
                named = true;
            }
            _ => {}
        }
    }
    vpn
}
