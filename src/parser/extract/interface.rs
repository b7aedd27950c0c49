use crate::model::InterfaceConfig;
use crate::parser::token::{Phrase, TokenLine};

const INTERFACE_KEYWORDS: &[Phrase] = &[&["interface"]];

const INTERFACE_KEYS: &[&str] = &[
    "zone",
    "ip",
    "ip-address",
    "ipaddr",
    "ip-assignment",
    "dhcp-server",
    "dhcp",
];

/// Extracts every `interface` line, in source order. Interfaces sharing a
/// name stay separate entries.
pub fn extract_interfaces(lines: &[TokenLine<'_>]) -> Vec<InterfaceConfig> {
    lines
        .iter()
        .filter_map(|line| {
            line.leading(INTERFACE_KEYWORDS)
                .map(|start| parse_interface(line, start).0)
        })
        .collect()
}

/// Indices of the tokens an `interface` line uses as its name or field
/// values. Empty for any other line.
pub(crate) fn interface_value_positions(line: &TokenLine<'_>) -> Vec<usize> {
    line.leading(INTERFACE_KEYWORDS)
        .map(|start| parse_interface(line, start).1)
        .unwrap_or_default()
}

fn parse_interface(line: &TokenLine<'_>, start: usize) -> (InterfaceConfig, Vec<usize>) {
    let mut interface = InterfaceConfig::default();
    let mut values = Vec::new();
    let mut cursor = line.cursor(start);

    if let Some(token) = cursor.peek().filter(|t| !t.is_any(INTERFACE_KEYS)) {
        interface.interface_name = token.text.to_string();
        values.push(cursor.position());
        cursor.bump();
    }

    while let Some(token) = cursor.bump() {
        if token.quoted {
            continue;
        }
        match token.text.to_ascii_lowercase().as_str() {
            "zone" | "ip-assignment" => {
                let at = cursor.position();
                if let Some(v) = cursor.value(&[]) {
                    interface.zone = Some(v);
                    values.push(at);
                }
            }
            "ip" | "ip-address" | "ipaddr" => {
                let at = cursor.position();
                if let Some(v) = cursor.value(&[]) {
                    interface.ip_address = Some(v);
                    values.push(at);
                }
            }
            "dhcp-server" => {
                interface.dhcp_server_enabled = cursor.toggle().unwrap_or(true);
            }
            "dhcp" => {
                if cursor.eat("server") {
                    interface.dhcp_server_enabled = cursor.toggle().unwrap_or(true);
                }
            }
            _ => {}
        }
    }
    (interface, values)
}
