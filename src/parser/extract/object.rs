use crate::model::{AddressObject, ServiceObject};
use crate::parser::token::{Cursor, Phrase, TokenLine};

const ADDRESS_KEYWORDS: &[Phrase] = &[&["address-object"]];
const SERVICE_KEYWORDS: &[Phrase] = &[&["service-object"]];

const ADDRESS_FAMILIES: &[&str] = &["ipv4", "ipv6", "fqdn", "mac"];
const ADDRESS_KEYS: &[&str] = &[
    "name", "host", "ip", "address", "domain", "network", "subnet", "range", "zone",
];

/// Extracts every `address-object` line, in source order.
pub fn extract_address_objects(lines: &[TokenLine<'_>]) -> Vec<AddressObject> {
    lines
        .iter()
        .filter_map(|line| {
            line.leading(ADDRESS_KEYWORDS)
                .map(|start| parse_address(line, start))
        })
        .collect()
}

/// Extracts every `service-object` line, in source order.
pub fn extract_service_objects(lines: &[TokenLine<'_>]) -> Vec<ServiceObject> {
    lines
        .iter()
        .filter_map(|line| {
            line.leading(SERVICE_KEYWORDS)
                .map(|start| parse_service(line, start))
        })
        .collect()
}

/// Consumes the next token when it is a plain value rather than a field key.
fn operand(cursor: &mut Cursor<'_, '_>, keys: &[&str]) -> Option<String> {
    let token = cursor.peek().filter(|t| !t.is_any(keys))?;
    cursor.bump();
    Some(token.text.to_string())
}

fn parse_address(line: &TokenLine<'_>, start: usize) -> AddressObject {
    let mut object = AddressObject::default();
    let mut named = false;
    let mut cursor = line.cursor(start);
    while cursor.peek().is_some_and(|t| t.is_any(ADDRESS_FAMILIES)) {
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
                    object.object_name = v;
                    named = true;
                }
            }
            "host" | "ip" | "address" | "domain" => {
                if let Some(v) = cursor.value(&[]) {
                    object.ip_address = Some(v);
                }
            }
            "network" | "subnet" => {
                if let Some(base) = cursor.value(&[]) {
                    let network = match operand(&mut cursor, ADDRESS_KEYS) {
                        Some(mask) if !base.contains('/') => format!("{base}/{mask}"),
                        _ => base,
                    };
                    object.network = Some(network);
                }
            }
            "range" => {
                if let Some(low) = cursor.value(&[]) {
                    let range = match operand(&mut cursor, ADDRESS_KEYS) {
                        Some(high) => format!("{low}-{high}"),
                        None => low,
                    };
                    object.network = Some(range);
                }
            }
            "zone" => {
                if let Some(v) = cursor.value(&[]) {
                    object.zone = Some(v);
                }
            }
            _ if !named => {
                object.object_name = token.text.to_string();
                named = true;
            }
            _ if object.ip_address.is_none() && object.network.is_none() => {
                object.ip_address = Some(token.text.to_string());
            }
            _ => {}
        }
    }
    object
}

fn parse_service(line: &TokenLine<'_>, start: usize) -> ServiceObject {
    let mut service = ServiceObject::default();
    let mut named = false;
    let mut positional: Vec<String> = Vec::new();
    let mut cursor = line.cursor(start);

    while let Some(token) = cursor.bump() {
        let key = if token.quoted {
            String::new()
        } else {
            token.text.to_ascii_lowercase()
        };
        match key.as_str() {
            "name" => {
                if let Some(v) = cursor.value(&[]) {
                    service.service_name = v;
                    named = true;
                }
            }
            "protocol" | "proto" => {
                if let Some(v) = cursor.value(&[]) {
                    service.protocol = Some(v);
                }
            }
            "port" | "ports" | "port-range" | "destination-port" => {
                if let Some(v) = cursor.value(&[]) {
                    service.port_range = Some(v);
                }
            }
            _ if !named => {
                service.service_name = token.text.to_string();
                named = true;
            }
            _ => positional.push(token.text.to_string()),
        }
    }

    // Positional form: <protocol> <low> [<high>]
    let mut positional = positional.into_iter();
    if service.protocol.is_none() {
        service.protocol = positional.next();
    }
    if service.port_range.is_none() {
        service.port_range = match (positional.next(), positional.next()) {
            (Some(low), Some(high)) if low == high => Some(low),
            (Some(low), Some(high)) => Some(format!("{low}-{high}")),
            (low, _) => low,
        };
    }
    service
}
