use crate::model::NatPolicy;
use crate::parser::token::{Phrase, TokenLine};

const NAT_KEYWORDS: &[Phrase] = &[&["nat-policy"], &["nat", "policy"]];

/// Extracts every `nat-policy` line, in source order.
pub fn extract_nat_policies(lines: &[TokenLine<'_>]) -> Vec<NatPolicy> {
    lines
        .iter()
        .filter_map(|line| line.leading(NAT_KEYWORDS).map(|start| parse_nat(line, start)))
        .collect()
}

fn parse_nat(line: &TokenLine<'_>, start: usize) -> NatPolicy {
    let mut policy = NatPolicy::default();
    let mut cursor = line.cursor(start);
    while let Some(token) = cursor.bump() {
        if token.quoted {
            continue;
        }
        let slot = match token.text.to_ascii_lowercase().as_str() {
            "original-source" | "orig-source" => &mut policy.original_source,
            "translated-source" | "trans-source" => &mut policy.translated_source,
            "original-destination" | "orig-destination" => &mut policy.original_destination,
            "translated-destination" | "trans-destination" => &mut policy.translated_destination,
            "interface" | "inbound" | "outbound" => {
                if let Some(v) = cursor.value(&[]) {
                    policy.interface = v;
                }
                continue;
            }
            _ => continue,
        };
        if let Some(v) = cursor.value(&["name"]) {
            *slot = Some(v);
        }
    }
    policy
}
