use crate::model::{FirewallRule, RuleAction};
use crate::parser::token::{Phrase, TokenLine};

const RULE_KEYWORDS: &[Phrase] = &[&["access-rule"]];

const ADDRESS_FILLERS: &[&str] = &["address", "addr", "name", "group"];
const SERVICE_FILLERS: &[&str] = &["name", "group"];

const ALLOW_VERDICTS: &[&str] = &["allow", "accept", "permit", "pass"];
const DENY_VERDICTS: &[&str] = &["deny", "drop", "discard", "reject", "block"];

/// Extracts every `access-rule` line, in source order.
pub fn extract_rules(lines: &[TokenLine<'_>]) -> Vec<FirewallRule> {
    lines
        .iter()
        .filter_map(|line| line.leading(RULE_KEYWORDS).map(|start| parse_rule(line, start)))
        .collect()
}

fn parse_verdict(value: &str) -> Option<RuleAction> {
    if ALLOW_VERDICTS.iter().any(|v| value.eq_ignore_ascii_case(v)) {
        Some(RuleAction::Allow)
    } else if DENY_VERDICTS.iter().any(|v| value.eq_ignore_ascii_case(v)) {
        Some(RuleAction::Deny)
    } else {
        None
    }
}

fn parse_rule(line: &TokenLine<'_>, start: usize) -> FirewallRule {
    let mut rule = FirewallRule::default();
    let mut cursor = line.cursor(start);

    if let Some(token) = cursor.peek().filter(|t| t.quoted) {
        rule.rule_name = Some(token.text.to_string());
        cursor.bump();
    }

    while let Some(token) = cursor.bump() {
        if token.quoted {
            continue;
        }
        match token.text.to_ascii_lowercase().as_str() {
            "name" => {
                if let Some(v) = cursor.value(&[]) {
                    rule.rule_name = Some(v);
                }
            }
            "from" => {
                if let Some(v) = cursor.value(&["zone"]) {
                    rule.source_zone = v;
                }
            }
            "to" => {
                if let Some(v) = cursor.value(&["zone"]) {
                    rule.destination_zone = v;
                }
            }
            "source" | "src" => {
                if let Some(v) = cursor.value(ADDRESS_FILLERS) {
                    rule.source_address = v;
                }
            }
            "destination" | "dst" | "dest" => {
                if let Some(v) = cursor.value(ADDRESS_FILLERS) {
                    rule.destination_address = v;
                }
            }
            "service" => {
                if let Some(v) = cursor.value(SERVICE_FILLERS) {
                    rule.service = v;
                }
            }
            "action" => {
                if let Some(action) = cursor.value(&[]).as_deref().and_then(parse_verdict) {
                    rule.action = action;
                }
            }
            "comment" | "description" => {
                if let Some(v) = cursor.value(&[]) {
                    rule.comment = Some(v);
                }
            }
            "disable" | "disabled" => rule.enabled = false,
            "enable" | "enabled" => rule.enabled = cursor.toggle().unwrap_or(true),
            other => {
                if let Some(action) = parse_verdict(other) {
                    rule.action = action;
                }
            }
        }
    }
    rule
}
