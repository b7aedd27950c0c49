//! One extractor per entity kind. Each scans the whole line sequence on its
//! own and returns a value for any input.

use super::token::{Phrase, TokenLine};

mod interface;
mod nat;
mod object;
mod rule;
mod settings;
mod vpn;

use interface::interface_value_positions;
pub use interface::extract_interfaces;
pub use nat::extract_nat_policies;
pub use object::{extract_address_objects, extract_service_objects};
pub use rule::extract_rules;
pub use settings::{extract_admin_settings, extract_security_settings, extract_system_settings};
pub use vpn::extract_vpn_policies;

/// Line openers of entities whose tokens never feed device-wide settings.
///
/// Interface lines are still scanned, so `ssh-management enable` on an
/// interface sets the device-wide flag. Their name and field values never
/// start or continue a settings phrase.
const RECORD_KEYWORDS: &[Phrase] = &[
    &["access-rule"],
    &["nat-policy"],
    &["nat", "policy"],
    &["address-object"],
    &["service-object"],
    &["vpn", "policy"],
    &["vpn-policy"],
];

fn settings_lines<'l, 'a>(
    lines: &'l [TokenLine<'a>],
) -> impl Iterator<Item = &'l TokenLine<'a>> + 'l {
    lines
        .iter()
        .filter(|line| line.leading(RECORD_KEYWORDS).is_none())
}

/// Indices just past every settings phrase of `phrases` in `line`.
fn setting_hits(line: &TokenLine<'_>, phrases: &[Phrase]) -> std::vec::IntoIter<usize> {
    line.occurrences(phrases, &interface_value_positions(line))
}

/// Value of the last toggle following any of `phrases`.
pub(crate) fn last_toggle(lines: &[TokenLine<'_>], phrases: &[Phrase]) -> Option<bool> {
    settings_lines(lines)
        .flat_map(|line| {
            setting_hits(line, phrases)
                .filter_map(|end| line.get(end).and_then(|t| t.toggle()))
                .collect::<Vec<_>>()
        })
        .last()
}

/// Token following the last occurrence of any of `phrases`.
///
/// An occurrence at the end of a line yields `Some(None)`: the keyword was
/// present but its value was missing.
pub(crate) fn last_value(lines: &[TokenLine<'_>], phrases: &[Phrase]) -> Option<Option<String>> {
    settings_lines(lines)
        .flat_map(|line| {
            setting_hits(line, phrases)
                .map(|end| line.get(end).map(|t| t.text.to_string()))
                .collect::<Vec<_>>()
        })
        .last()
}

/// Tokens following every occurrence of any of `phrases`, first-seen order,
/// without duplicates.
pub(crate) fn all_values(lines: &[TokenLine<'_>], phrases: &[Phrase]) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for line in settings_lines(lines) {
        for end in setting_hits(line, phrases) {
            if let Some(token) = line.get(end) {
                if !token.text.is_empty() && !values.iter().any(|v| v == token.text) {
                    values.push(token.text.to_string());
                }
            }
        }
    }
    values
}
