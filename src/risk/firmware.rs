//! Firmware age heuristics.
//!
//! Three independent signals, any of which marks firmware as outdated: a date
//! embedded in the version string, a match against a list of old release
//! trains, and lifecycle words such as `legacy`.

use std::sync::OnceLock;

use chrono::{Months, NaiveDate};
use regex::Regex;

const LIFECYCLE_MARKERS: &[&str] = &["legacy", "deprecated", "end-of-life"];

const MONTHS: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

// Patterns must stay within the `regex` crate's linear-time subset.
fn iso_date() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{4})[-/](\d{1,2})[-/](\d{1,2})").expect("static regex"))
}

fn month_year() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b\.?[\s,-]+(\d{4})\b",
        )
        .expect("static regex")
    })
}

fn build_date() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:^|[^0-9])((?:19|20)\d{2})(0[1-9]|1[0-2])(0[1-9]|[12]\d|3[01])(?:[^0-9]|$)")
            .expect("static regex")
    })
}

fn dotted_version() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)+").expect("static regex"))
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// First date embedded in a firmware string: ISO form, then `Mon YYYY`, then
/// a `YYYYMMDD` build stamp.
pub fn embedded_date(firmware: &str) -> Option<NaiveDate> {
    let iso = iso_date()
        .captures_iter(firmware)
        .find_map(|c| ymd(&c[1], &c[2], &c[3]));
    if iso.is_some() {
        return iso;
    }

    let named = month_year().captures_iter(firmware).find_map(|c| {
        let month = c[1].get(..3)?.to_ascii_lowercase();
        let index = MONTHS.iter().position(|m| *m == month)? + 1;
        NaiveDate::from_ymd_opt(c[2].parse().ok()?, u32::try_from(index).ok()?, 1)
    });
    if named.is_some() {
        return named;
    }

    build_date()
        .captures_iter(firmware)
        .find_map(|c| ymd(&c[1], &c[2], &c[3]))
}

/// Returns true if the first dotted version in `firmware` starts with
/// `release` on component boundaries (`6.2` matches `6.2.5.1`, not `6.25`).
pub fn matches_release(firmware: &str, release: &str) -> bool {
    let Some(version) = dotted_version().find(firmware) else {
        return false;
    };
    let release: Vec<&str> = release.trim().split('.').collect();
    let version: Vec<&str> = version.as_str().split('.').collect();
    !release.is_empty()
        && release.len() <= version.len()
        && release
            .iter()
            .zip(version.iter())
            .all(|(r, v)| match (r.parse::<u64>(), v.parse::<u64>()) {
                (Ok(r), Ok(v)) => r == v,
                _ => r == v,
            })
}

/// Explains why `firmware` counts as outdated; empty when it does not.
///
/// An embedded date counts when it is more than `max_age_months` before
/// `reference`. Dates after `reference` never count.
pub fn outdated_firmware_reasons(
    firmware: &str,
    reference: NaiveDate,
    max_age_months: u32,
    outdated_releases: &[String],
) -> Vec<String> {
    let mut reasons = Vec::new();
    let firmware = firmware.trim();
    if firmware.is_empty() {
        return reasons;
    }

    if let (Some(date), Some(cutoff)) = (
        embedded_date(firmware),
        reference.checked_sub_months(Months::new(max_age_months)),
    ) {
        if date < cutoff {
            reasons.push(format!(
                "build date {date} is older than {max_age_months} month(s)"
            ));
        }
    }

    if let Some(release) = outdated_releases
        .iter()
        .find(|release| matches_release(firmware, release))
    {
        reasons.push(format!("release {release} is on the outdated release list"));
    }

    let lowered = firmware.to_ascii_lowercase();
    if let Some(marker) = LIFECYCLE_MARKERS.iter().find(|m| lowered.contains(*m)) {
        reasons.push(format!("marked as {marker}"));
    }
    reasons
}
