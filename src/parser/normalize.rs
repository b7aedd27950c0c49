/// Splits raw configuration text into trimmed, non-empty, non-comment lines.
///
/// Lines are borrowed from the input. Nothing is rejected for its content:
/// control characters and very long lines pass through untouched.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_comment(line))
        .collect()
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_blank_and_comment_lines() {
        let text = "# header\n\n   \n  // note\nips enable\r\n\t hostname fw01  \n";
        assert_eq!(normalize_lines(text), vec!["ips enable", "hostname fw01"]);
    }

    #[test]
    fn test_keeps_control_characters() {
        let text = "ips\u{0} enable\n\u{7}\u{1b}[0m\n";
        let lines = normalize_lines(text);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains('\u{0}'));
    }

    #[test]
    fn test_long_line_not_truncated() {
        let long = "x".repeat(200_000);
        let lines = normalize_lines(&long);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 200_000);
    }

    #[test]
    fn test_hash_inside_line_is_kept() {
        assert_eq!(normalize_lines("hostname fw#1"), vec!["hostname fw#1"]);
    }
}
