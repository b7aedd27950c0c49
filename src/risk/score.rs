use super::ConfigRisk;

const BASE_SCORE: i64 = 100;

/// Reduces findings to a score between 0 and 100.
///
/// Each finding deducts its severity weight from 100; the total is clamped
/// once, after every deduction.
pub fn calculate_risk_score(risks: &[ConfigRisk]) -> u8 {
    let deductions: i64 = risks.iter().map(|r| i64::from(r.severity.weight())).sum();
    let score = (BASE_SCORE - deductions).clamp(0, BASE_SCORE);
    u8::try_from(score).unwrap_or(0)
}
