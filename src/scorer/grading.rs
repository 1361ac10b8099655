use super::consts::{GRADE_THRESHOLDS, WEIGHT_TABLE};
use super::types::{Grade, ScoreBreakdown};

/// Weighted sum of the five dimensions, rounded half away from zero.
///
/// Evaluated in hundredths so that x.5 totals cannot drift below the
/// rounding point through float error.
pub fn overall_score(breakdown: &ScoreBreakdown) -> u8 {
    let hundredths: u32 = WEIGHT_TABLE
        .iter()
        .map(|&(dim, weight)| breakdown.get(dim) as u32 * weight)
        .sum();
    // Max is 100 * 100, so the result always fits in a u8.
    ((hundredths + 50) / 100) as u8
}

/// Top-down walk of the threshold table. Total over all `u8` inputs because
/// the last row has a minimum of zero.
pub fn grade_for(overall: u8) -> Grade {
    GRADE_THRESHOLDS
        .iter()
        .find(|&&(min, _)| overall >= min)
        .map(|&(_, grade)| grade)
        .unwrap_or(Grade::F)
}
