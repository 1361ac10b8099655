use super::consts::{
    RATIO_AGGRESSIVE_MAX, RATIO_MODERATE_MIN, RATIO_STRETCH_MAX, RATIO_STRETCH_MIN,
    RATIO_TIMID_MIN,
};
use super::patterns::{BASELINE_TARGET_PAIR, REDUCTION_LANGUAGE};
use super::types::AchievabilityTier;

/// A baseline and target pulled from a "from A to B" phrase, already scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineTarget {
    pub baseline: f64,
    pub target: f64,
}

/// Parses a captured number with an optional K/M/B/% suffix.
///
/// Returns `None` for anything that is not a finite number, so a malformed
/// fragment behaves exactly like a pattern that never matched.
pub fn parse_amount(number: &str, suffix: Option<&str>) -> Option<f64> {
    let cleaned: String = number.chars().filter(|&c| c != ',').collect();
    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let multiplier = match suffix.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("k") => 1e3,
        Some("m") => 1e6,
        Some("b") => 1e9,
        _ => 1.0,
    };
    Some(value * multiplier)
}

pub fn extract_pair(text: &str) -> Option<BaselineTarget> {
    let caps = BASELINE_TARGET_PAIR.captures(text)?;
    let baseline = parse_amount(&caps[1], caps.get(2).map(|m| m.as_str()))?;
    let target = parse_amount(&caps[3], caps.get(4).map(|m| m.as_str()))?;
    Some(BaselineTarget { baseline, target })
}

/// Maps an improvement ratio onto its band. Band edges are inclusive where
/// the ambitious range begins and ends.
pub fn ratio_tier(ratio: f64) -> AchievabilityTier {
    if ratio < 1.0 {
        AchievabilityTier::OutOfRange
    } else if (RATIO_STRETCH_MIN..=RATIO_STRETCH_MAX).contains(&ratio) {
        AchievabilityTier::Stretch
    } else if (RATIO_MODERATE_MIN..RATIO_STRETCH_MIN).contains(&ratio) {
        AchievabilityTier::Moderate
    } else if ratio > RATIO_STRETCH_MAX && ratio <= RATIO_AGGRESSIVE_MAX {
        AchievabilityTier::Aggressive
    } else if (RATIO_TIMID_MIN..RATIO_MODERATE_MIN).contains(&ratio) {
        AchievabilityTier::Timid
    } else if ratio > RATIO_AGGRESSIVE_MAX {
        AchievabilityTier::OutOfRange
    } else {
        AchievabilityTier::Moderate
    }
}

/// Improvement ratio, inverted when the statement is about reducing a value.
/// `None` when either side is zero.
pub fn improvement_ratio(pair: BaselineTarget, reduction: bool) -> Option<f64> {
    if pair.baseline == 0.0 || pair.target == 0.0 {
        return None;
    }
    Some(if reduction {
        pair.baseline / pair.target
    } else {
        pair.target / pair.baseline
    })
}

/// Ratio implied by the statement, if it names a usable baseline and target.
pub fn statement_ratio(text: &str, pair: Option<BaselineTarget>) -> Option<f64> {
    let pair = pair?;
    improvement_ratio(pair, REDUCTION_LANGUAGE.is_match(text))
}

/// No ratio means nothing to judge, so the default is `Moderate`.
pub fn tier_for(ratio: Option<f64>) -> AchievabilityTier {
    ratio.map_or(AchievabilityTier::Moderate, ratio_tier)
}

pub fn analyze(text: &str) -> AchievabilityTier {
    tier_for(statement_ratio(text, extract_pair(text)))
}
