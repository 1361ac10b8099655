use super::patterns::{
    BASELINE_PHRASE, FROM_TO, METRIC_PATTERNS, PERCENTAGE, TARGET_PHRASE, VAGUE_QUANTIFIER,
};
use super::types::MeasurabilityTier;

/// Names of the metric patterns that fired, in table order.
pub fn detected_metrics(text: &str) -> Vec<&'static str> {
    METRIC_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|&(name, _)| name)
        .collect()
}

pub fn has_metric(text: &str) -> bool {
    METRIC_PATTERNS.iter().any(|(_, re)| re.is_match(text))
}

pub fn analyze(text: &str) -> MeasurabilityTier {
    classify(text, has_metric(text))
}

/// Tier for `text` once metric presence is already known.
pub fn classify(text: &str, has_metric: bool) -> MeasurabilityTier {
    if !has_metric {
        return if VAGUE_QUANTIFIER.is_match(text) {
            MeasurabilityTier::VagueQuantifier
        } else {
            MeasurabilityTier::NoMetric
        };
    }

    let has_baseline = BASELINE_PHRASE.is_match(text);
    let has_target = TARGET_PHRASE.is_match(text);

    if (has_baseline && has_target) || FROM_TO.is_match(text) {
        MeasurabilityTier::BaselineAndTarget
    } else if has_target || PERCENTAGE.is_match(text) {
        MeasurabilityTier::TargetOnly
    } else {
        MeasurabilityTier::MetricOnly
    }
}
