use super::types::{
    AchievabilityTier, Dimension, MeasurabilityTier, RelevanceTier, ScoreBreakdown,
    SpecificityTier, TimeBoundTier,
};
use strum::IntoEnumIterator;

pub const KR_TEMPLATE: &str = "Use the format: [Verb] [Metric] from [Baseline] to [Target] by [Deadline]";
pub const KR_TEMPLATE_EXAMPLE: &str =
    "Example: Increase weekly active users from 10K to 25K by Q3 2024 (tracked in product analytics)";
pub const ACHIEVABILITY_IMPROVEMENT: &str =
    "Set the target 1.5x to 3x above the baseline: ambitious, but reachable within the period";
pub const RELEVANCE_IMPROVEMENT: &str =
    "Reuse the objective's key terms so it is clear how this result moves the objective";
pub const TIME_BOUND_IMPROVEMENT: &str =
    "Add a specific deadline such as 'by Q4 2024', or a cadence such as 'monthly throughout Q3'";

impl MeasurabilityTier {
    pub fn feedback(self) -> Option<&'static str> {
        match self {
            Self::NoMetric => Some(
                "No measurable metric found. Add a number, percentage, or standard metric such as NPS or churn.",
            ),
            Self::VagueQuantifier => Some(
                "Relies on vague quantifiers like 'more' or 'better' instead of a concrete metric.",
            ),
            Self::MetricOnly => Some(
                "A metric is present but has no baseline or target. State where you start and where you want to be.",
            ),
            Self::TargetOnly | Self::BaselineAndTarget => None,
        }
    }
}

impl SpecificityTier {
    pub fn feedback(self) -> Option<&'static str> {
        match self {
            Self::NoUnits => Some(
                "No unit of measure found. Say what is being counted: users, revenue, hours, percent.",
            ),
            Self::UnitsOnly => Some(
                "Units are present, but neither a measurement cadence nor a data source is named.",
            ),
            Self::UnitsAndCadence | Self::UnitsAndSource | Self::FullySpecified => None,
        }
    }
}

impl AchievabilityTier {
    pub fn feedback(self) -> Option<&'static str> {
        match self {
            Self::OutOfRange => Some(
                "Target is regressive or unrealistic: it falls outside a 1x to 5x change from the baseline.",
            ),
            Self::Timid => Some(
                "Target is less than a 20% improvement on the baseline. Consider a bolder stretch goal.",
            ),
            Self::Aggressive => Some(
                "Target is a 3x to 5x improvement. Confirm it is reachable within the period.",
            ),
            Self::Moderate | Self::Stretch => None,
        }
    }
}

impl RelevanceTier {
    pub fn feedback(self) -> Option<&'static str> {
        match self {
            Self::Unrelated => Some("Key result shares no terms or topic with the objective."),
            Self::Weak => Some("Key result is only loosely connected to the objective."),
            Self::Partial => Some(
                "Key result is partly aligned with the objective. Make the connection explicit.",
            ),
            Self::Related | Self::Aligned => None,
        }
    }
}

impl TimeBoundTier {
    pub fn feedback(self) -> Option<&'static str> {
        match self {
            Self::NoTimeframe => Some("No timeframe given. Add a deadline such as 'by Q2 2024'."),
            Self::Vague => Some(
                "Timeframe is vague ('soon', 'next quarter'). Name a specific quarter and year.",
            ),
            Self::QuarterMentioned | Self::Deadline => None,
        }
    }
}

fn message_for(breakdown: &ScoreBreakdown, dimension: Dimension) -> Option<&'static str> {
    match dimension {
        Dimension::Measurability => breakdown.measurability.feedback(),
        Dimension::Specificity => breakdown.specificity.feedback(),
        Dimension::Achievability => breakdown.achievability.feedback(),
        Dimension::Relevance => breakdown.relevance.feedback(),
        Dimension::TimeBound => breakdown.time_bound.feedback(),
    }
}

/// One message per dimension below the feedback threshold, in dimension order.
pub fn build_feedback(breakdown: &ScoreBreakdown) -> Vec<String> {
    Dimension::iter()
        .filter_map(|d| message_for(breakdown, d))
        .map(str::to_string)
        .collect()
}

pub fn build_improvements(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut improvements = Vec::new();

    if breakdown.measurability.feedback().is_some() || breakdown.specificity.feedback().is_some()
    {
        improvements.push(KR_TEMPLATE.to_string());
        improvements.push(KR_TEMPLATE_EXAMPLE.to_string());
    }
    if breakdown.achievability.feedback().is_some() {
        improvements.push(ACHIEVABILITY_IMPROVEMENT.to_string());
    }
    if breakdown.relevance.feedback().is_some() {
        improvements.push(RELEVANCE_IMPROVEMENT.to_string());
    }
    if breakdown.time_bound.feedback().is_some() {
        improvements.push(TIME_BOUND_IMPROVEMENT.to_string());
    }

    improvements
}
