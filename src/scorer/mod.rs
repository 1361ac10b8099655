pub mod achievability;
pub mod consts;
pub mod feedback;
pub mod grading;
pub mod measurability;
pub mod patterns;
pub mod relevance;
pub mod specificity;
pub mod timebound;
pub mod types;

pub use self::types::{
    AchievabilityTier, Dimension, Grade, KrScoreResult, MeasurabilityTier, RelevanceTier,
    ScoreBreakdown, ScoreDetails, SpecificityTier, TimeBoundTier,
};
use self::specificity::SpecificitySignals;
use std::sync::LazyLock;
use tracing::debug;

/// The key-result quality scorer.
///
/// Holds no per-call state: every table it consults is an immutable static,
/// so one instance can be shared freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Scorer;

impl Scorer {
    /// Builds a scorer and compiles the pattern tables up front so the first
    /// call does not pay for it.
    pub fn new() -> Self {
        LazyLock::force(&patterns::METRIC_PATTERNS);
        LazyLock::force(&patterns::DOMAIN_PATTERNS);
        LazyLock::force(&patterns::BASELINE_TARGET_PAIR);
        LazyLock::force(&patterns::DEADLINE);
        Self
    }

    /// Runs the five analyzers over the key result and combines them.
    ///
    /// Never fails: empty or malformed input falls through to each
    /// dimension's zero or default tier.
    pub fn score(&self, key_result: &str, objective: Option<&str>) -> KrScoreResult {
        self.score_details(key_result, objective).result
    }

    /// Same result as [`Scorer::score`], plus the raw signals behind it.
    /// Each signal is computed once and feeds both.
    pub fn score_details(&self, key_result: &str, objective: Option<&str>) -> ScoreDetails {
        let metrics = measurability::detected_metrics(key_result);
        let signals = SpecificitySignals::detect(key_result);
        let pair = achievability::extract_pair(key_result);
        let ratio = achievability::statement_ratio(key_result, pair);

        let objective = relevance::present_objective(objective);
        let kr_domains = relevance::domains(key_result);
        let objective_domains = objective.map(relevance::domains).unwrap_or_default();
        let overlap = objective.map(|o| {
            relevance::overlap_ratio(&relevance::tokenize(key_result), &relevance::tokenize(o))
        });
        let relevance_tier = match overlap {
            Some(share) => {
                relevance::tier_for(share, relevance::any_shared(&kr_domains, &objective_domains))
            }
            None => RelevanceTier::Related,
        };

        let breakdown = ScoreBreakdown {
            measurability: measurability::classify(key_result, !metrics.is_empty()),
            specificity: signals.tier(),
            achievability: achievability::tier_for(ratio),
            relevance: relevance_tier,
            time_bound: timebound::analyze(key_result),
        };

        let overall = grading::overall_score(&breakdown);
        let grade = grading::grade_for(overall);

        debug!(
            "Scored KR: M={} S={} A={} R={} T={} -> {} ({})",
            breakdown.measurability.score(),
            breakdown.specificity.score(),
            breakdown.achievability.score(),
            breakdown.relevance.score(),
            breakdown.time_bound.score(),
            overall,
            grade
        );

        ScoreDetails {
            result: KrScoreResult {
                overall,
                grade,
                feedback: feedback::build_feedback(&breakdown),
                improvements: feedback::build_improvements(&breakdown),
                breakdown,
            },
            metrics,
            has_units: signals.units,
            has_cadence: signals.cadence,
            has_source: signals.source,
            baseline: pair.map(|p| p.baseline),
            target: pair.map(|p| p.target),
            ratio,
            overlap,
            kr_domains,
            objective_domains,
        }
    }
}
