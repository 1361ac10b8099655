use krscore::scorer::consts::{FEEDBACK_THRESHOLD, GRADE_THRESHOLDS, WEIGHT_TABLE};
use krscore::scorer::grading::grade_for;
use krscore::scorer::{
    achievability, measurability, relevance, specificity, timebound, Dimension, KrScoreResult,
    ScoreBreakdown, Scorer,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

// --- STRATEGIES ---

prop_compose! {
    fn arb_key_result()(
        verb in prop::sample::select(vec!["Increase", "Reduce", "Grow", "Improve", "Lower", "Launch"]),
        metric in prop::sample::select(vec!["NPS", "monthly active users", "revenue", "churn", "team morale", "p95 latency"]),
        baseline in 0u32..500,
        target in 0u32..2000,
        suffix in prop::sample::select(vec!["", "%", "K", "M"]),
        currency in any::<bool>(),
        timeframe in prop::sample::select(vec!["", " by Q2 2024", " in Q3 2025", " soon", " weekly throughout 2024"]),
        source in prop::sample::select(vec!["", " (analytics dashboard)", " tracked by CRM"]),
    ) -> String {
        let cur = if currency { "$" } else { "" };
        format!(
            "{} {} from {}{}{} to {}{}{}{}{}",
            verb, metric, cur, baseline, suffix, cur, target, suffix, timeframe, source
        )
    }
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![arb_key_result(), ".{0,120}", "[a-zA-Z0-9 $%:#]{0,80}"]
}

fn weighted_hundredths(r: &KrScoreResult) -> u32 {
    WEIGHT_TABLE
        .iter()
        .map(|&(d, w)| r.breakdown.get(d) as u32 * w)
        .sum()
}

fn tier_message(b: &ScoreBreakdown, dimension: Dimension) -> Option<&'static str> {
    match dimension {
        Dimension::Measurability => b.measurability.feedback(),
        Dimension::Specificity => b.specificity.feedback(),
        Dimension::Achievability => b.achievability.feedback(),
        Dimension::Relevance => b.relevance.feedback(),
        Dimension::TimeBound => b.time_bound.feedback(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_overall_in_range(kr in any_text(), obj in proptest::option::of(".{0,60}")) {
        let r = Scorer::new().score(&kr, obj.as_deref());
        prop_assert!(r.overall <= 100);
    }

    #[test]
    fn test_deterministic(kr in any_text(), obj in proptest::option::of(".{0,60}")) {
        let scorer = Scorer::new();
        let a = scorer.score(&kr, obj.as_deref());
        let b = scorer.score(&kr, obj.as_deref());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_weighted_sum_law(kr in any_text(), obj in proptest::option::of(".{0,60}")) {
        let r = Scorer::new().score(&kr, obj.as_deref());

        let exact = (weighted_hundredths(&r) + 50) / 100;
        prop_assert_eq!(r.overall as u32, exact);

        let float_sum: f64 = Dimension::iter()
            .map(|d| d.weight() * r.breakdown.get(d) as f64)
            .sum();
        prop_assert!((r.overall as f64 - float_sum).abs() <= 0.5 + 1e-9);
    }

    #[test]
    fn test_grade_follows_overall(kr in any_text()) {
        let r = Scorer::new().score(&kr, None);
        prop_assert_eq!(r.grade, grade_for(r.overall));
    }

    #[test]
    fn test_feedback_only_below_threshold(kr in any_text(), obj in proptest::option::of(".{0,60}")) {
        let r = Scorer::new().score(&kr, obj.as_deref());
        let low: Vec<Dimension> = Dimension::iter()
            .filter(|&d| r.breakdown.get(d) < FEEDBACK_THRESHOLD)
            .collect();

        prop_assert_eq!(r.feedback.len(), low.len());
        let expected: Vec<String> = low
            .iter()
            .filter_map(|&d| tier_message(&r.breakdown, d))
            .map(str::to_string)
            .collect();
        prop_assert_eq!(&r.feedback, &expected);

        let template_lines = if low.contains(&Dimension::Measurability) || low.contains(&Dimension::Specificity) { 2 } else { 0 };
        let single_lines = low
            .iter()
            .filter(|d| matches!(d, Dimension::Achievability | Dimension::Relevance | Dimension::TimeBound))
            .count();
        prop_assert_eq!(r.improvements.len(), template_lines + single_lines);
    }

    #[test]
    fn test_details_agree_with_standalone_analyzers(kr in any_text(), obj in proptest::option::of(".{0,60}")) {
        let d = Scorer::new().score_details(&kr, obj.as_deref());
        let b = d.result.breakdown;
        prop_assert_eq!(b.measurability, measurability::analyze(&kr));
        prop_assert_eq!(b.specificity, specificity::analyze(&kr));
        prop_assert_eq!(b.achievability, achievability::analyze(&kr));
        prop_assert_eq!(b.relevance, relevance::analyze(&kr, obj.as_deref()));
        prop_assert_eq!(b.time_bound, timebound::analyze(&kr));
        prop_assert_eq!(d.result, Scorer::new().score(&kr, obj.as_deref()));
    }

    #[test]
    fn test_missing_objective_is_neutral(kr in any_text()) {
        let r = Scorer::new().score(&kr, None);
        prop_assert_eq!(r.breakdown.relevance.score(), 75);
    }
}

#[test]
fn test_weights_sum_to_one() {
    let total: u32 = WEIGHT_TABLE.iter().map(|&(_, w)| w).sum();
    assert_eq!(total, 100);

    let float_total: f64 = Dimension::iter().map(|d| d.weight()).sum();
    assert!((float_total - 1.0).abs() < 1e-12);
}

#[test]
fn test_weight_table_covers_every_dimension_once() {
    let listed: Vec<Dimension> = WEIGHT_TABLE.iter().map(|&(d, _)| d).collect();
    assert_eq!(listed, Dimension::iter().collect::<Vec<_>>());
    for (dimension, pct) in WEIGHT_TABLE {
        assert!(pct > 0, "{} has no weight", dimension);
        assert_eq!(pct, dimension.weight_pct());
    }
}

#[test]
fn test_grade_table_is_descending_and_total() {
    for pair in GRADE_THRESHOLDS.windows(2) {
        assert!(pair[0].0 > pair[1].0);
        assert!(pair[0].1 > pair[1].1);
    }
    assert_eq!(GRADE_THRESHOLDS.last().map(|&(min, _)| min), Some(0));
}

#[test]
fn test_grade_monotonic() {
    let mut previous = grade_for(0);
    for overall in 1..=100u8 {
        let grade = grade_for(overall);
        assert!(grade >= previous, "grade dropped at {}", overall);
        previous = grade;
    }
}

#[test]
fn test_grade_boundaries() {
    let cases = [
        (100, "A+"),
        (97, "A+"),
        (96, "A"),
        (93, "A"),
        (92, "A-"),
        (90, "A-"),
        (89, "B+"),
        (87, "B+"),
        (86, "B"),
        (83, "B"),
        (80, "B-"),
        (79, "C+"),
        (77, "C+"),
        (73, "C"),
        (70, "C-"),
        (69, "D"),
        (60, "D"),
        (59, "F"),
        (0, "F"),
    ];
    for (overall, label) in cases {
        assert_eq!(grade_for(overall).to_string(), label, "overall {}", overall);
    }
}
