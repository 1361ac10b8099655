use super::types::{Dimension, Grade};

/// Dimension weights in whole percent. Must sum to 100.
///
/// Kept integral so the weighted sum is exact and half-way totals round
/// predictably.
pub const WEIGHT_TABLE: [(Dimension, u32); 5] = [
    (Dimension::Measurability, Dimension::Measurability.weight_pct()),
    (Dimension::Specificity, Dimension::Specificity.weight_pct()),
    (Dimension::Achievability, Dimension::Achievability.weight_pct()),
    (Dimension::Relevance, Dimension::Relevance.weight_pct()),
    (Dimension::TimeBound, Dimension::TimeBound.weight_pct()),
];

/// Grade thresholds, highest first. The first row whose minimum the overall
/// score meets decides the grade.
pub const GRADE_THRESHOLDS: [(u8, Grade); 11] = [
    (97, Grade::APlus),
    (93, Grade::A),
    (90, Grade::AMinus),
    (87, Grade::BPlus),
    (83, Grade::B),
    (80, Grade::BMinus),
    (77, Grade::CPlus),
    (73, Grade::C),
    (70, Grade::CMinus),
    (60, Grade::D),
    (0, Grade::F),
];

/// Dimensions scoring below this contribute feedback and improvements.
pub const FEEDBACK_THRESHOLD: u8 = 75;

/// Achievability ratio bands.
pub const RATIO_STRETCH_MIN: f64 = 1.5;
pub const RATIO_STRETCH_MAX: f64 = 3.0;
pub const RATIO_MODERATE_MIN: f64 = 1.2;
pub const RATIO_AGGRESSIVE_MAX: f64 = 5.0;
pub const RATIO_TIMID_MIN: f64 = 1.05;

/// Relevance overlap bands.
pub const OVERLAP_ALIGNED_MIN: f64 = 0.30;
pub const OVERLAP_RELATED_MIN: f64 = 0.15;
pub const OVERLAP_PARTIAL_MIN: f64 = 0.05;

impl Dimension {
    pub const fn weight_pct(self) -> u32 {
        match self {
            Dimension::Measurability => 30,
            Dimension::Specificity => 25,
            Dimension::Achievability => 20,
            Dimension::Relevance => 15,
            Dimension::TimeBound => 10,
        }
    }

    pub fn weight(self) -> f64 {
        self.weight_pct() as f64 / 100.0
    }
}
