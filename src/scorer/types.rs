use super::relevance::TopicDomain;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The five independently scored quality dimensions, in feedback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Measurability,
    Specificity,
    Achievability,
    Relevance,
    #[strum(to_string = "Time-Bound")]
    TimeBound,
}

// Generates a dimension tier enum whose discriminants are the tier scores.
// Tiers (de)serialize as their bare integer value.
macro_rules! tier_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Serialize, Deserialize,
        )]
        #[serde(into = "u8", try_from = "u8")]
        #[repr(u8)]
        pub enum $name {
            $($variant = $value),+
        }

        impl $name {
            #[inline(always)]
            pub fn score(self) -> u8 {
                self as u8
            }
        }

        impl From<$name> for u8 {
            fn from(tier: $name) -> u8 {
                tier as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = String;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(format!("{} is not a valid {} tier", value, stringify!($name))),
                }
            }
        }
    };
}

tier_enum! {
    /// Metric presence, optionally qualified by baseline and target phrasing.
    MeasurabilityTier {
        NoMetric = 0,
        VagueQuantifier = 25,
        MetricOnly = 50,
        TargetOnly = 75,
        BaselineAndTarget = 100,
    }
}

tier_enum! {
    /// Units, cadence and measurement source.
    SpecificityTier {
        NoUnits = 0,
        UnitsOnly = 50,
        UnitsAndCadence = 75,
        UnitsAndSource = 85,
        FullySpecified = 100,
    }
}

tier_enum! {
    /// Band of the baseline-to-target improvement ratio.
    AchievabilityTier {
        OutOfRange = 0,
        Timid = 25,
        Aggressive = 50,
        Moderate = 75,
        Stretch = 100,
    }
}

tier_enum! {
    /// Lexical and topical agreement with the objective.
    RelevanceTier {
        Unrelated = 0,
        Weak = 25,
        Partial = 50,
        Related = 75,
        Aligned = 100,
    }
}

tier_enum! {
    TimeBoundTier {
        NoTimeframe = 0,
        Vague = 50,
        QuarterMentioned = 75,
        Deadline = 100,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub measurability: MeasurabilityTier,
    pub specificity: SpecificityTier,
    pub achievability: AchievabilityTier,
    pub relevance: RelevanceTier,
    pub time_bound: TimeBoundTier,
}

impl ScoreBreakdown {
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Measurability => self.measurability.score(),
            Dimension::Specificity => self.specificity.score(),
            Dimension::Achievability => self.achievability.score(),
            Dimension::Relevance => self.relevance.score(),
            Dimension::TimeBound => self.time_bound.score(),
        }
    }
}

/// Letter grades, declared worst to best so that `Ord` follows quality.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, Serialize, Deserialize,
)]
pub enum Grade {
    #[strum(to_string = "F")]
    #[serde(rename = "F")]
    F,
    #[strum(to_string = "D")]
    #[serde(rename = "D")]
    D,
    #[strum(to_string = "C-")]
    #[serde(rename = "C-")]
    CMinus,
    #[strum(to_string = "C")]
    #[serde(rename = "C")]
    C,
    #[strum(to_string = "C+")]
    #[serde(rename = "C+")]
    CPlus,
    #[strum(to_string = "B-")]
    #[serde(rename = "B-")]
    BMinus,
    #[strum(to_string = "B")]
    #[serde(rename = "B")]
    B,
    #[strum(to_string = "B+")]
    #[serde(rename = "B+")]
    BPlus,
    #[strum(to_string = "A-")]
    #[serde(rename = "A-")]
    AMinus,
    #[strum(to_string = "A")]
    #[serde(rename = "A")]
    A,
    #[strum(to_string = "A+")]
    #[serde(rename = "A+")]
    APlus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KrScoreResult {
    pub overall: u8,
    pub grade: Grade,
    pub breakdown: ScoreBreakdown,
    pub feedback: Vec<String>,
    pub improvements: Vec<String>,
}

/// Intermediate signals behind a score, for reports and debugging.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub result: KrScoreResult,
    pub metrics: Vec<&'static str>,
    pub has_units: bool,
    pub has_cadence: bool,
    pub has_source: bool,
    pub baseline: Option<f64>,
    pub target: Option<f64>,
    pub ratio: Option<f64>,
    pub overlap: Option<f64>,
    pub kr_domains: Vec<TopicDomain>,
    pub objective_domains: Vec<TopicDomain>,
}
