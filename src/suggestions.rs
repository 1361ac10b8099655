//! Contextual suggestions for the coaching conversation.
//!
//! The request/response shapes are the contract with the conversational
//! agent. `CatalogSuggester` is a static, catalog-backed provider that leans
//! on the scorer for its context analysis.

use crate::scorer::{KrScoreResult, Scorer};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ConversationPhase {
    Discovery,
    KrDiscovery,
    Refinement,
    Validation,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    Examples,
    AntiPatterns,
    Metrics,
    Templates,
    BestPractices,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayTiming {
    Immediate,
    AfterResponse,
    OnRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integration {
    Inline,
    Sidebar,
    Modal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionContext {
    pub session_id: String,
    pub phase: ConversationPhase,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub team_size: Option<u32>,
    #[serde(default)]
    pub timeframe: Option<String>,
}

impl SuggestionContext {
    pub fn new(session_id: impl Into<String>, phase: ConversationPhase) -> Self {
        Self {
            session_id: session_id.into(),
            phase,
            industry: None,
            function: None,
            team_size: None,
            timeframe: None,
        }
    }

    fn optional_fields_present(&self) -> usize {
        [
            self.industry.is_some(),
            self.function.is_some(),
            self.team_size.is_some(),
            self.timeframe.is_some(),
        ]
        .iter()
        .filter(|&&present| present)
        .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub context: SuggestionContext,
    #[serde(default)]
    pub user_input: String,
    pub request_type: RequestType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ContextAnalysis {
    pub phase: ConversationPhase,
    pub input_length: usize,
    pub kr_score: Option<KrScoreResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SuggestionResponse {
    pub suggestions: Vec<Suggestion>,
    pub confidence: f64,
    pub display_timing: DisplayTiming,
    pub integration: Integration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_analysis: Option<ContextAnalysis>,
}

/// Produces suggestions for one request. Implementations must not fail:
/// missing optional context and empty input degrade to generic output.
pub trait SuggestionProvider {
    fn suggest(&self, request: &SuggestionRequest) -> SuggestionResponse;
}

const MAX_SUGGESTIONS: usize = 3;

type Entry = (&'static str, &'static str);

const EXAMPLES: &[Entry] = &[
    (
        "Customer loyalty",
        "Increase NPS from 32 to 50 by Q3 2024 (quarterly customer survey)",
    ),
    (
        "Product adoption",
        "Grow weekly active users from 12K to 25K by Q4 2024, tracked in product analytics",
    ),
    (
        "Reliability",
        "Reduce P1 incidents from 9 to 3 per quarter throughout 2024",
    ),
    (
        "Revenue",
        "Increase monthly recurring revenue from $80K to $150K by H2 2024",
    ),
];

const ANTI_PATTERNS: &[Entry] = &[
    (
        "Activity, not outcome",
        "'Launch the new onboarding flow' describes a task. Measure what the launch changes.",
    ),
    (
        "Vague quantity",
        "'Significantly improve retention' has no baseline, target or unit.",
    ),
    (
        "Moonshot ratio",
        "Going from $100K to $800K in one quarter is an 8x jump; 1.5x to 3x is the stretch band.",
    ),
    (
        "Open-ended timing",
        "'Eventually' and 'soon' cannot be checked. Name a quarter and year.",
    ),
];

const GENERIC_METRICS: &[Entry] = &[
    ("Net Promoter Score", "Loyalty from a 0-10 'would you recommend' survey"),
    ("Churn rate", "Share of customers lost per period"),
    ("Conversion rate", "Share of visitors completing the target action"),
    ("Uptime", "Percentage of time the service is available"),
];

const INDUSTRY_METRICS: &[(&str, &[Entry])] = &[
    (
        "saas",
        &[
            ("Monthly recurring revenue", "Normalised subscription revenue per month"),
            ("Net revenue retention", "Revenue kept from existing customers including expansion"),
        ],
    ),
    (
        "ecommerce",
        &[
            ("Average order value", "Revenue divided by number of orders"),
            ("Cart abandonment rate", "Share of carts not reaching checkout"),
        ],
    ),
    (
        "healthcare",
        &[
            ("Patient wait time", "Minutes from arrival to consultation"),
            ("Readmission rate", "Share of patients readmitted within 30 days"),
        ],
    ),
];

const TEMPLATES: &[Entry] = &[
    (
        "Baseline to target",
        "[Verb] [Metric] from [Baseline] to [Target] by [Deadline]",
    ),
    (
        "Maintain a level",
        "Keep [Metric] at or above [Threshold] [cadence] throughout [Period]",
    ),
    (
        "Reduction",
        "Reduce [Metric] from [Baseline] to [Target] by [Deadline] (measured via [Source])",
    ),
];

const BEST_PRACTICES: &[Entry] = &[
    (
        "Outcomes over outputs",
        "A key result should measure the change the work causes, not the work itself.",
    ),
    (
        "Three to five per objective",
        "Fewer key results keep the objective focused and reviewable.",
    ),
    (
        "Name the data source",
        "Say where the number comes from so progress checks are not disputed.",
    ),
    (
        "Stretch, do not break",
        "Aim for 1.5x to 3x of the baseline; 70% attainment is a good result.",
    ),
];

/// Static catalog provider.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogSuggester {
    scorer: Scorer,
}

impl CatalogSuggester {
    pub fn new() -> Self {
        Self {
            scorer: Scorer::new(),
        }
    }

    fn catalog_entries(&self, request: &SuggestionRequest) -> Vec<Entry> {
        match request.request_type {
            RequestType::Examples => EXAMPLES.to_vec(),
            RequestType::AntiPatterns => ANTI_PATTERNS.to_vec(),
            RequestType::Templates => TEMPLATES.to_vec(),
            RequestType::BestPractices => BEST_PRACTICES.to_vec(),
            RequestType::Metrics => {
                let industry = request
                    .context
                    .industry
                    .as_deref()
                    .map(|i| i.trim().to_lowercase())
                    .unwrap_or_default();
                let mut entries: Vec<Entry> = INDUSTRY_METRICS
                    .iter()
                    .filter(|(name, _)| !industry.is_empty() && industry.contains(name))
                    .flat_map(|(_, metrics)| metrics.iter().copied())
                    .collect();
                entries.extend_from_slice(GENERIC_METRICS);
                entries
            }
        }
    }

    fn confidence(request: &SuggestionRequest) -> f64 {
        let mut confidence = 0.5 + 0.1 * request.context.optional_fields_present() as f64;
        if !request.user_input.trim().is_empty() {
            confidence += 0.1;
        }
        confidence.clamp(0.0, 1.0)
    }

    fn display_timing(phase: ConversationPhase) -> DisplayTiming {
        match phase {
            ConversationPhase::Discovery | ConversationPhase::Completed => DisplayTiming::OnRequest,
            ConversationPhase::KrDiscovery | ConversationPhase::Validation => {
                DisplayTiming::Immediate
            }
            ConversationPhase::Refinement => DisplayTiming::AfterResponse,
        }
    }

    fn integration(request_type: RequestType) -> Integration {
        match request_type {
            RequestType::Examples | RequestType::BestPractices => Integration::Sidebar,
            RequestType::AntiPatterns | RequestType::Metrics => Integration::Inline,
            RequestType::Templates => Integration::Modal,
        }
    }

    fn analyze_context(&self, request: &SuggestionRequest) -> Option<ContextAnalysis> {
        let input = request.user_input.trim();
        if input.is_empty() {
            return None;
        }
        let phase = request.context.phase;
        let kr_score = match phase {
            ConversationPhase::KrDiscovery
            | ConversationPhase::Refinement
            | ConversationPhase::Validation => Some(self.scorer.score(input, None)),
            ConversationPhase::Discovery | ConversationPhase::Completed => None,
        };
        Some(ContextAnalysis {
            phase,
            input_length: input.chars().count(),
            kr_score,
        })
    }
}

impl SuggestionProvider for CatalogSuggester {
    fn suggest(&self, request: &SuggestionRequest) -> SuggestionResponse {
        let suggestions = self
            .catalog_entries(request)
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(title, content)| Suggestion {
                title: title.to_string(),
                content: content.to_string(),
            })
            .collect();

        SuggestionResponse {
            suggestions,
            confidence: Self::confidence(request),
            display_timing: Self::display_timing(request.context.phase),
            integration: Self::integration(request.request_type),
            context_analysis: self.analyze_context(request),
        }
    }
}
