use super::consts::{OVERLAP_ALIGNED_MIN, OVERLAP_PARTIAL_MIN, OVERLAP_RELATED_MIN};
use super::patterns::{DOMAIN_PATTERNS, STOP_WORDS};
use super::types::RelevanceTier;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TopicDomain {
    Revenue,
    Users,
    Engagement,
    Quality,
    Performance,
    Growth,
}

/// Lowercased whitespace tokens longer than three characters, minus stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|t| t.chars().count() > 3 && !STOP_WORDS.contains(&t.as_str()))
        .collect()
}

/// Fraction of key-result tokens related by substring, in either direction,
/// to at least one objective token.
pub fn overlap_ratio(kr_tokens: &[String], objective_tokens: &[String]) -> f64 {
    let overlap = kr_tokens
        .iter()
        .filter(|kr| {
            objective_tokens
                .iter()
                .any(|obj| kr.contains(obj.as_str()) || obj.contains(kr.as_str()))
        })
        .count();
    overlap as f64 / kr_tokens.len().max(1) as f64
}

pub fn domains(text: &str) -> Vec<TopicDomain> {
    DOMAIN_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|&(domain, _)| domain)
        .collect()
}

pub fn shares_domain(key_result: &str, objective: &str) -> bool {
    any_shared(&domains(key_result), &domains(objective))
}

pub fn any_shared(kr_domains: &[TopicDomain], objective_domains: &[TopicDomain]) -> bool {
    objective_domains.iter().any(|d| kr_domains.contains(d))
}

/// A blank objective counts as absent.
pub fn present_objective(objective: Option<&str>) -> Option<&str> {
    objective.filter(|o| !o.trim().is_empty())
}

/// A blank or absent objective yields the neutral `Related` tier.
pub fn analyze(key_result: &str, objective: Option<&str>) -> RelevanceTier {
    let Some(objective) = present_objective(objective) else {
        return RelevanceTier::Related;
    };
    let ratio = overlap_ratio(&tokenize(key_result), &tokenize(objective));
    tier_for(ratio, shares_domain(key_result, objective))
}

pub fn tier_for(ratio: f64, shared_domain: bool) -> RelevanceTier {
    if ratio >= OVERLAP_ALIGNED_MIN || shared_domain {
        RelevanceTier::Aligned
    } else if ratio >= OVERLAP_RELATED_MIN {
        RelevanceTier::Related
    } else if ratio >= OVERLAP_PARTIAL_MIN {
        RelevanceTier::Partial
    } else if ratio > 0.0 {
        RelevanceTier::Weak
    } else {
        RelevanceTier::Unrelated
    }
}
