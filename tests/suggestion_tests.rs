use krscore::suggestions::{
    CatalogSuggester, ConversationPhase, DisplayTiming, Integration, RequestType,
    SuggestionContext, SuggestionProvider, SuggestionRequest, SuggestionResponse,
};
use rstest::rstest;
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;

fn request(phase: ConversationPhase, request_type: RequestType, input: &str) -> SuggestionRequest {
    SuggestionRequest {
        context: SuggestionContext::new("session-1", phase),
        user_input: input.to_string(),
        request_type,
    }
}

#[test]
fn test_bare_request_never_fails() {
    let suggester = CatalogSuggester::new();
    for phase in ConversationPhase::iter() {
        for request_type in RequestType::iter() {
            let resp = suggester.suggest(&request(phase, request_type, ""));
            assert!(!resp.suggestions.is_empty(), "{} / {}", phase, request_type);
            assert!(resp.suggestions.len() <= 3);
            assert!((0.0..=1.0).contains(&resp.confidence));
            assert!(resp.context_analysis.is_none());
        }
    }
}

#[test]
fn test_confidence_grows_with_context() {
    let suggester = CatalogSuggester::new();
    let bare = suggester.suggest(&request(
        ConversationPhase::Discovery,
        RequestType::Examples,
        "",
    ));
    assert!((bare.confidence - 0.5).abs() < 1e-9);

    let mut full = request(
        ConversationPhase::Discovery,
        RequestType::Examples,
        "Grow revenue",
    );
    full.context.industry = Some("SaaS".into());
    full.context.function = Some("Sales".into());
    full.context.team_size = Some(12);
    full.context.timeframe = Some("Q3 2024".into());
    let resp = suggester.suggest(&full);
    assert!((resp.confidence - 1.0).abs() < 1e-9);
}

#[test]
fn test_industry_metrics_come_first() {
    let mut req = request(ConversationPhase::KrDiscovery, RequestType::Metrics, "");
    req.context.industry = Some("B2B SaaS".into());
    let resp = CatalogSuggester::new().suggest(&req);
    assert_eq!(resp.suggestions[0].title, "Monthly recurring revenue");

    let generic = CatalogSuggester::new().suggest(&request(
        ConversationPhase::KrDiscovery,
        RequestType::Metrics,
        "",
    ));
    assert_eq!(generic.suggestions[0].title, "Net Promoter Score");
}

#[rstest]
#[case(ConversationPhase::Discovery, DisplayTiming::OnRequest)]
#[case(ConversationPhase::KrDiscovery, DisplayTiming::Immediate)]
#[case(ConversationPhase::Refinement, DisplayTiming::AfterResponse)]
#[case(ConversationPhase::Validation, DisplayTiming::Immediate)]
#[case(ConversationPhase::Completed, DisplayTiming::OnRequest)]
fn test_display_timing_by_phase(#[case] phase: ConversationPhase, #[case] expected: DisplayTiming) {
    let resp = CatalogSuggester::new().suggest(&request(phase, RequestType::Examples, ""));
    assert_eq!(resp.display_timing, expected);
}

#[rstest]
#[case(RequestType::Examples, Integration::Sidebar)]
#[case(RequestType::AntiPatterns, Integration::Inline)]
#[case(RequestType::Metrics, Integration::Inline)]
#[case(RequestType::Templates, Integration::Modal)]
#[case(RequestType::BestPractices, Integration::Sidebar)]
fn test_integration_by_type(#[case] request_type: RequestType, #[case] expected: Integration) {
    let resp = CatalogSuggester::new().suggest(&request(
        ConversationPhase::Refinement,
        request_type,
        "",
    ));
    assert_eq!(resp.integration, expected);
}

#[test]
fn test_refinement_embeds_kr_score() {
    let resp = CatalogSuggester::new().suggest(&request(
        ConversationPhase::Refinement,
        RequestType::AntiPatterns,
        "Improve team morale",
    ));
    let analysis = resp.context_analysis.expect("analysis for non-empty input");
    assert_eq!(analysis.phase, ConversationPhase::Refinement);
    assert_eq!(analysis.input_length, "Improve team morale".len());
    assert_eq!(analysis.kr_score.map(|s| s.overall), Some(26));
}

#[test]
fn test_discovery_skips_kr_score() {
    let resp = CatalogSuggester::new().suggest(&request(
        ConversationPhase::Discovery,
        RequestType::Examples,
        "We want happier customers",
    ));
    let analysis = resp.context_analysis.unwrap();
    assert!(analysis.kr_score.is_none());
}

#[test]
fn test_wire_format() {
    let json = r#"{
        "context": {"sessionId": "abc", "phase": "kr_discovery"},
        "userInput": "",
        "requestType": "best_practices"
    }"#;
    let req: SuggestionRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.context.phase, ConversationPhase::KrDiscovery);
    assert_eq!(req.context.industry, None);
    assert_eq!(req.request_type, RequestType::BestPractices);

    let resp = CatalogSuggester::new().suggest(&req);
    let out = serde_json::to_value(&resp).unwrap();
    assert_eq!(out["display_timing"], "immediate");
    assert_eq!(out["integration"], "sidebar");
    assert!(out.get("context_analysis").is_none());

    let back: SuggestionResponse = serde_json::from_value(out).unwrap();
    assert_eq!(back.suggestions, resp.suggestions);
}

#[test]
fn test_single_request_is_fast() {
    let suggester = CatalogSuggester::new();
    let req = request(
        ConversationPhase::Validation,
        RequestType::Metrics,
        "Increase NPS score from 40 to 65 by Q2 2024",
    );
    let start = Instant::now();
    let _ = suggester.suggest(&req);
    assert!(start.elapsed() < Duration::from_secs(1));
}
