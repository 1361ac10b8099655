//! Compiled pattern tables shared by the analyzers.
//!
//! Every pattern is case-insensitive and compiled once on first use.

use super::relevance::TopicDomain;
use regex::Regex;
use std::sync::LazyLock;

const CURRENCY: &str = r"[$€£¥]";
const NUMBER: &str = r"\d[\d,]*(?:\.\d+)?";
const MONTHS: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

fn compile(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){}", pattern)).expect("static pattern must compile")
}

// --- Measurability ---

pub static METRIC_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        ("percentage", compile(r"\d+(?:\.\d+)?\s*%")),
        ("currency", compile(&format!(r"{}\s*{}\s*[kmb]?\b", CURRENCY, NUMBER))),
        ("magnitude", compile(r"\b\d+(?:\.\d+)?[kmb]\b")),
        ("hash_count", compile(r"#\s?\d+")),
        (
            "counted_noun",
            compile(&format!(
                r"\b{}\s*(?:users?|customers?|clients?|leads?|sales|deals?|points?|tickets?|downloads?|visits?|visitors?|signups?|subscribers?|members?|accounts?|orders?|transactions?|features?|releases?|bugs?|incidents?|employees?|hires?|articles?|posts?|calls?|meetings?|partners?|units?)\b",
                NUMBER
            )),
        ),
        ("ratio", compile(r"\b\d+:\d+\b")),
        (
            "duration",
            compile(r"\b\d+(?:\.\d+)?\s*(?:ms|milliseconds?|secs?|seconds?|mins?|minutes?|hrs?|hours?|days?|weeks?|months?|years?)\b"),
        ),
        (
            "standard_metric",
            compile(r"\b(?:nps|csat|ces|uptime|availability|conversions?|retention|churn)\b"),
        ),
    ]
});

pub static VAGUE_QUANTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b(?:better|more|improved|significant(?:ly)?|major|several|many|various|substantial(?:ly)?|considerabl[ey]|greater|enhanced)\b")
});

pub static BASELINE_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\b(?:from|currently|current|baseline|starting)\b(?:\s+(?:at|of|is|a|an|the|level|value|point|baseline))*\s*[:=]?\s*{}?\d",
        CURRENCY
    ))
});

pub static TARGET_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\b(?:to|target|goal|reach|achieve)\b(?:\s+(?:at|of|is|a|an|the|level|value|least))*\s*[:=]?\s*{}?\d",
        CURRENCY
    ))
});

pub static FROM_TO: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\bfrom\s+{c}?\s*{n}(?:[kmb]\b|\s*%)?\s+to\s+{c}?\s*\d",
        c = CURRENCY,
        n = NUMBER
    ))
});

pub static PERCENTAGE: LazyLock<Regex> = LazyLock::new(|| compile(r"\d+(?:\.\d+)?\s*%"));

// --- Specificity ---

pub static UNIT_VOCABULARY: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b(?:users?|customers?|clients?|leads?|sales|revenue|dollars?|usd|eur|gbp|percent(?:age)?|points?|scores?|rates?|hours?|days?|weeks?|months?|minutes?|seconds?|ms|tickets?|downloads?|visits?|visitors?|sessions?|signups?|subscribers?|members?|accounts?|orders?|transactions?|deals?|units?|items?|requests?|errors?|incidents?)\b")
});

pub static UNIT_SYMBOL: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(r"{}\s*\d|\d\s*(?:%|[kmbx]\b)", CURRENCY))
});

pub static SPEC_CADENCE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b(?:monthly|quarterly|weekly|bi-?weekly|daily|annual(?:ly)?|yearly)\b|\bper\s+(?:day|week|month|quarter|year|sprint)\b")
});

pub static MEASUREMENT_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\([^)]*\b(?:survey|analytics|dashboard|report|system|tool|platform)s?\b[^)]*\)|\b(?:measured|tracked)\s+(?:by|in)\b|\b(?:via|using|through)\b")
});

// --- Achievability ---

/// Captures: 1 baseline number, 2 baseline suffix, 3 target number, 4 target suffix.
///
/// K/M/B must touch the number so the "b" of a following "by" is never read
/// as billions. A percent sign may be spaced off.
pub static BASELINE_TARGET_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\bfrom\s+{c}?\s*({n})([kmb]\b|\s*%)?\s+to\s+{c}?\s*({n})([kmb]\b|\s*%)?",
        c = CURRENCY,
        n = NUMBER
    ))
});

pub static REDUCTION_LANGUAGE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(?:reduc|decreas|lower|minimi[sz])\w*"));

// --- Relevance ---

pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "that", "this", "will", "into", "have", "their", "there",
    "they", "them", "than", "then", "what", "when", "where", "which", "while", "your", "been",
    "were", "also", "each", "such", "over", "very",
];

pub static DOMAIN_PATTERNS: LazyLock<Vec<(TopicDomain, Regex)>> = LazyLock::new(|| {
    vec![
        (
            TopicDomain::Revenue,
            compile(&format!(
                r"\b(?:revenue|sales|income|profits?|margins?|arr|mrr|bookings|pricing|monetiz\w*)\b|{}",
                CURRENCY
            )),
        ),
        (
            TopicDomain::Users,
            compile(r"\b(?:users?|customers?|clients?|sign-?ups?|subscribers?|accounts?|members?|audience)\b"),
        ),
        (
            TopicDomain::Engagement,
            compile(r"\b(?:engag\w*|active|sessions?|retention|retain\w*|churn|dau|mau|usage|adoption)\b"),
        ),
        (
            TopicDomain::Quality,
            compile(r"\b(?:quality|satisf\w*|nps|csat|bugs?|defects?|errors?|reviews?|ratings?)\b"),
        ),
        (
            TopicDomain::Performance,
            compile(r"\b(?:performance|latency|speed|faster|uptime|availability|response\s+times?|load\s+times?|throughput)\b"),
        ),
        (
            TopicDomain::Growth,
            compile(r"\b(?:growth|grow\w*|expan\w*|scale|scaling|market\s+share|acquisition|acquire)\b"),
        ),
    ]
});

// --- Time-Bound ---

pub static DEADLINE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\b(?:by|before|until)\s+(?:the\s+)?(?:end\s+of\s+)?(?:q[1-4]|h[12]|{}\.?(?:\s+\d{{1,2}}(?:st|nd|rd|th)?)?)\s*,?\s*(?:fy\s?)?\d{{4}}\b",
        MONTHS
    ))
});

pub static TIMEFRAME_CADENCE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b(?:monthly|quarterly|weekly|daily|annual(?:ly)?)\b.*?\b(?:throughout|during|in)\s+(?:the\s+)?(?:(?:this|next|current)\s+)?(?:q[1-4]|h[12]|quarter|half|year|\d{4})\b")
});

pub static QUARTER_MENTION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\bq[1-4]\s*,?\s*(?:fy\s?)?\d{4}\b"));

pub static VAGUE_TIMEFRAME: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b(?:soon|eventually|later|someday|sometime|asap|shortly|next\s+(?:quarter|year|month|half)|in\s+the\s+future|over\s+time|at\s+some\s+point|in\s+the\s+coming\s+(?:weeks|months))\b")
});
