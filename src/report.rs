//! Test-report aggregation.
//!
//! Rolls per-suite JSON result files up into one weighted pass percentage
//! and letter grade, and writes a JSON summary.

use crate::config::ReportParams;
use crate::error::{KrError, KrResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuiteKind {
    /// Records carry a boolean `passed`.
    PassFail,
    /// Records carry a `details` object of quality metrics.
    Endurance,
}

#[derive(Debug, Clone, Copy)]
pub struct SuiteSpec {
    pub name: &'static str,
    pub weight: f64,
    pub kind: SuiteKind,
}

/// Suites in report order. Weights sum to 1.0.
pub const SUITES: [SuiteSpec; 6] = [
    SuiteSpec {
        name: "unit_tests",
        weight: 0.15,
        kind: SuiteKind::PassFail,
    },
    SuiteSpec {
        name: "integration_tests",
        weight: 0.25,
        kind: SuiteKind::PassFail,
    },
    SuiteSpec {
        name: "edge_cases",
        weight: 0.10,
        kind: SuiteKind::PassFail,
    },
    SuiteSpec {
        name: "conversation_flow",
        weight: 0.20,
        kind: SuiteKind::PassFail,
    },
    SuiteSpec {
        name: "endurance",
        weight: 0.20,
        kind: SuiteKind::Endurance,
    },
    SuiteSpec {
        name: "performance",
        weight: 0.10,
        kind: SuiteKind::PassFail,
    },
];

/// Highest first; anything below the last row is an F.
pub const REPORT_GRADE_THRESHOLDS: [(f64, &str); 6] = [
    (90.0, "A"),
    (85.0, "B+"),
    (80.0, "B"),
    (75.0, "C+"),
    (70.0, "C"),
    (65.0, "D"),
];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PassFailRecord {
    #[serde(default)]
    pub passed: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnduranceDetails {
    pub context_retention: f64,
    pub average_quality: f64,
    pub quality_degradation: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnduranceRecord {
    #[serde(default)]
    pub details: EnduranceDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteResult {
    pub name: String,
    pub kind: SuiteKind,
    pub weight: f64,
    pub records: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub suites: Vec<SuiteResult>,
    pub skipped: Vec<String>,
    pub overall: f64,
    pub grade: String,
    pub passed: bool,
    pub pass_threshold: f64,
}

pub fn pass_fail_percentage(records: &[PassFailRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let passed = records.iter().filter(|r| r.passed).count();
    100.0 * passed as f64 / records.len() as f64
}

/// Mean of retention, quality and (1 - degradation), each clamped to [0, 1].
pub fn endurance_percentage(records: &[EnduranceRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: f64 = records
        .iter()
        .map(|r| {
            let d = &r.details;
            let retention = d.context_retention.clamp(0.0, 1.0);
            let quality = d.average_quality.clamp(0.0, 1.0);
            let stability = (1.0 - d.quality_degradation).clamp(0.0, 1.0);
            (retention + quality + stability) / 3.0
        })
        .sum();
    100.0 * total / records.len() as f64
}

pub fn report_grade(percentage: f64) -> &'static str {
    REPORT_GRADE_THRESHOLDS
        .iter()
        .find(|&&(min, _)| percentage >= min)
        .map(|&(_, grade)| grade)
        .unwrap_or("F")
}

/// Reads `<dir>/<suite>.json`. `Ok(None)` when the file does not exist.
pub fn load_suite(dir: &Path, spec: &SuiteSpec) -> KrResult<Option<SuiteResult>> {
    let path = dir.join(format!("{}.json", spec.name));
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let (records, percentage) = match spec.kind {
        SuiteKind::PassFail => {
            let records: Vec<PassFailRecord> = serde_json::from_str(&content)?;
            (records.len(), pass_fail_percentage(&records))
        }
        SuiteKind::Endurance => {
            let records: Vec<EnduranceRecord> = serde_json::from_str(&content)?;
            (records.len(), endurance_percentage(&records))
        }
    };

    info!(
        "📊 Suite '{}': {} records, {:.1}%",
        spec.name, records, percentage
    );

    Ok(Some(SuiteResult {
        name: spec.name.to_string(),
        kind: spec.kind,
        weight: spec.weight,
        records,
        percentage,
    }))
}

/// Weighted roll-up over the suites that have result files. Weights of the
/// present suites are renormalised so a missing suite neither helps nor hurts.
pub fn aggregate(params: &ReportParams) -> KrResult<ReportSummary> {
    params.validate()?;

    let mut suites = Vec::new();
    let mut skipped = Vec::new();
    for spec in &SUITES {
        match load_suite(&params.results_dir, spec)? {
            Some(result) => suites.push(result),
            None => {
                warn!(
                    "⚠️  No results for suite '{}' in {}",
                    spec.name,
                    params.results_dir.display()
                );
                skipped.push(spec.name.to_string());
            }
        }
    }

    if suites.is_empty() {
        return Err(KrError::NoResults(format!(
            "no suite result files in {}",
            params.results_dir.display()
        )));
    }

    let weight_total: f64 = suites.iter().map(|s| s.weight).sum();
    let overall = suites.iter().map(|s| s.weight * s.percentage).sum::<f64>() / weight_total;

    Ok(ReportSummary {
        suites,
        skipped,
        overall,
        grade: report_grade(overall).to_string(),
        passed: overall >= params.pass_threshold,
        pass_threshold: params.pass_threshold,
    })
}

pub fn write_summary(summary: &ReportSummary, path: &Path) -> KrResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(summary)?)?;
    info!("💾 Wrote report summary to {}", path.display());
    Ok(())
}
