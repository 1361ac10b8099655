use crate::reports;
use clap::Args;
use krscore::config::OutputParams;
use krscore::error::{KrError, KrResult};
use krscore::scorer::{KrScoreResult, Scorer};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// CSV file with `key_result` and `objective` columns.
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputParams,
}

#[derive(Debug, Deserialize)]
pub struct BatchRow {
    pub key_result: String,
    #[serde(default)]
    pub objective: Option<String>,
}

#[derive(Debug, Serialize)]
struct BatchOutput<'a> {
    key_result: &'a str,
    #[serde(flatten)]
    result: &'a KrScoreResult,
}

pub fn load_rows(path: &Path) -> KrResult<Vec<BatchRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    if rows.is_empty() {
        return Err(KrError::Validation(format!(
            "{} contains no key results",
            path.display()
        )));
    }
    Ok(rows)
}

pub fn run(args: BatchArgs, scorer: &Scorer) -> KrResult<()> {
    info!("📂 Loading key results from: {}", args.input.display());
    let rows = load_rows(&args.input)?;
    info!("🔎 Scoring {} key results", rows.len());

    // Order of `collect` follows the input, not completion.
    let results: Vec<(String, KrScoreResult)> = rows
        .par_iter()
        .map(|row| {
            let objective = row.objective.as_deref().filter(|o| !o.trim().is_empty());
            (row.key_result.clone(), scorer.score(&row.key_result, objective))
        })
        .collect();

    if args.output.json {
        let out: Vec<BatchOutput> = results
            .iter()
            .map(|(kr, r)| BatchOutput {
                key_result: kr,
                result: r,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        reports::print_batch_report(&results);
    }
    Ok(())
}
