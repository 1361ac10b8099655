use crate::reports;
use clap::{ArgMatches, Args};
use krscore::config::ReportParams;
use krscore::error::KrResult;
use krscore::report;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub params: ReportParams,

    /// JSON file with report settings; explicit flags override it.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Returns whether the aggregate met the pass threshold.
pub fn run(args: ReportArgs, matches: &ArgMatches) -> KrResult<bool> {
    let params = match &args.config {
        Some(path) => {
            let mut file_params = ReportParams::load_from_file(path)?;
            file_params.merge_from_cli(&args.params, matches);
            file_params
        }
        None => args.params.clone(),
    };

    let summary = report::aggregate(&params)?;
    reports::print_suite_report(&summary);
    report::write_summary(&summary, &params.output)?;
    Ok(summary.passed)
}
