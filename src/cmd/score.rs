use crate::reports;
use clap::Args;
use krscore::config::OutputParams;
use krscore::error::KrResult;
use krscore::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// The key result statement to grade.
    pub key_result: String,

    /// Parent objective, used for the relevance dimension.
    #[arg(short, long)]
    pub objective: Option<String>,

    #[command(flatten)]
    pub output: OutputParams,
}

pub fn run(args: ScoreArgs, scorer: &Scorer) -> KrResult<()> {
    let details = scorer.score_details(&args.key_result, args.objective.as_deref());

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&details.result)?);
    } else {
        reports::print_score_card(&args.key_result, &details, args.output.show_feedback);
    }
    Ok(())
}
