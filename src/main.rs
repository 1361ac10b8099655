use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use krscore::scorer::Scorer;
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Grade a single key result.
    Score(cmd::score::ScoreArgs),
    /// Grade every row of a CSV file.
    Batch(cmd::batch::BatchArgs),
    /// Aggregate suite result files into a weighted pass rate.
    Report(cmd::report::ReportArgs),
}

fn main() {
    // Raw matches are kept so the report command can tell typed flags from defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let scorer = Scorer::new();

    let outcome = match cli.command {
        Commands::Score(args) => cmd::score::run(args, &scorer),
        Commands::Batch(args) => cmd::batch::run(args, &scorer),
        Commands::Report(args) => {
            let Some(sub_matches) = matches.subcommand_matches("report") else {
                error!("❌ Missing report arguments");
                process::exit(1);
            };
            match cmd::report::run(args, sub_matches) {
                Ok(true) => Ok(()),
                Ok(false) => {
                    error!("❌ Overall pass rate is below the threshold");
                    process::exit(1);
                }
                Err(e) => Err(e),
            }
        }
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
