use crate::render::{run_dataset_summary, run_score, DatasetSummaryArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use nomoscore::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Nomophobia Score Service",
    about = "Score smartphone addiction severity from survey answers, via CLI or HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single set of survey answers and print the result
    Score(ScoreArgs),
    /// Inspect a historical survey export
    Dataset {
        #[command(subcommand)]
        command: DatasetCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DatasetCommand {
    /// Score every respondent in a CSV export and print the aggregates
    Summary(DatasetSummaryArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Dataset {
            command: DatasetCommand::Summary(args),
        } => run_dataset_summary(args),
    }
}
