use crate::commands::{run_batch, run_emails, run_names, BatchArgs, PairArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use name_match::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Name Match",
    about = "Score person names and emails for identity reconciliation",
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
    /// Score two person names
    Names(PairArgs),
    /// Score two email addresses
    Emails(PairArgs),
    /// Score every customer pair of a name1,name2,email1,email2 CSV file
    Batch(BatchArgs),
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
        Command::Names(args) => run_names(args),
        Command::Emails(args) => run_emails(args),
        Command::Batch(args) => run_batch(args),
    }
}
