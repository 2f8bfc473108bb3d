use crate::commands::{run_generate, run_preview, GenerateArgs, PreviewArgs};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::telemetry;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "produce-fake-data",
    about = "Generate synthetic job applications for the application tracker",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write fake applications to a CSV file unless it already exists (default command)
    Generate(GenerateArgs),
    /// Print fake applications as CSV to stdout without touching any file
    Preview(PreviewArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Generate(GenerateArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Generate(args) => run_generate(config, args),
        Command::Preview(args) => run_preview(config, args),
    }
}
