pub mod applications;
mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod telemetry;

use error::AppError;

/// Parses the command line and runs the selected command.
pub fn run() -> Result<(), AppError> {
    cli::run()
}
