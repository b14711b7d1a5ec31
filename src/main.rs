//! Staffdesk CLI

#![expect(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "command-line front-end reports to the terminal"
)]

use std::process::ExitCode;

use staffdesk::observability;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::load();

    if let Err(error) = observability::init_logging(&cli.config.logging) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
