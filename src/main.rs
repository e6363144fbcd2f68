use clap::Parser;
use std::process::ExitCode;

use gnews_mcp_gateway::{cli, infra};

#[tokio::main]
async fn main() -> ExitCode {
    infra::logging::init();

    let parsed = cli::Cli::parse();
    match parsed.command {
        Some(command) => cli::run_commands(command).await,
        None => match infra::boot::run_server().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "fatal");
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}
