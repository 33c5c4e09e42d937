// ABOUTME: Entry point for the ghcr-cleanup CLI application.
// ABOUTME: Parses arguments, resolves settings, and runs the cleanup command.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use ghcr_cleanup::config::Settings;
use ghcr_cleanup::error::Result;
use ghcr_cleanup::output::Output;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise the verbose flag picks the level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let output = Output::new(cli.output_mode());
    let error_output = Output::new(cli.output_mode());

    if let Err(e) = run(&cli, output).await {
        error_output.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, output: Output) -> Result<()> {
    let settings = Settings::resolve(&cli.overrides())?;
    tracing::debug!(?settings, "resolved settings");
    commands::run_cleanup(settings, output).await
}
