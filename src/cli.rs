// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Every value is optional here; environment fallbacks are applied in config.

use clap::Parser;
use ghcr_cleanup::config::Overrides;
use ghcr_cleanup::output::OutputMode;

#[derive(Parser)]
#[command(name = "ghcr-cleanup")]
#[command(about = "Delete untagged container image versions from GitHub Container Registry")]
#[command(version)]
pub struct Cli {
    /// Repository owner (falls back to GITHUB_REPOSITORY_OWNER)
    #[arg(long)]
    pub owner: Option<String>,

    /// Repository name or owner/repo (falls back to GITHUB_REPOSITORY)
    #[arg(long)]
    pub repo: Option<String>,

    /// Token with packages:write (falls back to GH_TOKEN, then GITHUB_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Wait for running workflows to complete before cleanup
    #[arg(short = 'w', long)]
    pub wait_for_runners: bool,

    /// Current workflow run ID to exclude from the wait check (falls back to GITHUB_RUN_ID)
    #[arg(long)]
    pub current_runner_id: Option<String>,

    /// GitHub API root (falls back to GITHUB_API_URL, then https://api.github.com)
    #[arg(long)]
    pub api_url: Option<String>,

    /// List untagged versions without deleting them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the final result
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Print JSON lines instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            token: self.token.clone(),
            wait_for_runners: self.wait_for_runners,
            current_runner_id: self.current_runner_id.clone(),
            api_url: self.api_url.clone(),
            dry_run: self.dry_run,
        }
    }
}
