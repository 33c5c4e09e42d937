// ABOUTME: Run settings resolved from command-line flags and environment variables.
// ABOUTME: Validates required fields and flag combinations before any network call.

mod source;

pub use source::{Origin, Resolved, Source, lookup};

use crate::github::DEFAULT_API_ROOT;
use crate::types::{
    OwnerName, OwnerNameError, RepoName, RepoNameError, RepoTarget, RunId, Token, TokenError,
};
use thiserror::Error;

pub const OWNER_ENV: &str = "GITHUB_REPOSITORY_OWNER";
pub const REPO_ENV: &str = "GITHUB_REPOSITORY";
pub const TOKEN_ENVS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];
pub const WAIT_ENV: &str = "WAIT_FOR_RUNNERS";
pub const RUN_ID_ENV: &str = "GITHUB_RUN_ID";
pub const API_URL_ENV: &str = "GITHUB_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("owner is required (use --owner or set GITHUB_REPOSITORY_OWNER)")]
    MissingOwner,

    #[error("repo is required (use --repo or set GITHUB_REPOSITORY)")]
    MissingRepo,

    #[error("token is required (use --token or set GH_TOKEN or GITHUB_TOKEN)")]
    MissingToken,

    #[error("--current-runner-id requires --wait-for-runners (-w) to be enabled")]
    RunnerIdWithoutWait,

    #[error("invalid owner: {0}")]
    InvalidOwner(#[from] OwnerNameError),

    #[error("invalid repo: {0}")]
    InvalidRepo(#[from] RepoNameError),

    #[error("invalid token: {0}")]
    InvalidToken(#[from] TokenError),

    #[error("invalid boolean in {var}: {value:?} (expected true/false)")]
    InvalidBool { var: &'static str, value: String },

    #[error("API URL must start with http:// or https://: {0}")]
    InvalidApiUrl(String),
}

/// Values given explicitly on the command line. They override the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub token: Option<String>,
    pub wait_for_runners: bool,
    pub current_runner_id: Option<String>,
    pub api_url: Option<String>,
    pub dry_run: bool,
}

/// Validated, immutable settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub target: RepoTarget,
    pub token: Token,
    pub wait_for_runners: bool,
    /// Run to leave out of the active set (usually the one running this tool).
    pub exclude_run: Option<RunId>,
    pub api_root: String,
    pub dry_run: bool,
}

impl Settings {
    /// Resolve against the process environment.
    pub fn resolve(overrides: &Overrides) -> Result<Self, ConfigError> {
        Self::resolve_with(overrides, |name| std::env::var(name).ok())
    }

    /// Resolve against an arbitrary environment lookup.
    pub fn resolve_with<E>(overrides: &Overrides, env: E) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let owner = lookup(
            &[
                Source::Flag("--owner", overrides.owner.as_deref()),
                Source::Env(OWNER_ENV),
            ],
            &env,
        )
        .ok_or(ConfigError::MissingOwner)?;
        tracing::debug!("owner from {}", owner.origin);

        let repo = lookup(
            &[
                Source::Flag("--repo", overrides.repo.as_deref()),
                Source::Env(REPO_ENV),
            ],
            &env,
        )
        .ok_or(ConfigError::MissingRepo)?;
        tracing::debug!("repo from {}", repo.origin);

        let token = lookup(
            &[
                Source::Flag("--token", overrides.token.as_deref()),
                Source::Env(TOKEN_ENVS[0]),
                Source::Env(TOKEN_ENVS[1]),
            ],
            &env,
        )
        .ok_or(ConfigError::MissingToken)?;
        tracing::debug!("token from {}", token.origin);

        let wait_for_runners = overrides.wait_for_runners
            || match lookup(&[Source::Env(WAIT_ENV)], &env) {
                Some(resolved) => parse_bool(WAIT_ENV, &resolved.value)?,
                None => false,
            };

        let run_id = lookup(
            &[
                Source::Flag("--current-runner-id", overrides.current_runner_id.as_deref()),
                Source::Env(RUN_ID_ENV),
            ],
            &env,
        );
        let exclude_run = match run_id {
            None => None,
            Some(resolved) if wait_for_runners => Some(RunId::new(resolved.value.trim())),
            Some(Resolved {
                origin: Origin::Flag(_),
                ..
            }) => return Err(ConfigError::RunnerIdWithoutWait),
            Some(resolved) => {
                // GITHUB_RUN_ID is set in every Actions job; only the flag is a mistake.
                tracing::debug!(
                    "ignoring run id from {} because waiting is disabled",
                    resolved.origin
                );
                None
            }
        };

        let api_root = lookup(
            &[
                Source::Flag("--api-url", overrides.api_url.as_deref()),
                Source::Env(API_URL_ENV),
                Source::Default(DEFAULT_API_ROOT),
            ],
            &env,
        )
        .map(|resolved| resolved.value)
        .unwrap_or_else(|| DEFAULT_API_ROOT.to_string());
        let api_root = api_root.trim().trim_end_matches('/').to_string();
        if !api_root.starts_with("https://") && !api_root.starts_with("http://") {
            return Err(ConfigError::InvalidApiUrl(api_root));
        }

        Ok(Self {
            target: RepoTarget::new(OwnerName::new(&owner.value)?, RepoName::parse(&repo.value)?),
            token: Token::new(&token.value)?,
            wait_for_runners,
            exclude_run,
            api_root,
            dry_run: overrides.dry_run,
        })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
