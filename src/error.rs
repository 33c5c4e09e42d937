// ABOUTME: Application-wide error types for ghcr-cleanup.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::config::ConfigError;
use crate::github::ApiError;
use thiserror::Error;

/// Everything that can stop a run. Both kinds exit with status 1.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("cleanup failed: {0}")]
    Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, Error>;
