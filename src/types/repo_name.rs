// ABOUTME: Repository name as used in container package paths.
// ABOUTME: Accepts "owner/repo" (as CI exports it) and keeps only the last segment.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoNameError {
    #[error("repository name cannot be empty")]
    Empty,

    #[error("invalid character in repository name: '{0}'")]
    InvalidChar(char),
}

/// The repository segment of a package coordinate, e.g. `widgets` for
/// `ghcr.io/acme/widgets`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoName(String);

impl RepoName {
    /// Parse a repository name, reducing `owner/repo` to `repo`.
    pub fn parse(value: &str) -> Result<Self, RepoNameError> {
        let segment = value.trim().rsplit('/').next().unwrap_or_default();
        if segment.is_empty() {
            return Err(RepoNameError::Empty);
        }

        for c in segment.chars() {
            if c.is_whitespace() || c.is_control() {
                return Err(RepoNameError::InvalidChar(c));
            }
        }

        Ok(Self(segment.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
