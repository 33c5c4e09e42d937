// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod id;
mod owner_name;
mod repo_name;
mod token;

pub use id::{Id, RunId, VersionId};
pub use owner_name::{OwnerName, OwnerNameError};
pub use repo_name::{RepoName, RepoNameError};
pub use token::{Token, TokenError};

/// Owner and repository of the package being cleaned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTarget {
    pub owner: OwnerName,
    pub repo: RepoName,
}

impl RepoTarget {
    pub fn new(owner: OwnerName, repo: RepoName) -> Self {
        Self { owner, repo }
    }
}

impl std::fmt::Display for RepoTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
