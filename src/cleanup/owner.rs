// ABOUTME: Resolves whether an owner is a user or an organization.
// ABOUTME: Builds the matching package-versions URL for each account kind.

use crate::github::{ApiError, GitHubApi, get_json, models::Account};
use crate::types::{OwnerName, RepoTarget};
use std::fmt;

/// The two account kinds that can own packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKind {
    User,
    Organization,
}

impl OwnerKind {
    /// Parse the `type` field of `/users/{owner}`. Anything else is rejected.
    pub fn from_api(value: &str) -> Option<Self> {
        match value {
            "User" => Some(OwnerKind::User),
            "Organization" => Some(OwnerKind::Organization),
            _ => None,
        }
    }

    /// First path segment of the packages API for this kind.
    pub fn scope(&self) -> &'static str {
        match self {
            OwnerKind::User => "users",
            OwnerKind::Organization => "orgs",
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerKind::User => f.write_str("User"),
            OwnerKind::Organization => f.write_str("Organization"),
        }
    }
}

/// Look up the owner's account kind.
///
/// # Errors
///
/// Fails with [`ApiError::UnknownOwnerType`] when the API reports any kind
/// other than `User` or `Organization`; there is no fallback.
pub async fn resolve_owner_kind<A: GitHubApi + ?Sized>(
    api: &A,
    owner: &OwnerName,
) -> Result<OwnerKind, ApiError> {
    let url = format!(
        "{}/users/{}",
        api.api_root(),
        urlencoding::encode(owner.as_str())
    );
    let account: Account = get_json(api, &url).await?;

    match account.kind.as_deref().and_then(OwnerKind::from_api) {
        Some(kind) => {
            tracing::debug!("{} is a {}", owner, kind);
            Ok(kind)
        }
        None => Err(ApiError::UnknownOwnerType {
            owner: owner.to_string(),
            found: account.kind,
        }),
    }
}

/// Collection URL for a container package's versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionsUrl(String);

impl VersionsUrl {
    pub fn new(api_root: &str, kind: OwnerKind, target: &RepoTarget) -> Self {
        Self(format!(
            "{}/{}/{}/packages/container/{}/versions",
            api_root.trim_end_matches('/'),
            kind.scope(),
            urlencoding::encode(target.owner.as_str()),
            urlencoding::encode(target.repo.as_str()),
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of one page of active versions.
    pub fn page(&self, page: u32, per_page: u32) -> String {
        format!("{}?state=active&per_page={per_page}&page={page}", self.0)
    }

    /// URL of a single version.
    pub fn version(&self, id: &str) -> String {
        format!("{}/{}", self.0, urlencoding::encode(id))
    }
}

impl fmt::Display for VersionsUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
