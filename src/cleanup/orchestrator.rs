// ABOUTME: Repeat-until-empty cleanup of untagged package versions.
// ABOUTME: Re-lists after every pass because deletions can orphan further versions.

use super::owner::{OwnerKind, VersionsUrl, resolve_owner_kind};
use super::versions::{UntaggedVersion, delete_version, list_untagged_ids, untagged_versions};
use crate::github::{ApiError, GitHubApi};
use crate::output::Output;
use crate::types::{RepoTarget, VersionId};
use futures::TryStreamExt;

/// Outcome of a completed cleanup.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanupReport {
    pub owner_kind: OwnerKind,
    /// Deleted ids, in deletion order.
    pub deleted: Vec<VersionId>,
    /// Listing passes made, including the final empty one.
    pub passes: usize,
}

impl CleanupReport {
    pub fn count(&self) -> usize {
        self.deleted.len()
    }
}

/// Delete untagged versions until a listing pass finds none.
///
/// Deleting a multi-arch manifest can leave its per-platform children
/// untagged, and the registry only reports them on a later listing, so a
/// single pass under-cleans.
///
/// # Errors
///
/// The first failed list or delete aborts the run. Versions deleted before
/// the failure stay deleted and have already been reported to `output`.
pub async fn cleanup<A: GitHubApi + ?Sized>(
    api: &A,
    target: &RepoTarget,
    output: &Output,
) -> Result<CleanupReport, ApiError> {
    let owner_kind = resolve_owner_kind(api, &target.owner).await?;
    let base = VersionsUrl::new(api.api_root(), owner_kind, target);

    let mut deleted = Vec::new();
    let mut passes = 0;
    loop {
        passes += 1;
        let ids = list_untagged_ids(api, &base).await?;
        tracing::debug!("pass {}: {} untagged versions", passes, ids.len());
        if ids.is_empty() {
            break;
        }

        for id in ids {
            delete_version(api, &base, &id).await?;
            tracing::info!("deleted version {} of {}", id, target);
            output.deleted(&id);
            deleted.push(id);
        }
    }

    Ok(CleanupReport {
        owner_kind,
        deleted,
        passes,
    })
}

/// List what a cleanup would delete right now, without deleting anything.
///
/// Only one listing pass is made: versions that a deletion would orphan
/// cannot be predicted.
pub async fn preview<A: GitHubApi + ?Sized>(
    api: &A,
    target: &RepoTarget,
) -> Result<Vec<UntaggedVersion>, ApiError> {
    let owner_kind = resolve_owner_kind(api, &target.owner).await?;
    let base = VersionsUrl::new(api.api_root(), owner_kind, target);
    untagged_versions(api, &base).try_collect().await
}
