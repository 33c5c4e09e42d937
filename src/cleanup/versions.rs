// ABOUTME: Lists untagged package versions page by page and deletes single versions.
// ABOUTME: The listing is a lazy stream that restarts from page one on every call.

use super::owner::VersionsUrl;
use crate::github::{ApiError, GitHubApi, get_json, models::PackageVersion};
use crate::types::VersionId;
use chrono::{DateTime, Utc};
use futures::{Stream, TryStreamExt, stream};

/// Versions requested per page.
pub const PAGE_SIZE: u32 = 100;

/// A version with no tags, eligible for deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct UntaggedVersion {
    pub id: VersionId,
    /// Manifest digest, when the API reported one.
    pub digest: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl UntaggedVersion {
    /// Keep a version only if it has an id and no tags.
    pub fn from_version(version: PackageVersion) -> Option<Self> {
        if !version.is_untagged() {
            return None;
        }
        let id = version.id?;
        Some(Self {
            id,
            digest: version.name,
            created_at: version.created_at,
        })
    }
}

/// Fetch one page of active versions.
pub async fn fetch_page<A: GitHubApi + ?Sized>(
    api: &A,
    base: &VersionsUrl,
    page: u32,
) -> Result<Vec<PackageVersion>, ApiError> {
    let versions: Vec<PackageVersion> = get_json(api, &base.page(page, PAGE_SIZE)).await?;
    tracing::debug!("page {} of {} has {} versions", page, base, versions.len());
    Ok(versions)
}

/// Stream every untagged version of the package.
///
/// Pages are requested lazily, starting at page 1, until a page comes back
/// empty. Short pages do not end the scan. The first error ends the stream.
pub fn untagged_versions<'a, A: GitHubApi + ?Sized>(
    api: &'a A,
    base: &'a VersionsUrl,
) -> impl Stream<Item = Result<UntaggedVersion, ApiError>> {
    stream::try_unfold(1u32, move |page| async move {
        let versions = fetch_page(api, base, page).await?;
        let next = if versions.is_empty() {
            None
        } else {
            Some((versions, page + 1))
        };
        Ok::<_, ApiError>(next)
    })
    .map_ok(|versions| stream::iter(versions.into_iter().map(Ok::<_, ApiError>)))
    .try_flatten()
    .try_filter_map(|version| async move {
        Ok::<_, ApiError>(UntaggedVersion::from_version(version))
    })
}

/// Collect the ids of every currently untagged version.
pub async fn list_untagged_ids<A: GitHubApi + ?Sized>(
    api: &A,
    base: &VersionsUrl,
) -> Result<Vec<VersionId>, ApiError> {
    untagged_versions(api, base)
        .map_ok(|version| version.id)
        .try_collect()
        .await
}

/// Delete one version.
pub async fn delete_version<A: GitHubApi + ?Sized>(
    api: &A,
    base: &VersionsUrl,
    id: &VersionId,
) -> Result<(), ApiError> {
    api.delete(&base.version(id.as_str())).await
}
