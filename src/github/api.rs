// ABOUTME: Capability trait for the handful of GitHub REST calls the tool makes.
// ABOUTME: Lets cleanup and waiter logic run against the real client or a test double.

use super::error::{ApiError, DecodeSnafu};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use snafu::ResultExt;

/// Authenticated access to a GitHub REST API root.
///
/// URLs passed to `get` and `delete` are absolute; build them from
/// [`GitHubApi::api_root`].
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Base URL without a trailing slash, e.g. `https://api.github.com`.
    fn api_root(&self) -> &str;

    /// GET a URL and return the raw body.
    async fn get(&self, url: &str) -> Result<String, ApiError>;

    /// DELETE a URL, discarding the body.
    async fn delete(&self, url: &str) -> Result<(), ApiError>;
}

/// GET a URL and decode the body as JSON.
pub async fn get_json<A, T>(api: &A, url: &str) -> Result<T, ApiError>
where
    A: GitHubApi + ?Sized,
    T: DeserializeOwned,
{
    let body = api.get(url).await?;
    serde_json::from_str(&body).context(DecodeSnafu { url })
}
