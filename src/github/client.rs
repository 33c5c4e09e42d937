// ABOUTME: reqwest-backed GitHub REST client with bearer auth and a request timeout.
// ABOUTME: Built once at startup and passed by reference to every call site.

use super::api::GitHubApi;
use super::error::{
    ApiError, ClientBuildSnafu, ConnectSnafu, InvalidTokenSnafu, Method, RequestSnafu,
    StatusSnafu, TimeoutSnafu, body_snippet,
};
use crate::types::Token;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use snafu::{IntoError, ResultExt};
use std::time::Duration;

/// Public GitHub API root.
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("ghcr-cleanup/", env!("CARGO_PKG_VERSION"));

/// Authenticated client for one API root.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_root: String,
    timeout: Duration,
}

impl GitHubClient {
    /// Create a client with the default request timeout.
    pub fn new(token: &Token, api_root: &str) -> Result<Self, ApiError> {
        Self::with_timeout(token, api_root, REQUEST_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(
        token: &Token,
        api_root: &str,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
            .context(InvalidTokenSnafu)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            http,
            api_root: api_root.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    async fn send(&self, method: Method, url: &str) -> Result<String, ApiError> {
        tracing::debug!("{} {}", method, url);

        let response = self
            .http
            .request(method.into(), url)
            .send()
            .await
            .map_err(|e| self.transport_error(method, url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(method, url, e))?;

        if !status.is_success() {
            tracing::debug!("{} {} returned {}", method, url, status);
            return StatusSnafu {
                method,
                url,
                status: status.as_u16(),
                body: body_snippet(&body),
            }
            .fail();
        }

        Ok(body)
    }

    fn transport_error(&self, method: Method, url: &str, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            TimeoutSnafu {
                method,
                url,
                timeout: self.timeout,
            }
            .build()
        } else if e.is_connect() {
            ConnectSnafu { method, url }.into_error(e)
        } else {
            RequestSnafu { method, url }.into_error(e)
        }
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    fn api_root(&self) -> &str {
        &self.api_root
    }

    async fn get(&self, url: &str) -> Result<String, ApiError> {
        self.send(Method::Get, url).await
    }

    async fn delete(&self, url: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, url).await.map(|_| ())
    }
}
