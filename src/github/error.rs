// ABOUTME: Uniform error for every GitHub REST call, using the SNAFU pattern.
// ABOUTME: Carries method, URL, status and a body snippet for diagnostics.

use snafu::Snafu;
use std::fmt;
use std::time::Duration;

/// Longest response body kept in an error message.
pub const BODY_SNIPPET_LIMIT: usize = 512;

/// HTTP methods this tool issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Delete => f.write_str("DELETE"),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Any failure talking to the registry or Actions endpoints.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ApiError {
    #[snafu(display("HTTP {status} for {method} {url}: {body}"))]
    Status {
        method: Method,
        url: String,
        status: u16,
        body: String,
    },

    #[snafu(display("request timeout for {method} {url} ({}s)", timeout.as_secs()))]
    Timeout {
        method: Method,
        url: String,
        timeout: Duration,
    },

    #[snafu(display("connection failed for {method} {url}: {source}"))]
    Connect {
        method: Method,
        url: String,
        source: reqwest::Error,
    },

    #[snafu(display("request failed for {method} {url}: {source}"))]
    Request {
        method: Method,
        url: String,
        source: reqwest::Error,
    },

    #[snafu(display("unexpected response body from GET {url}: {source}"))]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    #[snafu(display(
        "unknown owner type for {owner}: {}",
        found.as_deref().unwrap_or("<missing>")
    ))]
    UnknownOwnerType { owner: String, found: Option<String> },

    #[snafu(display("token is not a valid Authorization header value"))]
    InvalidToken {
        source: reqwest::header::InvalidHeaderValue,
    },

    #[snafu(display("failed to build HTTP client: {source}"))]
    ClientBuild { source: reqwest::Error },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The server answered with a non-2xx status.
    HttpStatus,
    /// The request did not complete within the client timeout.
    Timeout,
    /// No connection could be established.
    Connection,
    /// Some other transport failure.
    Transport,
    /// The body did not have the expected shape.
    InvalidResponse,
    /// `/users/{owner}` reported neither `User` nor `Organization`.
    UnknownOwnerType,
    /// The client itself could not be set up.
    Client,
}

impl ApiError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Status { .. } => ApiErrorKind::HttpStatus,
            ApiError::Timeout { .. } => ApiErrorKind::Timeout,
            ApiError::Connect { .. } => ApiErrorKind::Connection,
            ApiError::Request { .. } => ApiErrorKind::Transport,
            ApiError::Decode { .. } => ApiErrorKind::InvalidResponse,
            ApiError::UnknownOwnerType { .. } => ApiErrorKind::UnknownOwnerType,
            ApiError::InvalidToken { .. } | ApiError::ClientBuild { .. } => ApiErrorKind::Client,
        }
    }

    /// Returns the HTTP status if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Trim a response body so error messages stay readable.
pub fn body_snippet(body: &str) -> String {
    let body = body.trim();
    if body.len() <= BODY_SNIPPET_LIMIT {
        return body.to_string();
    }
    let mut end = BODY_SNIPPET_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
