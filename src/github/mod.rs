// ABOUTME: GitHub REST access: client, capability trait, payload models, errors.
// ABOUTME: Everything above this layer talks to GitHub through `GitHubApi`.

mod api;
mod client;
mod error;
pub mod models;

pub use api::{GitHubApi, get_json};
pub use client::{DEFAULT_API_ROOT, GitHubClient, REQUEST_TIMEOUT};
pub use error::{ApiError, ApiErrorKind, BODY_SNIPPET_LIMIT, Method, body_snippet};
