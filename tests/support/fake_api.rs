// ABOUTME: In-process GitHubApi implementation backed by the in-memory registry.
// ABOUTME: Lets cleanup and waiter logic run without a network or a real clock.

use super::registry::Registry;
use async_trait::async_trait;
use ghcr_cleanup::github::{ApiError, GitHubApi, Method};
use parking_lot::{Mutex, MutexGuard};

pub const FAKE_ROOT: &str = "https://api.test";

pub struct FakeApi {
    registry: Mutex<Registry>,
}

impl FakeApi {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Mutex::new(registry),
        }
    }

    pub fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock()
    }

    fn call(&self, method: Method, url: &str) -> Result<String, ApiError> {
        let target = url.strip_prefix(FAKE_ROOT).unwrap_or(url);
        let (status, body) = self.registry.lock().handle(&method.to_string(), target);
        if (200..300).contains(&status) {
            Ok(body)
        } else {
            Err(ApiError::Status {
                method,
                url: url.to_string(),
                status,
                body,
            })
        }
    }
}

#[async_trait]
impl GitHubApi for FakeApi {
    fn api_root(&self) -> &str {
        FAKE_ROOT
    }

    async fn get(&self, url: &str) -> Result<String, ApiError> {
        self.call(Method::Get, url)
    }

    async fn delete(&self, url: &str) -> Result<(), ApiError> {
        self.call(Method::Delete, url).map(|_| ())
    }
}
