// ABOUTME: Shared helpers for integration tests.
// ABOUTME: Provides an in-memory GitHub registry, a fake API client, and a local HTTP server.

use std::sync::Once;

// Not every test binary uses every helper.
#[allow(dead_code)]
pub mod fake_api;
#[allow(dead_code)]
pub mod mock_github;
#[allow(dead_code)]
pub mod registry;

static TRACING_INIT: Once = Once::new();

/// Route crate logs to the test harness; later calls are no-ops.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("ghcr_cleanup=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}
