// ABOUTME: Library root for ghcr-cleanup - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod cleanup;
pub mod config;
pub mod error;
pub mod github;
pub mod output;
pub mod runs;
pub mod types;
