// ABOUTME: Command module aggregator for the ghcr-cleanup CLI.
// ABOUTME: Re-exports the cleanup command handler.

mod cleanup;

pub use cleanup::run_cleanup;
