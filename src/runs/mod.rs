// ABOUTME: Waits for other workflow runs to finish using the type state pattern.
// ABOUTME: Exports state markers, the RunWatch struct, and the polling driver.

mod active;
mod backoff;
mod state;
mod watch;

pub use active::{RUNS_PER_PAGE, fetch_active_runs, summarize};
pub use backoff::BackoffSchedule;
pub use state::{Checking, Done, Waiting};
pub use watch::{CheckOutcome, RunWatch, wait_for_idle};
