// ABOUTME: Waiter state marker types for the type state pattern.
// ABOUTME: State types carry their own data for compile-time guarantees.

use crate::github::models::WorkflowRun;
use nonempty::NonEmpty;

/// About to query active runs.
/// Available actions: `check()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Checking;

/// At least one other run is still queued or in progress.
/// Available actions: `active_runs()`, `summary()`, `next_delay()`, `wait()`
#[derive(Debug, Clone)]
pub struct Waiting {
    pub(crate) active: NonEmpty<WorkflowRun>,
}

/// No other run is active; cleanup may proceed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Done;
