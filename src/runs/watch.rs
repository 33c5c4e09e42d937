// ABOUTME: Generic run watcher parameterized by state marker.
// ABOUTME: Polls active workflow runs and sleeps on a backoff schedule until none remain.

use super::active::{fetch_active_runs, summarize};
use super::backoff::BackoffSchedule;
use super::state::{Checking, Done, Waiting};
use crate::github::models::WorkflowRun;
use crate::github::{ApiError, GitHubApi};
use crate::output::Output;
use crate::types::{RepoTarget, RunId};
use nonempty::NonEmpty;
use std::time::Duration;

/// A watch over a repository's workflow runs, parameterized by its state.
#[derive(Debug)]
pub struct RunWatch<S> {
    pub(crate) target: RepoTarget,
    pub(crate) exclude: Option<RunId>,
    pub(crate) schedule: BackoffSchedule,
    pub(crate) waits: usize,
    pub(crate) state: S,
}

/// Result of one check.
#[derive(Debug)]
pub enum CheckOutcome {
    /// Other runs are active; wait and check again.
    Active(RunWatch<Waiting>),
    /// Nothing else is running.
    Clear(RunWatch<Done>),
}

impl<S> RunWatch<S> {
    fn transition<T>(self, state: T) -> RunWatch<T> {
        RunWatch {
            target: self.target,
            exclude: self.exclude,
            schedule: self.schedule,
            waits: self.waits,
            state,
        }
    }

    pub fn target(&self) -> &RepoTarget {
        &self.target
    }

    /// Number of sleeps taken so far.
    pub fn waits(&self) -> usize {
        self.waits
    }
}

impl RunWatch<Checking> {
    /// Watch `target`, ignoring the run `exclude` (normally the current job).
    pub fn new(target: RepoTarget, exclude: Option<RunId>) -> Self {
        Self::with_schedule(target, exclude, BackoffSchedule::default())
    }

    pub fn with_schedule(
        target: RepoTarget,
        exclude: Option<RunId>,
        schedule: BackoffSchedule,
    ) -> Self {
        RunWatch {
            target,
            exclude,
            schedule,
            waits: 0,
            state: Checking,
        }
    }

    /// Query active runs once.
    pub async fn check<A: GitHubApi + ?Sized>(self, api: &A) -> Result<CheckOutcome, ApiError> {
        let runs = fetch_active_runs(api, &self.target, self.exclude.as_ref()).await?;
        Ok(match NonEmpty::from_vec(runs) {
            Some(active) => CheckOutcome::Active(self.transition(Waiting { active })),
            None => CheckOutcome::Clear(self.transition(Done)),
        })
    }
}

impl RunWatch<Waiting> {
    pub fn active_runs(&self) -> &NonEmpty<WorkflowRun> {
        &self.state.active
    }

    /// Human-readable list of the active runs.
    pub fn summary(&self) -> String {
        let runs: Vec<WorkflowRun> = self.state.active.iter().cloned().collect();
        summarize(&runs)
    }

    /// How long `wait()` will sleep.
    pub fn next_delay(&self) -> Duration {
        self.schedule.delay(self.waits)
    }

    /// Sleep for the scheduled delay, then go back to checking.
    pub async fn wait(self) -> RunWatch<Checking> {
        let delay = self.next_delay();
        tokio::time::sleep(delay).await;
        let mut next = self.transition(Checking);
        next.waits += 1;
        next
    }
}

/// Block until no other workflow run is queued or in progress.
///
/// There is no deadline: a caller that needs one must bound the whole process.
pub async fn wait_for_idle<A: GitHubApi + ?Sized>(
    api: &A,
    watch: RunWatch<Checking>,
    output: &Output,
) -> Result<RunWatch<Done>, ApiError> {
    let mut watch = watch;
    loop {
        match watch.check(api).await? {
            CheckOutcome::Clear(done) => {
                output.progress("No active workflows found. Proceeding with cleanup.");
                return Ok(done);
            }
            CheckOutcome::Active(waiting) => {
                let delay = waiting.next_delay();
                tracing::info!(
                    "{} active runs in {}, waiting {}s",
                    waiting.active_runs().len(),
                    waiting.target(),
                    delay.as_secs()
                );
                output.progress(&waiting.summary());
                output.progress(&format!(
                    "Waiting {} seconds before checking again...",
                    delay.as_secs()
                ));
                watch = waiting.wait().await;
            }
        }
    }
}
