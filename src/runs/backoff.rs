// ABOUTME: Fixed backoff schedule between polls of active workflow runs.
// ABOUTME: 30s, then 60s, then 5 minutes for every later wait.

use std::time::Duration;

/// Delays indexed by the number of waits already taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackoffSchedule {
    steps: Vec<Duration>,
    steady: Duration,
}

impl BackoffSchedule {
    pub fn new(steps: Vec<Duration>, steady: Duration) -> Self {
        Self { steps, steady }
    }

    /// Delay before the next check, after `waits` earlier waits.
    pub fn delay(&self, waits: usize) -> Duration {
        self.steps.get(waits).copied().unwrap_or(self.steady)
    }
}

impl Default for BackoffSchedule {
    fn default() -> Self {
        Self::new(
            vec![Duration::from_secs(30), Duration::from_secs(60)],
            Duration::from_secs(300),
        )
    }
}
