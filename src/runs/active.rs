// ABOUTME: Fetches queued and in-progress workflow runs for a repository.
// ABOUTME: Leaves out the caller's own run so a job never waits on itself.

use crate::github::models::{RunStatus, WorkflowRun, WorkflowRunsPage};
use crate::github::{ApiError, GitHubApi, get_json};
use crate::types::{RepoTarget, RunId};
use std::collections::HashSet;

/// Runs requested per status query.
pub const RUNS_PER_PAGE: u32 = 100;

/// Active runs of `target`, in-progress first, then queued.
///
/// A run that changes status between the two queries can show up in both;
/// it is reported once.
pub async fn fetch_active_runs<A: GitHubApi + ?Sized>(
    api: &A,
    target: &RepoTarget,
    exclude: Option<&RunId>,
) -> Result<Vec<WorkflowRun>, ApiError> {
    let mut seen: HashSet<RunId> = HashSet::new();
    let mut active = Vec::new();

    for status in RunStatus::ACTIVE {
        let url = format!(
            "{}/repos/{}/{}/actions/runs?status={}&per_page={}",
            api.api_root(),
            urlencoding::encode(target.owner.as_str()),
            urlencoding::encode(target.repo.as_str()),
            status.as_query(),
            RUNS_PER_PAGE,
        );
        let page: WorkflowRunsPage = get_json(api, &url).await?;

        for run in page.workflow_runs {
            if let Some(id) = &run.id {
                if exclude == Some(id) {
                    continue;
                }
                if !seen.insert(id.clone()) {
                    continue;
                }
            }
            active.push(run);
        }
    }

    Ok(active)
}

/// `Found N active workflow(s): a (#1), b (#2) and M more...`
pub fn summarize(runs: &[WorkflowRun]) -> String {
    const SHOWN: usize = 5;

    let names: Vec<String> = runs.iter().take(SHOWN).map(WorkflowRun::label).collect();
    let suffix = if runs.len() > SHOWN {
        format!(" and {} more...", runs.len() - SHOWN)
    } else {
        String::new()
    };
    format!(
        "Found {} active workflow(s): {}{}",
        runs.len(),
        names.join(", "),
        suffix
    )
}
