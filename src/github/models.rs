// ABOUTME: Serde models for the GitHub REST payloads the tool reads.
// ABOUTME: Every field is optional where the API may omit it.

use crate::types::{RunId, VersionId};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

/// `GET /users/{owner}` (only the field we need).
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// One entry of `GET .../packages/container/{repo}/versions`.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageVersion {
    #[serde(default)]
    pub id: Option<VersionId>,

    /// Manifest digest, e.g. `sha256:...`.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub metadata: Option<VersionMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionMetadata {
    #[serde(default)]
    pub container: Option<ContainerMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContainerMetadata {
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl PackageVersion {
    /// Tags attached to this version; absent metadata means none.
    pub fn tags(&self) -> &[String] {
        self.metadata
            .as_ref()
            .and_then(|m| m.container.as_ref())
            .and_then(|c| c.tags.as_deref())
            .unwrap_or_default()
    }

    pub fn is_untagged(&self) -> bool {
        self.tags().is_empty()
    }
}

/// `GET /repos/{owner}/{repo}/actions/runs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowRunsPage {
    #[serde(default)]
    pub workflow_runs: Vec<WorkflowRun>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkflowRun {
    #[serde(default)]
    pub id: Option<RunId>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub run_number: Option<u64>,

    #[serde(default)]
    pub status: Option<RunStatus>,
}

impl WorkflowRun {
    /// `name (#run_number)`, with placeholders for missing fields.
    pub fn label(&self) -> String {
        let name = self.name.as_deref().unwrap_or("Unknown");
        match self.run_number {
            Some(n) => format!("{name} (#{n})"),
            None => format!("{name} (#?)"),
        }
    }
}

/// Workflow run status as reported by the Actions API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    Completed,
    Requested,
    Waiting,
    Pending,
    #[serde(other)]
    Unknown,
}

impl RunStatus {
    /// Statuses that count as "still running" for the waiter.
    pub const ACTIVE: [RunStatus; 2] = [RunStatus::InProgress, RunStatus::Queued];

    /// Value for the `status` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            RunStatus::Queued => "queued",
            RunStatus::InProgress => "in_progress",
            RunStatus::Completed => "completed",
            RunStatus::Requested => "requested",
            RunStatus::Waiting => "waiting",
            RunStatus::Pending => "pending",
            RunStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}
