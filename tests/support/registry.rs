// ABOUTME: In-memory model of the GitHub endpoints the cleanup tool calls.
// ABOUTME: Answers users, package versions (list/delete), and workflow run queries.

use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};

/// Headers captured by the HTTP server (empty for the in-process fake).
#[derive(Debug, Clone, Default)]
pub struct RequestHeaders {
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
    pub api_version: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: RequestHeaders,
    pub at: tokio::time::Instant,
}

/// State behind the fake endpoints.
#[derive(Debug, Clone)]
pub struct Registry {
    pub owner: String,
    /// Value of `type` in `/users/{owner}`.
    pub owner_type: String,
    pub repo: String,
    /// Current package versions, paged by `per_page`.
    pub versions: Vec<Value>,
    /// Explicit page contents; overrides `versions` for listing when set.
    pub pages: Option<Vec<Vec<Value>>>,
    /// Versions that appear once the keyed version id is deleted.
    pub orphans: HashMap<String, Vec<Value>>,
    /// One entry per waiter check: the runs reported by that check.
    pub run_checks: VecDeque<Vec<Value>>,
    current_check: Vec<Value>,
    /// Status returned for every DELETE, when set.
    pub fail_delete_with: Option<u16>,
    pub requests: Vec<RecordedRequest>,
}

impl Registry {
    pub fn new(owner: &str, owner_type: &str, repo: &str) -> Self {
        Self {
            owner: owner.to_string(),
            owner_type: owner_type.to_string(),
            repo: repo.to_string(),
            versions: Vec::new(),
            pages: None,
            orphans: HashMap::new(),
            run_checks: VecDeque::new(),
            current_check: Vec::new(),
            fail_delete_with: None,
            requests: Vec::new(),
        }
    }

    pub fn with_versions(mut self, versions: Vec<Value>) -> Self {
        self.versions = versions;
        self
    }

    pub fn with_pages(mut self, pages: Vec<Vec<Value>>) -> Self {
        self.pages = Some(pages);
        self
    }

    pub fn with_orphans(mut self, parent: u64, children: Vec<Value>) -> Self {
        self.orphans.insert(parent.to_string(), children);
        self
    }

    pub fn with_run_checks(mut self, checks: Vec<Vec<Value>>) -> Self {
        self.run_checks = checks.into();
        self
    }

    pub fn failing_deletes(mut self, status: u16) -> Self {
        self.fail_delete_with = Some(status);
        self
    }

    pub fn handle(&mut self, method: &str, target: &str) -> (u16, String) {
        self.handle_with(method, target, RequestHeaders::default())
    }

    pub fn handle_with(
        &mut self,
        method: &str,
        target: &str,
        headers: RequestHeaders,
    ) -> (u16, String) {
        let (path, query) = split_target(target);
        self.requests.push(RecordedRequest {
            method: method.to_string(),
            path: path.to_string(),
            query: query.clone(),
            headers,
            at: tokio::time::Instant::now(),
        });

        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        match (method, segments.as_slice()) {
            ("GET", ["users", owner]) => {
                if *owner == self.owner {
                    ok(json!({"login": owner, "type": self.owner_type}))
                } else {
                    not_found()
                }
            }
            ("GET", [scope, owner, "packages", "container", repo, "versions"]) => {
                if !self.is_package(scope, owner, repo) {
                    return not_found();
                }
                let page: usize = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
                let per_page: usize = query
                    .get("per_page")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(30);
                ok(Value::Array(self.list_page(page, per_page)))
            }
            ("DELETE", [scope, owner, "packages", "container", repo, "versions", id]) => {
                if !self.is_package(scope, owner, repo) {
                    return not_found();
                }
                if let Some(status) = self.fail_delete_with {
                    return (status, json!({"message": "Forbidden"}).to_string());
                }
                self.delete(id)
            }
            ("GET", ["repos", owner, repo, "actions", "runs"]) => {
                if *owner != self.owner || *repo != self.repo {
                    return not_found();
                }
                let status = query.get("status").cloned().unwrap_or_default();
                if status == "in_progress" {
                    self.current_check = self.run_checks.pop_front().unwrap_or_default();
                }
                let runs: Vec<Value> = self
                    .current_check
                    .iter()
                    .filter(|r| r["status"] == status.as_str())
                    .cloned()
                    .collect();
                ok(json!({"total_count": runs.len(), "workflow_runs": runs}))
            }
            _ => not_found(),
        }
    }

    fn is_package(&self, scope: &str, owner: &str, repo: &str) -> bool {
        let expected_scope = if self.owner_type == "Organization" {
            "orgs"
        } else {
            "users"
        };
        scope == expected_scope && owner == self.owner && repo == self.repo
    }

    fn list_page(&self, page: usize, per_page: usize) -> Vec<Value> {
        if let Some(pages) = &self.pages {
            return pages.get(page.saturating_sub(1)).cloned().unwrap_or_default();
        }
        let start = page.saturating_sub(1) * per_page;
        if start >= self.versions.len() {
            return Vec::new();
        }
        let end = (start + per_page).min(self.versions.len());
        self.versions[start..end].to_vec()
    }

    fn delete(&mut self, id: &str) -> (u16, String) {
        let Some(index) = self
            .versions
            .iter()
            .position(|v| id_of(v).as_deref() == Some(id))
        else {
            return not_found();
        };
        self.versions.remove(index);
        if let Some(children) = self.orphans.remove(id) {
            self.versions.extend(children);
        }
        (204, String::new())
    }

    /// Requests matching a method, in order.
    pub fn requests_for(&self, method: &str) -> Vec<&RecordedRequest> {
        self.requests.iter().filter(|r| r.method == method).collect()
    }

    /// Ids of every DELETE request, in order.
    pub fn deleted_ids(&self) -> Vec<String> {
        self.requests_for("DELETE")
            .iter()
            .filter_map(|r| r.path.rsplit('/').next().map(str::to_string))
            .collect()
    }

    /// `page` query values of every version listing, in order.
    pub fn listed_pages(&self) -> Vec<u32> {
        self.requests
            .iter()
            .filter(|r| r.method == "GET" && r.path.ends_with("/versions"))
            .filter_map(|r| r.query.get("page").and_then(|p| p.parse().ok()))
            .collect()
    }

    /// Times at which each waiter check started (the `in_progress` query).
    pub fn run_check_times(&self) -> Vec<tokio::time::Instant> {
        self.requests
            .iter()
            .filter(|r| r.path.ends_with("/actions/runs"))
            .filter(|r| r.query.get("status").map(String::as_str) == Some("in_progress"))
            .map(|r| r.at)
            .collect()
    }
}

/// A package version with the given tags.
pub fn version(id: u64, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "name": format!("sha256:{id:064x}"),
        "created_at": "2024-05-01T10:00:00Z",
        "metadata": {
            "package_type": "container",
            "container": {"tags": tags}
        }
    })
}

/// A workflow run in the given status.
pub fn run(id: u64, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "run_number": id + 100,
        "status": status
    })
}

fn id_of(version: &Value) -> Option<String> {
    match &version["id"] {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn split_target(target: &str) -> (&str, HashMap<String, String>) {
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let query = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k.to_string(), v.to_string())
        })
        .collect();
    (path, query)
}

fn ok(body: Value) -> (u16, String) {
    (200, body.to_string())
}

fn not_found() -> (u16, String) {
    (404, json!({"message": "Not Found"}).to_string())
}
