// ABOUTME: User-facing reporting for cleanup runs: waits, deletions, totals, failures.
// ABOUTME: Human text by default, result-only under --quiet, JSON lines under --json.

use crate::types::VersionId;
use serde::Serialize;
use std::time::Instant;

/// How much the binary prints, and in which format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Waiting notices, one line per deletion, summary
    Normal,
    /// Summary line only
    Quiet,
    /// One JSON object per line
    Json,
}

/// Reporter shared by the waiter and the cleanup loop.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Marks the start of the run; the summary reports time since then.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    fn duration(&self) -> Option<f64> {
        self.start_time.map(|_| self.elapsed_secs())
    }

    /// Informational line, human mode only.
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Report one deleted package version.
    pub fn deleted(&self, id: &VersionId) {
        match self.mode {
            OutputMode::Normal => println!("Deleted untagged version id={id}"),
            OutputMode::Quiet => {}
            OutputMode::Json => emit(&JsonEvent {
                event: "deleted",
                message: None,
                id: Some(id.as_str()),
                count: None,
                duration_secs: None,
            }),
        }
    }

    /// Print the final result, with the number of versions affected.
    pub fn success(&self, message: &str, count: usize) {
        match self.mode {
            OutputMode::Normal => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{message} ({:.1}s)", elapsed);
                } else {
                    println!("{message}");
                }
            }
            OutputMode::Quiet => {
                println!("{message}");
            }
            OutputMode::Json => emit(&JsonEvent {
                event: "success",
                message: Some(message),
                id: None,
                count: Some(count),
                duration_secs: self.duration(),
            }),
        }
    }

    /// Failure line on stderr.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "error",
                    message: Some(message),
                    id: None,
                    count: None,
                    duration_secs: self.duration(),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }
}

fn emit(event: &JsonEvent<'_>) {
    if let Ok(json) = serde_json::to_string(event) {
        println!("{json}");
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}
