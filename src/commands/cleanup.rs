// ABOUTME: Cleanup command implementation.
// ABOUTME: Optionally waits for other workflow runs, then deletes untagged versions.

use ghcr_cleanup::cleanup::{cleanup, preview};
use ghcr_cleanup::config::Settings;
use ghcr_cleanup::error::Result;
use ghcr_cleanup::github::GitHubClient;
use ghcr_cleanup::output::Output;
use ghcr_cleanup::runs::{RunWatch, wait_for_idle};

/// Registry host shown in the final message.
const REGISTRY_HOST: &str = "ghcr.io";

/// Run one cleanup with resolved settings.
pub async fn run_cleanup(settings: Settings, mut output: Output) -> Result<()> {
    output.start_timer();
    let client = GitHubClient::new(&settings.token, &settings.api_root)?;
    let target = &settings.target;

    if settings.wait_for_runners {
        if let Some(id) = &settings.exclude_run {
            tracing::debug!("excluding run {} from the wait check", id);
        }
        let watch = RunWatch::new(target.clone(), settings.exclude_run.clone());
        let done = wait_for_idle(&client, watch, &output).await?;
        tracing::debug!("runs idle after {} waits", done.waits());
    }

    if settings.dry_run {
        let candidates = preview(&client, target).await?;
        for version in &candidates {
            let digest = version.digest.as_deref().unwrap_or("-");
            let created = version
                .created_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "-".to_string());
            output.progress(&format!(
                "Would delete untagged version id={} digest={} created={}",
                version.id, digest, created
            ));
        }
        output.success(
            &format!(
                "Would delete {} untagged container image versions from {}/{}",
                candidates.len(),
                REGISTRY_HOST,
                target
            ),
            candidates.len(),
        );
        return Ok(());
    }

    let report = cleanup(&client, target, &output).await?;
    tracing::debug!("{} owner, {} passes", report.owner_kind, report.passes);
    output.success(
        &format!(
            "Deleted {} untagged container image versions from {}/{}",
            report.count(),
            REGISTRY_HOST,
            target
        ),
        report.count(),
    );
    Ok(())
}
