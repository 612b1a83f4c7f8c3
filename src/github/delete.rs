use crate::github::api::IssueApi;
use crate::github::issues::{ClosedIssue, PageInfo};
use crate::output;
use crate::schedule::{Scheduler, THROTTLE_INTERVAL};
use anyhow::Result;
use std::io::Write;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DeleteReport {
    pub deleted: usize,
    pub failed: usize,
    /// Set when a page fetch failed and the run stopped early.
    pub aborted: Option<String>,
}

/// Deletes every closed issue of the repository, page by page.
///
/// Per-issue failures are logged and skipped. A failed page fetch is logged
/// once and ends the run; issues deleted before it stay deleted and are
/// counted in the returned report.
///
/// Only a failure to write to `stdout_additional` is returned as `Err`.
pub async fn delete_closed_issues(
    api: &dyn IssueApi,
    scheduler: &dyn Scheduler,
    stdout_additional: &mut Option<&mut dyn Write>,
) -> Result<DeleteReport> {
    let mut report = DeleteReport::default();
    let mut page_info = PageInfo::first();

    while page_info.has_next_page {
        let page = match api.closed_issues_page(page_info.end_cursor.as_deref()).await {
            Ok(page) => page,
            Err(err) => {
                output::eprintln(
                    &format!("Failed to delete closed issues {err}"),
                    stdout_additional,
                )?;
                report.aborted = Some(err.to_string());
                return Ok(report);
            }
        };
        tracing::debug!(
            count = page.nodes.len(),
            has_next_page = page.page_info.has_next_page,
            "Fetched closed issues"
        );
        page_info = page.page_info;

        for issue in &page.nodes {
            delete_one(api, issue, &mut report, stdout_additional).await?;
            scheduler.sleep(THROTTLE_INTERVAL).await;
        }
    }

    output::println(
        &format!("Deleted {} closed issues.", report.deleted),
        stdout_additional,
    )?;
    Ok(report)
}

async fn delete_one(
    api: &dyn IssueApi,
    issue: &ClosedIssue,
    report: &mut DeleteReport,
    stdout_additional: &mut Option<&mut dyn Write>,
) -> std::io::Result<()> {
    match api.delete_issue(&issue.id).await {
        Ok(()) => {
            report.deleted += 1;
            output::println(
                &format!("Deleted issue #{}: {}", issue.number, issue.title),
                stdout_additional,
            )
        }
        Err(err) => {
            report.failed += 1;
            output::eprintln(
                &format!(
                    "Failed to delete issue #{}: {} {}",
                    issue.number, issue.title, err
                ),
                stdout_additional,
            )
        }
    }
}
