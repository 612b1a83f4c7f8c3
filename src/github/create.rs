use crate::github::api::IssueApi;
use crate::github::issues::CreatedIssue;
use crate::issue_file::IssueSpec;
use crate::output;
use crate::schedule::{self, Scheduler, THROTTLE_INTERVAL};
use anyhow::Result;
use std::io::Write;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CreateReport {
    pub attempted: usize,
    pub created: usize,
    pub failed: usize,
}

/// Creates every issue in `issues`, in order, one at a time.
///
/// Before each creation the quota is checked; an exhausted quota pauses until
/// its reset time. A failed item is logged and skipped. Every attempt is
/// followed by [`THROTTLE_INTERVAL`].
///
/// Only a failure to write to `stdout_additional` is returned as `Err`.
pub async fn create_issues(
    api: &dyn IssueApi,
    scheduler: &dyn Scheduler,
    issues: &[IssueSpec],
    stdout_additional: &mut Option<&mut dyn Write>,
) -> Result<CreateReport> {
    let mut report = CreateReport::default();

    for issue in issues {
        report.attempted += 1;
        match create_one(api, scheduler, issue, stdout_additional).await {
            Ok(created) => {
                report.created += 1;
                tracing::debug!(number = created.number, url = ?created.html_url, "Issue created");
                output::println(
                    &format!("Issue #{} created: {}", report.created, issue.title),
                    stdout_additional,
                )?;
            }
            Err(err) => {
                report.failed += 1;
                output::eprintln(
                    &format!("Failed to create issue: {} {}", issue.title, err),
                    stdout_additional,
                )?;
            }
        }

        scheduler.sleep(THROTTLE_INTERVAL).await;
    }

    output::println(
        &format!("Created {} issues", report.created),
        stdout_additional,
    )?;
    Ok(report)
}

async fn create_one(
    api: &dyn IssueApi,
    scheduler: &dyn Scheduler,
    issue: &IssueSpec,
    stdout_additional: &mut Option<&mut dyn Write>,
) -> Result<CreatedIssue> {
    let rate = api.rate_limit().await?;
    if rate.remaining == 0 {
        let wait = schedule::wait_until_reset(rate.reset, scheduler.now_epoch_seconds());
        tracing::info!(reset = rate.reset, wait_secs = wait.as_secs(), "Rate limit exhausted");
        output::println(
            &format!("Rate limit exceeded. Waiting for {} seconds...", wait.as_secs()),
            stdout_additional,
        )?;
        scheduler.sleep(wait).await;
    }

    Ok(api.create_issue(issue).await?)
}
