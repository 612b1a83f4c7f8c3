use crate::github::error::GitHubResult;
use crate::github::issues::{ClosedIssuesPage, CreatedIssue, RateLimit};
use crate::issue_file::IssueSpec;
use async_trait::async_trait;

/// Calls the bulk operations need from GitHub, scoped to one repository.
#[async_trait]
pub trait IssueApi: Send + Sync {
    async fn rate_limit(&self) -> GitHubResult<RateLimit>;

    async fn create_issue(&self, issue: &IssueSpec) -> GitHubResult<CreatedIssue>;

    /// Fetch the closed issues following `cursor` (`None` for the first page).
    async fn closed_issues_page(&self, cursor: Option<&str>) -> GitHubResult<ClosedIssuesPage>;

    /// Delete the issue with GraphQL node id `issue_id`.
    async fn delete_issue(&self, issue_id: &str) -> GitHubResult<()>;
}
