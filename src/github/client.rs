use crate::config::Config;
use crate::github::api::IssueApi;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::graphql::{
    self, CLOSED_ISSUES_PAGE_SIZE, CLOSED_ISSUES_QUERY, ClosedIssuesData, DELETE_ISSUE_MUTATION,
    GraphQlRequest, GraphQlResponse,
};
use crate::github::issues::{ClosedIssuesPage, CreatedIssue, RateLimit, RateLimitResponse};
use crate::issue_file::IssueSpec;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Value sent in the `X-GitHub-Api-Version` header on REST writes.
pub const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = "issuebatch-cli";
const ACCEPT: &str = "application/vnd.github+json";
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// `reqwest`-backed GitHub client bound to one repository.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
    owner: String,
    repo: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = anyhow::Context::context(
            reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build(),
            "Failed to create HTTP client",
        )?;
        Ok(GitHubClient {
            http,
            api_url: config.api_url.clone(),
            token: config.token.clone(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!(method = method.as_str(), path, "GitHub request");
        self.http
            .request(method, format!("{}{}", self.api_url, path))
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
    }

    async fn graphql<T: DeserializeOwned>(&self, query: &str, variables: Value) -> GitHubResult<T> {
        let response = self
            .request(reqwest::Method::POST, "/graphql")
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;
        let envelope: GraphQlResponse = read_json(response).await?;
        graphql::extract_data(envelope)
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> GitHubResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        return Err(GitHubError::Http { status, body });
    }
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

#[async_trait]
impl IssueApi for GitHubClient {
    async fn rate_limit(&self) -> GitHubResult<RateLimit> {
        let response = self
            .request(reqwest::Method::GET, "/rate_limit")
            .send()
            .await?;
        let body: RateLimitResponse = read_json(response).await?;
        Ok(body.rate)
    }

    async fn create_issue(&self, issue: &IssueSpec) -> GitHubResult<CreatedIssue> {
        let path = format!("/repos/{}/{}/issues", self.owner, self.repo);
        let response = self
            .request(reqwest::Method::POST, &path)
            .header("X-GitHub-Api-Version", API_VERSION)
            .json(&json!({
                "title": issue.title,
                "body": issue.body,
                "labels": issue.labels,
            }))
            .send()
            .await?;
        read_json(response).await
    }

    async fn closed_issues_page(&self, cursor: Option<&str>) -> GitHubResult<ClosedIssuesPage> {
        tracing::debug!(cursor = cursor.unwrap_or("<start>"), "Fetching closed issues page");
        let data: ClosedIssuesData = self
            .graphql(
                CLOSED_ISSUES_QUERY,
                json!({
                    "owner": self.owner,
                    "repo": self.repo,
                    "cursor": cursor,
                    "pageSize": CLOSED_ISSUES_PAGE_SIZE,
                }),
            )
            .await?;
        Ok(data.repository.issues)
    }

    async fn delete_issue(&self, issue_id: &str) -> GitHubResult<()> {
        let _: Value = self
            .graphql(DELETE_ISSUE_MUTATION, json!({ "issueId": issue_id }))
            .await?;
        Ok(())
    }
}
