use crate::github::error::{GitHubError, GitHubResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of closed issues requested per page.
pub const CLOSED_ISSUES_PAGE_SIZE: u32 = 50;

pub const CLOSED_ISSUES_QUERY: &str = r#"
query($owner: String!, $repo: String!, $cursor: String, $pageSize: Int!) {
  repository(owner: $owner, name: $repo) {
    issues(states: CLOSED, first: $pageSize, after: $cursor) {
      pageInfo {
        hasNextPage
        endCursor
      }
      nodes {
        id
        number
        title
      }
    }
  }
}
"#;

pub const DELETE_ISSUE_MUTATION: &str = r#"
mutation($issueId: ID!) {
  deleteIssue(input: { issueId: $issueId }) {
    clientMutationId
  }
}
"#;

#[derive(Serialize, Debug)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

#[derive(Deserialize, Debug)]
pub struct GraphQlResponse {
    pub data: Option<Value>,
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Deserialize, Debug)]
pub struct GraphQlErrorEntry {
    pub message: String,
}

/// Shape of `data` for [`CLOSED_ISSUES_QUERY`].
#[derive(Deserialize, Debug)]
pub struct ClosedIssuesData {
    pub repository: RepositoryIssues,
}

#[derive(Deserialize, Debug)]
pub struct RepositoryIssues {
    pub issues: crate::github::issues::ClosedIssuesPage,
}

/// Turns a GraphQL envelope into its typed `data`.
///
/// Any entry in `errors` fails the whole call, even if partial data came back.
pub fn extract_data<T: DeserializeOwned>(response: GraphQlResponse) -> GitHubResult<T> {
    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let messages = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(GitHubError::GraphQl(messages));
    }

    match response.data {
        Some(Value::Null) | None => Err(GitHubError::MissingData),
        Some(data) => Ok(serde_json::from_value(data)?),
    }
}
