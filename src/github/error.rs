use thiserror::Error;

/// Failure of a single GitHub API call.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("No data in GraphQL response")]
    MissingData,

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GitHubResult<T> = Result<T, GitHubError>;
