use serde::Deserialize;

/// Quota snapshot from `GET /rate_limit`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RateLimit {
    pub remaining: u64,
    /// Unix time at which the quota window resets.
    pub reset: i64,
}

#[derive(Deserialize, Debug)]
pub struct RateLimitResponse {
    pub rate: RateLimit,
}

/// Subset of the REST issue returned after creation.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CreatedIssue {
    pub number: u64,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ClosedIssue {
    /// GraphQL node id, used as the deletion key.
    pub id: String,
    pub number: u64,
    pub title: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

impl PageInfo {
    /// State before the first page has been fetched.
    pub fn first() -> Self {
        PageInfo {
            has_next_page: true,
            end_cursor: None,
        }
    }
}

/// One batch of closed issues and the cursor for the next batch.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClosedIssuesPage {
    pub page_info: PageInfo,
    pub nodes: Vec<ClosedIssue>,
}
