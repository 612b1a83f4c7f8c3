use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One entry of the input file: the fields of an issue to create.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IssueSpec {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Parses the content of an issue file.
///
/// Expects a JSON array of `{ "title", "body", "labels" }` objects. `body` and
/// `labels` may be omitted; `title` may not. Order is preserved.
pub fn parse_issue_specs(content: &[u8]) -> Result<Vec<IssueSpec>> {
    serde_json::from_slice(content).context("Failed to parse issue file JSON")
}

/// Reads and parses the issue file at `path`.
pub fn load_issue_specs(path: &Path) -> Result<Vec<IssueSpec>> {
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read issue file {}", path.display()))?;
    parse_issue_specs(&content).with_context(|| format!("Invalid issue file {}", path.display()))
}
