use anyhow::{Result, anyhow};

/// Environment variables read at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Credential,
    Owner,
    Repo,
    ApiUrl,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::Credential => "CREDENTIAL",
            ConfigKey::Owner => "OWNER",
            ConfigKey::Repo => "REPO",
            ConfigKey::ApiUrl => "GITHUB_API_URL",
        }
    }

    /// Older variable names still honoured when the primary one is unset.
    pub fn fallbacks(&self) -> &'static [&'static str] {
        match self {
            ConfigKey::Credential => &["ISSUE_AUTOMATION"],
            _ => &[],
        }
    }
}

/// Base URL used when `GITHUB_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Input file read by `create` when no path is given.
pub const DEFAULT_ISSUES_FILE: &str = "./issue.json";

/// Repository coordinates and credential shared by both operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub api_url: String,
}

/// Resolves a [`Config`] through `lookup`, which maps a variable name to its value.
///
/// - Each required key is tried under its primary name, then under its fallbacks.
/// - Empty or whitespace-only values count as missing.
/// - Returns an `Err` naming the first required variable that could not be resolved.
/// - A trailing `/` on the API URL is dropped so paths can be appended directly.
pub fn resolve_config<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let find = |key: ConfigKey| -> Option<String> {
        std::iter::once(key.as_str())
            .chain(key.fallbacks().iter().copied())
            .filter_map(&lookup)
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    };
    let require = |key: ConfigKey| -> Result<String> {
        find(key).ok_or_else(|| {
            anyhow!(
                "Missing required environment variable {}",
                key.as_str()
            )
        })
    };

    let token = require(ConfigKey::Credential)?;
    let owner = require(ConfigKey::Owner)?;
    let repo = require(ConfigKey::Repo)?;
    let api_url = find(ConfigKey::ApiUrl)
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    Ok(Config {
        token,
        owner,
        repo,
        api_url,
    })
}
