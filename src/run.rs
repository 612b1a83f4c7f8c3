use crate::cli;
use crate::config;
use crate::github;
use crate::issue_file;
use crate::output;
use crate::schedule::{Scheduler, TokioScheduler};
use anyhow::{Context, Result};
use std::path::Path;

/// Executes the command named by `args`.
///
/// `lookup` resolves environment variables, `stdout_additional` receives a copy
/// of every console line, and `scheduler` replaces the wall clock when given.
pub async fn run<F>(
    args: Vec<String>,
    lookup: F,
    mut stdout_additional: Option<&mut dyn std::io::Write>,
    scheduler: Option<&dyn Scheduler>,
) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let scheduler = scheduler.unwrap_or(&TokioScheduler);

    match cli::parser::parse_args(&args) {
        cli::parser::Command::Create { file } => {
            let config = config::resolve_config(&lookup)?;
            let path = file.as_deref().unwrap_or(config::DEFAULT_ISSUES_FILE);
            let issues = issue_file::load_issue_specs(Path::new(path))?;
            tracing::debug!(count = issues.len(), path, "Loaded issue file");

            let client = github::client::GitHubClient::new(&config)?;
            github::create::create_issues(&client, scheduler, &issues, &mut stdout_additional)
                .await
                .context("Failed to write output")?;
        }
        cli::parser::Command::DeleteClosed => {
            let config = config::resolve_config(&lookup)?;
            let client = github::client::GitHubClient::new(&config)?;
            github::delete::delete_closed_issues(&client, scheduler, &mut stdout_additional)
                .await
                .context("Failed to write output")?;
        }
        cli::parser::Command::Help => {
            output::println(cli::parser::USAGE, &mut stdout_additional)?;
        }
        cli::parser::Command::Unknown(_) => {
            output::println(
                "Invalid command or arguments. Use --help for usage.",
                &mut stdout_additional,
            )?;
        }
    }
    Ok(())
}
