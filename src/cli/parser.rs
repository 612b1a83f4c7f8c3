/// Enum representing CLI commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Create { file: Option<String> },
    DeleteClosed,
    Help,
    Unknown(String),
}

pub const USAGE: &str = "\
Usage: issuebatch <command>

Commands:
  create [file]    Create the issues listed in a JSON file (default: ./issue.json)
  delete-closed    Delete every closed issue in the repository
  help             Show this message

Environment:
  CREDENTIAL       GitHub token (ISSUE_AUTOMATION is also accepted)
  OWNER            Repository owner
  REPO             Repository name
  GITHUB_API_URL   API base URL (default: https://api.github.com)";

/// Parse command line arguments and return a Command
///
/// # Arguments
/// * `args` - Command line arguments (including program name)
///
/// # Returns
/// * `Command` - The parsed command
pub fn parse_args(args: &[String]) -> Command {
    match args.len() {
        0 | 1 => Command::Help,
        2 => match args[1].as_str() {
            "create" => Command::Create { file: None },
            "delete-closed" => Command::DeleteClosed,
            "help" | "--help" | "-h" => Command::Help,
            cmd => Command::Unknown(cmd.to_string()),
        },
        3 => match (args[1].as_str(), args[2].as_str()) {
            ("create", file) if !file.is_empty() => Command::Create {
                file: Some(file.to_string()),
            },
            (cmd1, cmd2) => Command::Unknown(format!("{} {}", cmd1, cmd2)),
        },
        _ => Command::Unknown(args[1..].join(" ")),
    }
}
