pub mod cli;
pub mod config;
pub mod github;
pub mod issue_file;
pub mod output;
pub mod run;
pub mod schedule;
