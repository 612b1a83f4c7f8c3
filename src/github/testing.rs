//! In-memory stand-ins for GitHub and the clock, shared by the unit tests.

use crate::github::api::IssueApi;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::issues::{ClosedIssue, ClosedIssuesPage, CreatedIssue, PageInfo, RateLimit};
use crate::issue_file::IssueSpec;
use crate::schedule::Scheduler;
use async_trait::async_trait;
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    RateLimit,
    Create(String),
    FetchPage(Option<String>),
    Delete(String),
    /// Requested pause and the fake clock reading when it was requested.
    Sleep(Duration, i64),
}

pub type EventLog = Arc<Mutex<Vec<Event>>>;

#[derive(Default)]
pub struct FakeApi {
    pub log: EventLog,
    pub rate_limits: Mutex<VecDeque<GitHubResult<RateLimit>>>,
    pub failing_titles: HashSet<String>,
    pub pages: Mutex<VecDeque<GitHubResult<ClosedIssuesPage>>>,
    pub failing_ids: HashSet<String>,
}

impl FakeApi {
    pub fn new(log: EventLog) -> Self {
        FakeApi {
            log,
            ..Default::default()
        }
    }

    fn record(&self, event: Event) {
        self.log.lock().unwrap().push(event);
    }
}

pub fn api_error(message: &str) -> GitHubError {
    GitHubError::GraphQl(message.to_string())
}

pub fn page(has_next_page: bool, end_cursor: Option<&str>, ids: &[(&str, u64, &str)]) -> ClosedIssuesPage {
    ClosedIssuesPage {
        page_info: PageInfo {
            has_next_page,
            end_cursor: end_cursor.map(str::to_string),
        },
        nodes: ids
            .iter()
            .map(|(id, number, title)| ClosedIssue {
                id: id.to_string(),
                number: *number,
                title: title.to_string(),
            })
            .collect(),
    }
}

#[async_trait]
impl IssueApi for FakeApi {
    async fn rate_limit(&self) -> GitHubResult<RateLimit> {
        self.record(Event::RateLimit);
        self.rate_limits.lock().unwrap().pop_front().unwrap_or(Ok(RateLimit {
            remaining: 5000,
            reset: 0,
        }))
    }

    async fn create_issue(&self, issue: &IssueSpec) -> GitHubResult<CreatedIssue> {
        self.record(Event::Create(issue.title.clone()));
        if self.failing_titles.contains(&issue.title) {
            return Err(api_error("Validation Failed"));
        }
        let number = self
            .log
            .lock()
            .unwrap()
            .iter()
            .filter(|e| matches!(e, Event::Create(_)))
            .count() as u64;
        Ok(CreatedIssue {
            number,
            html_url: None,
        })
    }

    async fn closed_issues_page(&self, cursor: Option<&str>) -> GitHubResult<ClosedIssuesPage> {
        self.record(Event::FetchPage(cursor.map(str::to_string)));
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(page(false, None, &[])))
    }

    async fn delete_issue(&self, issue_id: &str) -> GitHubResult<()> {
        self.record(Event::Delete(issue_id.to_string()));
        if self.failing_ids.contains(issue_id) {
            return Err(api_error("Must have admin rights to Repository."));
        }
        Ok(())
    }
}

/// Clock that advances only when something sleeps on it.
pub struct FakeScheduler {
    log: EventLog,
    now: Mutex<i64>,
}

impl FakeScheduler {
    pub fn new(log: EventLog, now: i64) -> Self {
        FakeScheduler {
            log,
            now: Mutex::new(now),
        }
    }
}

#[async_trait]
impl Scheduler for FakeScheduler {
    async fn sleep(&self, duration: Duration) {
        let mut now = self.now.lock().unwrap();
        self.log
            .lock()
            .unwrap()
            .push(Event::Sleep(duration, *now));
        *now += duration.as_secs() as i64;
    }

    fn now_epoch_seconds(&self) -> i64 {
        *self.now.lock().unwrap()
    }
}
