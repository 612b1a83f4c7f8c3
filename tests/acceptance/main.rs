use async_trait::async_trait;
use cucumber::World;
use issuebatch::schedule::Scheduler;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

/// Clock reading every scenario starts from.
pub const NOW: i64 = 1_700_000_000;

/// Scheduler that records pauses and advances a fake clock instead of waiting.
#[derive(Debug)]
pub struct RecordingScheduler {
    pub sleeps: Mutex<Vec<Duration>>,
    now: Mutex<i64>,
}

impl Default for RecordingScheduler {
    fn default() -> Self {
        RecordingScheduler {
            sleeps: Mutex::new(Vec::new()),
            now: Mutex::new(NOW),
        }
    }
}

#[async_trait]
impl Scheduler for RecordingScheduler {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
        *self.now.lock().unwrap() += duration.as_secs() as i64;
    }

    fn now_epoch_seconds(&self) -> i64 {
        *self.now.lock().unwrap()
    }
}

#[derive(Default, World)]
pub struct IssueBatchWorld {
    pub server: Option<mockito::ServerGuard>,
    pub mocks: Vec<(String, mockito::Mock)>,
    pub env: HashMap<String, String>,
    pub issue_file: Option<tempfile::NamedTempFile>,
    pub forbidden_ids: HashSet<String>,
    pub scheduler: RecordingScheduler,
    pub captured_output: Vec<u8>,
    pub run_result: Option<Result<(), anyhow::Error>>,
}

impl std::fmt::Debug for IssueBatchWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssueBatchWorld")
            .field("server", &self.server.as_ref().map(|s| s.url()))
            .field("mocks", &self.mocks.iter().map(|(name, _)| name).collect::<Vec<_>>())
            .field("env", &self.env)
            .field("captured_output", &String::from_utf8_lossy(&self.captured_output))
            .field("run_result", &self.run_result)
            .finish()
    }
}

#[tokio::main]
async fn main() {
    IssueBatchWorld::run("features").await;
}
