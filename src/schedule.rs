use async_trait::async_trait;
use std::time::Duration;

/// Fixed pause between two consecutive API writes.
pub const THROTTLE_INTERVAL: Duration = Duration::from_millis(2000);

/// Source of time for the throttled loops.
///
/// Production code uses [`TokioScheduler`]; tests substitute a fake that
/// records the requested pauses instead of waiting.
#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Suspend the current task for `duration`.
    async fn sleep(&self, duration: Duration);
    /// Current Unix time in whole seconds.
    fn now_epoch_seconds(&self) -> i64;
}

/// Wall-clock scheduler backed by `tokio::time`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn now_epoch_seconds(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Time left until `reset_epoch_seconds`, or zero if it is already in the past.
pub fn wait_until_reset(reset_epoch_seconds: i64, now_epoch_seconds: i64) -> Duration {
    let seconds = reset_epoch_seconds.saturating_sub(now_epoch_seconds).max(0);
    Duration::from_secs(seconds as u64)
}
