// src/scheduler.rs
//! Host scheduling and clock adapters used by the cooperative loop

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use chrono::Utc;
use serde::Deserialize;

pub type Continuation<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Hands control back to the host scheduler for a minimal delay
pub trait Scheduler: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;

    fn schedule_continuation(&self) -> Continuation<'_>;
}

/// Wall-clock time source; readings may move backward
pub trait Clock: Send + Sync + fmt::Debug {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Which continuation adapter to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContinuationKind {
    /// Re-queue the task immediately
    #[default]
    Yield,
    /// Park on a zero-length timer
    Timer,
}

impl ContinuationKind {
    pub fn scheduler(self) -> Box<dyn Scheduler> {
        match self {
            ContinuationKind::Yield => Box::new(YieldNow),
            ContinuationKind::Timer => Box::new(ZeroDelayTimer),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YieldNow;

impl Scheduler for YieldNow {
    fn name(&self) -> &'static str {
        "yield"
    }

    fn schedule_continuation(&self) -> Continuation<'_> {
        Box::pin(tokio::task::yield_now())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroDelayTimer;

impl Scheduler for ZeroDelayTimer {
    fn name(&self) -> &'static str {
        "timer"
    }

    fn schedule_continuation(&self) -> Continuation<'_> {
        Box::pin(tokio::time::sleep(Duration::ZERO))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
