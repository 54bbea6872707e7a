// src/async_loop.rs
//! Cooperative loop: runs a long synchronous iteration in bursts
//!
//! After every callback the loop measures wall-clock time since its last
//! checkpoint. Once a full tick has passed it awaits one continuation from
//! the host scheduler, then advances the checkpoint by the measured amount
//! (not to "now"), so repeated yields keep fair cumulative timing.
//!
//! A reading earlier than the checkpoint means the clock went backward;
//! that forces an immediate yield and is counted, never reported as an
//! error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::capabilities::Capabilities;

/// Shared flag that stops a running loop before its next iteration
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// What a loop run did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopReport {
    /// Callbacks invoked, always a prefix `0..completed`
    pub completed: usize,
    pub yields: usize,
    pub clock_anomalies: usize,
    pub cancelled: bool,
}

/// Invoke `cb(i)` for every `i` in `0..iterations`, yielding each `tick`
///
/// A zero tick yields after every iteration.
pub async fn async_loop<F>(
    caps: &Capabilities,
    iterations: usize,
    tick: Duration,
    cb: F,
) -> LoopReport
where
    F: FnMut(usize),
{
    async_loop_until(caps, iterations, tick, &CancelToken::new(), cb).await
}

/// [`async_loop`] at the tick the capabilities were configured with
pub async fn async_loop_default<F>(caps: &Capabilities, iterations: usize, cb: F) -> LoopReport
where
    F: FnMut(usize),
{
    async_loop(caps, iterations, caps.tick(), cb).await
}

/// [`async_loop`] that checks `cancel` before each iteration
pub async fn async_loop_until<F>(
    caps: &Capabilities,
    iterations: usize,
    tick: Duration,
    cancel: &CancelToken,
    mut cb: F,
) -> LoopReport
where
    F: FnMut(usize),
{
    let tick_ms = i64::try_from(tick.as_millis()).unwrap_or(i64::MAX);
    let clock = caps.clock();
    let mut report = LoopReport::default();
    let mut checkpoint = clock.now_millis();

    for i in 0..iterations {
        if cancel.is_cancelled() {
            debug!(completed = i, "cooperative loop cancelled");
            report.cancelled = true;
            return report;
        }

        cb(i);
        report.completed += 1;

        let elapsed = clock.now_millis().saturating_sub(checkpoint);
        if elapsed < 0 {
            warn!(elapsed, "clock moved backward, forcing yield");
            report.clock_anomalies += 1;
        } else if elapsed < tick_ms {
            continue;
        }

        caps.scheduler().schedule_continuation().await;
        report.yields += 1;
        checkpoint = checkpoint.saturating_add(elapsed);
    }

    debug!(
        completed = report.completed,
        yields = report.yields,
        "cooperative loop finished"
    );
    report
}
