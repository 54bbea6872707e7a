// src/config/defaults.rs
use crate::config::app::{RandomConfig, SchedulerConfig};
use crate::consts::{DEFAULT_RANDOM_LENGTH, DEFAULT_TICK_MS};
use crate::random::SourceKind;
use crate::scheduler::ContinuationKind;

pub fn default_random() -> RandomConfig {
    RandomConfig {
        default_length: DEFAULT_RANDOM_LENGTH,
        preferred_source: SourceKind::Os,
    }
}

pub fn default_scheduler() -> SchedulerConfig {
    SchedulerConfig {
        tick_ms: DEFAULT_TICK_MS,
        continuation: ContinuationKind::Yield,
    }
}
