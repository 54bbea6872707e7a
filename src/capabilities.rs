// src/capabilities.rs
//! Host capabilities, detected once and passed explicitly
//!
//! Detection order: byte order first (big-endian hosts are rejected before
//! anything else runs), then the secure random source, then the
//! continuation adapter.

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::aliases::{SecretBytes, Seed32};
use crate::config::Config;
use crate::error::Result;
use crate::random::{self, RandomSource};
use crate::scheduler::{Clock, Scheduler, SystemClock};
use crate::view::Endianness;

pub struct Capabilities {
    endianness: Endianness,
    random: Box<dyn RandomSource>,
    scheduler: Box<dyn Scheduler>,
    clock: Box<dyn Clock>,
    default_random_length: usize,
    tick: Duration,
}

impl Capabilities {
    /// Probe the running host according to `config`
    pub fn detect(config: &Config) -> Result<Self> {
        Self::detect_for(Endianness::host(), config)
    }

    /// Probe with an explicit byte order reading
    pub fn detect_for(endianness: Endianness, config: &Config) -> Result<Self> {
        let endianness = endianness.ensure_supported()?;

        let preferred = config.random.preferred_source;
        let random = random::select_random_source(&[preferred, preferred.fallback()])?;
        let scheduler = config.scheduler.continuation.scheduler();

        debug!(
            random = random.name(),
            scheduler = scheduler.name(),
            "host capabilities detected"
        );

        Ok(Self {
            endianness,
            random,
            scheduler,
            clock: Box::new(SystemClock),
            default_random_length: config.random.default_length,
            tick: config.scheduler.tick(),
        })
    }

    /// Detect using the process-wide config
    pub fn from_global_config() -> Result<Self> {
        Self::detect(crate::config::load())
    }

    pub fn with_random(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn with_scheduler(mut self, scheduler: Box<dyn Scheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn random_source(&self) -> &dyn RandomSource {
        self.random.as_ref()
    }

    pub fn scheduler(&self) -> &dyn Scheduler {
        self.scheduler.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn default_random_length(&self) -> usize {
        self.default_random_length
    }

    /// Configured interval between cooperative yields
    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Exactly `len` secure random bytes
    pub fn random_bytes(&self, len: usize) -> Result<Vec<u8>> {
        random::random_bytes(self.random_source(), len)
    }

    /// Secure random bytes of the configured default length (32 unless overridden)
    pub fn random_bytes_default(&self) -> Result<Vec<u8>> {
        self.random_bytes(self.default_random_length)
    }

    pub fn random_secret(&self, len: usize) -> Result<SecretBytes> {
        random::random_secret(self.random_source(), len)
    }

    pub fn random_seed32(&self) -> Result<Seed32> {
        random::random_seed32(self.random_source())
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("endianness", &self.endianness)
            .field("random", &self.random.name())
            .field("scheduler", &self.scheduler.name())
            .field("default_random_length", &self.default_random_length)
            .field("tick", &self.tick)
            .finish()
    }
}
