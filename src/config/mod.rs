// src/config/mod.rs
//! Configuration system for hash-bytes
//!
//! Central, lazy-loaded global config with TOML + env overrides.
//! No file is required: without one, built-in defaults apply.

pub use app::{load, Config, RandomConfig, SchedulerConfig};

mod app;
mod defaults;
