//! # Runtime Configuration
//!
//! Environment-driven settings for the coroutine runtime, applied once
//! before the listener starts.
//!
//! - `GETJSON_STACK_SIZE` - coroutine stack size in bytes, decimal or
//!   `0x`-prefixed hexadecimal (default `0x4000`, 16 KB).
//! - `GETJSON_WORKERS` - scheduler worker threads serving requests
//!   (default 10, a fixed pool).

use std::env;
use tracing::info;

/// Runtime settings loaded from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Stack size for coroutines in bytes.
    pub stack_size: usize,
    /// Number of scheduler worker threads.
    pub workers: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            stack_size: 0x4000,
            workers: 10,
        }
    }
}

impl RuntimeConfig {
    /// Loads the configuration from environment variables, falling back to
    /// the defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let stack_size = env::var("GETJSON_STACK_SIZE")
            .ok()
            .and_then(|value| parse_size(&value))
            .unwrap_or(defaults.stack_size);
        let workers = env::var("GETJSON_WORKERS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.workers);
        Self {
            stack_size,
            workers,
        }
    }

    /// Applies the settings to the may scheduler.
    ///
    /// Call once before the listener starts accepting connections.
    pub fn apply(&self) {
        may::config()
            .set_stack_size(self.stack_size)
            .set_workers(self.workers);
        info!(
            stack_size = self.stack_size,
            workers = self.workers,
            "Runtime configured"
        );
    }
}

fn parse_size(value: &str) -> Option<usize> {
    if let Some(hex) = value.strip_prefix("0x") {
        usize::from_str_radix(hex, 16).ok()
    } else {
        value.parse().ok()
    }
}
