use crate::{ConfigError, ConfigErrorResult};

use std::fmt::Display;
use std::time::Duration;

use serde::Deserialize;

pub const MIN_MAX_ATTEMPTS: u32 = 1;
pub const MAX_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

pub const MIN_INITIAL_DELAY_MS: u64 = 10;
pub const MAX_INITIAL_DELAY_MS: u64 = 10_000;
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 100;

pub const MIN_MAX_DELAY_SECS: u64 = 1;
pub const MAX_MAX_DELAY_SECS: u64 = 60;
pub const DEFAULT_MAX_DELAY_SECS: u64 = 5;

pub const MIN_BACKOFF_MULTIPLIER: f64 = 1.0;
pub const MAX_BACKOFF_MULTIPLIER: f64 = 10.0;
pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;

pub const DEFAULT_JITTER: bool = true;

/// Backoff policy for gateway reads (task list, comments, teachers).
///
/// Mutating calls are never retried, whatever this says.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts, the first one included
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_secs: u64,
    /// Delay growth per attempt (2.0 doubles)
    pub backoff_multiplier: f64,
    /// Scale each delay by a random factor in 0.5..1.5
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
            max_delay_secs: DEFAULT_MAX_DELAY_SECS,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
            jitter: DEFAULT_JITTER,
        }
    }
}

impl RetryConfig {
    /// Single attempt, no waiting. Handy for tests and one-shot tools.
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            jitter: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range(
            "retry.max_attempts",
            self.max_attempts,
            MIN_MAX_ATTEMPTS,
            MAX_MAX_ATTEMPTS,
        )?;
        check_range(
            "retry.initial_delay_ms",
            self.initial_delay_ms,
            MIN_INITIAL_DELAY_MS,
            MAX_INITIAL_DELAY_MS,
        )?;
        check_range(
            "retry.max_delay_secs",
            self.max_delay_secs,
            MIN_MAX_DELAY_SECS,
            MAX_MAX_DELAY_SECS,
        )?;
        check_range(
            "retry.backoff_multiplier",
            self.backoff_multiplier,
            MIN_BACKOFF_MULTIPLIER,
            MAX_BACKOFF_MULTIPLIER,
        )
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_secs(self.max_delay_secs)
    }
}

#[track_caller]
fn check_range<T: PartialOrd + Display>(name: &str, value: T, min: T, max: T) -> ConfigErrorResult<()> {
    if value < min || value > max {
        return Err(ConfigError::retry(format!(
            "{name} must be {min}-{max}, got {value}"
        )));
    }
    Ok(())
}
