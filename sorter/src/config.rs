//! Widget configuration parsed from defaults, environment, or caller input.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ARRAY_SIZE, ENV_MAX, ENV_MIN, ENV_SEED, ENV_SIZE, ENV_STEP_DELAY_MS, MAX_VALUE, MIN_VALUE, STEP_DELAY_MS,
};

/// Error returned when a configuration cannot produce a sortable array.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `size` was zero.
    #[error("array size must be positive")]
    EmptyArray,
    /// `min_value` was greater than `max_value`.
    #[error("min value {min} exceeds max value {max}")]
    InvertedRange { min: i64, max: i64 },
    /// An environment variable was set but did not parse.
    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
}

/// Options recognized by the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Number of bars.
    pub size: usize,
    /// Inclusive lower bound of generated values.
    pub min_value: i64,
    /// Inclusive upper bound of generated values.
    pub max_value: i64,
    /// Pause after each comparison highlight.
    pub step_delay_ms: u64,
    /// Fixed RNG seed. `None` draws from OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            size: ARRAY_SIZE,
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
            step_delay_ms: STEP_DELAY_MS,
            seed: None,
        }
    }
}

impl SortConfig {
    /// Overlay `CASSETTE_*` environment variables onto `self`.
    ///
    /// Recognized:
    /// - `CASSETTE_SORT_SIZE`
    /// - `CASSETTE_SORT_MIN`
    /// - `CASSETTE_SORT_MAX`
    /// - `CASSETTE_STEP_DELAY_MS`
    /// - `CASSETTE_SORT_SEED`
    ///
    /// Unset or blank variables keep the current value. The result is not
    /// validated, so callers can layer more overrides before [`SortConfig::validate`].
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SortConfig::with_env`] with an injectable variable source.
    pub fn with_lookup<F>(self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            size: parse_var(&lookup, ENV_SIZE)?.unwrap_or(self.size),
            min_value: parse_var(&lookup, ENV_MIN)?.unwrap_or(self.min_value),
            max_value: parse_var(&lookup, ENV_MAX)?.unwrap_or(self.max_value),
            step_delay_ms: parse_var(&lookup, ENV_STEP_DELAY_MS)?.unwrap_or(self.step_delay_ms),
            seed: parse_var(&lookup, ENV_SEED)?.or(self.seed),
        })
    }

    /// Reject configurations that cannot produce an array.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyArray);
        }
        if self.min_value > self.max_value {
            return Err(ConfigError::InvertedRange { min: self.min_value, max: self.max_value });
        }
        Ok(())
    }

    #[must_use]
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv { key, value: raw.clone() })
}
