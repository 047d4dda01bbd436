//! Configuration for the worker-thread hand-off.
//!
//! Validation uses Stillwater's `Validation` so every problem with a
//! configuration is reported at once rather than one per attempt.
//!
//! # Example
//!
//! ```rust
//! use traffic_lights::config::{HandOffConfig, PollStrategy};
//!
//! let config = HandOffConfig::new()
//!     .worker_name("crossing-7")
//!     .poll(PollStrategy::Sleep { micros: 50 });
//! assert!(config.validate().is_success());
//!
//! let parsed = HandOffConfig::from_json(r#"{ "poll": "spin" }"#).unwrap();
//! assert_eq!(parsed.poll_strategy(), PollStrategy::Spin);
//! ```

use crate::error::LightsError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Default name given to the worker thread.
pub const DEFAULT_WORKER_NAME: &str = "lights-worker";

/// Longest pause accepted between polls of the mailbox.
pub const MAX_SLEEP_MICROS: u64 = 1_000_000;

/// What a side of the mailbox does after a poll that found nothing to do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollStrategy {
    /// Busy-wait with a spin-loop hint
    Spin,
    /// Give the rest of the time slice back to the scheduler
    #[default]
    Yield,
    /// Sleep for a fixed interval
    Sleep { micros: u64 },
}

impl PollStrategy {
    /// Wait once according to the strategy.
    pub fn pause(self) {
        match self {
            Self::Spin => std::hint::spin_loop(),
            Self::Yield => std::thread::yield_now(),
            Self::Sleep { micros } => std::thread::sleep(Duration::from_micros(micros)),
        }
    }
}

/// A single configuration problem.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Worker name must not be empty")]
    EmptyWorkerName,

    #[error("Worker name must not contain NUL bytes")]
    NulInWorkerName,

    #[error("Sleep interval must be at least one microsecond")]
    ZeroSleep,

    #[error("Sleep interval ({micros}us) exceeds the maximum of {max}us")]
    SleepTooLong { micros: u64, max: u64 },
}

/// Settings for [`ThreadLights`](crate::ThreadLights).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandOffConfig {
    worker_name: String,
    poll: PollStrategy,
}

impl Default for HandOffConfig {
    fn default() -> Self {
        Self {
            worker_name: DEFAULT_WORKER_NAME.to_string(),
            poll: PollStrategy::default(),
        }
    }
}

impl HandOffConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker thread's name
    pub fn worker_name(mut self, name: impl Into<String>) -> Self {
        self.worker_name = name.into();
        self
    }

    /// Set how both sides wait between polls
    pub fn poll(mut self, strategy: PollStrategy) -> Self {
        self.poll = strategy;
        self
    }

    pub fn name(&self) -> &str {
        &self.worker_name
    }

    pub fn poll_strategy(&self) -> PollStrategy {
        self.poll
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LightsError> {
        serde_json::from_str(json).map_err(|e| LightsError::ConfigParse(e.to_string()))
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        checks.push(if self.worker_name.is_empty() {
            Validation::fail(ConfigError::EmptyWorkerName)
        } else {
            Validation::success(())
        });

        checks.push(if self.worker_name.contains('\0') {
            Validation::fail(ConfigError::NulInWorkerName)
        } else {
            Validation::success(())
        });

        if let PollStrategy::Sleep { micros } = self.poll {
            checks.push(if micros == 0 {
                Validation::fail(ConfigError::ZeroSleep)
            } else if micros > MAX_SLEEP_MICROS {
                Validation::fail(ConfigError::SleepTooLong {
                    micros,
                    max: MAX_SLEEP_MICROS,
                })
            } else {
                Validation::success(())
            });
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate, collapsing every violation into one [`LightsError`].
    pub fn check(&self) -> Result<(), LightsError> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(errors) => {
                let message = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                Err(LightsError::InvalidConfig(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = HandOffConfig::default();
        assert_eq!(config.name(), DEFAULT_WORKER_NAME);
        assert_eq!(config.poll_strategy(), PollStrategy::Yield);
        assert!(config.validate().is_success());
        assert!(config.check().is_ok());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = HandOffConfig::new()
            .worker_name("")
            .poll(PollStrategy::Sleep { micros: 0 });

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::EmptyWorkerName)));
                assert!(errors.iter().any(|e| matches!(e, ConfigError::ZeroSleep)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn nul_byte_in_name_is_rejected() {
        let config = HandOffConfig::new().worker_name("bad\0name");

        let result = config.validate();
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors
                .iter()
                .any(|e| matches!(e, ConfigError::NulInWorkerName)));
        }
    }

    #[test]
    fn long_sleep_is_rejected() {
        let config = HandOffConfig::new().poll(PollStrategy::Sleep {
            micros: MAX_SLEEP_MICROS + 1,
        });

        let err = config.check().unwrap_err();
        assert!(matches!(err, LightsError::InvalidConfig(_)));
        assert!(err.to_string().contains("exceeds the maximum"));
    }

    #[test]
    fn check_joins_messages() {
        let config = HandOffConfig::new()
            .worker_name("")
            .poll(PollStrategy::Sleep { micros: 0 });

        let err = config.check().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid hand-off configuration: Worker name must not be empty; \
             Sleep interval must be at least one microsecond"
        );
    }

    #[test]
    fn json_fills_in_defaults() {
        let config = HandOffConfig::from_json(r#"{ "worker_name": "north" }"#).unwrap();
        assert_eq!(config.name(), "north");
        assert_eq!(config.poll_strategy(), PollStrategy::Yield);
    }

    #[test]
    fn json_parses_sleep_strategy() {
        let config = HandOffConfig::from_json(r#"{ "poll": { "sleep": { "micros": 25 } } }"#).unwrap();
        assert_eq!(config.poll_strategy(), PollStrategy::Sleep { micros: 25 });
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = HandOffConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LightsError::ConfigParse(_)));
    }
}
