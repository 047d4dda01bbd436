//! Error types for constructing and driving light controllers.

use thiserror::Error;

/// Errors surfaced by controller constructors and checked submission.
///
/// Out-of-range indices are not errors; they are reported through
/// [`Activity`](crate::Activity) and the log.
#[derive(Debug, Error)]
pub enum LightsError {
    /// `try_submit` was called while no routine is suspended waiting for input
    #[error("Controller is not ready to accept input")]
    NotReady,

    /// The worker thread could not be spawned
    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// Hand-off configuration failed validation
    #[error("Invalid hand-off configuration: {0}")]
    InvalidConfig(String),

    /// Hand-off configuration could not be parsed
    #[error("Failed to parse hand-off configuration: {0}")]
    ConfigParse(String),
}
