//! Message types for controller lifecycle and input events.

use crate::observability::StructuredLog;
use std::fmt::{Display, Formatter};

/// Active pattern changed after a successful index lookup.
///
/// # Log Level
/// `info!` - Observable output of the controller
pub struct SwitchingLights {
    pub from: u32,
    pub to: u32,
}

impl Display for SwitchingLights {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Switching lights from {} to {}", self.from, self.to)
    }
}

impl StructuredLog for SwitchingLights {
    fn log(&self) {
        tracing::info!(from = self.from, to = self.to, "{}", self);
    }
}

/// Index during the running phase did not name a pattern.
///
/// # Log Level
/// `warn!` - Reported and ignored, the active pattern is unchanged
pub struct IndexOutOfBounds {
    pub index: u32,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Out of bounds: {} >= {}", self.index, self.len)
    }
}

impl StructuredLog for IndexOutOfBounds {
    fn log(&self) {
        tracing::warn!(index = self.index, len = self.len, "{}", self);
    }
}

/// Pattern table installed, controller is now running.
///
/// # Log Level
/// `debug!`
pub struct IntakeComplete {
    pub patterns: usize,
}

impl Display for IntakeComplete {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Intake complete with {} patterns", self.patterns)
    }
}

impl StructuredLog for IntakeComplete {
    fn log(&self) {
        tracing::debug!(patterns = self.patterns, "{}", self);
    }
}

/// Explicit state machine moved to its next phase.
///
/// # Log Level
/// `debug!`
pub struct PhaseAdvanced<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub input: u64,
}

impl Display for PhaseAdvanced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Phase {} -> {} on input #{}",
            self.from, self.to, self.input
        )
    }
}

impl StructuredLog for PhaseAdvanced<'_> {
    fn log(&self) {
        tracing::debug!(from = self.from, to = self.to, input = self.input, "{}", self);
    }
}

/// Worker observed the interruption flag and stopped.
///
/// # Log Level
/// `info!`
pub struct WorkerInterrupted<'a> {
    pub worker: &'a str,
}

impl Display for WorkerInterrupted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Thread interrupted.")
    }
}

impl StructuredLog for WorkerInterrupted<'_> {
    fn log(&self) {
        tracing::info!(worker = self.worker, "{}", self);
    }
}

/// Worker thread ended by panicking instead of by interruption.
///
/// # Log Level
/// `error!`
pub struct WorkerPanicked<'a> {
    pub worker: &'a str,
}

impl Display for WorkerPanicked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Worker thread '{}' panicked", self.worker)
    }
}

impl StructuredLog for WorkerPanicked<'_> {
    fn log(&self) {
        tracing::error!(worker = self.worker, "{}", self);
    }
}
