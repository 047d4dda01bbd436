//! Phase transition history tracking.
//!
//! Provides immutable tracking of intake phase changes over time,
//! following functional programming principles.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase transition.
///
/// # Example
///
/// ```rust
/// use traffic_lights::core::StateTransition;
/// use traffic_lights::Phase;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Phase::Count,
///     to: Phase::Collecting,
///     timestamp: Utc::now(),
///     input: 1,
/// };
/// assert_eq!(transition.input, 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The phase being left
    pub from: S,
    /// The phase being entered
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// 1-based ordinal of the input that caused the transition
    pub input: u64,
}

/// Ordered history of phase transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use traffic_lights::core::{StateHistory, StateTransition};
/// use traffic_lights::Phase;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Phase::Count,
///         to: Phase::Collecting,
///         timestamp: Utc::now(),
///         input: 1,
///     })
///     .record(StateTransition {
///         from: Phase::Collecting,
///         to: Phase::Running,
///         timestamp: Utc::now(),
///         input: 4,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::Count, &Phase::Collecting, &Phase::Running]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of phases traversed.
    ///
    /// Returns the starting phase followed by the `to` phase of each
    /// transition. Empty if nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
