//! Explicit state machine controller.
//!
//! Every input is processed inside `submit` on the caller's thread. The
//! intake position lives in an explicit [`Phase`] field instead of in a
//! suspended routine.

use crate::controller::LightController;
use crate::core::{State, StateHistory, StateTransition};
use crate::lights::{reserve_table, Activity, Lights};
use crate::observability::messages::PhaseAdvanced;
use crate::observability::StructuredLog;
use chrono::Utc;

crate::state_enum! {
    /// How the next input will be interpreted.
    #[derive(Copy, Eq)]
    pub enum Phase {
        /// Next input is the number of patterns
        Count,
        /// Next input is a pattern
        Collecting,
        /// Next input is an index into the pattern table
        Running,
    }
    final: [Running]
}

/// Light controller driven by an explicit phase field.
///
/// # Example
///
/// ```rust
/// use traffic_lights::{LightController, Phase, StateMachineLights};
///
/// let mut lights = StateMachineLights::new();
/// lights.submit(1);
/// assert_eq!(lights.phase(), Phase::Collecting);
/// lights.submit(42);
/// assert_eq!(lights.phase(), Phase::Running);
/// lights.submit(0);
/// assert_eq!(lights.current_pattern(), 42);
/// ```
#[derive(Clone, Debug)]
pub struct StateMachineLights {
    phase: Phase,
    len: usize,
    collected: Vec<u32>,
    lights: Lights,
    history: StateHistory<Phase>,
    inputs: u64,
}

impl StateMachineLights {
    pub fn new() -> Self {
        Self {
            phase: Phase::Count,
            len: 0,
            collected: Vec::new(),
            lights: Lights::new(),
            history: StateHistory::new(),
            inputs: 0,
        }
    }

    /// Current intake phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Phase transitions taken so far.
    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    fn advance(&mut self, to: Phase) {
        PhaseAdvanced {
            from: self.phase.name(),
            to: to.name(),
            input: self.inputs,
        }
        .log();
        self.history = self.history.record(StateTransition {
            from: self.phase,
            to,
            timestamp: Utc::now(),
            input: self.inputs,
        });
        self.phase = to;
    }

    fn finish_intake(&mut self) {
        let table = std::mem::take(&mut self.collected);
        self.lights.install(table);
        self.advance(Phase::Running);
    }
}

impl Default for StateMachineLights {
    fn default() -> Self {
        Self::new()
    }
}

impl LightController for StateMachineLights {
    fn submit(&mut self, input: u32) {
        self.inputs += 1;
        match self.phase {
            Phase::Count => {
                self.len = input as usize;
                self.collected = reserve_table(input);
                if self.len == 0 {
                    self.finish_intake();
                } else {
                    self.advance(Phase::Collecting);
                }
            }
            Phase::Collecting => {
                self.collected.push(input);
                if self.collected.len() == self.len {
                    self.finish_intake();
                }
            }
            Phase::Running => {
                self.lights.select(input);
            }
        }
    }

    fn current_pattern(&self) -> u32 {
        self.lights.current()
    }

    fn patterns(&self) -> Option<Vec<u32>> {
        self.lights.patterns().map(<[u32]>::to_vec)
    }

    fn activity(&self) -> Activity {
        self.lights.activity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lights::{OutOfBounds, OFF};

    fn feed(lights: &mut StateMachineLights, inputs: &[u32]) {
        for &input in inputs {
            lights.submit(input);
        }
    }

    #[test]
    fn starts_awaiting_count() {
        let lights = StateMachineLights::new();
        assert_eq!(lights.phase(), Phase::Count);
        assert_eq!(lights.current_pattern(), OFF);
        assert!(lights.patterns().is_none());
        assert!(lights.history().transitions().is_empty());
    }

    #[test]
    fn count_moves_to_collecting() {
        let mut lights = StateMachineLights::new();
        lights.submit(3);
        assert_eq!(lights.phase(), Phase::Collecting);
        assert!(lights.patterns().is_none());
    }

    #[test]
    fn intake_installs_table_without_switching() {
        let mut lights = StateMachineLights::new();
        feed(&mut lights, &[3, 9, 8, 7]);

        assert_eq!(lights.phase(), Phase::Running);
        assert_eq!(lights.patterns(), Some(vec![9, 8, 7]));
        assert_eq!(lights.current_pattern(), OFF);
        assert_eq!(lights.activity().switches, 0);
    }

    #[test]
    fn running_phase_is_terminal() {
        let mut lights = StateMachineLights::new();
        feed(&mut lights, &[1, 5, 0, 0, 100, 0]);

        assert_eq!(lights.phase(), Phase::Running);
        assert!(lights.phase().is_final());
        assert_eq!(lights.patterns(), Some(vec![5]));
        assert_eq!(lights.history().transitions().len(), 2);
    }

    #[test]
    fn history_records_phase_path() {
        let mut lights = StateMachineLights::new();
        feed(&mut lights, &[2, 1, 2]);

        let path = lights.history().get_path();
        assert_eq!(
            path,
            vec![&Phase::Count, &Phase::Collecting, &Phase::Running]
        );
        let inputs: Vec<u64> = lights
            .history()
            .transitions()
            .iter()
            .map(|t| t.input)
            .collect();
        assert_eq!(inputs, vec![1, 3]);
    }

    #[test]
    fn zero_count_goes_straight_to_running() {
        let mut lights = StateMachineLights::new();
        lights.submit(0);

        assert_eq!(lights.phase(), Phase::Running);
        assert_eq!(lights.patterns(), Some(Vec::new()));
        assert_eq!(
            lights.history().get_path(),
            vec![&Phase::Count, &Phase::Running]
        );

        lights.submit(0);
        assert_eq!(lights.current_pattern(), OFF);
        assert_eq!(
            lights.activity().last_out_of_bounds,
            Some(OutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn selecting_same_index_twice_is_idempotent() {
        let mut lights = StateMachineLights::new();
        feed(&mut lights, &[2, 11, 22, 1, 1]);

        assert_eq!(lights.current_pattern(), 22);
        assert_eq!(lights.activity().switches, 2);
    }

    #[test]
    fn default_matches_new() {
        let lights = StateMachineLights::default();
        assert_eq!(lights.phase(), Phase::Count);
    }
}
