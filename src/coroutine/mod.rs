//! Suspend/resume controller.
//!
//! The intake/run logic is one sequential `async` routine that suspends on
//! an [`Input`] whenever it needs a value. There is no second thread and no
//! executor: `submit` stores the value and resumes the routine inline, so
//! all processing happens inside the caller's `submit` call.
//!
//! The intake position is captured by the suspended routine itself; the
//! count and the partial table are locals of the routine.

mod input;
mod task;

pub use input::{Input, NextInput};

use crate::controller::LightController;
use crate::error::LightsError;
use crate::lights::{reserve_table, Activity, Lights};
use std::cell::RefCell;
use std::rc::Rc;
use task::Task;

/// Light controller backed by a suspended routine.
///
/// Not `Send`: the routine and the controller share state through `Rc`.
///
/// # Example
///
/// ```rust
/// use traffic_lights::{CoroutineLights, LightController};
///
/// let mut lights = CoroutineLights::new();
/// assert!(lights.is_ready());
/// for input in [2, 10, 20, 1] {
///     lights.submit(input);
/// }
/// assert_eq!(lights.current_pattern(), 20);
/// ```
pub struct CoroutineLights {
    input: Rc<Input>,
    lights: Rc<RefCell<Lights>>,
    task: Task,
}

impl CoroutineLights {
    /// Create the controller and run its routine up to the first suspension.
    pub fn new() -> Self {
        let input = Rc::new(Input::new());
        let lights = Rc::new(RefCell::new(Lights::new()));
        let task = Task::new(run(Rc::clone(&input), Rc::clone(&lights)));

        let mut controller = Self {
            input,
            lights,
            task,
        };
        controller.task.resume();
        controller
    }

    /// True when the routine is suspended waiting for its next input.
    pub fn is_ready(&self) -> bool {
        self.input.is_ready()
    }

    /// Like [`submit`](LightController::submit), but reports a controller that
    /// cannot accept input instead of panicking.
    pub fn try_submit(&mut self, input: u32) -> Result<(), LightsError> {
        if !self.is_ready() {
            return Err(LightsError::NotReady);
        }
        self.input.set(input);
        self.task.resume();
        Ok(())
    }
}

impl Default for CoroutineLights {
    fn default() -> Self {
        Self::new()
    }
}

async fn run(input: Rc<Input>, lights: Rc<RefCell<Lights>>) {
    let len = input.next().await;
    let mut table = reserve_table(len);
    for _ in 0..len {
        table.push(input.next().await);
    }
    lights.borrow_mut().install(table);

    loop {
        let index = input.next().await;
        lights.borrow_mut().select(index);
    }
}

impl LightController for CoroutineLights {
    /// Supply `input` and resume the routine until it suspends again.
    ///
    /// # Panics
    ///
    /// If the routine is not suspended waiting for input.
    fn submit(&mut self, input: u32) {
        assert!(
            !self.task.is_finished() && self.is_ready(),
            "no routine awaiting input"
        );
        self.input.set(input);
        self.task.resume();
    }

    fn current_pattern(&self) -> u32 {
        self.lights.borrow().current()
    }

    fn patterns(&self) -> Option<Vec<u32>> {
        self.lights.borrow().patterns().map(<[u32]>::to_vec)
    }

    fn activity(&self) -> Activity {
        self.lights.borrow().activity()
    }
}
