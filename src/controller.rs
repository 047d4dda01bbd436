//! The contract every light controller fulfils.

use crate::lights::Activity;

/// Input-driven light controller.
///
/// The first input declares a count N, the next N inputs are patterns,
/// and every later input is an index selecting the active pattern.
/// Implementations differ only in how control flows between the caller
/// and the intake/run logic.
///
/// # Example
///
/// ```rust
/// use traffic_lights::{LightController, StateMachineLights};
///
/// let mut lights = StateMachineLights::new();
/// for input in [2, 10, 20, 1] {
///     lights.submit(input);
/// }
/// lights.settle();
/// assert_eq!(lights.current_pattern(), 20);
/// ```
pub trait LightController {
    /// Deliver one input.
    fn submit(&mut self, input: u32);

    /// Currently active pattern.
    fn current_pattern(&self) -> u32;

    /// Installed pattern table, `None` while intake is in progress.
    fn patterns(&self) -> Option<Vec<u32>>;

    /// Counters of switches and out-of-range reports.
    fn activity(&self) -> Activity;

    /// Block until every submitted input has been fully processed.
    ///
    /// Controllers that process inputs inside `submit` return immediately.
    fn settle(&self) {}
}
