//! Core State trait for intake phases.
//!
//! Every phase a controller can be in implements this trait, which provides
//! pure methods for inspecting the phase without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for controller phases.
///
/// All methods are pure - no side effects. A phase is an immutable value
/// describing how the controller will interpret its next input.
///
/// # Required Traits
///
/// - `Clone`: Phases must be cloneable for history tracking
/// - `PartialEq`: Phases must be comparable for transition logic
/// - `Debug`: Phases must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: Phases must be serializable for reporting
///
/// # Example
///
/// ```rust
/// use traffic_lights::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Intake {
///     Header,
///     Body,
///     Done,
/// }
///
/// impl State for Intake {
///     fn name(&self) -> &str {
///         match self {
///             Self::Header => "Header",
///             Self::Body => "Body",
///             Self::Done => "Done",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Done)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the phase's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) phase.
    ///
    /// Once a controller reaches a final phase it never leaves it.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
