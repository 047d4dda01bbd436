//! Core phase types.
//!
//! This module contains the pure part of the controllers:
//! - Phase definitions via the `State` trait
//! - Immutable history of phase transitions
//!
//! Nothing in this module performs I/O or logging.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
