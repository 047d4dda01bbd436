//! Structured logging for controller events.
//!
//! Every diagnostic the controllers emit is a message struct implementing
//! `Display` plus [`StructuredLog`], so the text and the structured fields
//! live in one place instead of being scattered as format strings.
//!
//! # Usage
//!
//! ```rust
//! use traffic_lights::observability::messages::SwitchingLights;
//! use traffic_lights::observability::StructuredLog;
//!
//! let msg = SwitchingLights { from: 0, to: 4 };
//! assert_eq!(msg.to_string(), "Switching lights from 0 to 4");
//! msg.log();
//! ```

pub mod messages;

/// A message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message through `tracing`.
    fn log(&self);
}
