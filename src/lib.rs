//! Traffic lights: one input-driven controller, three control-flow strategies.
//!
//! Every controller consumes `u32` inputs. The first input declares a count
//! N, the next N inputs are light patterns, and every input after that is an
//! index selecting the active pattern. Indices past the end of the table are
//! reported and otherwise ignored.
//!
//! # Controllers
//!
//! - [`StateMachineLights`]: explicit [`Phase`] field, processing happens in `submit`
//! - [`ThreadLights`]: sequential logic on a worker thread fed through a
//!   single-slot mailbox
//! - [`CoroutineLights`]: sequential logic as a suspended routine resumed
//!   inline by `submit`
//!
//! All three implement [`LightController`] and produce the same sequence of
//! active patterns for the same inputs.
//!
//! # Example
//!
//! ```rust
//! use traffic_lights::{CoroutineLights, LightController, StateMachineLights, ThreadLights};
//!
//! fn drive(lights: &mut dyn LightController) -> u32 {
//!     for input in [3, 0, 4, 1, 1] {
//!         lights.submit(input);
//!     }
//!     lights.settle();
//!     lights.current_pattern()
//! }
//!
//! assert_eq!(drive(&mut StateMachineLights::new()), 4);
//! assert_eq!(drive(&mut ThreadLights::new().unwrap()), 4);
//! assert_eq!(drive(&mut CoroutineLights::new()), 4);
//! ```

mod macros;

pub mod config;
pub mod controller;
pub mod core;
pub mod coroutine;
pub mod error;
pub mod lights;
pub mod machine;
pub mod observability;
pub mod thread;

// Re-export commonly used types
pub use config::{HandOffConfig, PollStrategy};
pub use controller::LightController;
pub use coroutine::CoroutineLights;
pub use error::LightsError;
pub use lights::{Activity, Lights, OutOfBounds, Selection, OFF};
pub use machine::{Phase, StateMachineLights};
pub use thread::ThreadLights;
