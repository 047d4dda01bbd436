//! One-shot suspension point for a single awaiting routine.
//!
//! A routine awaits [`Input::next`]; the owner supplies a value with
//! [`Input::set`] and then resumes the routine. Misuse panics.

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Empty,
    Awaiting,
    Filled(u32),
}

/// Awaitable source of `u32` inputs.
///
/// # Example
///
/// ```rust
/// use traffic_lights::coroutine::Input;
///
/// let input = Input::new();
/// assert!(!input.is_ready());
/// ```
#[derive(Debug)]
pub struct Input {
    slot: Cell<Slot>,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    pub fn new() -> Self {
        Self {
            slot: Cell::new(Slot::Empty),
        }
    }

    /// Future resolving to the next supplied value.
    ///
    /// Always suspends on its first poll.
    pub fn next(&self) -> NextInput<'_> {
        NextInput {
            input: self,
            suspended: false,
        }
    }

    /// True exactly when a routine is suspended waiting for a value.
    pub fn is_ready(&self) -> bool {
        self.slot.get() == Slot::Awaiting
    }

    /// Supply the value the suspended routine will observe on resumption.
    ///
    /// # Panics
    ///
    /// If no routine is suspended, or the previous value has not been
    /// consumed yet.
    pub fn set(&self, value: u32) {
        match self.slot.get() {
            Slot::Awaiting => self.slot.set(Slot::Filled(value)),
            Slot::Filled(_) => panic!("input supplied twice without resuming the awaiting routine"),
            Slot::Empty => panic!("no routine awaiting input"),
        }
    }
}

/// Future returned by [`Input::next`].
#[derive(Debug)]
#[must_use = "futures do nothing unless awaited"]
pub struct NextInput<'a> {
    input: &'a Input,
    suspended: bool,
}

impl Future for NextInput<'_> {
    type Output = u32;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<u32> {
        let this = self.get_mut();
        if !this.suspended {
            assert!(
                this.input.slot.get() == Slot::Empty,
                "second routine awaiting input"
            );
            this.input.slot.set(Slot::Awaiting);
            this.suspended = true;
            return Poll::Pending;
        }

        match this.input.slot.get() {
            Slot::Filled(value) => {
                this.input.slot.set(Slot::Empty);
                this.suspended = false;
                Poll::Ready(value)
            }
            _ => Poll::Pending,
        }
    }
}

impl Drop for NextInput<'_> {
    fn drop(&mut self) {
        // abandoned while suspended
        if self.suspended {
            self.input.slot.set(Slot::Empty);
        }
    }
}
