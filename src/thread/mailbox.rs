//! Single-slot mailbox between the submitting thread and the worker.
//!
//! Both sides poll under one lock. The slot holds at most one value and is
//! never overwritten before the worker has taken it.

use crate::config::PollStrategy;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Raised to the worker once teardown has begun and no input is pending.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("worker interrupted")]
pub struct Interrupted;

#[derive(Debug, Default)]
struct Slot {
    value: Option<u32>,
    interrupted: bool,
    deposited: u64,
    taken: u64,
    // Inputs the worker has finished with. Updated whenever the worker goes
    // back to waiting, so it trails `taken` by at most one.
    handled: u64,
}

#[derive(Debug, Default)]
pub struct Mailbox {
    slot: Mutex<Slot>,
}

impl Mailbox {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Place `value` in the slot, waiting until the slot is empty.
    pub fn deposit(&self, value: u32, poll: PollStrategy) {
        loop {
            {
                let mut slot = self.lock();
                if slot.value.is_none() {
                    slot.value = Some(value);
                    slot.deposited += 1;
                    return;
                }
            }
            poll.pause();
        }
    }

    /// Take the next value, waiting until one arrives.
    ///
    /// A pending value is always delivered before interruption is reported.
    pub fn receive(&self, poll: PollStrategy) -> Result<u32, Interrupted> {
        loop {
            {
                let mut slot = self.lock();
                slot.handled = slot.taken;
                if let Some(value) = slot.value.take() {
                    slot.taken += 1;
                    return Ok(value);
                }
                if slot.interrupted {
                    return Err(Interrupted);
                }
            }
            poll.pause();
        }
    }

    /// Ask the worker to stop at its next empty poll.
    pub fn interrupt(&self) {
        self.lock().interrupted = true;
    }

    /// True once every deposited value has been taken and processed.
    pub fn is_drained(&self) -> bool {
        let slot = self.lock();
        slot.value.is_none() && slot.handled == slot.deposited
    }

    pub fn is_interrupted(&self) -> bool {
        self.lock().interrupted
    }
}
