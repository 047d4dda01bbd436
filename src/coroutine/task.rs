//! Inline driver for a single suspended routine.
//!
//! There is no executor: the owner polls the routine itself, in its own
//! call stack, whenever it has supplied new input. Wake-ups are ignored.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};

struct NoopWake;

impl Wake for NoopWake {
    fn wake(self: Arc<Self>) {}
}

pub(crate) fn noop_waker() -> Waker {
    Waker::from(Arc::new(NoopWake))
}

/// A routine resumed by explicit calls to [`Task::resume`].
pub(crate) struct Task {
    routine: Option<Pin<Box<dyn Future<Output = ()>>>>,
    waker: Waker,
}

impl Task {
    pub(crate) fn new(routine: impl Future<Output = ()> + 'static) -> Self {
        Self {
            routine: Some(Box::pin(routine)),
            waker: noop_waker(),
        }
    }

    /// Run the routine until it next suspends or finishes.
    pub(crate) fn resume(&mut self) {
        let Some(routine) = self.routine.as_mut() else {
            return;
        };
        let mut cx = Context::from_waker(&self.waker);
        if let Poll::Ready(()) = routine.as_mut().poll(&mut cx) {
            self.routine = None;
        }
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.routine.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coroutine::Input;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn routine_runs_to_first_suspension() {
        let input = Rc::new(Input::new());
        let reached = Rc::new(Cell::new(false));
        let mut task = {
            let input = Rc::clone(&input);
            let reached = Rc::clone(&reached);
            Task::new(async move {
                reached.set(true);
                input.next().await;
            })
        };

        assert!(!reached.get());
        task.resume();
        assert!(reached.get());
        assert!(input.is_ready());
        assert!(!task.is_finished());
    }

    #[test]
    fn finished_routine_is_released() {
        let input = Rc::new(Input::new());
        let seen = Rc::new(Cell::new(0));
        let mut task = {
            let input = Rc::clone(&input);
            let seen = Rc::clone(&seen);
            Task::new(async move {
                seen.set(input.next().await);
            })
        };
        task.resume();

        input.set(9);
        task.resume();

        assert_eq!(seen.get(), 9);
        assert!(task.is_finished());
        task.resume();
    }
}
