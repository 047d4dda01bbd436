//! Worker-thread controller.
//!
//! The intake/run logic is straight-line code on a dedicated thread that
//! blocks on the [`Mailbox`] for every input. `submit` hands one value over
//! at a time; dropping the controller interrupts and joins the worker.

mod mailbox;

pub use mailbox::{Interrupted, Mailbox};

use crate::config::{HandOffConfig, PollStrategy};
use crate::controller::LightController;
use crate::error::LightsError;
use crate::lights::{reserve_table, Activity, Lights};
use crate::observability::messages::{WorkerInterrupted, WorkerPanicked};
use crate::observability::StructuredLog;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;

#[derive(Debug, Default)]
struct Shared {
    mailbox: Mailbox,
    lights: Mutex<Lights>,
}

impl Shared {
    fn lights(&self) -> MutexGuard<'_, Lights> {
        self.lights.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Light controller whose logic runs on its own thread.
///
/// # Example
///
/// ```rust
/// use traffic_lights::{LightController, ThreadLights};
///
/// let mut lights = ThreadLights::new().unwrap();
/// for input in [2, 10, 20, 0] {
///     lights.submit(input);
/// }
/// lights.settle();
/// assert_eq!(lights.current_pattern(), 10);
/// ```
#[derive(Debug)]
pub struct ThreadLights {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
    config: HandOffConfig,
}

impl ThreadLights {
    /// Start a controller with the default configuration.
    pub fn new() -> Result<Self, LightsError> {
        Self::with_config(HandOffConfig::default())
    }

    /// Validate `config` and start the worker.
    pub fn with_config(config: HandOffConfig) -> Result<Self, LightsError> {
        config.check()?;

        let shared = Arc::new(Shared::default());
        let worker = {
            let shared = Arc::clone(&shared);
            let name = config.name().to_string();
            let poll = config.poll_strategy();
            std::thread::Builder::new()
                .name(name.clone())
                .spawn(move || {
                    if let Err(Interrupted) = run(&shared, poll) {
                        WorkerInterrupted { worker: &name }.log();
                    }
                })?
        };

        Ok(Self {
            shared,
            worker: Some(worker),
            config,
        })
    }

    pub fn config(&self) -> &HandOffConfig {
        &self.config
    }

    /// True while the worker thread is alive.
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|worker| !worker.is_finished())
    }
}

/// Body of the worker thread. Only returns through interruption.
fn run(shared: &Shared, poll: PollStrategy) -> Result<(), Interrupted> {
    let len = shared.mailbox.receive(poll)?;
    let mut table = reserve_table(len);
    for _ in 0..len {
        table.push(shared.mailbox.receive(poll)?);
    }
    shared.lights().install(table);

    loop {
        let index = shared.mailbox.receive(poll)?;
        shared.lights().select(index);
    }
}

impl LightController for ThreadLights {
    /// Hand `input` to the worker, waiting while a previous input is still
    /// in the slot. Returns before the worker has processed it.
    fn submit(&mut self, input: u32) {
        self.shared
            .mailbox
            .deposit(input, self.config.poll_strategy());
    }

    fn current_pattern(&self) -> u32 {
        self.shared.lights().current()
    }

    fn patterns(&self) -> Option<Vec<u32>> {
        self.shared.lights().patterns().map(<[u32]>::to_vec)
    }

    fn activity(&self) -> Activity {
        self.shared.lights().activity()
    }

    fn settle(&self) {
        let poll = self.config.poll_strategy();
        while !self.shared.mailbox.is_drained() {
            if self.shared.mailbox.is_interrupted() || !self.is_running() {
                return;
            }
            poll.pause();
        }
    }
}

impl Drop for ThreadLights {
    fn drop(&mut self) {
        self.shared.mailbox.interrupt();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                WorkerPanicked {
                    worker: self.config.name(),
                }
                .log();
            }
        }
    }
}
