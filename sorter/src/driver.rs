//! Timer-driven runner for the sort animator.
//!
//! DESIGN
//! ======
//! `SortDriver` is a cheap `Clone` handle over `Arc<Mutex<Shared>>`. `start()`
//! spawns one tokio task per run; the task locks the shared state, calls
//! `step()` once, hands the transition to the observer, releases the lock, and
//! sleeps `step_delay` after every comparison highlight. The lock is never held
//! across an await.
//!
//! Cancellation is cooperative: `stop()` flips the animator to idle under the
//! lock, and the task sees `Step::Idle` at the top of its next tick and exits.
//! Every run carries a generation number; `reset()` and each new `start()` bump
//! it so a task that was asleep when its run was superseded exits without
//! touching the new state.
//!
//! Observers run under the lock and must not call back into the driver.

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info};

use crate::animator::{Step, StepwiseSortAnimator};
use crate::config::{ConfigError, SortConfig};
use crate::state::SortState;

// =============================================================================
// OBSERVER
// =============================================================================

/// Receives every transition together with the state right after it.
pub trait SortObserver {
    fn observe(&mut self, step: &Step, state: &SortState);
}

impl<F> SortObserver for F
where
    F: FnMut(&Step, &SortState),
{
    fn observe(&mut self, step: &Step, state: &SortState) {
        self(step, state);
    }
}

/// One transition as delivered over a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub step: Step,
    pub state: SortState,
}

/// Forwards owned snapshots into an unbounded tokio channel.
///
/// Unbounded so that no transition is ever dropped; a closed receiver is ignored.
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<Observation>,
}

impl ChannelObserver {
    #[must_use]
    pub fn new(tx: mpsc::UnboundedSender<Observation>) -> Self {
        Self { tx }
    }

    /// Observer plus the receiving end.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Observation>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl SortObserver for ChannelObserver {
    fn observe(&mut self, step: &Step, state: &SortState) {
        if self.tx.send(Observation { step: *step, state: state.clone() }).is_err() {
            debug!("observation receiver closed");
        }
    }
}

// =============================================================================
// DRIVER
// =============================================================================

struct Shared {
    animator: StepwiseSortAnimator,
    observer: Box<dyn SortObserver + Send>,
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl Shared {
    fn notify(&mut self, step: Step) {
        self.observer.observe(&step, self.animator.state());
    }
}

/// Animates a [`StepwiseSortAnimator`] on the tokio runtime.
#[derive(Clone)]
pub struct SortDriver {
    shared: Arc<Mutex<Shared>>,
    delay: Duration,
}

impl SortDriver {
    /// Randomized driver for `config`.
    pub fn new<O>(config: SortConfig, observer: O) -> Result<Self, ConfigError>
    where
        O: SortObserver + Send + 'static,
    {
        Ok(Self::with_animator(StepwiseSortAnimator::new(config)?, observer))
    }

    /// Driver over an existing animator, ticking at its configured delay.
    #[must_use]
    pub fn with_animator<O>(animator: StepwiseSortAnimator, observer: O) -> Self
    where
        O: SortObserver + Send + 'static,
    {
        let delay = animator.config().step_delay();
        Self {
            shared: Arc::new(Mutex::new(Shared {
                animator,
                observer: Box::new(observer),
                generation: 0,
                task: None,
            })),
            delay,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // --- Queries ---

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.lock().animator.is_running()
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SortState {
        self.lock().animator.state().clone()
    }

    #[must_use]
    pub fn step_delay(&self) -> Duration {
        self.delay
    }

    // --- Control ---

    /// Spawn a run. A call while a run is active is a silent no-op returning `false`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) -> bool {
        let mut shared = self.lock();
        if !shared.animator.start() {
            return false;
        }
        shared.generation += 1;
        let generation = shared.generation;
        info!(
            generation,
            size = shared.animator.state().len(),
            delay_ms = self.delay.as_millis(),
            "sort driver started"
        );
        let handle = tokio::spawn(run(Arc::clone(&self.shared), generation, self.delay));
        shared.task = Some(handle);
        true
    }

    /// Request cancellation. Returns `true` if a run was active.
    pub fn stop(&self) -> bool {
        let mut shared = self.lock();
        let step = shared.animator.stop();
        if step != Step::Cancelled {
            return false;
        }
        shared.notify(step);
        info!(generation = shared.generation, "sort driver stopped");
        true
    }

    /// Stop any run and replace the state with a fresh random array.
    pub fn reset(&self) -> SortState {
        let mut shared = self.lock();
        let stopped = shared.animator.stop();
        if stopped == Step::Cancelled {
            shared.notify(stopped);
        }
        shared.generation += 1;
        shared.animator.reset();
        shared.notify(Step::Reset);
        info!(generation = shared.generation, "sort driver reset");
        shared.animator.state().clone()
    }

    /// Wait for the most recently spawned run task to exit.
    pub async fn wait(&self) -> Result<(), JoinError> {
        let task = self.lock().task.take();
        match task {
            Some(handle) => handle.await,
            None => Ok(()),
        }
    }
}

/// Step loop for one run generation.
async fn run(shared: Arc<Mutex<Shared>>, generation: u64, delay: Duration) {
    loop {
        let step = {
            let mut guard = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if guard.generation != generation {
                debug!(generation, "superseded sort task exiting");
                return;
            }
            let step = guard.animator.step();
            if step == Step::Idle {
                // Stopped between ticks; `stop()` already notified.
                return;
            }
            guard.notify(step);
            step
        };

        if step.is_terminal() {
            return;
        }
        if step.is_highlight() {
            tokio::time::sleep(delay).await;
        } else {
            tokio::task::yield_now().await;
        }
    }
}
