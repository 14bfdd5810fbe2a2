//! Stepwise bubble sort: one observable transition per `step()` call.
//!
//! DESIGN
//! ======
//! The sort loop is unrolled into an explicit [`Phase`] so that a caller (the
//! tokio driver, a test, a synchronous loop) decides when the next transition
//! happens. Every comparison is split into a highlight (`Step::Compare`) and an
//! outcome (`Step::Swap` / `Step::Hold`) so a renderer always sees the cursor
//! pair before the values move.
//!
//! Passes run `i in 0..n-1` and comparisons `j in 0..n-i-1`, left to right.
//! A pass that makes no swaps settles the rest of the array (early exit).
//!
//! RESUMPTION
//! ==========
//! `start()` after `stop()` begins a fresh pass at comparison `(0, 1)`. The pass
//! counter resumes at the length of the settled tail, so settled regions are
//! never rescanned and the array and settled set carry over untouched.

#[cfg(test)]
#[path = "animator_test.rs"]
mod animator_test;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ConfigError, SortConfig};
use crate::driver::SortObserver;
use crate::state::SortState;

/// One observable transition of the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Cursors moved onto `(left, right)`; nothing compared yet.
    Compare { left: usize, right: usize },
    /// The pair was out of order and has been swapped.
    Swap { left: usize, right: usize },
    /// The pair was in order.
    Hold { left: usize, right: usize },
    /// A pass ended and settled `index`.
    Settle { index: usize },
    /// A pass made no swaps; `0..=through` is settled.
    EarlyExit { through: usize },
    /// Every index is settled and the run is over.
    Finished,
    /// A stop request halted the run.
    Cancelled,
    /// The state was replaced with a fresh array.
    Reset,
    /// Not running; nothing changed.
    Idle,
}

impl Step {
    /// Whether this step ends a run.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled | Self::Idle)
    }

    /// Whether a renderer should hold this frame for the step delay.
    #[must_use]
    pub fn is_highlight(self) -> bool {
        matches!(self, Self::Compare { .. })
    }
}

/// Position of the unrolled sort loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Highlight { pass: usize, index: usize },
    Resolve { pass: usize, index: usize },
    EndPass { pass: usize },
    EarlyExit { pass: usize },
    Finish,
}

/// Owns a [`SortState`] and drives a bubble sort over it one step at a time.
pub struct StepwiseSortAnimator {
    config: SortConfig,
    state: SortState,
    phase: Phase,
    swapped: bool,
    rng: StdRng,
}

impl StepwiseSortAnimator {
    /// Randomized animator for `config`. Fails fast on invalid configuration.
    pub fn new(config: SortConfig) -> Result<Self, ConfigError> {
        let mut rng = config.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let state = SortState::randomized(&config, &mut rng)?;
        Ok(Self { config, state, phase: Phase::Idle, swapped: false, rng })
    }

    /// Animator over a fixed array, bypassing randomization.
    ///
    /// A later [`reset`](Self::reset) generates `values.len()` values (at least
    /// one) within the range spanned by `values`.
    #[must_use]
    pub fn from_values(values: Vec<i64>) -> Self {
        let defaults = SortConfig::default();
        let config = SortConfig {
            size: values.len().max(1),
            min_value: values.iter().copied().min().unwrap_or(defaults.min_value),
            max_value: values.iter().copied().max().unwrap_or(defaults.max_value),
            ..defaults
        };
        Self {
            config,
            state: SortState::from_values(values),
            phase: Phase::Idle,
            swapped: false,
            rng: StdRng::from_os_rng(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &SortState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    // --- Control ---

    /// Begin a run. Returns `false` (and changes nothing) if one is already active.
    pub fn start(&mut self) -> bool {
        if self.state.running {
            return false;
        }
        let n = self.state.len();
        let pass = self.state.settled_tail();
        self.state.running = true;
        self.swapped = false;
        self.phase = if n < 2 || pass >= n - 1 { Phase::Finish } else { Phase::Highlight { pass, index: 0 } };
        debug!(size = n, pass, "sort run started");
        true
    }

    /// Halt the active run, keeping the array as it is.
    ///
    /// Returns [`Step::Cancelled`] when a run was halted, [`Step::Idle`] otherwise.
    pub fn stop(&mut self) -> Step {
        if !self.state.running {
            return Step::Idle;
        }
        self.state.running = false;
        self.state.clear_cursors();
        self.phase = Phase::Idle;
        debug!(
            comparisons = self.state.comparisons,
            settled = self.state.settled.len(),
            "sort run cancelled"
        );
        Step::Cancelled
    }

    /// Stop, then replace the state with a fresh random array from the original configuration.
    pub fn reset(&mut self) -> &SortState {
        self.stop();
        self.state = SortState::generate(&self.config, &mut self.rng);
        self.phase = Phase::Idle;
        self.swapped = false;
        &self.state
    }

    /// Advance exactly one transition.
    pub fn step(&mut self) -> Step {
        if !self.state.running {
            return Step::Idle;
        }
        let n = self.state.len();

        match self.phase {
            Phase::Idle => Step::Idle,
            Phase::Highlight { pass, index } => {
                self.state.set_cursors(index);
                self.phase = Phase::Resolve { pass, index };
                Step::Compare { left: index, right: index + 1 }
            }
            Phase::Resolve { pass, index } => {
                let (left, right) = (index, index + 1);
                self.state.comparisons += 1;
                let step = if self.state.values[left] > self.state.values[right] {
                    self.state.values.swap(left, right);
                    self.state.swaps += 1;
                    self.swapped = true;
                    Step::Swap { left, right }
                } else {
                    Step::Hold { left, right }
                };
                self.phase = if right < n - pass - 1 {
                    Phase::Highlight { pass, index: right }
                } else {
                    Phase::EndPass { pass }
                };
                step
            }
            Phase::EndPass { pass } => {
                let index = n - pass - 1;
                self.state.settled.insert(index);
                self.phase = if !self.swapped {
                    Phase::EarlyExit { pass }
                } else if pass + 1 >= n - 1 {
                    Phase::Finish
                } else {
                    self.swapped = false;
                    Phase::Highlight { pass: pass + 1, index: 0 }
                };
                Step::Settle { index }
            }
            Phase::EarlyExit { pass } => {
                let through = n - pass - 2;
                self.state.settled.extend(0..=through);
                self.phase = Phase::Finish;
                Step::EarlyExit { through }
            }
            Phase::Finish => {
                self.state.settle_all();
                self.state.clear_cursors();
                self.state.running = false;
                self.phase = Phase::Idle;
                debug!(
                    comparisons = self.state.comparisons,
                    swaps = self.state.swaps,
                    "sort run finished"
                );
                Step::Finished
            }
        }
    }

    /// Start (if idle) and step until the run ends, reporting every transition.
    ///
    /// Returns the terminal step.
    pub fn run_to_end<O: SortObserver + ?Sized>(&mut self, observer: &mut O) -> Step {
        self.start();
        loop {
            let step = self.step();
            observer.observe(&step, &self.state);
            if step.is_terminal() {
                return step;
            }
        }
    }
}
