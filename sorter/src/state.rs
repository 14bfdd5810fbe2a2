//! The sort snapshot shared with renderers.
//!
//! `SortState` is owned by the animator while a run is active. Observers only
//! ever receive it by shared reference (or as a clone), so "what is rendered"
//! and "what is being mutated" never diverge.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, SortConfig};

/// Array contents, comparison cursors, and progress of one sort widget.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    /// Bar heights, mutated only by swaps.
    pub values: Vec<i64>,
    /// Left index of the pair under comparison.
    pub cursor: Option<usize>,
    /// Right index of the pair under comparison; always `cursor + 1`.
    pub compare_cursor: Option<usize>,
    /// Indices proven to hold their final value.
    pub settled: BTreeSet<usize>,
    /// True while a run is actively stepping.
    pub running: bool,
    /// Comparisons made since the state was created. Kept across stop/start;
    /// a reset starts a fresh state at zero.
    pub comparisons: u64,
    /// Swaps made since the state was created, with the same lifetime as `comparisons`.
    pub swaps: u64,
}

impl SortState {
    /// Generate `config.size` values uniformly in `[min_value, max_value]`.
    pub fn randomized<R: Rng + ?Sized>(config: &SortConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::generate(config, rng))
    }

    /// Generation without validation; `config` must already be valid.
    pub(crate) fn generate<R: Rng + ?Sized>(config: &SortConfig, rng: &mut R) -> Self {
        let values = (0..config.size)
            .map(|_| rng.random_range(config.min_value..=config.max_value))
            .collect();
        Self::from_values(values)
    }

    /// Idle state over a fixed array.
    #[must_use]
    pub fn from_values(values: Vec<i64>) -> Self {
        Self { values, ..Self::default() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The pair currently highlighted, if any.
    #[must_use]
    pub fn comparing(&self) -> Option<(usize, usize)> {
        self.cursor.zip(self.compare_cursor)
    }

    #[must_use]
    pub fn is_settled(&self, index: usize) -> bool {
        self.settled.contains(&index)
    }

    /// Every index has been settled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.settled.len() == self.values.len()
    }

    /// Values are in non-decreasing order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    /// Number of settled indices forming a contiguous run at the end of the array.
    ///
    /// After `k` completed passes this is exactly `k`.
    #[must_use]
    pub fn settled_tail(&self) -> usize {
        (0..self.values.len())
            .rev()
            .take_while(|index| self.settled.contains(index))
            .count()
    }

    pub(crate) fn set_cursors(&mut self, left: usize) {
        self.cursor = Some(left);
        self.compare_cursor = Some(left + 1);
    }

    pub(crate) fn clear_cursors(&mut self) {
        self.cursor = None;
        self.compare_cursor = None;
    }

    pub(crate) fn settle_all(&mut self) {
        self.settled.extend(0..self.values.len());
    }
}
