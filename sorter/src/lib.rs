//! Stepwise bubble-sort animation engine for the portfolio's sort widget.
//!
//! The engine is split in two layers. [`animator::StepwiseSortAnimator`] is a
//! plain state machine: every call to `step()` performs exactly one observable
//! transition (highlight a pair, swap or hold it, settle an index, finish) so
//! tests can drive it synchronously and assert on each intermediate state.
//! [`driver::SortDriver`] wraps it in a tokio task that ticks the machine with
//! a fixed delay, enforces a single active run, and fans every transition out
//! to a [`driver::SortObserver`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`animator`] | The stepping state machine and the [`animator::Step`] it yields |
//! | [`driver`] | Timer-driven runner, run guard, observer trait |
//! | [`state`] | [`state::SortState`] snapshot seen by renderers |
//! | [`config`] | [`config::SortConfig`] and [`config::ConfigError`] |
//! | [`consts`] | Reference widget configuration |

pub mod animator;
pub mod config;
pub mod consts;
pub mod driver;
pub mod state;

pub use animator::{Step, StepwiseSortAnimator};
pub use config::{ConfigError, SortConfig};
pub use driver::{ChannelObserver, SortDriver, SortObserver};
pub use state::SortState;
