//! Reference configuration of the sort widget.

// ── Array shape ─────────────────────────────────────────────────

/// Number of bars in the widget.
pub const ARRAY_SIZE: usize = 20;

/// Smallest value a bar can take (inclusive).
pub const MIN_VALUE: i64 = 5;

/// Largest value a bar can take (inclusive). Bars render as a percentage of this.
pub const MAX_VALUE: i64 = 100;

// ── Timing ──────────────────────────────────────────────────────

/// Pause after each comparison highlight, in milliseconds.
pub const STEP_DELAY_MS: u64 = 100;

// ── Environment ─────────────────────────────────────────────────

pub const ENV_SIZE: &str = "CASSETTE_SORT_SIZE";
pub const ENV_MIN: &str = "CASSETTE_SORT_MIN";
pub const ENV_MAX: &str = "CASSETTE_SORT_MAX";
pub const ENV_STEP_DELAY_MS: &str = "CASSETTE_STEP_DELAY_MS";
pub const ENV_SEED: &str = "CASSETTE_SORT_SEED";
