use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

use super::*;

// =============================================================
// Helpers
// =============================================================

type Log = Arc<Mutex<Vec<Step>>>;

fn recording_driver(values: Vec<i64>) -> (SortDriver, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let observer = move |step: &Step, _: &SortState| sink.lock().unwrap().push(*step);
    let driver = SortDriver::with_animator(StepwiseSortAnimator::from_values(values), observer);
    (driver, log)
}

fn steps(log: &Log) -> Vec<Step> {
    log.lock().unwrap().clone()
}

fn count(log: &Log, pred: impl Fn(&Step) -> bool) -> usize {
    log.lock().unwrap().iter().filter(|s| pred(s)).count()
}

fn sorted_copy(values: &[i64]) -> Vec<i64> {
    let mut out = values.to_vec();
    out.sort_unstable();
    out
}

// =============================================================
// Full runs
// =============================================================

#[tokio::test(start_paused = true)]
async fn run_matches_synchronous_stepping() {
    let input = vec![5, 3, 8, 1];

    let mut expected = Vec::new();
    {
        let mut record = |step: &Step, _: &SortState| expected.push(*step);
        StepwiseSortAnimator::from_values(input.clone()).run_to_end(&mut record);
    }

    let (driver, log) = recording_driver(input);
    assert!(driver.start());
    driver.wait().await.unwrap();

    assert_eq!(steps(&log), expected);
    let state = driver.snapshot();
    assert_eq!(state.values, vec![1, 3, 5, 8]);
    assert!(state.is_complete());
    assert!(!driver.is_running());
}

#[tokio::test(start_paused = true)]
async fn run_waits_step_delay_per_comparison() {
    // [5, 3, 8, 1] makes 6 comparisons at 100ms each.
    let (driver, _log) = recording_driver(vec![5, 3, 8, 1]);
    let started = Instant::now();
    driver.start();
    driver.wait().await.unwrap();

    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(600), "elapsed {elapsed:?}");
    assert!(elapsed < Duration::from_millis(700), "elapsed {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn seeded_config_run_sorts() {
    let cfg = SortConfig { size: 20, seed: Some(11), step_delay_ms: 5, ..SortConfig::default() };
    let driver = SortDriver::new(cfg, |_: &Step, _: &SortState| {}).unwrap();
    let before = driver.snapshot();

    driver.start();
    driver.wait().await.unwrap();

    let after = driver.snapshot();
    assert!(after.is_sorted());
    assert_eq!(sorted_copy(&before.values), after.values);
}

#[test]
fn new_rejects_invalid_config() {
    let cfg = SortConfig { size: 0, ..SortConfig::default() };
    let result = SortDriver::new(cfg, |_: &Step, _: &SortState| {});
    assert!(matches!(result, Err(ConfigError::EmptyArray)));
}

#[test]
fn step_delay_comes_from_config() {
    let cfg = SortConfig { step_delay_ms: 40, seed: Some(1), ..SortConfig::default() };
    let driver = SortDriver::new(cfg, |_: &Step, _: &SortState| {}).unwrap();
    assert_eq!(driver.step_delay(), Duration::from_millis(40));
}

// =============================================================
// Run guard
// =============================================================

#[tokio::test(start_paused = true)]
async fn second_start_while_running_is_noop() {
    let (driver, log) = recording_driver(vec![4, 3, 2, 1]);
    assert!(driver.start());
    assert!(!driver.start());
    driver.wait().await.unwrap();

    assert_eq!(count(&log, |s| *s == Step::Finished), 1);
    // A single run makes each first-pass comparison exactly once.
    assert_eq!(count(&log, |s| *s == Step::Compare { left: 2, right: 3 }), 1);
}

#[tokio::test(start_paused = true)]
async fn wait_without_start_returns_immediately() {
    let (driver, log) = recording_driver(vec![2, 1]);
    driver.wait().await.unwrap();
    assert!(steps(&log).is_empty());
}

// =============================================================
// Cancellation
// =============================================================

#[tokio::test(start_paused = true)]
async fn stop_halts_run_and_keeps_partial_state() {
    let input = vec![9, 8, 7, 6, 5, 4, 3, 2, 1];
    let (driver, log) = recording_driver(input.clone());
    driver.start();

    tokio::time::sleep(Duration::from_millis(350)).await;
    assert!(driver.is_running());
    assert!(driver.stop());
    driver.wait().await.unwrap();

    let state = driver.snapshot();
    assert!(!state.running);
    assert_eq!(state.comparing(), None);
    assert_eq!(sorted_copy(&state.values), sorted_copy(&input));
    assert!(!state.is_sorted());
    assert_eq!(steps(&log).last(), Some(&Step::Cancelled));

    // Nothing else happens afterwards.
    let seen = steps(&log).len();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(steps(&log).len(), seen);
    assert_eq!(driver.snapshot(), state);
}

#[tokio::test(start_paused = true)]
async fn stop_when_idle_returns_false() {
    let (driver, log) = recording_driver(vec![1, 2]);
    assert!(!driver.stop());
    assert!(steps(&log).is_empty());
}

#[tokio::test(start_paused = true)]
async fn stop_then_start_resumes_and_finishes() {
    let (driver, log) = recording_driver(vec![6, 5, 4, 3, 2, 1]);
    driver.start();
    tokio::time::sleep(Duration::from_millis(250)).await;
    driver.stop();

    // Restart before the old task's sleep elapses; only the new run may step.
    assert!(driver.start());
    driver.wait().await.unwrap();
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert_eq!(driver.snapshot().values, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(count(&log, |s| *s == Step::Cancelled), 1);
    assert_eq!(count(&log, |s| *s == Step::Finished), 1);
}

// =============================================================
// Reset
// =============================================================

#[tokio::test(start_paused = true)]
async fn reset_mid_run_replaces_state_and_silences_old_task() {
    let (driver, log) = recording_driver(vec![50, 40, 30, 20, 10]);
    driver.start();
    tokio::time::sleep(Duration::from_millis(150)).await;

    let fresh = driver.reset();
    assert!(!fresh.running);
    assert_eq!(fresh.len(), 5);
    assert!(fresh.values.iter().all(|v| (10..=50).contains(v)));
    assert_eq!(fresh.comparisons, 0);

    let seen = steps(&log);
    assert_eq!(&seen[seen.len() - 2..], &[Step::Cancelled, Step::Reset]);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(steps(&log).len(), seen.len());
    assert_eq!(driver.snapshot(), fresh);
}

#[tokio::test(start_paused = true)]
async fn reset_when_idle_only_reports_reset() {
    let (driver, log) = recording_driver(vec![3, 1, 2]);
    driver.reset();
    assert_eq!(steps(&log), vec![Step::Reset]);
}

// =============================================================
// ChannelObserver
// =============================================================

#[tokio::test(start_paused = true)]
async fn channel_observer_delivers_every_transition_in_order() {
    let (observer, mut rx) = ChannelObserver::channel();
    let driver = SortDriver::with_animator(StepwiseSortAnimator::from_values(vec![2, 3, 1]), observer);
    driver.start();
    driver.wait().await.unwrap();

    let mut received = Vec::new();
    while let Ok(observation) = rx.try_recv() {
        received.push(observation);
    }

    assert_eq!(received.first().map(|o| o.step), Some(Step::Compare { left: 0, right: 1 }));
    assert_eq!(received.first().and_then(|o| o.state.comparing()), Some((0, 1)));
    let last = received.last().unwrap();
    assert_eq!(last.step, Step::Finished);
    assert_eq!(last.state.values, vec![1, 2, 3]);
    assert_eq!(received.iter().filter(|o| matches!(o.step, Step::Swap { .. })).count(), 2);
}

#[test]
fn channel_observer_ignores_closed_receiver() {
    let (mut observer, rx) = ChannelObserver::channel();
    drop(rx);
    observer.observe(&Step::Idle, &SortState::from_values(vec![1]));
}
