//! Terminal front end for the sort widget.
//!
//! Frames are redrawn in place: before each frame the cursor moves up over the
//! previous one and clears to the end of the screen.

#[cfg(test)]
#[path = "visualizer_test.rs"]
mod visualizer_test;

use std::io::{self, Write};
use std::ops::RangeInclusive;

use content::Language;
use sorter::{SortConfig, SortDriver, SortObserver, SortState, Step, StepwiseSortAnimator};
use tracing::{info, warn};

use crate::CliError;
use crate::render;

/// How transitions are presented.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub language: Language,
    pub height: usize,
    pub json: bool,
}

/// Redraws the bar chart after every transition.
pub struct TerminalObserver<W: Write> {
    out: W,
    options: Options,
    range: RangeInclusive<i64>,
    drawn: usize,
}

impl<W: Write> TerminalObserver<W> {
    /// `range` is the configured value bounds the bars are scaled across.
    #[must_use]
    pub fn new(out: W, options: Options, range: RangeInclusive<i64>) -> Self {
        Self { out, options, range, drawn: 0 }
    }

    /// Replace the previous frame with one for `state`.
    pub fn draw(&mut self, state: &SortState) -> io::Result<()> {
        let frame = render::sort_frame(state, &self.range, self.options.height, self.options.language);
        if self.drawn > 0 {
            write!(self.out, "\x1b[{}F\x1b[J", self.drawn)?;
        }
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        self.drawn = frame.lines().count();
        Ok(())
    }

    fn emit(&mut self, step: &Step) -> Result<(), CliError> {
        serde_json::to_writer(&mut self.out, step)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SortObserver for TerminalObserver<W> {
    fn observe(&mut self, step: &Step, state: &SortState) {
        if self.options.json {
            if let Err(error) = self.emit(step) {
                warn!(%error, "step write failed");
            }
            return;
        }
        if *step == Step::Idle {
            return;
        }
        if let Err(error) = self.draw(state) {
            warn!(%error, "frame write failed");
        }
    }
}

/// Run to completion without delays, drawing only the final frame.
pub fn run_instant(config: SortConfig, options: Options) -> Result<SortState, CliError> {
    let mut animator = StepwiseSortAnimator::new(config)?;
    let mut observer = TerminalObserver::new(io::stdout(), options, config.min_value..=config.max_value);

    if options.json {
        animator.run_to_end(&mut observer);
    } else {
        animator.run_to_end(&mut |_: &Step, _: &SortState| {});
        observer.draw(animator.state())?;
    }
    Ok(animator.state().clone())
}

/// Animate on the tokio runtime until the run ends or Ctrl-C halts it.
pub async fn run_animated(config: SortConfig, options: Options) -> Result<SortState, CliError> {
    let animator = StepwiseSortAnimator::new(config)?;
    let mut observer = TerminalObserver::new(io::stdout(), options, config.min_value..=config.max_value);
    if !options.json {
        observer.draw(animator.state())?;
    }

    let driver = SortDriver::with_animator(animator, observer);
    driver.start();

    tokio::select! {
        joined = driver.wait() => joined?,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            driver.stop();
            info!("sort interrupted");
        }
    }
    Ok(driver.snapshot())
}
