//! Spinner showing the active search phase and placement count

use crate::algorithm::solver::{Phase, SearchObserver, SolverState};
use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg} ({pos} placements, depth {prefix})")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Observes a solver and mirrors its progress on stderr
///
/// A hidden instance accepts the same events without drawing anything, so
/// callers do not need to branch on quiet mode.
pub struct SearchProgress {
    bar: ProgressBar,
    deepest: usize,
}

impl SearchProgress {
    /// Create a spinner drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self::with_bar(bar)
    }

    /// Create a spinner that never draws
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_prefix("0");
        Self { bar, deepest: 0 }
    }

    /// Placements reported so far
    pub fn placements(&self) -> u64 {
        self.bar.position()
    }

    /// Largest number of simultaneously placed instances seen
    pub const fn deepest(&self) -> usize {
        self.deepest
    }

    /// Stop the spinner, leaving the verdict on screen
    pub fn finish(&self, state: SolverState) {
        let verdict = match state {
            SolverState::Solved(phase) => format!("solved by {phase}"),
            SolverState::Unsolvable(reason) => format!("unsolvable: {reason}"),
            _ => String::from("interrupted"),
        };
        self.bar.finish_with_message(verdict);
    }
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchObserver for SearchProgress {
    fn phase_started(&mut self, phase: Phase) {
        self.bar.set_message(phase.to_string());
    }

    fn placed(&mut self, depth: usize) {
        self.bar.inc(1);
        if depth > self.deepest {
            self.deepest = depth;
            self.bar.set_prefix(depth.to_string());
        }
    }
}
