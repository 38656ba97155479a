//! Simulation observer trait for progress reporting and data collection.

use epi_core::{SimClock, Tick};

use crate::TickSnapshot;

/// Callbacks invoked by [`Sim::run_with`][crate::Sim::run_with] around every
/// tick.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_snapshot(&mut self, snapshot: &TickSnapshot, _clock: &SimClock) {
///         if snapshot.tick.0 % self.interval == 0 {
///             println!("{}: {}", snapshot.tick, snapshot.counts);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every tick with that tick's snapshot.
    ///
    /// `clock` has already advanced past `snapshot.tick`; use
    /// [`SimClock::unix_secs_at`] to label the snapshot with wall time.
    fn on_snapshot(&mut self, _snapshot: &TickSnapshot, _clock: &SimClock) {}

    /// Return `true` to stop the run once the current tick has finished.
    fn should_stop(&mut self, _snapshot: &TickSnapshot) -> bool {
        false
    }

    /// Called once after the last tick, with the clock's next tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
