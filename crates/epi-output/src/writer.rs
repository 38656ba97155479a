//! The `OutputWriter` trait implemented by output backends.

use crate::{OutputResult, PersonStateRow, SeirCountsRow};

/// A sink for simulation output.
///
/// Errors are returned to [`SimOutputObserver`][crate::SimOutputObserver],
/// which keeps the first one for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one row of per-tick SEIR counts.
    fn write_counts(&mut self, row: &SeirCountsRow) -> OutputResult<()>;

    /// Write a batch of per-person states for one tick.
    fn write_person_states(&mut self, rows: &[PersonStateRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
