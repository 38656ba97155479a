//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use log::{error, info};

use epi_core::{EpiConfig, SimClock, Tick};
use epi_sim::{SimObserver, TickSnapshot};

use crate::row::{PersonStateRow, SeirCountsRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes SEIR counts every tick and per-person
/// states every `snapshot_interval_ticks` to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run_with()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:            W,
    snapshot_interval: u64,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, taking the per-person snapshot
    /// interval from `config`.
    pub fn new(writer: W, config: &EpiConfig) -> Self {
        Self {
            writer,
            snapshot_interval: config.snapshot_interval_ticks,
            last_error:        None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn wants_person_states(&self, tick: Tick) -> bool {
        self.snapshot_interval > 0 && tick.0.is_multiple_of(self.snapshot_interval)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                error!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, snapshot: &TickSnapshot, clock: &SimClock) {
        let counts = snapshot.counts;
        let row = SeirCountsRow {
            tick:           snapshot.tick.0,
            unix_time_secs: clock.unix_secs_at(snapshot.tick),
            susceptible:    counts.susceptible,
            exposed:        counts.exposed,
            infected:       counts.infected,
            recovered:      counts.recovered,
            new_exposures:  snapshot.new_exposures.len(),
        };
        let result = self.writer.write_counts(&row);
        self.store_err(result);

        if self.wants_person_states(snapshot.tick) && !snapshot.persons.is_empty() {
            let rows: Vec<PersonStateRow> = snapshot
                .persons
                .iter()
                .map(|p| PersonStateRow {
                    person_id: p.id,
                    tick:      snapshot.tick.0,
                    state:     p.state,
                    location:  p.location,
                })
                .collect();
            let result = self.writer.write_person_states(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
        info!("output finished at {final_tick}");
    }
}
