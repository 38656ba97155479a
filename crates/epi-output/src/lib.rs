//! `epi-output`: simulation output writers.
//!
//! | Writer        | Files created                                   |
//! |---------------|-------------------------------------------------|
//! | [`CsvWriter`] | `seir_counts.csv`, `person_states.csv`          |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `epi_sim::SimObserver`.
//! Counts are written every tick; per-person states every
//! `snapshot_interval_ticks`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run_with(&mut obs)?;
//! if let Some(e) = obs.take_error() { return Err(e.into()); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{PersonStateRow, SeirCountsRow};
pub use writer::OutputWriter;
