//! CSV itinerary loader.
//!
//! # CSV format
//!
//! One row per itinerary entry.  Rows for the same person keep their file
//! order, which is the tie-break order during resolution.
//!
//! ```csv
//! person_id,location_id,start_tick,end_tick,period_ticks
//! 0,1,8,17,24
//! 0,2,100,102,0
//! 1,1,8,17,24
//! ```
//!
//! **`period_ticks`** field:
//!
//! | Value | Meaning                                                    |
//! |-------|------------------------------------------------------------|
//! | `0`   | one-shot window `[start_tick, end_tick)`                   |
//! | *n*   | window `[start_tick, end_tick)` repeated every `n` ticks   |
//!
//! Persons absent from the CSV receive an empty `Itinerary`.  Location IDs
//! are not checked here; the engine rejects unknown ones at initialization.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use epi_core::{LocationId, Tick};

use crate::itinerary::{Itinerary, ItineraryEntry};
use crate::ScheduleError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ItineraryRecord {
    person_id:    u32,
    location_id:  u32,
    start_tick:   u64,
    end_tick:     u64,
    period_ticks: u64,
}

impl ItineraryRecord {
    fn into_entry(self) -> Result<ItineraryEntry, ScheduleError> {
        if self.end_tick <= self.start_tick {
            return Err(ScheduleError::Parse(format!(
                "person {}: end_tick {} must be greater than start_tick {}",
                self.person_id, self.end_tick, self.start_tick
            )));
        }
        let location = LocationId(self.location_id);
        let entry = if self.period_ticks == 0 {
            ItineraryEntry::window(location, Tick(self.start_tick), Tick(self.end_tick))
        } else {
            ItineraryEntry::repeating(
                location,
                Tick(self.start_tick),
                self.end_tick - self.start_tick,
                self.period_ticks,
            )
        };
        entry.validate()?;
        Ok(entry)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load per-person `Itinerary`s from a CSV file.
///
/// Returns a `Vec` of length `person_count`, indexed by `PersonId`.
pub fn load_itineraries_csv(
    path:         &Path,
    person_count: usize,
) -> Result<Vec<Itinerary>, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_itineraries_reader(file, person_count)
}

/// Like [`load_itineraries_csv`] but accepts any `Read` source.
pub fn load_itineraries_reader<R: Read>(
    reader:       R,
    person_count: usize,
) -> Result<Vec<Itinerary>, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_person: HashMap<u32, Vec<ItineraryEntry>> =
        HashMap::with_capacity(person_count.min(1_000_000));

    for result in csv_reader.deserialize::<ItineraryRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        if row.person_id as usize >= person_count {
            return Err(ScheduleError::Parse(format!(
                "person_id {} out of range for a population of {person_count}",
                row.person_id
            )));
        }
        let person = row.person_id;
        by_person.entry(person).or_default().push(row.into_entry()?);
    }

    Ok((0..person_count as u32)
        .map(|i| by_person.remove(&i).map(Itinerary::new).unwrap_or_default())
        .collect())
}
