//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `seir_counts.csv`: `tick,unix_time_secs,susceptible,exposed,infected,recovered,new_exposures`
//! - `person_states.csv`: `person_id,tick,state,location_id` (empty
//!   `location_id` for an unplaced person)

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PersonStateRow, SeirCountsRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    counts:   Writer<File>,
    persons:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files, and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut counts = Writer::from_path(dir.join("seir_counts.csv"))?;
        counts.write_record([
            "tick",
            "unix_time_secs",
            "susceptible",
            "exposed",
            "infected",
            "recovered",
            "new_exposures",
        ])?;

        let mut persons = Writer::from_path(dir.join("person_states.csv"))?;
        persons.write_record(["person_id", "tick", "state", "location_id"])?;

        Ok(Self { counts, persons, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_counts(&mut self, row: &SeirCountsRow) -> OutputResult<()> {
        self.counts.write_record(&[
            row.tick.to_string(),
            row.unix_time_secs.to_string(),
            row.susceptible.to_string(),
            row.exposed.to_string(),
            row.infected.to_string(),
            row.recovered.to_string(),
            row.new_exposures.to_string(),
        ])?;
        Ok(())
    }

    fn write_person_states(&mut self, rows: &[PersonStateRow]) -> OutputResult<()> {
        for row in rows {
            self.persons.write_record(&[
                row.person_id.0.to_string(),
                row.tick.to_string(),
                row.state.as_str().to_string(),
                row.location.map(|l| l.0.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.counts.flush()?;
        self.persons.flush()?;
        Ok(())
    }
}
