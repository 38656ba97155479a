//! Integration tests for epi-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use epi_core::{InfectionState, LocationId, PersonId};

    use crate::csv::CsvWriter;
    use crate::row::{PersonStateRow, SeirCountsRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn person_row(id: u32, tick: u64, location: Option<u32>) -> PersonStateRow {
        PersonStateRow {
            person_id: PersonId(id),
            tick,
            state:     InfectionState::Exposed,
            location:  location.map(LocationId),
        }
    }

    fn counts_row(tick: u64) -> SeirCountsRow {
        SeirCountsRow {
            tick,
            unix_time_secs: tick as i64 * 3600,
            susceptible:    7,
            exposed:        2,
            infected:       1,
            recovered:      0,
            new_exposures:  1,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("seir_counts.csv").exists());
        assert!(dir.path().join("person_states.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("run").join("out");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("seir_counts.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("seir_counts.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["tick", "unix_time_secs", "susceptible", "exposed", "infected", "recovered", "new_exposures"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("person_states.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["person_id", "tick", "state", "location_id"]);
    }

    #[test]
    fn csv_person_states_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![person_row(0, 5, Some(3)), person_row(1, 5, None)];
        w.write_person_states(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("person_states.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 2);
        assert_eq!(&read_rows[0][0], "0");
        assert_eq!(&read_rows[0][2], "exposed");
        assert_eq!(&read_rows[0][3], "3");
        assert_eq!(&read_rows[1][3], ""); // unplaced
    }

    #[test]
    fn csv_counts_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_counts(&counts_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("seir_counts.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");
        assert_eq!(&read_rows[0][1], "10800"); // 3 * 3600
        assert_eq!(&read_rows[0][2], "7");
        assert_eq!(&read_rows[0][6], "1");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_person_states(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use epi_core::{EpiConfig, InfectionState, PersonId, Tick};
    use epi_population::{LocationRegistry, Population};
    use epi_schedule::{Itinerary, ItineraryEntry};
    use epi_sim::SimBuilder;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;

    fn run_to_csv(config: &EpiConfig, dir: &TempDir) {
        let mut reg = LocationRegistry::new();
        let room = reg.add("room", 0.5);
        let always = Itinerary::new(vec![ItineraryEntry::window(room, Tick(0), Tick(1000))]);
        let mut pop = Population::from_itineraries(vec![always; 3]);
        pop.get_mut(PersonId(0)).unwrap().seed_state(InfectionState::Infected);

        let mut sim = SimBuilder::new(config.clone(), pop, reg).build().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, config);
        sim.run_with(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");
    }

    fn config(snapshot_interval_ticks: u64) -> EpiConfig {
        EpiConfig {
            incubation_ticks: 2,
            infectious_ticks: 3,
            seed: 1,
            tick_limit: 6,
            snapshot_interval_ticks,
            num_threads: Some(1),
            ..EpiConfig::default()
        }
    }

    #[test]
    fn counts_every_tick_person_states_on_interval() {
        let dir = tempfile::tempdir().unwrap();
        run_to_csv(&config(2), &dir);

        let mut rdr = csv::Reader::from_path(dir.path().join("seir_counts.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        for row in &rows {
            let total: usize = (2..=5).map(|i| row[i].parse::<usize>().unwrap()).sum();
            assert_eq!(total, 3);
        }
        assert_eq!(&rows[5][1], "18000"); // tick 5 at 1 h/tick

        // interval 2 → ticks 0, 2, 4 × 3 persons
        let mut rdr = csv::Reader::from_path(dir.path().join("person_states.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9);
        assert_eq!(&rows[0][1], "0");
        assert_eq!(&rows[0][2], "infected");
        assert_eq!(&rows[8][1], "4");
    }

    #[test]
    fn zero_interval_disables_person_states() {
        let dir = tempfile::tempdir().unwrap();
        run_to_csv(&config(0), &dir);

        let mut rdr = csv::Reader::from_path(dir.path().join("person_states.csv")).unwrap();
        assert_eq!(rdr.records().count(), 0);
    }
}
