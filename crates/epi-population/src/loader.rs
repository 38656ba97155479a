//! CSV location loader.
//!
//! # CSV format
//!
//! ```csv
//! location_id,name,transmission_probability,open
//! 0,home-0,0.05,true
//! 1,school,0.02,true
//! 2,stadium,0.10,false
//! ```
//!
//! `location_id` must count up from 0 in file order, so that the IDs other
//! inputs use match the registry's arena indices.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use epi_core::{EpiError, EpiResult, LocationId};

use crate::LocationRegistry;

#[derive(Deserialize)]
struct LocationRecord {
    location_id:              u32,
    name:                     String,
    transmission_probability: f64,
    open:                     bool,
}

/// Load a `LocationRegistry` from a CSV file.
pub fn load_locations_csv(path: &Path) -> EpiResult<LocationRegistry> {
    let file = std::fs::File::open(path)?;
    load_locations_reader(file)
}

/// Like [`load_locations_csv`] but accepts any `Read` source.
pub fn load_locations_reader<R: Read>(reader: R) -> EpiResult<LocationRegistry> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut registry = LocationRegistry::new();

    for result in csv_reader.deserialize::<LocationRecord>() {
        let row = result.map_err(|e| EpiError::Parse(e.to_string()))?;
        let expected = LocationId(registry.len() as u32);
        if row.location_id != expected.0 {
            return Err(EpiError::Parse(format!(
                "location_id {} out of sequence; expected {}",
                row.location_id, expected.0
            )));
        }
        let id = registry.add(row.name, row.transmission_probability);
        registry.set_open(id, row.open)?;
    }

    Ok(registry)
}
