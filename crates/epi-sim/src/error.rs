use epi_core::{EpiError, LocationId, PersonId};
use epi_disease::DiseaseError;
use epi_schedule::ScheduleError;
use thiserror::Error;

use crate::EngineState;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{person} references unknown location {location}")]
    UnknownLocation {
        person:   PersonId,
        location: LocationId,
    },

    #[error("invalid itinerary for {person}: {source}")]
    Schedule {
        person: PersonId,
        source: ScheduleError,
    },

    #[error(transparent)]
    Disease(#[from] DiseaseError),

    #[error(transparent)]
    Epi(#[from] EpiError),

    #[error("engine is {0} and cannot step")]
    NotRunnable(EngineState),
}

pub type SimResult<T> = Result<T, SimError>;
