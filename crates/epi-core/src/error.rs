//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `EpiError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::{InfectionState, LocationId, PersonId};

/// Errors raised by the arena types and the SEIR state machine.
#[derive(Debug, Error)]
pub enum EpiError {
    #[error("person {0} not found")]
    PersonNotFound(PersonId),

    #[error("location {0} not found")]
    LocationNotFound(LocationId),

    #[error("transmission probability {probability} for {location} is outside [0, 1]")]
    InvalidProbability {
        location:    LocationId,
        probability: f64,
    },

    /// An internal defect: the state machine tried to move a person backwards
    /// or skip a state.
    #[error("illegal transition for {person}: {from} -> {to}")]
    IllegalTransition {
        person: PersonId,
        from:   InfectionState,
        to:     InfectionState,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `epi-core` and the arena crates.
pub type EpiResult<T> = Result<T, EpiError>;
