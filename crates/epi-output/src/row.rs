//! Plain data row types written by output backends.

use epi_core::{InfectionState, LocationId, PersonId};

/// SEIR head counts for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeirCountsRow {
    pub tick:           u64,
    pub unix_time_secs: i64,
    pub susceptible:    usize,
    pub exposed:        usize,
    pub infected:       usize,
    pub recovered:      usize,
    /// Persons that became Exposed during this tick.
    pub new_exposures:  usize,
}

/// One person's state and location at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonStateRow {
    pub person_id: PersonId,
    pub tick:      u64,
    pub state:     InfectionState,
    /// `None` when the person was unplaced.
    pub location:  Option<LocationId>,
}
