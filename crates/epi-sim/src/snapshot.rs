//! Per-tick output handed to observers and callers of `step`/`run`.

use std::fmt;
use std::sync::Arc;

use epi_core::{InfectionState, LocationId, PersonId, SeirCounts, Tick};

/// A recoverable data problem found at initialization.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimWarning {
    /// The person has no itinerary entries and no home, so it can never be
    /// placed and never takes part in transmission.
    PermanentlyUnplaced(PersonId),
}

impl fmt::Display for SimWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimWarning::PermanentlyUnplaced(id) => {
                write!(f, "{id} has no itinerary and no home; permanently unplaced")
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PersonSnapshot {
    pub id:       PersonId,
    pub state:    InfectionState,
    /// `None` when the person was unplaced this tick.
    pub location: Option<LocationId>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LocationSnapshot {
    pub id:        LocationId,
    pub open:      bool,
    pub occupants: usize,
    /// States of this tick's occupants, after progression.
    pub counts:    SeirCounts,
}

/// The result of one tick.
///
/// States are as of the end of the tick (after progression).  `counts` always
/// sums to the population size.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSnapshot {
    pub tick:          Tick,
    /// One entry per person, ascending by ID.
    pub persons:       Vec<PersonSnapshot>,
    pub counts:        SeirCounts,
    /// One entry per location, ascending by ID.
    pub locations:     Vec<LocationSnapshot>,
    /// Persons that became Exposed this tick, ascending by ID.
    pub new_exposures: Vec<PersonId>,
    /// Initialization warnings; the same list on every snapshot of a run.
    pub warnings:      Arc<[SimWarning]>,
}

impl TickSnapshot {
    pub fn person(&self, id: PersonId) -> Option<&PersonSnapshot> {
        self.persons.get(id.index())
    }

    pub fn location(&self, id: LocationId) -> Option<&LocationSnapshot> {
        self.locations.get(id.index())
    }

    #[inline]
    pub fn state_of(&self, id: PersonId) -> Option<InfectionState> {
        self.person(id).map(|p| p.state)
    }
}
