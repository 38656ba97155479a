//! The `Person` entity.

use epi_core::{EpiError, EpiResult, InfectionState, LocationId, PersonId, Tick};
use epi_schedule::Itinerary;

/// One member of the simulated population.
///
/// Persons are created once at setup and live for the whole run.  Their
/// infection state only ever moves forward through `S → E → I → R`;
/// [`Person::transition`] enforces that and reports anything else as an
/// [`EpiError::IllegalTransition`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    id: PersonId,

    /// Where this person is scheduled to be, tick by tick.
    pub itinerary: Itinerary,

    /// Fallback location for ticks with no itinerary entry, or when the
    /// scheduled location is closed.  `None` means "no home": such ticks leave
    /// the person unplaced.
    pub home: Option<LocationId>,

    /// Age in years.  Only used by world-creation helpers.
    pub age: u8,

    /// Location occupied during the current tick; `None` when unplaced.
    location: Option<LocationId>,

    state: InfectionState,

    /// Tick of the last state change (or `Tick::ZERO` for the initial state).
    state_entry: Tick,
}

impl Person {
    pub(crate) fn new(id: PersonId, itinerary: Itinerary) -> Self {
        Self {
            id,
            itinerary,
            home: None,
            age: 0,
            location: None,
            state: InfectionState::Susceptible,
            state_entry: Tick::ZERO,
        }
    }

    #[inline]
    pub fn id(&self) -> PersonId {
        self.id
    }

    #[inline]
    pub fn state(&self) -> InfectionState {
        self.state
    }

    #[inline]
    pub fn state_entry(&self) -> Tick {
        self.state_entry
    }

    /// Ticks spent in the current state as of `now`.
    #[inline]
    pub fn dwell(&self, now: Tick) -> u64 {
        now.since(self.state_entry)
    }

    #[inline]
    pub fn location(&self) -> Option<LocationId> {
        self.location
    }

    /// Record where the person is this tick.  Called by the engine's move
    /// phase only.
    #[inline]
    pub fn place(&mut self, location: Option<LocationId>) {
        self.location = location;
    }

    /// `true` if this person can ever occupy a location.
    pub fn is_placeable(&self) -> bool {
        !self.itinerary.is_empty() || self.home.is_some()
    }

    /// Set the initial disease state before the run starts.
    ///
    /// Any state is allowed here; the state-entry tick is reset to zero.
    pub fn seed_state(&mut self, state: InfectionState) {
        self.state = state;
        self.state_entry = Tick::ZERO;
    }

    /// Advance to `next` at tick `now`.
    ///
    /// Only single forward steps are legal.  Anything else leaves the person
    /// untouched and returns `IllegalTransition`.
    pub fn transition(&mut self, next: InfectionState, now: Tick) -> EpiResult<()> {
        if !self.state.can_transition_to(next) {
            return Err(EpiError::IllegalTransition {
                person: self.id,
                from:   self.state,
                to:     next,
            });
        }
        self.state = next;
        self.state_entry = now;
        Ok(())
    }
}
