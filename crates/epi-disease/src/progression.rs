//! The per-person SEIR state machine.
//!
//! ```text
//! Susceptible ──(transmission)──► Exposed
//! Exposed     ──dwell ≥ incubation_ticks──► Infected
//! Infected    ──dwell ≥ infectious_ticks──► Recovered   (terminal)
//! ```
//!
//! `dwell = now - state_entry_tick`.  Every transition resets the entry tick.

use log::trace;

use epi_core::{EpiConfig, InfectionState, Tick};
use epi_population::Person;

use crate::{DiseaseError, DiseaseResult};

/// Incubation and infectious period lengths, in ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiseaseParams {
    pub incubation_ticks: u64,
    pub infectious_ticks: u64,
}

impl DiseaseParams {
    pub fn from_config(config: &EpiConfig) -> Self {
        Self {
            incubation_ticks: config.incubation_ticks,
            infectious_ticks: config.infectious_ticks,
        }
    }

    /// Both periods must be at least one tick, otherwise a person exposed
    /// this tick could become infectious in the same tick.
    pub fn validate(&self) -> DiseaseResult<()> {
        if self.incubation_ticks == 0 {
            return Err(DiseaseError::Config("incubation period must be at least 1 tick".into()));
        }
        if self.infectious_ticks == 0 {
            return Err(DiseaseError::Config("infectious period must be at least 1 tick".into()));
        }
        Ok(())
    }

    /// How long a person stays in `state` before the timer fires, or `None`
    /// for states only left through transmission (S) or never left (R).
    pub fn period(&self, state: InfectionState) -> Option<u64> {
        match state {
            InfectionState::Exposed  => Some(self.incubation_ticks),
            InfectionState::Infected => Some(self.infectious_ticks),
            InfectionState::Susceptible | InfectionState::Recovered => None,
        }
    }
}

/// The state a person in `state` since `entry` should move to at `now`, if
/// its timer has run out.
#[inline]
pub fn due_transition(
    params: &DiseaseParams,
    state:  InfectionState,
    entry:  Tick,
    now:    Tick,
) -> Option<InfectionState> {
    let period = params.period(state)?;
    if now.since(entry) >= period {
        state.successor()
    } else {
        None
    }
}

/// Run the timer for one person at `now`, applying at most one transition.
///
/// Returns the new state if one fired.
pub fn advance(
    person: &mut Person,
    params: &DiseaseParams,
    now:    Tick,
) -> DiseaseResult<Option<InfectionState>> {
    let Some(next) = due_transition(params, person.state(), person.state_entry(), now) else {
        return Ok(None);
    };
    person.transition(next, now)?;
    trace!("{} became {next} at {now}", person.id());
    Ok(Some(next))
}

/// Move a Susceptible person to Exposed at `now`.
///
/// Exposing anyone who is not Susceptible is an illegal transition.
pub fn expose(person: &mut Person, now: Tick) -> DiseaseResult<()> {
    person.transition(InfectionState::Exposed, now)?;
    trace!("{} exposed at {now}", person.id());
    Ok(())
}
