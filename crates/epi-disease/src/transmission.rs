//! Location-level transmission.

use epi_core::{EpiConfig, PersonId, StreamRng, Tick, TransmissionPolicy};
use epi_population::{Location, Population};

/// Decides which susceptible occupants of a location become Exposed.
///
/// Each (location, tick) pair draws from its own [`StreamRng`], one draw per
/// susceptible occupant in ascending `PersonId` order.  The result therefore
/// depends only on the seed, the tick, and the occupants' states, never on
/// the order locations are evaluated in.
#[derive(Copy, Clone, Debug)]
pub struct Transmission {
    pub policy: TransmissionPolicy,
    pub seed:   u64,
}

impl Transmission {
    pub fn new(policy: TransmissionPolicy, seed: u64) -> Self {
        Self { policy, seed }
    }

    pub fn from_config(config: &EpiConfig) -> Self {
        Self::new(config.transmission, config.seed)
    }

    /// Persons at `location` who become Exposed at `tick`, ascending by ID.
    ///
    /// Returns an empty list, without drawing, when no occupant is Infected.
    pub fn apply(&self, location: &Location, population: &Population, tick: Tick) -> Vec<PersonId> {
        let occupants = location.occupants();
        let infectious = occupants
            .iter()
            .filter(|&&id| population.state_of(id).is_some_and(|s| s.is_infectious()))
            .count();

        let probability = self
            .policy
            .exposure_probability(location.transmission_probability(), infectious);
        if probability <= 0.0 {
            return Vec::new();
        }

        let mut rng = StreamRng::for_location(self.seed, location.id(), tick);
        occupants
            .iter()
            .copied()
            .filter(|&id| population.state_of(id).is_some_and(|s| s.is_susceptible()))
            .filter(|_| rng.gen_bool(probability))
            .collect()
    }
}
