//! Validating builder for constructing a [`Sim`].

use std::sync::Arc;

use log::{info, warn};

use epi_core::EpiConfig;
use epi_disease::{DiseaseParams, Transmission};
use epi_population::{LocationRegistry, Population};

use crate::{EngineState, Sim, SimError, SimResult, SimWarning};

/// Builder for [`Sim`]; the engine's `Uninitialized` state.
///
/// # Required inputs
///
/// - [`EpiConfig`]: periods, seed, tick limit, compounding policy, …
/// - [`Population`]: persons with their itineraries, homes and initial states
/// - [`LocationRegistry`]: locations with probabilities and open flags
///
/// # Validation
///
/// [`build`](Self::build) fails fast on any configuration error, so a run
/// never starts with bad input:
///
/// | Check                                          | Error                         |
/// |------------------------------------------------|-------------------------------|
/// | `tick_limit == 0`                              | `SimError::Config`            |
/// | incubation or infectious period of 0 ticks     | `SimError::Disease`           |
/// | transmission probability outside `[0, 1]`      | `SimError::Epi`               |
/// | empty window / zero period in an itinerary     | `SimError::Schedule`          |
/// | itinerary entry or home naming an unknown ID   | `SimError::UnknownLocation`   |
///
/// Persons that can never be placed (no entries, no home) are not an error;
/// they become [`SimWarning::PermanentlyUnplaced`].
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, population, registry).build()?;
/// let snapshots = sim.run(48)?;
/// ```
pub struct SimBuilder {
    config:     EpiConfig,
    population: Population,
    registry:   LocationRegistry,
}

impl SimBuilder {
    pub fn new(config: EpiConfig, population: Population, registry: LocationRegistry) -> Self {
        Self { config, population, registry }
    }

    /// Validate inputs and return a [`Sim`] in the `Ready` state.
    pub fn build(self) -> SimResult<Sim> {
        let Self { config, mut population, mut registry } = self;

        if config.tick_limit == 0 {
            return Err(SimError::Config("tick_limit must be at least 1".into()));
        }
        let params = DiseaseParams::from_config(&config);
        params.validate()?;
        registry.validate()?;

        // ── Itineraries and homes ─────────────────────────────────────────
        let mut warnings = Vec::new();
        for person in population.persons() {
            person
                .itinerary
                .validate()
                .map_err(|source| SimError::Schedule { person: person.id(), source })?;

            let unknown = person
                .itinerary
                .locations()
                .chain(person.home)
                .find(|&loc| !registry.contains(loc));
            if let Some(location) = unknown {
                return Err(SimError::UnknownLocation { person: person.id(), location });
            }

            if !person.is_placeable() {
                let warning = SimWarning::PermanentlyUnplaced(person.id());
                warn!("{warning}");
                warnings.push(warning);
            }
        }

        // Start from a clean slate in case the caller reused these arenas.
        registry.reset_occupancy();
        for person in population.persons_mut() {
            person.place(None);
        }

        info!(
            "initialized: {} persons, {} locations, {} ticks, {} transmission, seed {}",
            population.len(),
            registry.len(),
            config.tick_limit,
            config.transmission,
            config.seed,
        );
        info!("initial counts: {}", population.counts());

        Ok(Sim {
            clock:        config.make_clock(),
            transmission: Transmission::from_config(&config),
            params,
            config,
            population,
            registry,
            warnings:     Arc::from(warnings),
            state:        EngineState::Ready,
        })
    }
}
