//! The `Sim` struct and its tick loop.

use std::fmt;
use std::sync::Arc;

use log::{debug, error, info, warn};

use epi_core::{EpiConfig, LocationId, PersonId, SeirCounts, SimClock, Tick};
use epi_disease::{DiseaseParams, DiseaseResult, Transmission, advance, expose};
use epi_population::{AccessPolicy, LocationRegistry, Population, place};

use crate::{
    LocationSnapshot, PersonSnapshot, SimError, SimObserver, SimResult, SimWarning, TickSnapshot,
};

// ── EngineState ───────────────────────────────────────────────────────────────

/// Lifecycle of a [`Sim`].
///
/// ```text
/// SimBuilder ──build()──► Ready ──step()──► Running ──tick limit──► Completed
///                  │                          │
///                  └─ Err (setup failure)     └─ illegal transition ──► Aborted
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    Ready,
    Running,
    Completed,
    Aborted,
}

impl EngineState {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineState::Ready     => "ready",
            EngineState::Running   => "running",
            EngineState::Completed => "completed",
            EngineState::Aborted   => "aborted",
        }
    }

    /// `true` if [`Sim::step`] may be called.
    #[inline]
    pub fn is_runnable(self) -> bool {
        matches!(self, EngineState::Ready | EngineState::Running)
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation engine.
///
/// `Sim` owns every person and location and drives the per-tick phases, in
/// this order:
///
/// 1. **Reset**: clear every location's occupant list.
/// 2. **Move**: place each person (ascending `PersonId`) at the location its
///    itinerary resolves to, falling back to home when that is closed.
/// 3. **Transmit** (optionally parallel): evaluate every location's
///    occupants; exposures are applied afterwards in ascending `PersonId`.
/// 4. **Progress** (optionally parallel): run every person's E→I and I→R
///    timers.
/// 5. **Snapshot**: record the tick, then advance the clock.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    pub(crate) config:       EpiConfig,
    pub(crate) clock:        SimClock,
    pub(crate) population:   Population,
    pub(crate) registry:     LocationRegistry,
    pub(crate) transmission: Transmission,
    pub(crate) params:       DiseaseParams,
    pub(crate) warnings:     Arc<[SimWarning]>,
    pub(crate) state:        EngineState,
}

impl Sim {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &EpiConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// The tick the next `step` will process.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    #[inline]
    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn warnings(&self) -> &[SimWarning] {
        &self.warnings
    }

    pub fn counts(&self) -> SeirCounts {
        self.population.counts()
    }

    // ── Controls ──────────────────────────────────────────────────────────

    /// Open or close a location.  Takes effect from the next tick's move
    /// phase; persons scheduled there fall back to their home.
    pub fn set_location_open(&mut self, id: LocationId, open: bool) -> SimResult<()> {
        self.registry.set_open(id, open)?;
        if open {
            info!("{id} reopened before {}", self.clock.current_tick);
        } else {
            warn!("{id} closed before {}", self.clock.current_tick);
        }
        Ok(())
    }

    /// Restrict who an open location admits, from the next tick's move phase
    /// on.  Persons turned away fall back to their home.
    pub fn set_access_policy(&mut self, id: LocationId, policy: AccessPolicy) -> SimResult<()> {
        self.registry.set_access_policy(id, policy)?;
        info!("{id} access policy set to {policy:?} before {}", self.clock.current_tick);
        Ok(())
    }

    /// Change a location's transmission probability from the next tick on.
    pub fn set_transmission_probability(&mut self, id: LocationId, probability: f64) -> SimResult<()> {
        self.registry.set_transmission_probability(id, probability)?;
        info!("{id} transmission probability set to {probability}");
        Ok(())
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Process one tick and return its snapshot.
    ///
    /// Fails with [`SimError::NotRunnable`] once the run is `Completed` or
    /// `Aborted`.  An illegal SEIR transition aborts the run.
    pub fn step(&mut self) -> SimResult<TickSnapshot> {
        match self.state {
            EngineState::Completed | EngineState::Aborted => {
                return Err(SimError::NotRunnable(self.state));
            }
            EngineState::Ready => {
                info!("run started at {}", self.clock);
                self.state = EngineState::Running;
            }
            EngineState::Running => {}
        }

        let now = self.clock.current_tick;
        let snapshot = match self.process_tick(now) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("aborting run at {now}: {e}");
                self.state = EngineState::Aborted;
                return Err(e);
            }
        };
        debug!("{now}: {}", snapshot.counts);

        self.clock.advance();
        if self.clock.current_tick >= self.config.end_tick() {
            self.state = EngineState::Completed;
            info!("run completed at {}: {}", self.clock, snapshot.counts);
        }
        Ok(snapshot)
    }

    /// Run up to `n` ticks, stopping early if the tick limit is reached.
    pub fn run(&mut self, n: u64) -> SimResult<Vec<TickSnapshot>> {
        if !self.state.is_runnable() {
            return Err(SimError::NotRunnable(self.state));
        }
        let remaining = self.config.end_tick().since(self.clock.current_tick);
        let mut snapshots = Vec::with_capacity(n.min(remaining) as usize);
        for _ in 0..n {
            if self.state == EngineState::Completed {
                break;
            }
            snapshots.push(self.step()?);
        }
        Ok(snapshots)
    }

    /// Run to the tick limit, or until `observer` asks to stop, feeding every
    /// snapshot to `observer` instead of collecting them.
    ///
    /// Returns the clock's next tick.
    pub fn run_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Tick> {
        if !self.state.is_runnable() {
            return Err(SimError::NotRunnable(self.state));
        }
        while self.state.is_runnable() {
            observer.on_tick_start(self.clock.current_tick);
            let snapshot = self.step()?;
            observer.on_snapshot(&snapshot, &self.clock);
            if observer.should_stop(&snapshot) {
                info!("observer stopped the run after {}", snapshot.tick);
                break;
            }
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(self.clock.current_tick)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> SimResult<TickSnapshot> {
        // ── Phases 1–2: reset occupancy, then move ────────────────────────
        self.registry.reset_occupancy();
        for person in self.population.persons_mut() {
            let at = place(person, now, &mut self.registry);
            person.place(at);
        }

        // ── Phase 3: transmission ─────────────────────────────────────────
        //
        // Every location reads the states as of the end of the previous
        // tick; nobody exposed here is infectious until progression says so.
        let new_exposures = self.transmission_phase(now);
        for &id in &new_exposures {
            expose(self.population.get_mut(id)?, now)?;
        }

        // ── Phase 4: progression ──────────────────────────────────────────
        self.progression_phase(now)?;

        Ok(self.snapshot(now, new_exposures))
    }

    /// Newly exposed persons across all locations, ascending by ID.
    fn transmission_phase(&self, now: Tick) -> Vec<PersonId> {
        let transmission = &self.transmission;
        let population = &self.population;
        let locations = self.registry.locations();

        #[cfg(not(feature = "parallel"))]
        let per_location: Vec<Vec<PersonId>> = locations
            .iter()
            .map(|location| transmission.apply(location, population, now))
            .collect();

        #[cfg(feature = "parallel")]
        let per_location: Vec<Vec<PersonId>> = {
            use rayon::prelude::*;
            locations
                .par_iter()
                .map(|location| transmission.apply(location, population, now))
                .collect()
        };

        // A person occupies at most one location, so there are no duplicates.
        let mut exposed: Vec<PersonId> = per_location.into_iter().flatten().collect();
        exposed.sort_unstable();
        exposed
    }

    fn progression_phase(&mut self, now: Tick) -> DiseaseResult<()> {
        let params = &self.params;
        let persons = self.population.persons_mut();

        #[cfg(not(feature = "parallel"))]
        {
            for person in persons {
                advance(person, params, now)?;
            }
            Ok(())
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Collected in ID order so the reported error is the lowest ID's.
            let results: Vec<DiseaseResult<_>> = persons
                .par_iter_mut()
                .map(|person| advance(person, params, now))
                .collect();
            results.into_iter().try_for_each(|r| r.map(drop))
        }
    }

    fn snapshot(&self, tick: Tick, new_exposures: Vec<PersonId>) -> TickSnapshot {
        let persons = self
            .population
            .persons()
            .iter()
            .map(|p| PersonSnapshot { id: p.id(), state: p.state(), location: p.location() })
            .collect();

        let locations = self
            .registry
            .iter()
            .map(|l| LocationSnapshot {
                id:        l.id(),
                open:      l.is_open(),
                occupants: l.occupants().len(),
                counts:    SeirCounts::tally(
                    l.occupants().iter().filter_map(|&id| self.population.state_of(id)),
                ),
            })
            .collect();

        TickSnapshot {
            tick,
            persons,
            counts: self.population.counts(),
            locations,
            new_exposures,
            warnings: Arc::clone(&self.warnings),
        }
    }
}
