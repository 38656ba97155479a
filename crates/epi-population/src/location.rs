//! Locations and the location registry.
//!
//! # Occupancy
//!
//! Each location's occupant list is transient: the engine clears every list
//! with [`LocationRegistry::reset_occupancy`] at the start of a tick and
//! refills them during the move phase, in ascending `PersonId` order.  The
//! lists are therefore always sorted and never carry state across ticks.
//!
//! # Admission
//!
//! [`LocationRegistry::admit`] lets a person in only if the location is open
//! and its [`AccessPolicy`] accepts them.  Closing a location is the blanket
//! case: nobody gets in, whatever the policy says, and the policy survives
//! the closure.  Turning a person away is a normal outcome (`false`), not an
//! error.

use rustc_hash::FxHashMap;

use epi_core::{EpiError, EpiResult, LocationId, PersonId};

use crate::Person;

// ── AccessPolicy ──────────────────────────────────────────────────────────────

/// Who an open location admits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessPolicy {
    #[default]
    Everyone,
    /// Only persons aged `min_age..=max_age`.
    AgeBand { min_age: u8, max_age: u8 },
}

impl AccessPolicy {
    #[inline]
    pub fn admits(&self, person: &Person) -> bool {
        match *self {
            AccessPolicy::Everyone => true,
            AccessPolicy::AgeBand { min_age, max_age } => (min_age..=max_age).contains(&person.age),
        }
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// A discrete place persons can occupy.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    id:                       LocationId,
    name:                     String,
    transmission_probability: f64,
    open:                     bool,
    access:                   AccessPolicy,
    occupants:                Vec<PersonId>,
}

impl Location {
    #[inline]
    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-tick, per-contact transmission probability `p_loc`.
    #[inline]
    pub fn transmission_probability(&self) -> f64 {
        self.transmission_probability
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn access_policy(&self) -> AccessPolicy {
        self.access
    }

    /// Persons present this tick, ascending by ID.
    #[inline]
    pub fn occupants(&self) -> &[PersonId] {
        &self.occupants
    }
}

// ── LocationRegistry ──────────────────────────────────────────────────────────

/// Owner of all locations, indexed by `LocationId`.
#[derive(Clone, Debug, Default)]
pub struct LocationRegistry {
    locations: Vec<Location>,
    by_name:   FxHashMap<String, LocationId>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an open location and return its ID.
    ///
    /// The probability is not checked here; the engine validates every
    /// location when it is initialized.  If `name` is already taken, `find`
    /// keeps returning the first location registered under it.
    pub fn add(&mut self, name: impl Into<String>, transmission_probability: f64) -> LocationId {
        let id = LocationId(self.locations.len() as u32);
        let name = name.into();
        self.by_name.entry(name.clone()).or_insert(id);
        self.locations.push(Location {
            id,
            name,
            transmission_probability,
            open: true,
            access: AccessPolicy::Everyone,
            occupants: Vec::new(),
        });
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: LocationId) -> bool {
        id.index() < self.locations.len()
    }

    pub fn get(&self, id: LocationId) -> EpiResult<&Location> {
        self.locations.get(id.index()).ok_or(EpiError::LocationNotFound(id))
    }

    /// Look up a location by name.
    pub fn find(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(name).copied()
    }

    /// All locations in ascending ID order.
    #[inline]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.iter()
    }

    /// Open or close a location.  Takes effect at the next move phase.
    pub fn set_open(&mut self, id: LocationId, open: bool) -> EpiResult<()> {
        let location = self.get_mut(id)?;
        location.open = open;
        Ok(())
    }

    /// Replace the rule an open location uses to accept persons.  Takes
    /// effect at the next move phase.
    pub fn set_access_policy(&mut self, id: LocationId, policy: AccessPolicy) -> EpiResult<()> {
        self.get_mut(id)?.access = policy;
        Ok(())
    }

    /// Change a location's transmission probability.
    pub fn set_transmission_probability(&mut self, id: LocationId, probability: f64) -> EpiResult<()> {
        check_probability(id, probability)?;
        self.get_mut(id)?.transmission_probability = probability;
        Ok(())
    }

    /// Occupants of `id` for the current tick.
    pub fn occupants(&self, id: LocationId) -> EpiResult<&[PersonId]> {
        Ok(self.get(id)?.occupants())
    }

    /// Clear every occupant list.  Called once per tick before moves.
    pub fn reset_occupancy(&mut self) {
        for location in &mut self.locations {
            location.occupants.clear();
        }
    }

    /// Add `person` to the occupants of `id` if it is open and its access
    /// policy admits them.
    ///
    /// Returns `false` (and changes nothing) for an unknown location or one
    /// that turns the person away.
    pub fn admit(&mut self, id: LocationId, person: &Person) -> bool {
        match self.locations.get_mut(id.index()) {
            Some(location) if location.open && location.access.admits(person) => {
                location.occupants.push(person.id());
                true
            }
            _ => false,
        }
    }

    /// Check every transmission probability lies in `[0, 1]`.
    pub fn validate(&self) -> EpiResult<()> {
        self.locations
            .iter()
            .try_for_each(|l| check_probability(l.id, l.transmission_probability))
    }

    fn get_mut(&mut self, id: LocationId) -> EpiResult<&mut Location> {
        self.locations.get_mut(id.index()).ok_or(EpiError::LocationNotFound(id))
    }
}

/// `[0, 1]` check that also rejects NaN.
fn check_probability(location: LocationId, probability: f64) -> EpiResult<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(EpiError::InvalidProbability { location, probability })
    }
}
