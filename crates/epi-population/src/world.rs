//! World-creation helpers: households and age-based claims.
//!
//! These build a synthetic population on top of [`Population`] and
//! [`LocationRegistry`].  A household is a home location shared by its
//! members; schools and workplaces then "claim" members by age by adding
//! itinerary entries to them.
//!
//! Households come either from an explicit age list ([`create_household`])
//! or from a [`HouseholdProfile`] of normal distributions
//! ([`create_household_random`]).

use rand_distr::Normal;

use epi_core::{EpiError, EpiResult, LocationId, PersonId, SimRng};
use epi_schedule::{Itinerary, ItineraryEntry};

use crate::{LocationRegistry, Population};

/// Create a home location and `ages.len()` residents living in it.
///
/// The home is named after its first resident (`home-<id>`).  Residents start
/// with empty itineraries, so they stay home until something claims them.
pub fn create_household(
    population:               &mut Population,
    registry:                 &mut LocationRegistry,
    ages:                     &[u8],
    transmission_probability: f64,
) -> EpiResult<(Vec<PersonId>, LocationId)> {
    if ages.is_empty() {
        return Err(EpiError::Config("a household needs at least one member".into()));
    }
    let first = PersonId(population.len() as u32);
    let home = registry.add(format!("home-{}", first.0), transmission_probability);

    let mut members = Vec::with_capacity(ages.len());
    for &age in ages {
        let id = population.add(Itinerary::empty());
        let person = population.get_mut(id)?;
        person.home = Some(home);
        person.age = age;
        members.push(id);
    }
    Ok((members, home))
}

/// Normal distributions (mean, standard deviation) for household size and
/// member ages.
///
/// Every draw is rounded to the nearest integer.  A household always has at
/// least one adult; negative child counts and ages are clamped to zero.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HouseholdProfile {
    pub adults:    (f64, f64),
    pub adult_age: (f64, f64),
    pub children:  (f64, f64),
    pub child_age: (f64, f64),
}

impl Default for HouseholdProfile {
    fn default() -> Self {
        Self {
            adults:    (1.8, 0.5),
            adult_age: (42.0, 12.0),
            children:  (1.2, 1.0),
            child_age: (9.0, 5.0),
        }
    }
}

fn normal(name: &str, (mean, sd): (f64, f64)) -> EpiResult<Normal<f64>> {
    Normal::new(mean, sd)
        .map_err(|e| EpiError::Config(format!("household {name} distribution N({mean}, {sd}): {e}")))
}

/// Draw a household from `profile` and create it with [`create_household`].
///
/// Draw order is fixed (adult count, adult ages, child count, child ages),
/// so the same `rng` state always yields the same household.
pub fn create_household_random(
    population:               &mut Population,
    registry:                 &mut LocationRegistry,
    profile:                  &HouseholdProfile,
    transmission_probability: f64,
    rng:                      &mut SimRng,
) -> EpiResult<(Vec<PersonId>, LocationId)> {
    let adults = normal("adult count", profile.adults)?;
    let adult_age = normal("adult age", profile.adult_age)?;
    let children = normal("child count", profile.children)?;
    let child_age = normal("child age", profile.child_age)?;

    let age = |x: f64| x.round().clamp(0.0, u8::MAX as f64) as u8;

    let n_adults = rng.sample(adults).round().max(1.0) as usize;
    let mut ages: Vec<u8> = (0..n_adults).map(|_| age(rng.sample(adult_age))).collect();
    let n_children = rng.sample(children).round().max(0.0) as usize;
    ages.extend((0..n_children).map(|_| age(rng.sample(child_age))));

    create_household(population, registry, &ages, transmission_probability)
}

/// Give `entries` to up to `max_claims` persons from `candidates` whose age is
/// within `min_age..=max_age`, in candidate order.
///
/// Returns the candidates that were not claimed.
pub fn claim_by_age(
    population: &mut Population,
    candidates: &[PersonId],
    entries:    &[ItineraryEntry],
    min_age:    u8,
    max_age:    u8,
    max_claims: usize,
) -> EpiResult<Vec<PersonId>> {
    let mut claimed = 0;
    let mut unclaimed = Vec::with_capacity(candidates.len());
    for &id in candidates {
        let person = population.get_mut(id)?;
        if claimed < max_claims && (min_age..=max_age).contains(&person.age) {
            person.itinerary.extend(entries.iter().cloned());
            claimed += 1;
        } else {
            unclaimed.push(id);
        }
    }
    Ok(unclaimed)
}
