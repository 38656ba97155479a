//! `Population`: the owner-held person arena.
//!
//! Persons live in a single `Vec<Person>`; `PersonId(i)` is always the index
//! of person `i`.  IDs are handed out by [`Population::add`], so they are
//! dense and ascending by construction, which is the iteration order the
//! engine uses for every per-person phase.

use epi_core::{EpiError, EpiResult, InfectionState, PersonId, SeirCounts};
use epi_schedule::Itinerary;

use crate::Person;

/// The full set of persons for one run.
#[derive(Clone, Debug, Default)]
pub struct Population {
    persons: Vec<Person>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { persons: Vec::with_capacity(capacity) }
    }

    /// Build a population from one itinerary per person.
    ///
    /// Pairs with `epi_schedule::load_itineraries_csv`.
    pub fn from_itineraries(itineraries: Vec<Itinerary>) -> Self {
        let mut population = Self::with_capacity(itineraries.len());
        for itinerary in itineraries {
            population.add(itinerary);
        }
        population
    }

    /// Append a Susceptible person with no home and return its ID.
    pub fn add(&mut self, itinerary: Itinerary) -> PersonId {
        let id = PersonId(self.persons.len() as u32);
        self.persons.push(Person::new(id, itinerary));
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn get(&self, id: PersonId) -> EpiResult<&Person> {
        self.persons.get(id.index()).ok_or(EpiError::PersonNotFound(id))
    }

    pub fn get_mut(&mut self, id: PersonId) -> EpiResult<&mut Person> {
        self.persons.get_mut(id.index()).ok_or(EpiError::PersonNotFound(id))
    }

    /// All persons in ascending ID order.
    #[inline]
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    #[inline]
    pub fn persons_mut(&mut self) -> &mut [Person] {
        &mut self.persons
    }

    /// Iterator over all `PersonId`s in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        (0..self.persons.len() as u32).map(PersonId)
    }

    /// State of one person, for lookups by ID from an occupant list.
    #[inline]
    pub fn state_of(&self, id: PersonId) -> Option<InfectionState> {
        self.persons.get(id.index()).map(Person::state)
    }

    /// Per-state head counts.  Always sums to `len()`.
    pub fn counts(&self) -> SeirCounts {
        SeirCounts::tally(self.persons.iter().map(Person::state))
    }
}
