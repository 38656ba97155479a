//! `epi-population`: the person and location arenas.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`person`]     | `Person` (itinerary, home, location, SEIR state)          |
//! | [`population`] | `Population`: dense `PersonId`-indexed arena             |
//! | [`location`]   | `Location`, `LocationRegistry`, `AccessPolicy`            |
//! | [`resolver`]   | `resolve`, `place`: tick → location for one person       |
//! | [`world`]      | households (fixed or random), `claim_by_age`              |
//! | [`loader`]     | `load_locations_csv`, `load_locations_reader`             |
//!
//! The person–location relation is rebuilt every tick as plain index lists
//! (`Location::occupants`, `Person::location`); there are no persistent
//! edges between the two arenas.

pub mod loader;
pub mod location;
pub mod person;
pub mod population;
pub mod resolver;
pub mod world;


pub use loader::{load_locations_csv, load_locations_reader};
pub use location::{AccessPolicy, Location, LocationRegistry};
pub use person::Person;
pub use population::Population;
pub use resolver::{place, resolve};
pub use world::{HouseholdProfile, claim_by_age, create_household, create_household_random};
