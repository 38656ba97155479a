//! `epi-disease`: transmission and disease progression.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                 |
//! |------------------|----------------------------------------------------------|
//! | [`transmission`] | `Transmission`: who becomes Exposed at one location     |
//! | [`progression`]  | `DiseaseParams`, `due_transition`, `advance`             |
//! | [`error`]        | `DiseaseError`, `DiseaseResult<T>`                       |
//!
//! # Design notes
//!
//! The engine runs these two pieces as separate phases of a tick:
//!
//! 1. **Transmission** (per location, read-only): [`Transmission::apply`]
//!    looks at one location's occupants and returns the IDs to expose.  It
//!    never mutates, so locations can be evaluated in parallel.
//!
//! 2. **Progression** (per person): [`advance`] moves Exposed → Infected and
//!    Infected → Recovered once the configured dwell time has elapsed.
//!
//! Someone exposed in phase 1 of tick `t` has dwell 0 in phase 2 of the same
//! tick, so with periods ≥ 1 they cannot become Infected (and transmit)
//! until a later tick.

pub mod error;
pub mod progression;
pub mod transmission;

#[cfg(test)]
mod tests;

pub use error::{DiseaseError, DiseaseResult};
pub use progression::{DiseaseParams, advance, due_transition, expose};
pub use transmission::Transmission;
