//! `epi-core`: foundational types for the epi simulation workspace.
//!
//! This crate is a dependency of every other `epi-*` crate.  It has no
//! `epi-*` dependencies and only `rand` and `thiserror` externally, plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `PersonId`, `LocationId`                              |
//! | [`time`]   | `Tick`, `SimClock`                                    |
//! | [`seir`]   | `InfectionState`, `SeirCounts`                        |
//! | [`config`] | `EpiConfig`, `TransmissionPolicy`                     |
//! | [`rng`]    | `StreamRng` (per entity and tick), `SimRng` (setup)   |
//! | [`error`]  | `EpiError`, `EpiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, ticks, states and   |
//! |         | configuration.                                             |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod seir;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EpiConfig, TransmissionPolicy};
pub use error::{EpiError, EpiResult};
pub use ids::{LocationId, PersonId};
pub use rng::{SimRng, StreamRng};
pub use seir::{InfectionState, SeirCounts};
pub use time::{SimClock, Tick};
