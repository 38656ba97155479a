//! `epi-sim`: the tick loop engine.
//!
//! # Per-tick phases
//!
//! ```text
//! for tick in 0..config.tick_limit:
//!   ① Reset     clear every location's occupant list.
//!   ② Move      for each person in ascending PersonId order, resolve the
//!               itinerary (or home) and join that location if it is open.
//!   ③ Transmit  per location, Susceptible occupants become Exposed with
//!               the policy's probability given the Infected count
//!               (parallel with the `parallel` feature).
//!   ④ Progress  per person, E→I after incubation and I→R after the
//!               infectious period (parallel with the `parallel` feature).
//!   ⑤ Snapshot  states, counts and occupancy; then the clock advances.
//! ```
//!
//! Every random draw comes from a per-(location, tick) stream, so the result
//! of a run depends only on its inputs and seed, never on thread count.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Runs phases ③ and ④ on Rayon's thread pool.               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::EpiConfig;
//! use epi_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(EpiConfig::default(), population, registry).build()?;
//! sim.run_with(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{EngineState, Sim};
pub use snapshot::{LocationSnapshot, PersonSnapshot, SimWarning, TickSnapshot};
