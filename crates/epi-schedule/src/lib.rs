//! `epi-schedule`: per-person itineraries and CSV loading.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`itinerary`] | `ItineraryEntry`, `Itinerary`, `weekly`                   |
//! | [`loader`]    | `load_itineraries_csv`, `load_itineraries_reader`         |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Resolution (summary)
//!
//! Every person carries an `Itinerary`.  At tick `t`:
//!
//! ```text
//! active(t)  = entries with an occurrence covering t
//! resolve(t) = location of the active entry whose occurrence began first
//!              (None when nothing is active)
//! ```
//!
//! `None` is "unplaced", not an error; the engine decides what to do with it.

pub mod error;
pub mod itinerary;
pub mod loader;


pub use error::{ScheduleError, ScheduleResult};
pub use itinerary::{Itinerary, ItineraryEntry, weekly};
pub use loader::{load_itineraries_csv, load_itineraries_reader};
