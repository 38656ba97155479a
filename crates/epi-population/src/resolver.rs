//! Itinerary resolution and per-person placement.
//!
//! ```text
//! resolve(person, t) = itinerary.resolve(t)  or else  home
//!
//! place(person, t):
//!   target = resolve(person, t)                 → None: unplaced
//!   admit(target)                               → placed at target
//!   target refuses, home admits, home ≠ target  → placed at home
//!   otherwise                                   → unplaced
//! ```
//!
//! A location refuses when it is closed or its access policy rejects the
//! person.

use epi_core::{LocationId, Tick};

use crate::{LocationRegistry, Person};

/// The location `person` should occupy at `tick`, ignoring closures.
///
/// Deterministic and side-effect free.
#[inline]
pub fn resolve(person: &Person, tick: Tick) -> Option<LocationId> {
    person.itinerary.resolve(tick).or(person.home)
}

/// Resolve `person` for `tick` and register it with the target location.
///
/// Returns where the person ended up, or `None` if unplaced.  Does not write
/// to `person`; the caller records the result with [`Person::place`].
pub fn place(person: &Person, tick: Tick, registry: &mut LocationRegistry) -> Option<LocationId> {
    let target = resolve(person, tick)?;
    if registry.admit(target, person) {
        return Some(target);
    }
    match person.home {
        Some(home) if home != target && registry.admit(home, person) => Some(home),
        _ => None,
    }
}
