//! Core schedule types: `ItineraryEntry` and `Itinerary`.
//!
//! # Entry model
//!
//! An entry sends a person to one location during a half-open tick window.
//! A `Window` entry happens once; a `Repeating` entry recurs every
//! `period_ticks` ticks starting from its first occurrence:
//!
//! ```text
//! occurrence k = [first + k·period, first + k·period + duration)
//! ```
//!
//! An exact tick → location mapping is a `Window` one tick wide.  A daily
//! schedule is a `Repeating` entry with a one-day period; a weekday pattern is
//! five `Repeating` entries with a one-week period (see [`weekly`]).
//!
//! # Conflicts
//!
//! When several entries are active at the same tick, the one whose current
//! occurrence started earliest wins.  Ties go to the entry added first.

use epi_core::{LocationId, Tick};

use crate::{ScheduleError, ScheduleResult};

// ── ItineraryEntry ────────────────────────────────────────────────────────────

/// One appointment in a person's itinerary.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItineraryEntry {
    /// Be at `location` for every tick in `[start, end)`.
    Window {
        location: LocationId,
        start:    Tick,
        end:      Tick,
    },
    /// Be at `location` for `duration_ticks` ticks, first at `first`, then
    /// again every `period_ticks`.  No occurrence is active at or after
    /// `until`, if set.
    Repeating {
        location:       LocationId,
        first:          Tick,
        duration_ticks: u64,
        period_ticks:   u64,
        until:          Option<Tick>,
    },
}

impl ItineraryEntry {
    /// A one-tick entry: be at `location` exactly at `tick`.
    pub fn at(location: LocationId, tick: Tick) -> Self {
        ItineraryEntry::Window { location, start: tick, end: tick + 1 }
    }

    /// Be at `location` for ticks in `[start, end)`.
    pub fn window(location: LocationId, start: Tick, end: Tick) -> Self {
        ItineraryEntry::Window { location, start, end }
    }

    /// Recur every `period_ticks`, open-ended.
    pub fn repeating(
        location:       LocationId,
        first:          Tick,
        duration_ticks: u64,
        period_ticks:   u64,
    ) -> Self {
        ItineraryEntry::Repeating { location, first, duration_ticks, period_ticks, until: None }
    }

    /// Every day at `start_of_day` ticks past midnight for `duration_ticks`.
    pub fn daily(
        location:       LocationId,
        ticks_per_day:  u64,
        start_of_day:   u64,
        duration_ticks: u64,
    ) -> Self {
        Self::repeating(location, Tick(start_of_day), duration_ticks, ticks_per_day)
    }

    /// Stop this entry from producing occurrences at or after `until`.
    ///
    /// For a `Window` the end is clamped instead.
    pub fn until(self, until: Tick) -> Self {
        match self {
            ItineraryEntry::Window { location, start, end } => {
                ItineraryEntry::Window { location, start, end: end.min(until) }
            }
            ItineraryEntry::Repeating { location, first, duration_ticks, period_ticks, .. } => {
                ItineraryEntry::Repeating {
                    location,
                    first,
                    duration_ticks,
                    period_ticks,
                    until: Some(until),
                }
            }
        }
    }

    pub fn location(&self) -> LocationId {
        match self {
            ItineraryEntry::Window { location, .. } | ItineraryEntry::Repeating { location, .. } => {
                *location
            }
        }
    }

    /// Reject degenerate entries (empty windows, zero periods, occurrences
    /// that overlap themselves).
    pub fn validate(&self) -> ScheduleResult<()> {
        match *self {
            ItineraryEntry::Window { start, end, .. } => {
                if end <= start {
                    return Err(ScheduleError::InvalidEntry(format!(
                        "window [{start}, {end}) is empty"
                    )));
                }
            }
            ItineraryEntry::Repeating { duration_ticks, period_ticks, .. } => {
                if period_ticks == 0 {
                    return Err(ScheduleError::InvalidEntry(
                        "repeating entry has a zero-tick period".into(),
                    ));
                }
                if duration_ticks == 0 || duration_ticks > period_ticks {
                    return Err(ScheduleError::InvalidEntry(format!(
                        "repeating entry duration {duration_ticks} must be in 1..={period_ticks}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Start tick of the occurrence active at `tick`, or `None` if the entry
    /// is not active then.
    pub fn active_since(&self, tick: Tick) -> Option<Tick> {
        match *self {
            ItineraryEntry::Window { start, end, .. } => {
                (start <= tick && tick < end).then_some(start)
            }
            ItineraryEntry::Repeating { first, duration_ticks, period_ticks, until, .. } => {
                if tick < first || period_ticks == 0 {
                    return None;
                }
                if until.is_some_and(|u| tick >= u) {
                    return None;
                }
                let k = (tick.0 - first.0) / period_ticks;
                let start = first + k * period_ticks;
                (tick.since(start) < duration_ticks).then_some(start)
            }
        }
    }
}

/// A weekday pattern: one `Repeating` entry per listed day (0 = the day
/// containing tick 0), each recurring weekly.
pub fn weekly(
    location:       LocationId,
    ticks_per_day:  u64,
    days:           &[u64],
    start_of_day:   u64,
    duration_ticks: u64,
) -> Vec<ItineraryEntry> {
    days.iter()
        .map(|&day| {
            ItineraryEntry::repeating(
                location,
                Tick(day * ticks_per_day + start_of_day),
                duration_ticks,
                7 * ticks_per_day,
            )
        })
        .collect()
}

// ── Itinerary ─────────────────────────────────────────────────────────────────

/// A person's full schedule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    /// Entries in insertion order (insertion order breaks resolution ties).
    entries: Vec<ItineraryEntry>,
}

impl Itinerary {
    pub fn new(entries: Vec<ItineraryEntry>) -> Self {
        Self { entries }
    }

    /// An itinerary with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, entry: ItineraryEntry) {
        self.entries.push(entry);
    }

    pub fn extend<I: IntoIterator<Item = ItineraryEntry>>(&mut self, entries: I) {
        self.entries.extend(entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[ItineraryEntry] {
        &self.entries
    }

    /// Every location this itinerary can send its person to.
    pub fn locations(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.entries.iter().map(ItineraryEntry::location)
    }

    /// Validate every entry.
    pub fn validate(&self) -> ScheduleResult<()> {
        self.entries.iter().try_for_each(ItineraryEntry::validate)
    }

    /// The location scheduled for `tick`, or `None` if nothing is scheduled.
    ///
    /// A pure function of `(self, tick)`.
    pub fn resolve(&self, tick: Tick) -> Option<LocationId> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.active_since(tick).map(|start| (start, i, e.location())))
            .min_by_key(|&(start, i, _)| (start, i))
            .map(|(_, _, location)| location)
    }
}
