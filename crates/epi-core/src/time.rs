//! Ticks and the engine clock.
//!
//! The engine owns the only [`SimClock`] and is the only thing that advances
//! it.  Persons, itineraries and the disease model see the current tick as a
//! plain [`Tick`] value.  Dwell times and schedule windows are whole tick
//! counts, so they never drift.
//!
//! Wall time is derived, never stored, and only labels output rows:
//!
//!   unix_secs(tick) = start_unix_secs + tick * tick_duration_secs

use std::fmt;

const SECS_PER_DAY: u64 = 86_400;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Index of one simulation step, counted from the start of the run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Dwell from `entry` to `self`; zero if `entry` lies in the future.
    #[inline]
    pub fn since(self, entry: Tick) -> u64 {
        self.0.saturating_sub(entry.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, ticks: u64) -> Tick {
        Tick(self.0 + ticks)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The next tick to process, plus how ticks map onto calendar time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Unix time of the start of tick 0.
    pub start_unix_secs: i64,
    /// Simulated seconds per tick.
    pub tick_duration_secs: u32,
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(start_unix_secs: i64, tick_duration_secs: u32) -> Self {
        Self { start_unix_secs, tick_duration_secs, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Unix time at the start of `tick`.
    #[inline]
    pub fn unix_secs_at(&self, tick: Tick) -> i64 {
        self.start_unix_secs + (tick.0 * self.tick_duration_secs as u64) as i64
    }

    /// Whole ticks needed to cover `days` simulated days (rounded up).
    #[inline]
    pub fn ticks_for_days(&self, days: u64) -> u64 {
        (days * SECS_PER_DAY).div_ceil(self.tick_duration_secs.max(1) as u64)
    }
}

impl fmt::Display for SimClock {
    /// `T25 (day 1 01:00)`: the next tick and its offset from the start.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.current_tick.0 * self.tick_duration_secs as u64;
        let day = secs / SECS_PER_DAY;
        let of_day = secs % SECS_PER_DAY;
        write!(
            f,
            "{} (day {} {:02}:{:02})",
            self.current_tick,
            day,
            of_day / 3_600,
            of_day % 3_600 / 60,
        )
    }
}
