//! Run configuration.
//!
//! `EpiConfig` holds every recognised option.  Validation of the values
//! happens when the engine is built (`epi_sim::SimBuilder::build`), so a
//! config can be deserialised or edited freely beforehand.

use crate::{SimClock, Tick};

// ── TransmissionPolicy ────────────────────────────────────────────────────────

/// How a location's per-tick probability combines when several infectious
/// persons are present.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransmissionPolicy {
    /// Each infectious co-occupant is an independent chance `p`:
    /// `P(exposed) = 1 - (1 - p)^|I|`.
    #[default]
    Compounding,
    /// A single chance `p` per tick whenever at least one infectious person
    /// is present, regardless of how many.
    Flat,
}

impl TransmissionPolicy {
    /// Probability that one susceptible occupant becomes exposed this tick
    /// at a location with probability `p` and `infectious` infected occupants.
    #[inline]
    pub fn exposure_probability(self, p: f64, infectious: usize) -> f64 {
        if infectious == 0 {
            return 0.0;
        }
        let p = p.clamp(0.0, 1.0);
        match self {
            TransmissionPolicy::Compounding => {
                let n = i32::try_from(infectious).unwrap_or(i32::MAX);
                1.0 - (1.0 - p).powi(n)
            }
            TransmissionPolicy::Flat => p,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransmissionPolicy::Compounding => "compounding",
            TransmissionPolicy::Flat        => "flat",
        }
    }
}

impl std::fmt::Display for TransmissionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── EpiConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EpiConfig {
    /// Ticks an Exposed person incubates before becoming Infected.  Must be ≥ 1.
    pub incubation_ticks: u64,

    /// Ticks an Infected person stays infectious before recovering.  Must be ≥ 1.
    pub infectious_ticks: u64,

    /// Master RNG seed.  The same seed and inputs always give identical runs.
    pub seed: u64,

    /// Total ticks to simulate; the engine completes when the clock reaches it.
    pub tick_limit: u64,

    /// Multi-infector compounding rule.
    pub transmission: TransmissionPolicy,

    /// Unix timestamp for tick 0.  Only used to label output.
    pub start_unix_secs: i64,

    /// Seconds per tick.  Only used to label output.  Default: 3600.
    pub tick_duration_secs: u32,

    /// Record per-person rows every N ticks.  1 = every tick; 24 = daily at
    /// 1-hour resolution.  0 disables per-person output.
    pub snapshot_interval_ticks: u64,

    /// Worker thread count for the `parallel` feature.  `None` uses all
    /// logical cores.
    pub num_threads: Option<usize>,
}

impl Default for EpiConfig {
    fn default() -> Self {
        Self {
            incubation_ticks:        4 * 24,
            infectious_ticks:        10 * 24,
            seed:                    0,
            tick_limit:              60 * 24,
            transmission:            TransmissionPolicy::Compounding,
            start_unix_secs:         0,
            tick_duration_secs:      3_600,
            snapshot_interval_ticks: 24,
            num_threads:             None,
        }
    }
}

impl EpiConfig {
    /// The tick at which the simulation completes (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.tick_limit)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_unix_secs, self.tick_duration_secs)
    }
}
