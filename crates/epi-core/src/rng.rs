//! Deterministic random streams.
//!
//! # Determinism strategy
//!
//! Randomness is never ambient.  The engine derives a fresh `StreamRng` for
//! every (stream, tick) pair it needs:
//!
//!   seed = global_seed XOR (stream * MIXING_CONSTANT) XOR (tick * TICK_CONSTANT)
//!
//! Transmission uses one stream per location, so:
//!
//! - Locations never share RNG state, so evaluating them on different
//!   threads or in a different order cannot change any draw.
//! - No state is carried between ticks.  Any tick can be replayed from the
//!   seed plus the population state at the start of that tick.
//! - Adding locations at the end of the registry does not disturb the draws
//!   of existing ones.

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{LocationId, Tick};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Second odd constant so stream and tick offsets do not cancel.
const TICK_CONSTANT: u64 = 0xbf58_476d_1ce4_e5b9;

// ── StreamRng ─────────────────────────────────────────────────────────────────

/// A deterministic RNG sub-stream owned by one entity for one tick.
///
/// The type is not `Sync`; each worker thread derives its own.
pub struct StreamRng(SmallRng);

impl StreamRng {
    /// Seed from the run's global seed, a stream number, and a tick.
    pub fn new(global_seed: u64, stream: u64, tick: Tick) -> Self {
        let seed = global_seed
            ^ stream.wrapping_mul(MIXING_CONSTANT)
            ^ tick.0.wrapping_add(1).wrapping_mul(TICK_CONSTANT);
        StreamRng(SmallRng::seed_from_u64(seed))
    }

    /// The transmission stream for `location` at `tick`.
    pub fn for_location(global_seed: u64, location: LocationId, tick: Tick) -> Self {
        Self::new(global_seed, location.0 as u64, tick)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Setup-time RNG for population synthesis (household sizes, ages, which
/// persons start infected…).
///
/// Never used inside the tick loop.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw one value from `distribution` (household sizes, ages…).
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, distribution: D) -> T {
        self.0.sample(distribution)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
