//! one-location: the classic well-mixed SEIR setup.
//!
//! Everybody lives in a single location, so every infectious person is in
//! contact with everybody else every tick.  Halfway through, a control input
//! `u` scales the location's rate by `1 - u` (think distancing measures).
//!
//! Usage: `one-location [config.json]`.  The optional JSON file overrides any
//! `EpiConfig` field; missing fields keep the defaults below.

mod logging;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use epi_core::{EpiConfig, InfectionState};
use epi_population::{LocationRegistry, Population, create_household};
use epi_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const PEOPLE:           usize = 200;
const INITIAL_INFECTED: usize = 2;
const INFECTION_RATE:   f64   = 0.001; // per infectious contact per hour
const CONTROL_U:        f64   = 0.6;
const SIM_DAYS:         u64   = 120;

fn load_config(path: Option<&Path>) -> Result<EpiConfig> {
    let Some(p) = path else {
        return Ok(EpiConfig { seed: 7, tick_limit: SIM_DAYS * 24, ..EpiConfig::default() });
    };
    let text = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", p.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init()?;

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref().map(Path::new))?;
    let ticks_per_day = config.make_clock().ticks_for_days(1).max(1);

    // 1. One household holding everybody.
    let mut population = Population::with_capacity(PEOPLE);
    let mut registry = LocationRegistry::new();
    let (people, home) = create_household(&mut population, &mut registry, &[30; PEOPLE], INFECTION_RATE)?;
    for &id in people.iter().take(INITIAL_INFECTED) {
        population.get_mut(id)?.seed_state(InfectionState::Infected);
    }

    // 2. Engine.
    let control_at = config.tick_limit / 2;
    let mut sim = SimBuilder::new(config, population, registry).build()?;

    // 3. Run, printing one row per simulated day.
    println!("{:>5} {:>6} {:>6} {:>6} {:>6}", "day", "S", "E", "I", "R");
    println!("{}", "-".repeat(33));
    let t0 = Instant::now();
    while sim.state().is_runnable() {
        if sim.current_tick().0 == control_at {
            sim.set_transmission_probability(home, INFECTION_RATE * (1.0 - CONTROL_U))?;
            info!("control u = {CONTROL_U} applied at {}", sim.clock());
        }
        let snapshot = sim.step()?;
        if snapshot.tick.0 % ticks_per_day == 0 {
            let c = snapshot.counts;
            println!(
                "{:>5} {:>6} {:>6} {:>6} {:>6}",
                snapshot.tick.0 / ticks_per_day,
                c.susceptible,
                c.exposed,
                c.infected,
                c.recovered,
            );
        }
    }

    let counts = sim.counts();
    info!(
        "{} ticks in {:.3} s; never infected: {} of {}",
        sim.current_tick().0,
        t0.elapsed().as_secs_f64(),
        counts.susceptible,
        counts.total(),
    );
    Ok(())
}
