//! town: households, a school and a few workplaces.
//!
//! Builds a synthetic town: households drawn from normal distributions of
//! adults, children and ages, children claimed by the school and adults by workplaces on a Monday–Friday
//! schedule, everybody home otherwise.  The school closes for two weeks
//! mid-run.  SEIR counts and daily person states go to `output/town/`.
//!
//! Usage: `town [config.json]`.  Set `EPI_LOG=debug` for per-tick counts.

mod logging;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::{info, warn};

use epi_core::{EpiConfig, InfectionState, LocationId, PersonId, SimRng, Tick};
use epi_output::{CsvWriter, SimOutputObserver};
use epi_population::{
    HouseholdProfile, LocationRegistry, Population, claim_by_age, create_household_random,
};
use epi_schedule::weekly;
use epi_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const HOUSEHOLDS:       usize = 400;
const WORKPLACES:       usize = 6;
const INITIAL_INFECTED: usize = 5;
const SIM_DAYS:         u64   = 90;
const WEEKDAYS:         [u64; 5] = [0, 1, 2, 3, 4]; // tick 0 is a Monday

const HOME_RATE:   f64 = 0.02;
const SCHOOL_RATE: f64 = 0.004;
const WORK_RATE:   f64 = 0.003;

const HOUSEHOLD: HouseholdProfile = HouseholdProfile {
    adults:    (1.8, 0.5),
    adult_age: (42.0, 12.0),
    children:  (1.2, 1.0),
    child_age: (9.0, 4.5),
};

const SCHOOL_CLOSED_DAYS: (u64, u64) = (21, 35);

const OUTPUT_DIR: &str = "output/town";

fn load_config(path: Option<&Path>) -> Result<EpiConfig> {
    let Some(p) = path else {
        return Ok(EpiConfig {
            seed:                    42,
            tick_limit:              SIM_DAYS * 24,
            start_unix_secs:         1_700_438_400, // Monday 00:00 UTC
            snapshot_interval_ticks: 24,
            ..EpiConfig::default()
        });
    };
    let text = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", p.display()))
}

// ── World ─────────────────────────────────────────────────────────────────────

struct Town {
    population: Population,
    registry:   LocationRegistry,
    school:     LocationId,
}

fn build_town(config: &EpiConfig, rng: &mut SimRng) -> Result<Town> {
    let ticks_per_day = config.make_clock().ticks_for_days(1);
    if ticks_per_day < 24 {
        bail!("town needs at least hourly ticks, got {} per day", ticks_per_day);
    }
    let hour = ticks_per_day / 24;

    let mut population = Population::with_capacity(HOUSEHOLDS * 4);
    let mut registry = LocationRegistry::new();

    // 1. Households.
    let mut everybody: Vec<PersonId> = Vec::with_capacity(HOUSEHOLDS * 4);
    for _ in 0..HOUSEHOLDS {
        let (members, _home) =
            create_household_random(&mut population, &mut registry, &HOUSEHOLD, HOME_RATE, rng)?;
        everybody.extend(members);
    }

    // 2. School claims every child of school age.
    let school = registry.add("school", SCHOOL_RATE);
    let school_days = weekly(school, ticks_per_day, &WEEKDAYS, 8 * hour, 7 * hour);
    rng.shuffle(&mut everybody);
    let mut rest = claim_by_age(&mut population, &everybody, &school_days, 6, 17, usize::MAX)?;

    // 3. Workplaces split the working-age adults.
    let per_workplace = population.len() / WORKPLACES + 1;
    for w in 0..WORKPLACES {
        let work = registry.add(format!("work-{w}"), WORK_RATE);
        let shifts = weekly(work, ticks_per_day, &WEEKDAYS, 9 * hour, 8 * hour);
        rest = claim_by_age(&mut population, &rest, &shifts, 18, 66, per_workplace)?;
    }

    // 4. Seed infections.
    for &id in everybody.iter().take(INITIAL_INFECTED) {
        population.get_mut(id)?.seed_state(InfectionState::Infected);
    }

    info!(
        "town: {} persons in {} households, {} at home all week",
        population.len(),
        HOUSEHOLDS,
        rest.len(),
    );
    Ok(Town { population, registry, school })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init()?;

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref().map(Path::new))?;
    if let Some(n) = config.num_threads {
        rayon::ThreadPoolBuilder::new().num_threads(n).build_global()?;
    }

    let mut rng = SimRng::new(config.seed);
    let Town { population, registry, school } = build_town(&config, &mut rng)?;

    let clock = config.make_clock();
    let close_at = Tick(clock.ticks_for_days(SCHOOL_CLOSED_DAYS.0));
    let reopen_at = Tick(clock.ticks_for_days(SCHOOL_CLOSED_DAYS.1));

    let mut sim = SimBuilder::new(config.clone(), population, registry).build()?;

    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut output = SimOutputObserver::new(writer, &config);

    // Stepped by hand so closures can be applied between ticks.
    let t0 = Instant::now();
    let mut peak = (Tick::ZERO, 0);
    while sim.state().is_runnable() {
        let now = sim.current_tick();
        if now == close_at {
            sim.set_location_open(school, false)?;
        } else if now == reopen_at {
            sim.set_location_open(school, true)?;
        }

        output.on_tick_start(now);
        let snapshot = sim.step()?;
        output.on_snapshot(&snapshot, sim.clock());
        if snapshot.counts.infected > peak.1 {
            peak = (snapshot.tick, snapshot.counts.infected);
        }
    }
    output.on_sim_end(sim.current_tick());
    if let Some(e) = output.take_error() {
        warn!("output incomplete: {e}");
    }

    let counts = sim.counts();
    info!("finished in {:.3} s: {counts}", t0.elapsed().as_secs_f64());
    info!("peak of {} infected at {}", peak.1, peak.0);
    info!("attack rate {:.1}%", 100.0 * (counts.total() - counts.susceptible) as f64 / counts.total() as f64);
    info!("output written to {OUTPUT_DIR}/");
    Ok(())
}
