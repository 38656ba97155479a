//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LocationId, PersonId};

    #[test]
    fn index_roundtrip() {
        let id = PersonId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PersonId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(PersonId(0) < PersonId(1));
        assert!(LocationId(100) > LocationId(99));
    }

    #[test]
    fn display() {
        assert_eq!(PersonId(7).to_string(), "PersonId(7)");
        assert_eq!(LocationId(3).to_string(), "LocationId(3)");
    }
}

#[cfg(test)]
mod seir {
    use crate::{InfectionState, SeirCounts};
    use InfectionState::*;

    #[test]
    fn progression_order() {
        assert!(Susceptible < Exposed);
        assert!(Exposed < Infected);
        assert!(Infected < Recovered);
        assert_eq!(Recovered.ordinal(), 3);
    }

    #[test]
    fn only_forward_single_steps_are_legal() {
        assert!(Susceptible.can_transition_to(Exposed));
        assert!(Exposed.can_transition_to(Infected));
        assert!(Infected.can_transition_to(Recovered));

        assert!(!Susceptible.can_transition_to(Infected), "must not skip Exposed");
        assert!(!Recovered.can_transition_to(Exposed), "no reinfection");
        assert!(!Infected.can_transition_to(Exposed));
        assert!(!Exposed.can_transition_to(Exposed));
        assert_eq!(Recovered.successor(), None);
    }

    #[test]
    fn only_infected_transmit() {
        assert!(Infected.is_infectious());
        assert!(!Exposed.is_infectious());
        assert!(!Recovered.is_infectious());
    }

    #[test]
    fn tally_sums_to_population() {
        let states = [Susceptible, Susceptible, Exposed, Infected, Recovered, Recovered];
        let counts = SeirCounts::tally(states);
        assert_eq!(counts.susceptible, 2);
        assert_eq!(counts.exposed, 1);
        assert_eq!(counts.infected, 1);
        assert_eq!(counts.get(Recovered), 2);
        assert_eq!(counts.total(), states.len());
        assert_eq!(counts.to_string(), "S=2 E=1 I=1 R=2");
    }
}

#[cfg(test)]
mod time {
    use crate::{EpiConfig, SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15).since(t), 5);
        assert_eq!(Tick(3).since(Tick(5)), 0);
    }

    #[test]
    fn clock_wall_time() {
        let mut clock = SimClock::new(1_000, 3600);
        assert_eq!(clock.unix_secs_at(Tick(2)), 1_000 + 7_200);
        clock.advance();
        assert_eq!(clock.current_tick, Tick(1));
        assert_eq!(clock.unix_secs_at(clock.current_tick), 1_000 + 3_600);
    }

    #[test]
    fn clock_dhm() {
        let mut clock = SimClock::new(0, 3600);
        for _ in 0..25 {
            clock.advance();
        }
        assert_eq!(clock.to_string(), "T25 (day 1 01:00)");
        let quarter_hours = SimClock::new(0, 900);
        assert_eq!(quarter_hours.to_string(), "T0 (day 0 00:00)");
    }

    #[test]
    fn ticks_for_duration() {
        let clock = SimClock::new(0, 3600);
        assert_eq!(clock.ticks_for_days(4), 96);
        assert_eq!(SimClock::new(0, 900).ticks_for_days(1), 96);
        assert_eq!(SimClock::new(0, 50_000).ticks_for_days(1), 2, "rounds up");
    }

    #[test]
    fn config_end_tick() {
        let cfg = EpiConfig { tick_limit: 500, ..EpiConfig::default() };
        assert_eq!(cfg.end_tick(), Tick(500));
        assert_eq!(cfg.make_clock().current_tick, Tick::ZERO);
    }
}

#[cfg(test)]
mod policy {
    use crate::TransmissionPolicy;

    #[test]
    fn no_infectious_means_no_risk() {
        assert_eq!(TransmissionPolicy::Compounding.exposure_probability(0.9, 0), 0.0);
        assert_eq!(TransmissionPolicy::Flat.exposure_probability(0.9, 0), 0.0);
    }

    #[test]
    fn compounding_grows_with_infectious_count() {
        let p = TransmissionPolicy::Compounding;
        assert!((p.exposure_probability(0.5, 1) - 0.5).abs() < 1e-12);
        assert!((p.exposure_probability(0.5, 2) - 0.75).abs() < 1e-12);
        assert!((p.exposure_probability(0.5, 3) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn flat_ignores_infectious_count() {
        let p = TransmissionPolicy::Flat;
        assert_eq!(p.exposure_probability(0.3, 1), 0.3);
        assert_eq!(p.exposure_probability(0.3, 10), 0.3);
    }

    #[test]
    fn zero_probability_never_exposes() {
        assert_eq!(TransmissionPolicy::Compounding.exposure_probability(0.0, 50), 0.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::{LocationId, SimRng, StreamRng, Tick};

    #[test]
    fn deterministic_same_stream() {
        let mut r1 = StreamRng::for_location(12345, LocationId(0), Tick(7));
        let mut r2 = StreamRng::for_location(12345, LocationId(0), Tick(7));
        for _ in 0..100 {
            assert_eq!(r1.gen_bool(0.5), r2.gen_bool(0.5));
        }
    }

    #[test]
    fn streams_differ_by_location_and_tick() {
        let draws = |location: u32, tick: u64| -> Vec<bool> {
            let mut rng = StreamRng::for_location(1, LocationId(location), Tick(tick));
            (0..64).map(|_| rng.gen_bool(0.5)).collect()
        };
        assert_ne!(draws(0, 0), draws(1, 0), "adjacent locations should diverge");
        assert_ne!(draws(0, 0), draws(0, 1), "adjacent ticks should diverge");
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = StreamRng::new(0, 0, Tick(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(7.0), "clamped to 1");
    }

    #[test]
    fn sim_rng_is_reproducible() {
        let mut r1 = SimRng::new(9);
        let mut r2 = SimRng::new(9);
        let d = rand::distributions::Uniform::new(0u32, 1_000_000);
        assert_eq!(r1.sample(d), r2.sample(d));

        let mut v1: Vec<u32> = (0..20).collect();
        let mut v2 = v1.clone();
        r1.shuffle(&mut v1);
        r2.shuffle(&mut v2);
        assert_eq!(v1, v2);
    }

    #[test]
    fn sim_rng_samples_distributions() {
        let mut rng = SimRng::new(4);
        let d = rand::distributions::Uniform::new(10u32, 12);
        for _ in 0..50 {
            let x = rng.sample(d);
            assert!((10..12).contains(&x));
        }
    }
}
