//! Unit tests for epi-disease.

use epi_core::{InfectionState, LocationId, PersonId, Tick, TransmissionPolicy};
use epi_population::{LocationRegistry, Population};
use epi_schedule::Itinerary;

use crate::{DiseaseParams, Transmission, advance, due_transition, expose};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// One location with probability `p`, holding a person per entry of `states`.
fn room(p: f64, states: &[InfectionState]) -> (Population, LocationRegistry) {
    let mut pop = Population::from_itineraries(vec![Itinerary::empty(); states.len()]);
    let mut reg = LocationRegistry::new();
    let loc = reg.add("room", p);
    for (i, &state) in states.iter().enumerate() {
        let id = PersonId(i as u32);
        pop.get_mut(id).unwrap().seed_state(state);
        assert!(reg.admit(loc, pop.get(id).unwrap()));
    }
    (pop, reg)
}

fn params(incubation: u64, infectious: u64) -> DiseaseParams {
    DiseaseParams { incubation_ticks: incubation, infectious_ticks: infectious }
}

#[cfg(test)]
mod transmission {
    use super::*;
    use InfectionState::*;

    #[test]
    fn certain_transmission_exposes_only_susceptibles() {
        let (pop, reg) = room(1.0, &[Infected, Susceptible, Recovered, Exposed, Susceptible]);
        let model = Transmission::new(TransmissionPolicy::Compounding, 1);
        let exposed = model.apply(reg.get(LocationId(0)).unwrap(), &pop, Tick(0));
        assert_eq!(exposed, vec![PersonId(1), PersonId(4)]);
    }

    #[test]
    fn nothing_happens_without_an_infectious_occupant() {
        let (pop, reg) = room(1.0, &[Susceptible, Exposed, Recovered, Susceptible]);
        let model = Transmission::new(TransmissionPolicy::Flat, 1);
        assert!(model.apply(reg.get(LocationId(0)).unwrap(), &pop, Tick(0)).is_empty());
    }

    #[test]
    fn zero_probability_never_transmits() {
        let (pop, reg) = room(0.0, &[Infected, Infected, Susceptible, Susceptible]);
        for policy in [TransmissionPolicy::Compounding, TransmissionPolicy::Flat] {
            let model = Transmission::new(policy, 3);
            for t in 0..50 {
                assert!(model.apply(reg.get(LocationId(0)).unwrap(), &pop, Tick(t)).is_empty());
            }
        }
    }

    #[test]
    fn same_seed_and_tick_give_same_exposures() {
        let mut states = vec![Infected];
        states.extend(std::iter::repeat_n(Susceptible, 40));
        let (pop, reg) = room(0.3, &states);
        let loc = reg.get(LocationId(0)).unwrap();

        let a = Transmission::new(TransmissionPolicy::Compounding, 42);
        let b = Transmission::new(TransmissionPolicy::Compounding, 42);
        for t in 0..10 {
            assert_eq!(a.apply(loc, &pop, Tick(t)), b.apply(loc, &pop, Tick(t)));
        }
    }

    #[test]
    fn compounding_grows_with_infectious_count_and_flat_does_not() {
        const N: usize = 2000;
        let mut one = vec![Infected];
        one.extend(std::iter::repeat_n(Susceptible, N));
        let mut two = vec![Infected, Infected];
        two.extend(std::iter::repeat_n(Susceptible, N));

        let (pop1, reg1) = room(0.5, &one);
        let (pop2, reg2) = room(0.5, &two);
        let loc1 = reg1.get(LocationId(0)).unwrap();
        let loc2 = reg2.get(LocationId(0)).unwrap();

        let compounding = Transmission::new(TransmissionPolicy::Compounding, 7);
        let flat = Transmission::new(TransmissionPolicy::Flat, 7);

        // Expected: 1000 with one infectious, 1500 with two (compounding).
        let c1 = compounding.apply(loc1, &pop1, Tick(0)).len();
        let c2 = compounding.apply(loc2, &pop2, Tick(0)).len();
        let f2 = flat.apply(loc2, &pop2, Tick(0)).len();
        assert!((850..=1150).contains(&c1), "{c1}");
        assert!((1350..=1650).contains(&c2), "{c2}");
        assert!((850..=1150).contains(&f2), "{f2}");
    }
}

#[cfg(test)]
mod progression {
    use super::*;
    use InfectionState::*;

    #[test]
    fn periods_must_be_positive() {
        assert!(params(1, 1).validate().is_ok());
        assert!(params(0, 5).validate().is_err());
        assert!(params(5, 0).validate().is_err());
    }

    #[test]
    fn timers_fire_once_dwell_reaches_period() {
        let p = params(2, 3);
        assert_eq!(due_transition(&p, Exposed, Tick(4), Tick(5)), None);
        assert_eq!(due_transition(&p, Exposed, Tick(4), Tick(6)), Some(Infected));
        assert_eq!(due_transition(&p, Infected, Tick(6), Tick(8)), None);
        assert_eq!(due_transition(&p, Infected, Tick(6), Tick(9)), Some(Recovered));
    }

    #[test]
    fn susceptible_and_recovered_never_fire() {
        let p = params(1, 1);
        assert_eq!(due_transition(&p, Susceptible, Tick(0), Tick(1000)), None);
        assert_eq!(due_transition(&p, Recovered, Tick(0), Tick(1000)), None);
    }

    #[test]
    fn advance_walks_a_person_through_e_i_r() {
        let mut pop = Population::from_itineraries(vec![Itinerary::empty()]);
        let person = pop.get_mut(PersonId(0)).unwrap();
        let p = params(2, 3);

        expose(person, Tick(1)).unwrap();
        assert_eq!(advance(person, &p, Tick(1)).unwrap(), None, "no same-tick progression");
        assert_eq!(advance(person, &p, Tick(2)).unwrap(), None);
        assert_eq!(advance(person, &p, Tick(3)).unwrap(), Some(Infected));
        assert_eq!(person.state_entry(), Tick(3));
        assert_eq!(advance(person, &p, Tick(5)).unwrap(), None);
        assert_eq!(advance(person, &p, Tick(6)).unwrap(), Some(Recovered));
        assert_eq!(advance(person, &p, Tick(100)).unwrap(), None);
    }

    #[test]
    fn exposing_a_non_susceptible_is_an_error() {
        let mut pop = Population::from_itineraries(vec![Itinerary::empty()]);
        let person = pop.get_mut(PersonId(0)).unwrap();
        person.seed_state(Recovered);
        assert!(expose(person, Tick(0)).is_err());
        assert_eq!(person.state(), Recovered);
    }
}
