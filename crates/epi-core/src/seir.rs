//! The four-state SEIR infection model.

use std::fmt;

/// Disease state of one person.
///
/// The declaration order is the progression order, so `PartialOrd` answers
/// "is this state later in the disease course?".
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfectionState {
    #[default]
    Susceptible,
    Exposed,
    Infected,
    Recovered,
}

impl InfectionState {
    /// Position in `S < E < I < R`, usable as an index into per-state counters.
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// The only state this one may move to, or `None` for the terminal state.
    #[inline]
    pub fn successor(self) -> Option<InfectionState> {
        match self {
            InfectionState::Susceptible => Some(InfectionState::Exposed),
            InfectionState::Exposed     => Some(InfectionState::Infected),
            InfectionState::Infected    => Some(InfectionState::Recovered),
            InfectionState::Recovered   => None,
        }
    }

    /// `true` if `self → next` is one of S→E, E→I, I→R.
    #[inline]
    pub fn can_transition_to(self, next: InfectionState) -> bool {
        self.successor() == Some(next)
    }

    pub fn is_susceptible(self) -> bool {
        self == InfectionState::Susceptible
    }

    /// Only `Infected` persons transmit; `Exposed` persons are still incubating.
    pub fn is_infectious(self) -> bool {
        self == InfectionState::Infected
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InfectionState::Susceptible => "susceptible",
            InfectionState::Exposed     => "exposed",
            InfectionState::Infected    => "infected",
            InfectionState::Recovered   => "recovered",
        }
    }
}

impl fmt::Display for InfectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SeirCounts ────────────────────────────────────────────────────────────────

/// Number of persons in each state.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeirCounts {
    pub susceptible: usize,
    pub exposed:     usize,
    pub infected:    usize,
    pub recovered:   usize,
}

impl SeirCounts {
    /// Tally an iterator of states.
    pub fn tally<I: IntoIterator<Item = InfectionState>>(states: I) -> Self {
        let mut counts = SeirCounts::default();
        for state in states {
            counts.add(state);
        }
        counts
    }

    #[inline]
    pub fn add(&mut self, state: InfectionState) {
        match state {
            InfectionState::Susceptible => self.susceptible += 1,
            InfectionState::Exposed     => self.exposed += 1,
            InfectionState::Infected    => self.infected += 1,
            InfectionState::Recovered   => self.recovered += 1,
        }
    }

    pub fn get(&self, state: InfectionState) -> usize {
        match state {
            InfectionState::Susceptible => self.susceptible,
            InfectionState::Exposed     => self.exposed,
            InfectionState::Infected    => self.infected,
            InfectionState::Recovered   => self.recovered,
        }
    }

    pub fn total(&self) -> usize {
        self.susceptible + self.exposed + self.infected + self.recovered
    }
}

impl fmt::Display for SeirCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S={} E={} I={} R={}",
            self.susceptible, self.exposed, self.infected, self.recovered
        )
    }
}
