use std::fmt::{Debug, Display};

use itertools::Itertools;
use thiserror::Error;

use crate::{Alphabet, Map, Set, EPSILON};

/// The label of a [`Transition`]. Either a proper symbol of the alphabet or
/// the epsilon marker, which consumes no input.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Label {
    /// A transition that consumes the given symbol.
    Symbol(char),
    /// A transition that consumes no input at all.
    Epsilon,
}

impl From<char> for Label {
    fn from(symbol: char) -> Self {
        Label::Symbol(symbol)
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Symbol(symbol) => write!(f, "{symbol}"),
            Label::Epsilon => write!(f, "{EPSILON}"),
        }
    }
}

impl Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

/// A single element of the transition relation: from the `from` state, reading
/// `label`, the automaton may move to the `to` state. Several transitions may
/// share their source and label, which makes the relation non-deterministic.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Transition {
    /// Source state of the transition.
    pub from: String,
    /// The label that is consumed when the transition is taken.
    pub label: Label,
    /// Target state of the transition.
    pub to: String,
}

impl Transition {
    /// Creates a new transition between the given states.
    pub fn new<F: Into<String>, L: Into<Label>, T: Into<String>>(from: F, label: L, to: T) -> Self {
        Self {
            from: from.into(),
            label: label.into(),
            to: to.into(),
        }
    }
}

impl Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} --{}--> {}", self.from, self.label, self.to)
    }
}

/// The error raised when [`Automaton::try_new`] rejects its raw components.
/// Construction is the single validation gate, an automaton violating any of
/// the structural invariants is never observable.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum InvalidAutomaton {
    /// The initial state does not appear in the state set.
    #[error("initial state {0:?} is not a declared state")]
    Initial(String),
    /// A final state does not appear in the state set.
    #[error("final state {0:?} is not a declared state")]
    Final(String),
    /// A transition references an undeclared state or an unknown symbol.
    #[error("invalid transition {0:?}: source, target and symbol must all be declared")]
    Transition(Transition),
    /// The alphabet contains the reserved epsilon marker.
    #[error("the epsilon marker {EPSILON:?} is reserved and cannot be an alphabet symbol")]
    ReservedSymbol,
}

/// A finite automaton over single-character symbols, possibly
/// non-deterministic and possibly containing epsilon transitions.
///
/// The five components (states, alphabet, transition relation, initial state,
/// final states) are handed to [`Automaton::try_new`], which verifies the
/// structural invariants and indexes the relation by (source, label) so that
/// successor lookups do not scan the whole relation. After construction the
/// automaton is immutable; [`Automaton::determinize`] builds a fresh one.
#[derive(Clone, Debug)]
pub struct Automaton {
    states: Vec<String>,
    alphabet: Alphabet,
    transitions: Vec<Transition>,
    initial: usize,
    finals: Set<usize>,
    ids: Map<String, usize>,
    edges: Map<(usize, Label), Vec<usize>>,
}

impl Automaton {
    /// Creates a new automaton from its five raw components, verifying the
    /// structural invariants: the initial state and every final state must be
    /// declared, every transition must connect declared states and its label
    /// must be a declared symbol or epsilon, and the alphabet must not claim
    /// the reserved epsilon marker. Duplicate state declarations are dropped,
    /// the first occurrence decides the position of a state.
    pub fn try_new<I: IntoIterator<Item = String>, F: IntoIterator<Item = String>>(
        states: I,
        alphabet: Alphabet,
        transitions: Vec<Transition>,
        initial: String,
        finals: F,
    ) -> Result<Self, InvalidAutomaton> {
        if alphabet.contains(EPSILON) {
            return Err(InvalidAutomaton::ReservedSymbol);
        }

        let states: Vec<String> = states.into_iter().unique().collect();
        let ids: Map<String, usize> = states
            .iter()
            .enumerate()
            .map(|(id, q)| (q.clone(), id))
            .collect();

        let initial = *ids
            .get(&initial)
            .ok_or(InvalidAutomaton::Initial(initial))?;
        let finals = finals
            .into_iter()
            .map(|q| ids.get(&q).copied().ok_or(InvalidAutomaton::Final(q)))
            .collect::<Result<Set<usize>, _>>()?;

        let mut edges: Map<(usize, Label), Vec<usize>> = Map::default();
        for transition in &transitions {
            let declared = match transition.label {
                Label::Symbol(symbol) => alphabet.contains(symbol),
                Label::Epsilon => true,
            };
            let (from, to) = match (ids.get(&transition.from), ids.get(&transition.to)) {
                (Some(&from), Some(&to)) if declared => (from, to),
                _ => return Err(InvalidAutomaton::Transition(transition.clone())),
            };
            let bucket = edges.entry((from, transition.label)).or_default();
            // the relation is a set, repeated triples are indexed once
            if !bucket.contains(&to) {
                bucket.push(to);
            }
        }

        Ok(Self {
            states,
            alphabet,
            transitions,
            initial,
            finals,
            ids,
            edges,
        })
    }

    /// The states of the automaton in declaration order.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// The number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// The alphabet over which the automaton operates.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The transition relation, in declaration order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// The name of the initial state.
    pub fn initial(&self) -> &str {
        &self.states[self.initial]
    }

    /// Iterates over the names of all final states, in declaration order.
    pub fn final_states(&self) -> impl Iterator<Item = &str> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(id, _)| self.finals.contains(id))
            .map(|(_, q)| q.as_str())
    }

    /// Returns true if the given state is declared and final.
    pub fn is_final(&self, state: &str) -> bool {
        self.id(state).is_some_and(|q| self.finals.contains(&q))
    }

    /// Returns true if the given state is declared.
    pub fn contains_state(&self, state: &str) -> bool {
        self.ids.contains_key(state)
    }

    /// Iterates over all states reachable from `state` with a single
    /// transition carrying the given label. Empty if the state is not
    /// declared or has no such transition.
    pub fn successors<'a>(
        &'a self,
        state: &str,
        label: Label,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.id(state)
            .and_then(|q| self.edges.get(&(q, label)))
            .into_iter()
            .flatten()
            .map(|&p| self.states[p].as_str())
    }

    pub(crate) fn id(&self, state: &str) -> Option<usize> {
        self.ids.get(state).copied()
    }

    pub(crate) fn name(&self, id: usize) -> &str {
        &self.states[id]
    }

    pub(crate) fn initial_id(&self) -> usize {
        self.initial
    }

    pub(crate) fn is_final_id(&self, id: usize) -> bool {
        self.finals.contains(&id)
    }

    pub(crate) fn successor_ids(&self, id: usize, label: Label) -> &[usize] {
        self.edges
            .get(&(id, label))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Renders the automaton in the same five-line textual format that
/// [`crate::parse_automaton`] consumes: alphabet, states, final states,
/// initial state, one transition rule per following line.
impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.alphabet)?;
        writeln!(f, "{}", self.states.iter().join(" "))?;
        writeln!(f, "{}", self.final_states().join(" "))?;
        writeln!(f, "{}", self.initial())?;
        for transition in &self.transitions {
            writeln!(f, "{} {} {}", transition.from, transition.label, transition.to)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Automaton, InvalidAutomaton, Label, Transition};
    use crate::Alphabet;

    fn components() -> (Vec<String>, Alphabet, Vec<Transition>) {
        (
            vec!["q0".to_string(), "q1".to_string()],
            Alphabet::new(['a', 'b']),
            vec![
                Transition::new("q0", 'a', "q1"),
                Transition::new("q1", Label::Epsilon, "q0"),
            ],
        )
    }

    #[test]
    fn construction_accepts_valid_components() {
        let (states, alphabet, transitions) = components();
        let aut = Automaton::try_new(
            states,
            alphabet,
            transitions,
            "q0".to_string(),
            ["q1".to_string()],
        )
        .unwrap();
        assert_eq!(aut.size(), 2);
        assert_eq!(aut.initial(), "q0");
        assert!(aut.is_final("q1"));
        assert!(!aut.is_final("q0"));
        assert_eq!(aut.successors("q0", 'a'.into()).collect::<Vec<_>>(), ["q1"]);
        assert_eq!(
            aut.successors("q1", Label::Epsilon).collect::<Vec<_>>(),
            ["q0"]
        );
    }

    #[test]
    fn construction_rejects_undeclared_initial_state() {
        let (states, alphabet, transitions) = components();
        let err = Automaton::try_new(states, alphabet, transitions, "q7".to_string(), [])
            .unwrap_err();
        assert_eq!(err, InvalidAutomaton::Initial("q7".to_string()));
    }

    #[test]
    fn construction_rejects_undeclared_final_state() {
        let (states, alphabet, transitions) = components();
        let err = Automaton::try_new(
            states,
            alphabet,
            transitions,
            "q0".to_string(),
            ["q9".to_string()],
        )
        .unwrap_err();
        assert_eq!(err, InvalidAutomaton::Final("q9".to_string()));
    }

    #[test]
    fn construction_rejects_transition_with_unknown_symbol() {
        let (states, alphabet, mut transitions) = components();
        transitions.push(Transition::new("q0", 'z', "q1"));
        let err = Automaton::try_new(states, alphabet, transitions, "q0".to_string(), [])
            .unwrap_err();
        assert_eq!(
            err,
            InvalidAutomaton::Transition(Transition::new("q0", 'z', "q1"))
        );
    }

    #[test]
    fn construction_rejects_transition_between_unknown_states() {
        let (states, alphabet, mut transitions) = components();
        transitions.push(Transition::new("q0", 'a', "q9"));
        let err = Automaton::try_new(states, alphabet, transitions, "q0".to_string(), [])
            .unwrap_err();
        assert!(matches!(err, InvalidAutomaton::Transition(_)));
    }

    #[test]
    fn construction_rejects_reserved_epsilon_symbol() {
        let err = Automaton::try_new(
            vec!["q0".to_string()],
            Alphabet::new(['a', '&']),
            vec![],
            "q0".to_string(),
            [],
        )
        .unwrap_err();
        assert_eq!(err, InvalidAutomaton::ReservedSymbol);
    }

    #[test]
    fn display_round_trips_through_the_parser() {
        let (states, alphabet, transitions) = components();
        let aut = Automaton::try_new(
            states,
            alphabet,
            transitions,
            "q0".to_string(),
            ["q1".to_string()],
        )
        .unwrap();
        let reparsed = crate::parse_automaton(&aut.to_string()).unwrap();
        assert_eq!(reparsed.states(), aut.states());
        assert_eq!(reparsed.alphabet(), aut.alphabet());
        assert_eq!(reparsed.initial(), aut.initial());
        assert_eq!(reparsed.transitions(), aut.transitions());
    }
}
