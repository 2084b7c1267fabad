use std::collections::{BTreeSet, VecDeque};

use itertools::Itertools;
use tracing::trace;

use crate::{Automaton, Label, Set, Transition};

/// A set of original states acting as one composite state of the determinized
/// automaton. Two state sets are equal iff they contain the same states, the
/// discovery order plays no role.
#[derive(Clone, Eq, PartialEq, Hash)]
struct StateSet(BTreeSet<usize>);

impl StateSet {
    /// The canonical label of the composite state: the member names sorted
    /// lexicographically and joined with a delimiter. The delimiter keeps
    /// labels collision-free, a plain concatenation could not tell
    /// `{"ab", "c"}` and `{"a", "bc"}` apart.
    fn label(&self, aut: &Automaton) -> String {
        self.0.iter().map(|&q| aut.name(q)).sorted().join(",")
    }

    fn contains_final(&self, aut: &Automaton) -> bool {
        self.0.iter().any(|&q| aut.is_final_id(q))
    }

    /// The composite successor on `symbol`: the union of the epsilon closures
    /// of every state reachable from a member with a single `symbol`
    /// transition. Empty if no member has such a transition.
    fn successor(&self, aut: &Automaton, symbol: char) -> StateSet {
        let mut union = BTreeSet::new();
        for &q in &self.0 {
            for &p in aut.successor_ids(q, Label::Symbol(symbol)) {
                union.extend(aut.closure_ids(p));
            }
        }
        StateSet(union)
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Automaton {
    /// Applies the subset construction and returns an equivalent automaton
    /// that is deterministic and free of epsilon transitions.
    ///
    /// The work queue is seeded with the epsilon closure of the initial
    /// state, which becomes the new initial state. Every composite state is
    /// expanded exactly once; for each alphabet symbol the composite
    /// successor is recorded as a transition and enqueued when it has not
    /// been discovered before. A composite state is final iff it contains an
    /// original final state. Only composite states reachable from the initial
    /// closure are materialized.
    ///
    /// `self` is not modified, the result is a fresh [`Automaton`] whose
    /// states carry the canonical labels of the underlying state sets.
    pub fn determinize(&self) -> Automaton {
        let start = StateSet(self.closure_ids(self.initial_id()));
        let mut queue = VecDeque::from([start.clone()]);
        let mut seen: Set<StateSet> = Set::from_iter([start.clone()]);

        let mut states = Vec::new();
        let mut transitions = Vec::new();
        let mut finals = Vec::new();

        while let Some(current) = queue.pop_front() {
            let label = current.label(self);
            trace!("expanding composite state {{{label}}}");
            if current.contains_final(self) {
                finals.push(label.clone());
            }
            states.push(label.clone());

            for symbol in self.alphabet().universe() {
                let target = current.successor(self, symbol);
                if target.is_empty() {
                    continue;
                }
                transitions.push(Transition::new(label.clone(), symbol, target.label(self)));
                if seen.insert(target.clone()) {
                    queue.push_back(target);
                }
            }
        }

        trace!(
            "subset construction produced {} composite states and {} transitions",
            states.len(),
            transitions.len()
        );
        Automaton::try_new(
            states,
            self.alphabet().clone(),
            transitions,
            start.label(self),
            finals,
        )
        .expect("subset construction emits only declared states and symbols")
    }
}
