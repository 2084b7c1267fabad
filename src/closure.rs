use std::collections::BTreeSet;

use crate::{Automaton, Label};

impl Automaton {
    /// Computes the epsilon closure of the given state: all states reachable
    /// through zero or more epsilon transitions, including the state itself.
    /// Returns `None` if the state is not declared.
    ///
    /// ```
    /// use detfa::AutomatonBuilder;
    ///
    /// let aut = AutomatonBuilder::default()
    ///     .with_symbols(['a'])
    ///     .with_epsilon_transitions([("q0", "q1")])
    ///     .into_automaton("q0")
    ///     .unwrap();
    /// let closure = aut.epsilon_closure("q0").unwrap();
    /// assert_eq!(closure.into_iter().collect::<Vec<_>>(), ["q0", "q1"]);
    /// ```
    pub fn epsilon_closure(&self, state: &str) -> Option<BTreeSet<&str>> {
        let origin = self.id(state)?;
        Some(
            self.closure_ids(origin)
                .into_iter()
                .map(|q| self.name(q))
                .collect(),
        )
    }

    /// Reachability search along epsilon transitions only. Each state is
    /// expanded at most once, so epsilon cycles terminate.
    pub(crate) fn closure_ids(&self, origin: usize) -> BTreeSet<usize> {
        let mut closure = BTreeSet::from([origin]);
        let mut stack = vec![origin];
        while let Some(current) = stack.pop() {
            for &next in self.successor_ids(current, Label::Epsilon) {
                if closure.insert(next) {
                    stack.push(next);
                }
            }
        }
        closure
    }
}

#[cfg(test)]
mod tests {
    use crate::AutomatonBuilder;

    #[test]
    fn closure_of_state_without_epsilon_transitions_is_the_state_itself() {
        let aut = AutomatonBuilder::default()
            .with_transitions([("q0", 'a', "q1")])
            .into_automaton("q0")
            .unwrap();
        assert_eq!(
            aut.epsilon_closure("q0").unwrap().into_iter().collect::<Vec<_>>(),
            ["q0"]
        );
    }

    #[test]
    fn closure_follows_chains_of_epsilon_transitions() {
        let aut = AutomatonBuilder::default()
            .with_symbols(['a'])
            .with_epsilon_transitions([("q0", "q1"), ("q1", "q2")])
            .with_transitions([("q2", 'a', "q3")])
            .into_automaton("q0")
            .unwrap();
        assert_eq!(
            aut.epsilon_closure("q0").unwrap().into_iter().collect::<Vec<_>>(),
            ["q0", "q1", "q2"]
        );
    }

    #[test]
    fn cyclic_epsilon_transitions_terminate() {
        let aut = AutomatonBuilder::default()
            .with_symbols(['a'])
            .with_epsilon_transitions([("q0", "q1"), ("q1", "q2"), ("q2", "q0")])
            .into_automaton("q0")
            .unwrap();
        assert_eq!(aut.epsilon_closure("q1").unwrap().len(), 3);
    }

    #[test]
    fn closure_is_closed_under_itself() {
        let aut = AutomatonBuilder::default()
            .with_symbols(['a'])
            .with_epsilon_transitions([("q0", "q1"), ("q1", "q2"), ("q0", "q3")])
            .into_automaton("q0")
            .unwrap();
        let closure = aut.epsilon_closure("q0").unwrap();
        for member in &closure {
            let inner = aut.epsilon_closure(member).unwrap();
            assert!(inner.is_subset(&closure));
        }
    }

    #[test]
    fn undeclared_states_have_no_closure() {
        let aut = AutomatonBuilder::default()
            .with_transitions([("q0", 'a', "q0")])
            .into_automaton("q0")
            .unwrap();
        assert!(aut.epsilon_closure("q9").is_none());
    }
}
