use crate::{Alphabet, Automaton, InvalidAutomaton, Label, Transition};

/// Helper struct for the construction of automata. It collects transitions
/// and final states and infers the components that are not given explicitly:
/// without [`AutomatonBuilder::with_states`] the state set is gathered from
/// the initial state, the transitions and the final states in first-seen
/// order, and without [`AutomatonBuilder::with_symbols`] the alphabet is
/// gathered from the transition labels.
///
/// # Example
///
/// We build an automaton with two states `q0` and `q1` over the alphabet
/// `['a', 'b']`, where `q0` loops on `a`, moves to `q1` on `b` and `q1` is
/// the only final state:
/// ```
/// use detfa::AutomatonBuilder;
///
/// let aut = AutomatonBuilder::default()
///     .with_transitions([("q0", 'a', "q0"), ("q0", 'b', "q1")])
///     .with_final_states(["q1"])
///     .into_automaton("q0")
///     .unwrap();
/// assert_eq!(aut.size(), 2);
/// ```
#[derive(Default)]
pub struct AutomatonBuilder {
    symbols: Option<Alphabet>,
    states: Vec<String>,
    transitions: Vec<Transition>,
    finals: Vec<String>,
}

impl AutomatonBuilder {
    /// Fixes the alphabet explicitly instead of gathering it from the
    /// transition labels. Required when the alphabet has symbols that no
    /// transition consumes.
    pub fn with_symbols<I: IntoIterator<Item = char>>(mut self, symbols: I) -> Self {
        self.symbols = Some(Alphabet::new(symbols));
        self
    }

    /// Fixes the state set and its declaration order explicitly instead of
    /// gathering it from the transitions.
    pub fn with_states<S: Into<String>, I: IntoIterator<Item = S>>(mut self, states: I) -> Self {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Adds a list of transitions, given as (source, symbol, target) triples.
    pub fn with_transitions<F, L, T, I>(mut self, transitions: I) -> Self
    where
        F: Into<String>,
        L: Into<Label>,
        T: Into<String>,
        I: IntoIterator<Item = (F, L, T)>,
    {
        self.transitions.extend(
            transitions
                .into_iter()
                .map(|(from, label, to)| Transition::new(from, label, to)),
        );
        self
    }

    /// Adds a list of epsilon transitions, given as (source, target) pairs.
    pub fn with_epsilon_transitions<F, T, I>(mut self, transitions: I) -> Self
    where
        F: Into<String>,
        T: Into<String>,
        I: IntoIterator<Item = (F, T)>,
    {
        self.transitions.extend(
            transitions
                .into_iter()
                .map(|(from, to)| Transition::new(from, Label::Epsilon, to)),
        );
        self
    }

    /// Marks the given states as final.
    pub fn with_final_states<S: Into<String>, I: IntoIterator<Item = S>>(
        mut self,
        states: I,
    ) -> Self {
        self.finals.extend(states.into_iter().map(Into::into));
        self
    }

    /// Turns `self` into an [`Automaton`] with the given initial state. Fails
    /// with [`InvalidAutomaton`] under the same conditions as
    /// [`Automaton::try_new`].
    pub fn into_automaton<S: Into<String>>(self, initial: S) -> Result<Automaton, InvalidAutomaton> {
        let initial = initial.into();
        let states = if self.states.is_empty() {
            std::iter::once(initial.clone())
                .chain(
                    self.transitions
                        .iter()
                        .flat_map(|t| [t.from.clone(), t.to.clone()]),
                )
                .chain(self.finals.iter().cloned())
                .collect()
        } else {
            self.states
        };
        let alphabet = self.symbols.unwrap_or_else(|| {
            self.transitions
                .iter()
                .filter_map(|t| match t.label {
                    Label::Symbol(symbol) => Some(symbol),
                    Label::Epsilon => None,
                })
                .collect()
        });
        Automaton::try_new(states, alphabet, self.transitions, initial, self.finals)
    }
}

#[cfg(test)]
mod tests {
    use super::AutomatonBuilder;

    #[test]
    fn gathers_states_and_alphabet_from_transitions() {
        let aut = AutomatonBuilder::default()
            .with_transitions([("q0", 'a', "q1"), ("q1", 'b', "q0")])
            .with_epsilon_transitions([("q0", "q1")])
            .with_final_states(["q1"])
            .into_automaton("q0")
            .unwrap();
        assert_eq!(aut.states(), ["q0".to_string(), "q1".to_string()]);
        assert_eq!(aut.alphabet().universe().collect::<Vec<_>>(), ['a', 'b']);
        assert_eq!(aut.final_states().collect::<Vec<_>>(), ["q1"]);
    }

    #[test]
    fn explicit_states_keep_their_declaration_order() {
        let aut = AutomatonBuilder::default()
            .with_states(["q2", "q1", "q0"])
            .with_symbols(['a'])
            .with_transitions([("q0", 'a', "q1")])
            .into_automaton("q0")
            .unwrap();
        assert_eq!(aut.states(), ["q2".to_string(), "q1".to_string(), "q0".to_string()]);
    }
}
