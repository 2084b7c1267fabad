use std::fmt::Display;

use thiserror::Error;

use crate::{Automaton, Label, Map};

/// The verdict of running a deterministic automaton on a single word.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Classification {
    /// The word was consumed completely and the run ended in a final state.
    Accepted,
    /// The word was consumed completely and the run ended in a non-final
    /// state, or it reached a state without a transition for the next symbol.
    Rejected,
    /// The word contains a symbol that is not part of the alphabet.
    Invalid,
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Accepted => write!(f, "ACCEPTED"),
            Classification::Rejected => write!(f, "REJECTED"),
            Classification::Invalid => write!(f, "INVALID"),
        }
    }
}

/// Returned when words are evaluated against an automaton that still has
/// epsilon transitions or more than one successor for some (state, symbol)
/// pair. Running such an automaton would make the chosen path an artifact of
/// declaration order, so it is forbidden instead of silently tolerated.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
#[error("the automaton is not deterministic, determinize it before evaluating words")]
pub struct NotDeterministic;

impl Automaton {
    /// Returns true if the automaton has no epsilon transitions and at most
    /// one successor for every (state, symbol) pair.
    pub fn is_deterministic(&self) -> bool {
        self.transitions()
            .iter()
            .all(|t| t.label != Label::Epsilon)
            && (0..self.size()).all(|q| {
                self.alphabet()
                    .universe()
                    .all(|symbol| self.successor_ids(q, Label::Symbol(symbol)).len() <= 1)
            })
    }

    /// Classifies a single word. Fails with [`NotDeterministic`] unless
    /// [`Automaton::is_deterministic`] holds.
    pub fn classify(&self, word: &str) -> Result<Classification, NotDeterministic> {
        if !self.is_deterministic() {
            return Err(NotDeterministic);
        }
        Ok(self.run_word(word))
    }

    /// Classifies every given word, producing a map from word to
    /// [`Classification`]. Duplicate words are classified once, the relation
    /// is functional per word. Fails with [`NotDeterministic`] unless
    /// [`Automaton::is_deterministic`] holds.
    ///
    /// ```
    /// use detfa::{AutomatonBuilder, Classification};
    ///
    /// let dfa = AutomatonBuilder::default()
    ///     .with_transitions([("q0", 'a', "q1"), ("q1", 'a', "q0")])
    ///     .with_final_states(["q0"])
    ///     .into_automaton("q0")
    ///     .unwrap();
    /// let results = dfa.evaluate(["aa", "a"]).unwrap();
    /// assert_eq!(results["aa"], Classification::Accepted);
    /// assert_eq!(results["a"], Classification::Rejected);
    /// ```
    pub fn evaluate<W: AsRef<str>, I: IntoIterator<Item = W>>(
        &self,
        words: I,
    ) -> Result<Map<String, Classification>, NotDeterministic> {
        if !self.is_deterministic() {
            return Err(NotDeterministic);
        }
        Ok(words
            .into_iter()
            .map(|word| {
                let word = word.as_ref();
                (word.to_string(), self.run_word(word))
            })
            .collect())
    }

    /// Single-path simulation. A symbol outside the alphabet classifies the
    /// word invalid without scanning the rest; a state without a transition
    /// for the current symbol is a dead end and rejects immediately.
    fn run_word(&self, word: &str) -> Classification {
        let mut current = self.initial_id();
        for symbol in word.chars() {
            if !self.alphabet().contains(symbol) {
                return Classification::Invalid;
            }
            match self.successor_ids(current, Label::Symbol(symbol)).first() {
                Some(&next) => current = next,
                None => return Classification::Rejected,
            }
        }
        if self.is_final_id(current) {
            Classification::Accepted
        } else {
            Classification::Rejected
        }
    }
}
