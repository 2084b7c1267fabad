//! Library for working with finite automata: modelling, determinization via
//! subset construction and classification of input words.
//!
//! An [`Automaton`] is an immutable value holding states, an [`Alphabet`],
//! a transition relation, an initial state and a set of final states. It is
//! validated once at construction and never mutated afterwards. On top of the
//! model, three operations are provided:
//! - [`Automaton::epsilon_closure`] computes the set of states reachable from
//!   a state through epsilon transitions alone,
//! - [`Automaton::determinize`] applies the subset construction and yields an
//!   equivalent deterministic, epsilon-free automaton,
//! - [`Automaton::evaluate`] runs a deterministic automaton on a batch of
//!   words and classifies each one.
#![warn(missing_docs)]

/// Type alias for a hash set, uses the hasher from [`ahash`].
pub type Set<S> = std::collections::HashSet<S, ahash::RandomState>;
/// Type alias for a hash map, uses the hasher from [`ahash`].
pub type Map<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;

mod alphabet;
pub use alphabet::{Alphabet, EPSILON};

mod automaton;
pub use automaton::{Automaton, InvalidAutomaton, Label, Transition};

mod builder;
pub use builder::AutomatonBuilder;

mod closure;

mod determinize;

mod run;
pub use run::{Classification, NotDeterministic};

mod input;
pub use input::{load_automaton, parse_automaton, ParseError};

/// Re-exports everything needed for working with the crate.
pub mod prelude {
    pub use super::{
        load_automaton, parse_automaton, Alphabet, Automaton, AutomatonBuilder, Classification,
        InvalidAutomaton, Label, Map, NotDeterministic, ParseError, Set, Transition, EPSILON,
    };
}
