use std::path::Path;

use thiserror::Error;

use crate::{Alphabet, Automaton, InvalidAutomaton, Label, Transition, EPSILON};

/// The error raised when a textual automaton description cannot be turned
/// into an [`Automaton`].
#[derive(Error, Debug)]
pub enum ParseError {
    /// The description ended before the named line.
    #[error("unexpected end of input, missing the {0} line")]
    MissingLine(&'static str),
    /// A symbol or transition label spans more than one character.
    #[error("symbol {0:?} must be a single character")]
    WideSymbol(String),
    /// A transition rule does not consist of exactly three fields.
    #[error("transition rule {0:?} must consist of source, label and target")]
    MalformedRule(String),
    /// The description parsed but violates a structural invariant.
    #[error(transparent)]
    Invalid(#[from] InvalidAutomaton),
    /// The description could not be read from disk.
    #[error("reading the automaton description failed: {0}")]
    Io(#[from] std::io::Error),
}

fn single_char(token: &str) -> Result<char, ParseError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(ParseError::WideSymbol(token.to_string())),
    }
}

/// Parses a textual automaton description of the form
///
/// ```text
/// <alphabet symbols, separated by spaces>
/// <state names>
/// <final state names>
/// <initial state name>
/// <one transition rule "source label target" per line>
/// ```
///
/// where the label `&` marks an epsilon transition. The parsed components are
/// passed through [`Automaton::try_new`], so a description violating the
/// structural invariants fails here with [`ParseError::Invalid`] and never
/// reaches the algorithms.
pub fn parse_automaton(src: &str) -> Result<Automaton, ParseError> {
    let mut lines = src.lines();
    let symbols = lines
        .next()
        .ok_or(ParseError::MissingLine("alphabet"))?
        .split_whitespace()
        .map(single_char)
        .collect::<Result<Vec<char>, _>>()?;
    let states: Vec<String> = lines
        .next()
        .ok_or(ParseError::MissingLine("states"))?
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let finals: Vec<String> = lines
        .next()
        .ok_or(ParseError::MissingLine("final states"))?
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let initial = lines
        .next()
        .ok_or(ParseError::MissingLine("initial state"))?
        .trim()
        .to_string();

    let mut transitions = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[from, label, to] = fields.as_slice() else {
            return Err(ParseError::MalformedRule(line.trim().to_string()));
        };
        let label = match single_char(label)? {
            EPSILON => Label::Epsilon,
            symbol => Label::Symbol(symbol),
        };
        transitions.push(Transition::new(from, label, to));
    }

    Ok(Automaton::try_new(
        states,
        Alphabet::new(symbols),
        transitions,
        initial,
        finals,
    )?)
}

/// Reads the file at the given path and parses it with [`parse_automaton`].
pub fn load_automaton<P: AsRef<Path>>(path: P) -> Result<Automaton, ParseError> {
    parse_automaton(&std::fs::read_to_string(path)?)
}
