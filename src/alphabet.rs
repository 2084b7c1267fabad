use std::fmt::{Debug, Display};

use itertools::Itertools;

/// The reserved epsilon marker. It labels transitions that consume no input
/// symbol and may never appear as a symbol of an [`Alphabet`].
pub const EPSILON: char = '&';

/// An alphabet is a finite set of single-character symbols. Declaration order
/// is preserved, as it determines the order in which the determinizer scans
/// symbols and the order in which they are rendered.
///
/// # Example
/// ```
/// use detfa::{Alphabet, EPSILON};
///
/// let sigma = Alphabet::new(['a', 'b', 'a']);
/// assert_eq!(sigma.len(), 2);
/// assert!(sigma.contains('b'));
/// assert!(!sigma.contains(EPSILON));
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    /// Creates a new alphabet from an iterator over symbols. Duplicates are
    /// dropped, the first occurrence decides the position of a symbol.
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Self {
        Self(symbols.into_iter().unique().collect())
    }

    /// Returns true if the given symbol is present in the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.0.contains(&symbol)
    }

    /// Returns an iterator over all symbols in declaration order.
    pub fn universe(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// The number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the alphabet has no symbols at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::Alphabet;

    #[test]
    fn deduplication_keeps_first_position() {
        let sigma = Alphabet::new("abcab".chars());
        assert_eq!(sigma.universe().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn display_is_space_separated() {
        let sigma = Alphabet::new(['a', 'b']);
        assert_eq!(sigma.to_string(), "a b");
    }
}
