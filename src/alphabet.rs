use std::{fmt::Debug, hash::Hash};

use itertools::Itertools;

use crate::{math::Bijection, Show, ValidationError};

/// A symbol is the label of a transition. Anything that is cheap to copy, can be ordered and
/// hashed qualifies, most commonly `char`.
pub trait Symbol: Copy + Eq + Ord + Hash + Debug + Show {}

impl<T: Copy + Eq + Ord + Hash + Debug + Show> Symbol for T {}

/// An ordered sequence of pairwise distinct symbols. The position of a symbol in the
/// sequence is its column index in the transition table of a [`crate::DFA`].
///
/// Internally, positions and symbols are kept in a [`Bijection`], so we can go from
/// a column to its symbol and back without scanning.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet<S: Symbol = char>(Bijection<usize, S>);

/// An [`Alphabet`] where a symbol is just a single `char`.
pub type CharAlphabet = Alphabet<char>;

impl<S: Symbol> Alphabet<S> {
    /// Builds an alphabet from the given symbols, which are assigned column indices in the
    /// order in which they are yielded. Fails if there are no symbols or if a symbol
    /// occurs twice.
    pub fn try_from_symbols<I: IntoIterator<Item = S>>(
        symbols: I,
    ) -> Result<Self, ValidationError> {
        let mut bijection = Bijection::new();
        for (position, symbol) in symbols.into_iter().enumerate() {
            if bijection.insert_no_overwrite(position, symbol).is_err() {
                return Err(ValidationError::DuplicateSymbol(format!("{symbol:?}")));
            }
        }
        if bijection.is_empty() {
            return Err(ValidationError::EmptyAlphabet);
        }
        Ok(Self(bijection))
    }

    /// Returns the number of symbols.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Iterates over all symbols in column order.
    pub fn universe(&self) -> impl Iterator<Item = S> + '_ {
        self.0.iter().map(|(_, symbol)| *symbol)
    }

    /// Returns the symbol in column `position`, if it exists.
    pub fn nth(&self, position: usize) -> Option<S> {
        self.0.get_by_left(&position).copied()
    }

    /// Returns the column index of `symbol` or `None` if it is not part of the alphabet.
    pub fn symbol_index(&self, symbol: S) -> Option<usize> {
        self.0.get_by_right(&symbol).copied()
    }

    /// Checks whether `symbol` is part of the alphabet.
    pub fn contains(&self, symbol: S) -> bool {
        self.0.contains_right(&symbol)
    }

    /// Returns true if both alphabets consist of the same symbols, regardless of their order.
    pub fn same_symbols(&self, other: &Self) -> bool {
        self.size() == other.size() && self.universe().all(|symbol| other.contains(symbol))
    }
}

impl CharAlphabet {
    /// Creates a new [`CharAlphabet`] of the given size. The symbols are just the first `size`
    /// letters of the latin alphabet, i.e. 'a', 'b' and so on.
    ///
    /// Panics if `size` is zero or exceeds 26.
    pub fn of_size(size: usize) -> Self {
        assert!((1..=26).contains(&size), "alphabet size must be between 1 and 26");
        Self((0..size).map(|i| (i, (b'a' + i as u8) as char)).collect())
    }
}

impl<S: Symbol> Debug for Alphabet<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.universe().map(|symbol| symbol.show()).join(", "))
    }
}
