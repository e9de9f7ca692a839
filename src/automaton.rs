use std::ops::Range;

use itertools::Itertools;

use crate::{alphabet::Symbol, Alphabet, Show, ValidationError};

mod builder;
pub use builder::DFABuilder;

mod language;
mod reachability;

/// States of a [`DFA`] are dense indices `0..size`.
pub type StateIndex = usize;

/// A deterministic finite automaton (DFA) over symbols of type `S`. It accepts a finite word
/// if the run on that word from the initial state ends in an accepting state.
///
/// The transition function is total and stored as a dense table with one row per state and
/// one column per alphabet symbol (columns are ordered like the [`Alphabet`]). A value of this
/// type can only be obtained through [`DFA::try_new`] (or the [`DFABuilder`]), which validates
/// all parts before the automaton exists. Afterwards it is never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct DFA<S: Symbol = char> {
    alphabet: Alphabet<S>,
    transitions: Vec<StateIndex>,
    initial: StateIndex,
    accepting: Vec<bool>,
}

impl<S: Symbol> DFA<S> {
    /// Creates a new DFA with `num_states` states over the given alphabet symbols (in column
    /// order). `transitions` yields triples `(source, symbol, target)`, there must be exactly
    /// one target for every pair of state and symbol. Listing the same triple twice is fine.
    ///
    /// # Example
    /// ```
    /// use dfa_minimization::prelude::*;
    ///
    /// let dfa = DFA::try_new(
    ///     2,
    ///     ['a', 'b'],
    ///     [(0, 'a', 1), (0, 'b', 0), (1, 'a', 1), (1, 'b', 0)],
    ///     0,
    ///     [1],
    /// )
    /// .unwrap();
    /// assert!(dfa.accepts("ba".chars()));
    /// assert!(!dfa.accepts("ab".chars()));
    /// ```
    pub fn try_new<A, T, F>(
        num_states: usize,
        alphabet: A,
        transitions: T,
        start: StateIndex,
        accepting: F,
    ) -> Result<Self, ValidationError>
    where
        A: IntoIterator<Item = S>,
        T: IntoIterator<Item = (StateIndex, S, StateIndex)>,
        F: IntoIterator<Item = StateIndex>,
    {
        if num_states == 0 {
            return Err(ValidationError::EmptyStateSet);
        }
        let alphabet = Alphabet::try_from_symbols(alphabet)?;
        let in_range = |state: StateIndex| {
            if state < num_states {
                Ok(state)
            } else {
                Err(ValidationError::OutOfRangeState { state, num_states })
            }
        };

        let initial = in_range(start)?;

        let mut accepting_flags = vec![false; num_states];
        for state in accepting {
            accepting_flags[in_range(state)?] = true;
        }

        let columns = alphabet.size();
        let mut table = vec![None; num_states * columns];
        for (source, symbol, target) in transitions {
            let source = in_range(source)?;
            let target = in_range(target)?;
            let column = alphabet
                .symbol_index(symbol)
                .ok_or_else(|| ValidationError::OutOfRangeSymbol(format!("{symbol:?}")))?;
            let cell = &mut table[source * columns + column];
            if let Some(first) = *cell {
                if first != target {
                    return Err(ValidationError::ConflictingTransition {
                        state: source,
                        symbol: format!("{symbol:?}"),
                        first,
                        second: target,
                    });
                }
            }
            *cell = Some(target);
        }

        let transitions = table
            .into_iter()
            .enumerate()
            .map(|(position, target)| {
                target.ok_or_else(|| {
                    let symbol = alphabet
                        .nth(position % columns)
                        .map(|symbol| format!("{symbol:?}"))
                        .unwrap_or_default();
                    ValidationError::IncompleteTransitionTable {
                        state: position / columns,
                        symbol,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            alphabet,
            transitions,
            initial,
            accepting: accepting_flags,
        })
    }

    /// Assembles a DFA from parts that are already known to be consistent, i.e. the table
    /// has `accepting.len() * alphabet.size()` entries and all targets are in range.
    pub(crate) fn from_raw_parts(
        alphabet: Alphabet<S>,
        transitions: Vec<StateIndex>,
        initial: StateIndex,
        accepting: Vec<bool>,
    ) -> Self {
        debug_assert!(!accepting.is_empty());
        debug_assert_eq!(transitions.len(), accepting.len() * alphabet.size());
        debug_assert!(initial < accepting.len());
        debug_assert!(transitions.iter().all(|&q| q < accepting.len()));
        Self {
            alphabet,
            transitions,
            initial,
            accepting,
        }
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.accepting.len()
    }

    /// Returns a reference to the alphabet.
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// Returns the initial state.
    pub fn initial(&self) -> StateIndex {
        self.initial
    }

    /// Iterates over all state indices in ascending order.
    pub fn state_indices(&self) -> Range<StateIndex> {
        0..self.size()
    }

    /// Returns the column index of `symbol`, or `None` if it is not part of the alphabet.
    pub fn symbol_index(&self, symbol: S) -> Option<usize> {
        self.alphabet.symbol_index(symbol)
    }

    /// Returns the target of the transition from `state` on the symbol in column `symbol`.
    ///
    /// Panics if `state` or `symbol` are out of range.
    #[inline(always)]
    pub fn transition(&self, state: StateIndex, symbol: usize) -> StateIndex {
        assert!(symbol < self.alphabet.size(), "symbol column out of range");
        self.transitions[state * self.alphabet.size() + symbol]
    }

    /// Returns the successor of `state` on `symbol`, which is `None` if the state does not
    /// exist or the symbol is not part of the alphabet.
    pub fn successor(&self, state: StateIndex, symbol: S) -> Option<StateIndex> {
        if state >= self.size() {
            return None;
        }
        self.symbol_index(symbol)
            .map(|column| self.transition(state, column))
    }

    /// Returns the row of the transition table that belongs to `state`, targets are in column
    /// order.
    pub fn successors(&self, state: StateIndex) -> &[StateIndex] {
        let columns = self.alphabet.size();
        &self.transitions[state * columns..(state + 1) * columns]
    }

    /// Checks whether `state` is accepting, states that do not exist are not accepting.
    pub fn is_accepting(&self, state: StateIndex) -> bool {
        self.accepting.get(state).copied().unwrap_or(false)
    }

    /// Returns the indices of all states that are accepting.
    pub fn accepting_states(&self) -> impl Iterator<Item = StateIndex> + '_ {
        self.state_indices().filter(|&q| self.accepting[q])
    }

    /// Returns the indices of all states that are rejecting.
    pub fn rejecting_states(&self) -> impl Iterator<Item = StateIndex> + '_ {
        self.state_indices().filter(|&q| !self.accepting[q])
    }

    /// Runs `word` from `state` and returns the state that is reached. Gives `None` if
    /// `state` does not exist or the word contains a symbol outside of the alphabet.
    pub fn reached_from<W>(&self, state: StateIndex, word: W) -> Option<StateIndex>
    where
        W: IntoIterator<Item = S>,
    {
        word.into_iter()
            .try_fold(state, |current, symbol| self.successor(current, symbol))
            .filter(|&q| q < self.size())
    }

    /// Runs `word` from the initial state and returns the reached state.
    pub fn reached<W: IntoIterator<Item = S>>(&self, word: W) -> Option<StateIndex> {
        self.reached_from(self.initial, word)
    }

    /// Returns true if and only if reading `word` from `state` leads to an accepting state.
    /// Words containing foreign symbols are rejected.
    pub fn accepts_from<W: IntoIterator<Item = S>>(&self, state: StateIndex, word: W) -> bool {
        self.reached_from(state, word)
            .map(|q| self.is_accepting(q))
            .unwrap_or(false)
    }

    /// Returns true if and only if `word` is accepted, i.e. its run from the initial state
    /// ends in an accepting state.
    pub fn accepts<W: IntoIterator<Item = S>>(&self, word: W) -> bool {
        self.accepts_from(self.initial, word)
    }
}

impl<S: Symbol> std::fmt::Debug for DFA<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let edges = self
            .state_indices()
            .flat_map(|q| {
                self.alphabet
                    .universe()
                    .zip(self.successors(q))
                    .map(move |(symbol, target)| format!("{q} -{}-> {target}", symbol.show()))
            })
            .join(", ");
        f.debug_struct("DFA")
            .field("alphabet", &self.alphabet)
            .field("initial", &self.initial)
            .field("accepting", &self.accepting_states().collect_vec())
            .field("transitions", &format_args!("[{edges}]"))
            .finish()
    }
}
