use thiserror::Error;

/// Reasons for rejecting the parts of a [`crate::DFA`] during construction. Symbols are
/// stored in their `Debug` rendering so the error does not depend on the symbol type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The automaton was supposed to have zero states.
    #[error("an automaton needs at least one state")]
    EmptyStateSet,
    /// The alphabet did not contain a single symbol.
    #[error("the alphabet must contain at least one symbol")]
    EmptyAlphabet,
    /// A symbol appears more than once in the alphabet.
    #[error("symbol {0} appears more than once in the alphabet")]
    DuplicateSymbol(String),
    /// A state index (start, accepting, source or target) is not below the number of states.
    #[error("state {state} does not exist in an automaton with {num_states} states")]
    OutOfRangeState {
        /// The offending index.
        state: usize,
        /// The number of states of the automaton.
        num_states: usize,
    },
    /// A transition is labeled with a symbol that is not part of the alphabet.
    #[error("symbol {0} is not part of the alphabet")]
    OutOfRangeSymbol(String),
    /// Some state has no outgoing transition on some symbol.
    #[error("state {state} has no transition on symbol {symbol}")]
    IncompleteTransitionTable {
        /// The state that lacks the transition.
        state: usize,
        /// The symbol on which the transition is missing.
        symbol: String,
    },
    /// Two transitions leave the same state on the same symbol but lead to different targets.
    #[error("state {state} has transitions on symbol {symbol} to both {first} and {second}")]
    ConflictingTransition {
        /// The source state.
        state: usize,
        /// The symbol labeling both transitions.
        symbol: String,
        /// Target of the transition that was given first.
        first: usize,
        /// Target of the transition that was given later.
        second: usize,
    },
}
