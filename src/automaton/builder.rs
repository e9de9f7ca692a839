use itertools::Itertools;

use crate::{alphabet::Symbol, ValidationError};

use super::{StateIndex, DFA};

/// Helper struct for the construction of a [`DFA`]. It collects transitions and state colors
/// (`true` meaning accepting) and validates everything once [`DFABuilder::into_dfa`] is called.
///
/// # Example
///
/// We want to create a DFA with two states 0 and 1 over the alphabet `['a', 'b']`, where
/// state 0 is initial and state 1 is accepting:
/// ```
/// use dfa_minimization::prelude::*;
///
/// let dfa = DFABuilder::default()
///     .with_state_colors([false, true])
///     .with_transitions([(0, 'a', 0), (0, 'b', 1), (1, 'a', 1), (1, 'b', 0)])
///     .into_dfa(0)
///     .unwrap();
/// assert!(dfa.accepts("ab".chars()));
/// ```
#[derive(Debug, Clone)]
pub struct DFABuilder<S: Symbol = char> {
    symbols: Vec<S>,
    edges: Vec<(StateIndex, S, StateIndex)>,
    colors: Vec<(StateIndex, bool)>,
}

impl<S: Symbol> Default for DFABuilder<S> {
    fn default() -> Self {
        Self {
            symbols: vec![],
            edges: vec![],
            colors: vec![],
        }
    }
}

impl<S: Symbol> DFABuilder<S> {
    /// Fixes the alphabet (and its column order). If this is never called, the alphabet
    /// consists of the symbols that appear on transitions, in order of first appearance.
    pub fn with_alphabet_symbols<I: IntoIterator<Item = S>>(mut self, symbols: I) -> Self {
        self.symbols.extend(symbols);
        self
    }

    /// Adds a list of colors to `self`. The colors are assigned to the states in the order in
    /// which they are given, so `[true, false]` makes state 0 accepting and state 1 rejecting.
    pub fn with_state_colors<I: IntoIterator<Item = bool>>(mut self, colors: I) -> Self {
        self.colors.extend(colors.into_iter().enumerate());
        self
    }

    /// Marks the given states as accepting.
    pub fn with_accepting<I: IntoIterator<Item = StateIndex>>(mut self, states: I) -> Self {
        self.colors.extend(states.into_iter().map(|q| (q, true)));
        self
    }

    /// Adds the given transitions, each one as `(source, symbol, target)`.
    pub fn with_transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (StateIndex, S, StateIndex)>,
    {
        self.edges.extend(transitions);
        self
    }

    /// Validates the collected parts and turns them into a [`DFA`] with the given initial
    /// state. The number of states is one more than the largest state index that occurs.
    pub fn into_dfa(self, initial: StateIndex) -> Result<DFA<S>, ValidationError> {
        let num_states = self
            .edges
            .iter()
            .flat_map(|&(p, _, q)| [p, q])
            .chain(self.colors.iter().map(|&(q, _)| q))
            .chain(std::iter::once(initial))
            .max()
            .map_or(0, |q| q + 1);

        let alphabet = if self.symbols.is_empty() {
            self.edges.iter().map(|&(_, a, _)| a).unique().collect_vec()
        } else {
            self.symbols
        };

        let accepting = self
            .colors
            .into_iter()
            .filter_map(|(q, accepting)| accepting.then_some(q));

        DFA::try_new(num_states, alphabet, self.edges, initial, accepting)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn alphabet_is_inferred_from_transitions() {
        let dfa = DFABuilder::default()
            .with_transitions([(0, 'b', 1), (0, 'a', 0), (1, 'b', 1), (1, 'a', 1)])
            .with_accepting([1])
            .into_dfa(0)
            .unwrap();
        assert_eq!(dfa.size(), 2);
        assert_eq!(dfa.symbol_index('b'), Some(0));
        assert_eq!(dfa.symbol_index('a'), Some(1));
        assert!(dfa.accepts("ab".chars()));
        assert!(!dfa.accepts("aa".chars()));
    }

    #[test]
    fn explicit_alphabet_reports_missing_transitions() {
        let result = DFABuilder::default()
            .with_alphabet_symbols(['a', 'b'])
            .with_transitions([(0, 'a', 0)])
            .into_dfa(0);
        assert_eq!(
            result,
            Err(ValidationError::IncompleteTransitionTable {
                state: 0,
                symbol: "'b'".to_string()
            })
        );
    }

    #[test]
    fn colored_states_count_as_states() {
        let result = DFABuilder::default()
            .with_state_colors([true, false, false])
            .with_transitions([(0, 'a', 1), (1, 'a', 0)])
            .into_dfa(0);
        assert!(matches!(
            result,
            Err(ValidationError::IncompleteTransitionTable { state: 2, .. })
        ));
    }

    #[test]
    fn empty_builder_has_no_alphabet() {
        assert_eq!(
            DFABuilder::<char>::default().into_dfa(0),
            Err(ValidationError::EmptyAlphabet)
        );
    }
}
