use std::collections::VecDeque;

use tracing::trace;

use crate::{alphabet::Symbol, math, Show};

use super::{StateIndex, DFA};

impl<S: Symbol> DFA<S> {
    /// Attempts to separate the state `left` from the state `right` by finding a word that leads
    /// to an accepting state from one of them and to a rejecting state from the other. The
    /// returned word is a shortest one with this property (ties are broken by column order).
    /// Gives `None` if the two states are equivalent or one of them does not exist.
    pub fn separate(&self, left: StateIndex, right: StateIndex) -> Option<Vec<S>> {
        if left >= self.size() || right >= self.size() {
            return None;
        }

        // every visited pair remembers the pair and the column it was reached from
        let mut parent: math::Map<
            (StateIndex, StateIndex),
            Option<((StateIndex, StateIndex), usize)>,
        > = math::Map::default();
        parent.insert((left, right), None);
        let mut queue = VecDeque::from([(left, right)]);

        while let Some((p, q)) = queue.pop_front() {
            if self.is_accepting(p) != self.is_accepting(q) {
                let mut columns = vec![];
                let mut current = (p, q);
                while let Some(&Some((previous, column))) = parent.get(&current) {
                    columns.push(column);
                    current = previous;
                }
                let word: Vec<S> = columns
                    .into_iter()
                    .rev()
                    .filter_map(|column| self.alphabet().nth(column))
                    .collect();
                trace!("word {} separates {left} from {right}", word.show());
                return Some(word);
            }

            for column in 0..self.alphabet().size() {
                let next = (self.transition(p, column), self.transition(q, column));
                if !parent.contains_key(&next) {
                    parent.insert(next, Some(((p, q), column)));
                    queue.push_back(next);
                }
            }
        }

        None
    }

    /// Checks whether `self` and `other` accept the same language. This is done by exploring
    /// the reachable part of the product of both automata and looking for a pair of states
    /// that disagree on acceptance. Automata over different sets of symbols are never
    /// considered equivalent, the order of the symbols does not matter.
    pub fn equivalent(&self, other: &DFA<S>) -> bool {
        if !self.alphabet().same_symbols(other.alphabet()) {
            return false;
        }
        let columns: Vec<usize> = self
            .alphabet()
            .universe()
            .filter_map(|symbol| other.symbol_index(symbol))
            .collect();

        let mut seen = math::Set::default();
        let mut queue = VecDeque::from([(self.initial(), other.initial())]);
        seen.insert((self.initial(), other.initial()));

        while let Some((p, q)) = queue.pop_front() {
            if self.is_accepting(p) != other.is_accepting(q) {
                return false;
            }
            for (column, &other_column) in columns.iter().enumerate() {
                let next = (
                    self.transition(p, column),
                    other.transition(q, other_column),
                );
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn ends_with_ab() -> DFA {
        DFABuilder::default()
            .with_state_colors([false, false, true])
            .with_transitions([
                (0, 'a', 1),
                (0, 'b', 0),
                (1, 'a', 1),
                (1, 'b', 2),
                (2, 'a', 1),
                (2, 'b', 0),
            ])
            .into_dfa(0)
            .unwrap()
    }

    #[test]
    fn separating_words_are_shortest() {
        let dfa = ends_with_ab();
        assert_eq!(dfa.separate(0, 2), Some(vec![]));
        assert_eq!(dfa.separate(0, 1), Some(vec!['b']));
        assert_eq!(dfa.separate(1, 1), None);
        assert_eq!(dfa.separate(0, 7), None);

        let word = dfa.separate(1, 0).unwrap();
        assert_ne!(dfa.accepts_from(1, word.clone()), dfa.accepts_from(0, word));
    }

    #[test]
    fn equivalence_ignores_state_names_and_column_order() {
        let dfa = ends_with_ab();
        let renamed = DFABuilder::default()
            .with_alphabet_symbols(['b', 'a'])
            .with_state_colors([true, false, false])
            .with_transitions([
                (2, 'a', 1),
                (2, 'b', 2),
                (1, 'a', 1),
                (1, 'b', 0),
                (0, 'a', 1),
                (0, 'b', 2),
            ])
            .into_dfa(2)
            .unwrap();
        assert!(dfa.equivalent(&renamed));
        assert!(renamed.equivalent(&dfa));

        let ends_with_a = DFABuilder::default()
            .with_state_colors([false, true])
            .with_transitions([(0, 'a', 1), (0, 'b', 0), (1, 'a', 1), (1, 'b', 0)])
            .into_dfa(0)
            .unwrap();
        assert!(!dfa.equivalent(&ends_with_a));

        let other_symbols =
            DFA::try_new(1, ['a', 'c'], [(0, 'a', 0), (0, 'c', 0)], 0, []).unwrap();
        assert!(!dfa.equivalent(&other_symbols));
    }
}
