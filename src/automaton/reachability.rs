use std::collections::VecDeque;

use bit_set::BitSet;
use tracing::trace;

use crate::alphabet::Symbol;

use super::{StateIndex, DFA};

impl<S: Symbol> DFA<S> {
    /// Returns the states that can be reached from the initial state, in ascending order.
    pub fn reachable_states(&self) -> Vec<StateIndex> {
        let mut seen = BitSet::with_capacity(self.size());
        let mut queue = VecDeque::from([self.initial()]);
        seen.insert(self.initial());

        while let Some(q) = queue.pop_front() {
            for &target in self.successors(q) {
                if seen.insert(target) {
                    queue.push_back(target);
                }
            }
        }

        seen.iter().collect()
    }

    /// Returns true if every state is reachable from the initial state.
    pub fn is_accessible(&self) -> bool {
        self.reachable_states().len() == self.size()
    }

    /// Removes all states that cannot be reached from the initial state. The remaining
    /// states keep their relative order and are renumbered densely, so the initial state of
    /// the result is the number of reachable states with a smaller index.
    ///
    /// Note that [`DFA::minimize`] does not do this on its own, see [`DFA::minimize_reachable`].
    pub fn restrict_to_reachable(&self) -> DFA<S> {
        let reachable = self.reachable_states();
        if reachable.len() == self.size() {
            return self.clone();
        }
        trace!("dropping {} unreachable states", self.size() - reachable.len());

        let mut renaming = vec![None; self.size()];
        for (new, &old) in reachable.iter().enumerate() {
            renaming[old] = Some(new);
        }
        let rename = |q: StateIndex| {
            renaming[q].expect("successors of reachable states are reachable")
        };

        let transitions = reachable
            .iter()
            .flat_map(|&q| self.successors(q).iter().map(|&target| rename(target)))
            .collect();
        let accepting = reachable.iter().map(|&q| self.is_accepting(q)).collect();

        DFA::from_raw_parts(
            self.alphabet().clone(),
            transitions,
            rename(self.initial()),
            accepting,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn pruning_keeps_the_language() {
        let dfa = DFABuilder::default()
            .with_state_colors([false, true, true, false])
            .with_transitions([
                (0, 'a', 2),
                (0, 'b', 0),
                (1, 'a', 1),
                (1, 'b', 3),
                (2, 'a', 2),
                (2, 'b', 0),
                (3, 'a', 1),
                (3, 'b', 2),
            ])
            .into_dfa(0)
            .unwrap();
        assert_eq!(dfa.reachable_states(), vec![0, 2]);
        assert!(!dfa.is_accessible());

        let pruned = dfa.restrict_to_reachable();
        assert_eq!(pruned.size(), 2);
        assert!(pruned.is_accessible());
        assert_eq!(pruned.initial(), 0);
        assert_eq!(pruned.successors(0), &[1, 0]);
        assert_eq!(pruned.successors(1), &[1, 0]);
        assert!(pruned.is_accepting(1));
        assert!(pruned.equivalent(&dfa));
    }

    #[test]
    fn accessible_automaton_is_left_alone() {
        let dfa = DFA::try_new(1, ['a'], [(0, 'a', 0)], 0, [0]).unwrap();
        assert_eq!(dfa.restrict_to_reachable(), dfa);
    }
}
