mod quotient;
pub use quotient::quotient;

mod refinement;
pub use refinement::{moore_partition_refinement, refine, Fixpoint, Refinement, Round};

use tracing::debug;

use crate::{alphabet::Symbol, DFA};

/// Computes the unique minimal [`DFA`] that accepts the same language as `dfa`, up to
/// unreachable states. Moore's partition refinement is run until it stabilizes and the
/// resulting classes are collapsed into single states.
///
/// States that cannot be reached from the initial state are not removed. They are merged
/// with equivalent states or kept as separate classes, which does not change the language.
/// Use [`DFA::minimize_reachable`] to get rid of them.
pub fn minimize<S: Symbol>(dfa: &DFA<S>) -> DFA<S> {
    let Fixpoint { partition, rounds } = moore_partition_refinement(dfa);
    let minimized = quotient(dfa, &partition);
    debug!(
        "minimized automaton from {} to {} states in {rounds} rounds",
        dfa.size(),
        minimized.size()
    );
    minimized
}

impl<S: Symbol> DFA<S> {
    /// Returns the minimal DFA that is equivalent to `self`, see [`minimize`].
    ///
    /// # Example
    /// ```
    /// use dfa_minimization::prelude::*;
    ///
    /// let dfa = DFA::try_new(2, ['0'], [(0, '0', 0), (1, '0', 1)], 0, [0, 1]).unwrap();
    /// let minimal = dfa.minimize();
    /// assert_eq!(minimal.size(), 1);
    /// assert!(minimal.is_accepting(0));
    /// ```
    pub fn minimize(&self) -> DFA<S> {
        minimize(self)
    }

    /// Removes unreachable states and then minimizes, which yields the minimal DFA in the
    /// textbook sense.
    pub fn minimize_reachable(&self) -> DFA<S> {
        minimize(&self.restrict_to_reachable())
    }

    /// Returns true if no two states of `self` are equivalent.
    pub fn is_minimal(&self) -> bool {
        moore_partition_refinement(self).partition.size() == self.size()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test_log::test]
    fn wiki_dfa() {
        let dfa = crate::tests::wiki_dfa();
        let minimized = dfa.minimize();
        assert_eq!(minimized.size(), 3);
        assert!(minimized.equivalent(&dfa));
        assert!(minimized.is_minimal());
        assert!(!dfa.is_minimal());
    }

    #[test]
    fn unreachable_states_survive_unless_pruned() {
        let dfa = DFABuilder::default()
            .with_state_colors([true, false, true])
            .with_transitions([(0, 'a', 0), (1, 'a', 1), (2, 'a', 2)])
            .into_dfa(0)
            .unwrap();
        let minimized = dfa.minimize();
        assert_eq!(minimized.size(), 2);
        assert_eq!(minimized.initial(), 0);
        assert!(minimized.equivalent(&dfa));

        let pruned = dfa.minimize_reachable();
        assert_eq!(pruned.size(), 1);
        assert!(pruned.equivalent(&dfa));
    }
}
