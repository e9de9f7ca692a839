use tracing::{debug, trace};

use crate::{alphabet::Symbol, math, partition::Signature, Partition, Show, DFA};

/// Performs one round of Moore's partition refinement. Every class of `previous` is split
/// into groups of states that have the same [`Signature`] with respect to `previous`.
///
/// The classes of `previous` are treated in ascending order of their ids and their members in
/// ascending order of their index. New class ids are handed out in the order in which the
/// groups are discovered, which makes the result deterministic. Returns the new partition
/// together with a flag that is `true` if and only if some state changed its class id.
pub fn refine<S: Symbol>(dfa: &DFA<S>, previous: &Partition) -> (Partition, bool) {
    debug_assert_eq!(dfa.size(), previous.len());

    let mut class_of = vec![0; previous.len()];
    let mut next_id = 0;

    for (old_class, members) in previous.classes().into_iter().enumerate() {
        let mut groups: math::Map<Signature, usize> = math::Map::default();
        for state in members {
            let id = *groups.entry(previous.signature(dfa, state)).or_insert_with(|| {
                next_id += 1;
                next_id - 1
            });
            class_of[state] = id;
        }
        if groups.len() > 1 {
            trace!("class {old_class} is split into {} classes", groups.len());
        }
    }

    let changed = next_id != previous.size() || class_of != previous.assignment();
    (Partition::from_dense_assignment(class_of, next_id), changed)
}

/// A single round of refinement as produced by [`Refinement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Rounds are counted from 1.
    pub number: usize,
    /// The partition that this round produced.
    pub partition: Partition,
    /// Whether the partition differs from the one of the previous round.
    pub changed: bool,
}

/// The stable partition that refinement converges to, together with the number of rounds
/// that were needed to reach it (including the final round which confirms stability).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixpoint {
    /// The partition into Myhill-Nerode classes.
    pub partition: Partition,
    /// How many rounds were executed.
    pub rounds: usize,
}

/// Iterator over the rounds of Moore's partition refinement on a [`DFA`], starting from
/// [`Partition::initial`]. It yields one [`Round`] per refinement step and stops after the
/// first round that leaves the partition unchanged. As classes are only ever split, this
/// happens after at most as many rounds as there are states.
#[derive(Debug, Clone)]
pub struct Refinement<'a, S: Symbol> {
    dfa: &'a DFA<S>,
    current: Partition,
    round: usize,
    finished: bool,
}

impl<'a, S: Symbol> Refinement<'a, S> {
    /// Starts the refinement for `dfa`.
    pub fn new(dfa: &'a DFA<S>) -> Self {
        let current = Partition::initial(dfa);
        debug!("initial partition {}", current.show());
        Self {
            dfa,
            current,
            round: 0,
            finished: false,
        }
    }

    /// Returns the most recent partition.
    pub fn current(&self) -> &Partition {
        &self.current
    }

    /// Runs the remaining rounds and returns the resulting [`Fixpoint`].
    pub fn into_fixpoint(mut self) -> Fixpoint {
        while self.next().is_some() {}
        Fixpoint {
            partition: self.current,
            rounds: self.round,
        }
    }
}

impl<'a, S: Symbol> Iterator for Refinement<'a, S> {
    type Item = Round;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        self.round += 1;
        assert!(
            self.round <= self.dfa.size(),
            "partition refinement did not stabilize within {} rounds",
            self.dfa.size()
        );

        let (partition, changed) = refine(self.dfa, &self.current);
        debug!(
            "round {} yields {} classes: {}",
            self.round,
            partition.size(),
            partition.show()
        );
        self.current = partition.clone();
        self.finished = !changed;

        Some(Round {
            number: self.round,
            partition,
            changed,
        })
    }
}

/// Runs Moore's partition refinement on `dfa` until it stabilizes.
pub fn moore_partition_refinement<S: Symbol>(dfa: &DFA<S>) -> Fixpoint {
    let fixpoint = Refinement::new(dfa).into_fixpoint();
    debug!(
        "partition refinement stabilized after {} rounds with {} classes",
        fixpoint.rounds,
        fixpoint.partition.size()
    );
    fixpoint
}

#[cfg(test)]
mod tests {
    use super::{moore_partition_refinement, refine, Refinement};
    use crate::prelude::*;

    fn five_states() -> DFA {
        DFABuilder::default()
            .with_alphabet_symbols(['0', '1'])
            .with_accepting([2, 4])
            .with_transitions([
                (0, '0', 1),
                (0, '1', 3),
                (1, '0', 2),
                (1, '1', 1),
                (2, '0', 2),
                (2, '1', 2),
                (3, '0', 4),
                (3, '1', 0),
                (4, '0', 4),
                (4, '1', 4),
            ])
            .into_dfa(0)
            .unwrap()
    }

    #[test_log::test]
    fn single_round() {
        let dfa = five_states();
        let initial = Partition::initial(&dfa);
        assert_eq!(initial.assignment(), &[1, 1, 0, 1, 0]);

        let (first, changed) = refine(&dfa, &initial);
        assert!(changed);
        assert_eq!(first.assignment(), &[1, 2, 0, 2, 0]);

        let (second, changed) = refine(&dfa, &first);
        assert!(changed);
        assert_eq!(second.assignment(), &[1, 2, 0, 3, 0]);

        let (third, changed) = refine(&dfa, &second);
        assert!(!changed);
        assert_eq!(third, second);
    }

    #[test_log::test]
    fn rounds_are_reported() {
        let dfa = five_states();
        let rounds: Vec<_> = Refinement::new(&dfa).collect();
        assert_eq!(
            rounds.iter().map(|round| round.number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            rounds.iter().map(|round| round.changed).collect::<Vec<_>>(),
            vec![true, true, false]
        );
        assert_eq!(
            rounds
                .iter()
                .map(|round| round.partition.size())
                .collect::<Vec<_>>(),
            vec![3, 4, 4]
        );

        let fixpoint = moore_partition_refinement(&dfa);
        assert_eq!(fixpoint.rounds, 3);
        assert_eq!(&fixpoint.partition, &rounds[2].partition);
    }

    #[test]
    fn stable_partition_keeps_its_ids() {
        let dfa = DFA::try_new(2, ['a'], [(0, 'a', 0), (1, 'a', 1)], 0, [0]).unwrap();
        let swapped = Partition::from_assignment(vec![1, 0]);
        let (next, changed) = refine(&dfa, &swapped);
        assert_eq!(next.assignment(), &[1, 0]);
        assert!(!changed);

        let (next, changed) = refine(&dfa, &Partition::from_assignment(vec![0, 0]));
        assert_eq!(next.assignment(), &[0, 0]);
        assert!(!changed);
    }

    #[test]
    fn single_state_needs_one_round() {
        let dfa = DFA::try_new(1, ['a', 'b'], [(0, 'a', 0), (0, 'b', 0)], 0, []).unwrap();
        let fixpoint = moore_partition_refinement(&dfa);
        assert_eq!(fixpoint.rounds, 1);
        assert_eq!(fixpoint.partition.size(), 1);
    }
}
