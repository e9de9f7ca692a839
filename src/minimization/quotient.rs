use crate::{alphabet::Symbol, Partition, DFA};

/// Collapses every class of `partition` into a single state. The class with id `c` becomes
/// state `c` of the result, the initial state is the class of the original initial state and
/// a class is accepting if any of its members is.
///
/// The transitions of a class are taken from its representative, i.e. its member with the
/// lowest index. This only makes sense if `partition` is stable under refinement, because then
/// all members of a class have the same signature and the choice of representative does not
/// matter. For a partition that is not stable the result is still a complete automaton, but it
/// need not accept the same language as `dfa`.
///
/// # Panics
///
/// Panics if `partition` does not assign a class to exactly the states of `dfa`.
pub fn quotient<S: Symbol>(dfa: &DFA<S>, partition: &Partition) -> DFA<S> {
    assert_eq!(
        dfa.size(),
        partition.len(),
        "partition must cover exactly the states of the automaton"
    );

    let classes = partition.classes();
    let mut transitions = Vec::with_capacity(classes.len() * dfa.alphabet().size());
    for members in &classes {
        let representative = members[0];
        debug_assert!(
            members.iter().all(|&q| {
                dfa.is_accepting(q) == dfa.is_accepting(representative)
                    && partition.signature(dfa, q) == partition.signature(dfa, representative)
            }),
            "members of a class must be indistinguishable"
        );
        transitions.extend(partition.signature(dfa, representative));
    }

    let mut accepting = vec![false; classes.len()];
    for q in dfa.accepting_states() {
        accepting[partition.class_of(q)] = true;
    }

    DFA::from_raw_parts(
        dfa.alphabet().clone(),
        transitions,
        partition.class_of(dfa.initial()),
        accepting,
    )
}

#[cfg(test)]
mod tests {
    use super::quotient;
    use crate::prelude::*;

    #[test]
    fn collapses_classes() {
        let dfa = DFABuilder::default()
            .with_state_colors([false, true, true])
            .with_transitions([(0, 'a', 1), (1, 'a', 2), (2, 'a', 1)])
            .into_dfa(0)
            .unwrap();
        let partition = Partition::from_assignment(vec![1, 0, 0]);
        let collapsed = quotient(&dfa, &partition);

        assert_eq!(collapsed.size(), 2);
        assert_eq!(collapsed.initial(), 1);
        assert_eq!(collapsed.successors(0), &[0]);
        assert_eq!(collapsed.successors(1), &[0]);
        assert_eq!(collapsed.accepting_states().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn identity_partition_reproduces_the_automaton() {
        let dfa = DFA::try_new(
            2,
            ['x', 'y'],
            [(0, 'x', 1), (0, 'y', 0), (1, 'x', 1), (1, 'y', 0)],
            1,
            [1],
        )
        .unwrap();
        assert_eq!(quotient(&dfa, &Partition::from_assignment(vec![0, 1])), dfa);
    }

    #[test]
    fn gapped_class_ids_are_compacted() {
        let dfa = DFA::try_new(2, ['a'], [(0, 'a', 1), (1, 'a', 0)], 0, [1]).unwrap();
        let collapsed = quotient(&dfa, &Partition::from_assignment(vec![0, 2]));
        assert_eq!(collapsed, dfa);
    }

    #[test]
    #[should_panic(expected = "partition must cover exactly the states")]
    fn partition_of_another_size_is_rejected() {
        let dfa = DFA::try_new(2, ['a'], [(0, 'a', 1), (1, 'a', 0)], 0, [1]).unwrap();
        quotient(&dfa, &Partition::from_assignment(vec![0, 0, 1]));
    }
}
