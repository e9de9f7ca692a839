use itertools::Itertools;

use crate::{alphabet::Symbol, automaton::StateIndex, Show, DFA};

/// The class ids of the successors of a state, one entry per alphabet symbol in column order.
/// Two states with different signatures are distinguishable.
pub type Signature = Vec<usize>;

/// A partition of the states of a [`DFA`] into equivalence classes. Every state is assigned
/// exactly one class id and the ids in use are precisely `0..size`, so no class is empty.
///
/// A partition is never modified in place. The refinement computes a new partition from the
/// previous one in each round, see [`crate::minimization::refine`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Partition {
    class_of: Vec<usize>,
    size: usize,
}

impl Partition {
    /// The coarsest partition that respects acceptance: class 0 holds the accepting states and
    /// class 1 the rejecting ones. If one of the two sides is empty, there is only class 0.
    pub fn initial<S: Symbol>(dfa: &DFA<S>) -> Self {
        let has_accepting = dfa.accepting_states().next().is_some();
        let has_rejecting = dfa.rejecting_states().next().is_some();
        let rejecting_class = usize::from(has_accepting);

        Self {
            class_of: dfa
                .state_indices()
                .map(|q| {
                    if dfa.is_accepting(q) {
                        0
                    } else {
                        rejecting_class
                    }
                })
                .collect(),
            size: usize::from(has_accepting) + usize::from(has_rejecting),
        }
    }

    /// Builds a partition from the class id of every state (the id of state `q` is at
    /// position `q`). Ids may be arbitrary, they are compacted to `0..k` while keeping their
    /// relative order, so `[0, 2, 2]` and `[0, 1, 1]` give the same partition.
    pub fn from_assignment(class_of: Vec<usize>) -> Self {
        let used: Vec<usize> = class_of.iter().copied().sorted_unstable().dedup().collect();
        let class_of = class_of
            .into_iter()
            .map(|class| used.partition_point(|&id| id < class))
            .collect();
        Self {
            class_of,
            size: used.len(),
        }
    }

    /// Wraps an assignment whose ids are already exactly `0..size`.
    pub(crate) fn from_dense_assignment(class_of: Vec<usize>, size: usize) -> Self {
        debug_assert!(
            (0..size).all(|class| class_of.contains(&class))
                && class_of.iter().all(|&class| class < size),
            "class ids must cover 0..{size} without gaps"
        );
        Self { class_of, size }
    }

    /// Returns the id of the class that contains `state`.
    ///
    /// Panics if the state does not exist.
    #[inline(always)]
    pub fn class_of(&self, state: StateIndex) -> usize {
        self.class_of[state]
    }

    /// Gives the class ids of all states, indexed by state.
    pub fn assignment(&self) -> &[usize] {
        &self.class_of
    }

    /// Returns the number of classes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of states that are partitioned.
    pub fn len(&self) -> usize {
        self.class_of.len()
    }

    /// Returns true if there are no states.
    pub fn is_empty(&self) -> bool {
        self.class_of.is_empty()
    }

    /// Returns the members of the class with id `class` in ascending order.
    pub fn members_of(&self, class: usize) -> Vec<StateIndex> {
        self.class_of
            .iter()
            .positions(|&c| c == class)
            .collect()
    }

    /// Groups the states by their class, position `i` of the result holds the members of
    /// class `i` in ascending order.
    pub fn classes(&self) -> Vec<Vec<StateIndex>> {
        let mut classes = vec![vec![]; self.size];
        for (state, &class) in self.class_of.iter().enumerate() {
            classes[class].push(state);
        }
        classes
    }

    /// The state with the lowest index in the given class, used to represent the class.
    pub fn representative(&self, class: usize) -> Option<StateIndex> {
        self.class_of.iter().position(|&c| c == class)
    }

    /// Computes the [`Signature`] of `state` with respect to `self`, that is for every symbol
    /// the class in which the successor of `state` lies.
    pub fn signature<S: Symbol>(&self, dfa: &DFA<S>, state: StateIndex) -> Signature {
        dfa.successors(state)
            .iter()
            .map(|&target| self.class_of(target))
            .collect()
    }

    /// Returns true if both states are in the same class.
    pub fn same_class(&self, left: StateIndex, right: StateIndex) -> bool {
        self.class_of(left) == self.class_of(right)
    }
}

impl Show for Partition {
    fn show(&self) -> String {
        self.classes().iter().map(|class| class.show()).join(" | ")
    }
}
