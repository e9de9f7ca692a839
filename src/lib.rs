//! Library for minimizing deterministic finite automata (DFAs) in Rust.
//!
//! A [`DFA`] consists of a finite set of states (always the dense indices `0..n`), an
//! [`Alphabet`] of distinct symbols, a total transition function, one initial state and a set
//! of accepting states. It can only be obtained through [`DFA::try_new`] or the
//! [`automaton::DFABuilder`], which reject malformed parts with a [`ValidationError`]. Once
//! constructed, an automaton is never modified.
//!
//! Minimization is done with Moore's algorithm. Starting from the [`Partition`] which separates
//! accepting from rejecting states, every round splits the classes of the current partition
//! according to the classes in which the successors of their members lie (the signature of a
//! state). When a round no longer changes the partition, its classes are exactly the sets of
//! states that no word can tell apart, and collapsing each of them into a single state gives
//! the minimal automaton. The entry point is [`minimize`] (or [`DFA::minimize`]), the individual
//! rounds can be observed through [`minimization::Refinement`].
//!
//! ```
//! use dfa_minimization::prelude::*;
//!
//! let dfa = DFABuilder::default()
//!     .with_state_colors([false, true, true])
//!     .with_transitions([(0, 'a', 1), (1, 'a', 2), (2, 'a', 1)])
//!     .into_dfa(0)
//!     .unwrap();
//! let minimal = minimize(&dfa);
//! assert_eq!(minimal.size(), 2);
//! assert!(minimal.equivalent(&dfa));
//! ```
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use dfa_minimization::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{Alphabet, CharAlphabet, Symbol},
        automaton::{DFABuilder, StateIndex, DFA},
        math,
        minimization::{minimize, moore_partition_refinement, Fixpoint, Refinement, Round},
        partition::{Partition, Signature},
        Show, ValidationError,
    };
}

/// This module contains the type aliases for collections that are used throughout the crate.
pub mod math;

mod show;
pub use show::Show;

mod error;
pub use error::ValidationError;

/// Module that contains the definition of alphabets, which fix the symbols of an automaton and
/// the order of the columns of its transition table.
pub mod alphabet;
pub use alphabet::Alphabet;

/// Defines deterministic finite automata, their validated construction and some operations
/// on the languages they accept.
#[allow(clippy::upper_case_acronyms)]
pub mod automaton;
pub use automaton::DFA;

/// Partitions of the state set into equivalence classes.
pub mod partition;
pub use partition::Partition;

/// Contains the partition refinement and the construction of the minimized automaton from
/// the stable partition.
pub mod minimization;
pub use minimization::minimize;

/// Implements the generation of random automata. This is feature gated behind the `random` feature.
#[cfg(feature = "random")]
pub mod random;

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    pub fn wiki_dfa() -> DFA {
        DFABuilder::default()
            .with_state_colors([false, false, true, true, true, false])
            .with_transitions([
                (0, 'a', 1),
                (0, 'b', 2),
                (1, 'a', 0),
                (1, 'b', 3),
                (2, 'a', 4),
                (2, 'b', 5),
                (3, 'a', 4),
                (3, 'b', 5),
                (4, 'a', 4),
                (4, 'b', 5),
                (5, 'a', 5),
                (5, 'b', 5),
            ])
            .into_dfa(0)
            .unwrap()
    }
}
