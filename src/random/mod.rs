use tracing::trace;

use crate::prelude::*;

/// Generate a random [`DFA`] with `size` states over a [`CharAlphabet`] with `symbols` symbols
/// by drawing every transition target uniformly and deciding for every state with a fair coin
/// whether it is accepting. State 0 is the initial state.
/// Note that there may be unreachable states.
///
/// Panics if `size` is zero or `symbols` is not between 1 and 26.
pub fn generate_random_dfa(symbols: usize, size: usize, rng: &mut fastrand::Rng) -> DFA {
    assert!(size > 0, "a DFA needs at least one state");
    let alphabet = CharAlphabet::of_size(symbols);

    let transitions = (0..size * symbols).map(|_| rng.usize(..size)).collect();
    let accepting = (0..size).map(|_| rng.bool()).collect();

    let dfa = DFA::from_raw_parts(alphabet, transitions, 0, accepting);
    trace!("generated random DFA {dfa:?}");
    dfa
}

/// Works as [`generate_random_dfa`], but uses a fresh random number generator that is
/// seeded with `seed`, so the result is reproducible.
pub fn generate_random_dfa_seeded(symbols: usize, size: usize, seed: u64) -> DFA {
    generate_random_dfa(symbols, size, &mut fastrand::Rng::with_seed(seed))
}
