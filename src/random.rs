//! Seeded random inputs for tests and benchmarks

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::expr::Expr;

/// Generate a vector of unique random minterms in `[0, 2^n_variables)`,
/// sorted ascending. Deterministic for a given seed.
///
/// # Panics
/// Panics if `n_variables` is zero or large enough to make the range
/// unrepresentable, or if more minterms are requested than exist.
pub fn random_minterms(n_variables: usize, n_minterms: usize, seed: u64) -> Vec<usize> {
    assert!(n_variables > 0, "Number of variables must be positive");
    assert!(
        n_variables < usize::BITS as usize,
        "Number of variables ({}) exceeds type capacity",
        n_variables
    );
    assert!(
        n_minterms <= 1 << n_variables,
        "Requested {} minterms but only {} exist",
        n_minterms,
        1usize << n_variables
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut minterms = HashSet::new();

    while minterms.len() < n_minterms {
        minterms.insert(rng.random_range(0..(1usize << n_variables)));
    }

    let mut result: Vec<usize> = minterms.into_iter().collect();
    result.sort_unstable();
    result
}

/// Generate a random expression tree over the given variables.
/// Deterministic for a given seed.
pub fn random_expr(variables: &[&str], max_depth: usize, seed: u64) -> Expr {
    let mut rng = StdRng::seed_from_u64(seed);
    build(&mut rng, variables, max_depth)
}

fn build(rng: &mut StdRng, variables: &[&str], depth: usize) -> Expr {
    // Leaves get likelier as the remaining depth shrinks.
    if depth == 0 || rng.random_range(0..6) == 0 {
        let pick = rng.random_range(0..variables.len() + 1);
        return if pick == variables.len() {
            Expr::constant(rng.random_bool(0.5))
        } else {
            Expr::var(variables[pick])
        };
    }

    match rng.random_range(0..4) {
        0 => Expr::not(build(rng, variables, depth - 1)),
        1 => Expr::and(
            build(rng, variables, depth - 1),
            build(rng, variables, depth - 1),
        ),
        2 => Expr::or(
            build(rng, variables, depth - 1),
            build(rng, variables, depth - 1),
        ),
        _ => Expr::xor(
            build(rng, variables, depth - 1),
            build(rng, variables, depth - 1),
        ),
    }
}
