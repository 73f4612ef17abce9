//! Coverage table: which prime implicants cover which minterms

use std::collections::{BTreeMap, BTreeSet};

use super::implicant::Implicant;

/// Map every input minterm to the prime implicants covering it, in the
/// primes' input order. Minterms are deduplicated; a minterm no prime
/// covers maps to an empty list.
pub fn coverage_table(
    primes: &[Implicant],
    minterms: &[usize],
) -> BTreeMap<usize, Vec<Implicant>> {
    let unique: BTreeSet<usize> = minterms.iter().copied().collect();

    let mut table = BTreeMap::new();
    for &minterm in &unique {
        let covering: Vec<Implicant> = primes
            .iter()
            .filter(|prime| prime.covers(minterm))
            .cloned()
            .collect();
        table.insert(minterm, covering);
    }
    table
}
