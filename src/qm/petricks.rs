//! Petrick's method: enumerate every minimal cover
//!
//! The coverage table is read as a product of sums, one factor per
//! minterm. Factors are distributed in one at a time over a running
//! list of partial products; supersets are pruned after every fold so
//! the intermediate state cannot explode. What survives the last fold
//! is exactly the set of minimal covers.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::implicant::Implicant;

/// A candidate cover: a set of prime implicants
pub type Cover = BTreeSet<Implicant>;

/// Expand the product of sums and return all minimal covers, in the
/// covers' natural order. Empty table yields an empty list; so does a
/// table containing a minterm with no covering implicant.
pub fn minimal_covers(coverage: &BTreeMap<usize, Vec<Implicant>>) -> Vec<Cover> {
    let mut factors = coverage.values();
    let Some(first) = factors.next() else {
        return Vec::new();
    };

    let mut products: Vec<Cover> = Vec::new();
    let mut seen: HashSet<Cover> = HashSet::new();
    for prime in first {
        let singleton: Cover = BTreeSet::from([prime.clone()]);
        if seen.insert(singleton.clone()) {
            products.push(singleton);
        }
    }

    for factor in factors {
        let mut expanded: Vec<Cover> = Vec::new();
        let mut seen: HashSet<Cover> = HashSet::new();

        for product in &products {
            for prime in factor {
                let mut grown = product.clone();
                grown.insert(prime.clone());
                if seen.insert(grown.clone()) {
                    expanded.push(grown);
                }
            }
        }

        products = prune_supersets(expanded);
    }

    products.sort();
    products
}

/// Drop every product that strictly contains another product.
///
/// Products arrive deduplicated; sorting by size first means a keeper
/// can only ever absorb later, larger candidates.
fn prune_supersets(mut products: Vec<Cover>) -> Vec<Cover> {
    products.sort_by_key(BTreeSet::len);

    let mut kept: Vec<Cover> = Vec::new();
    'candidates: for candidate in products {
        for keeper in &kept {
            if keeper.is_subset(&candidate) {
                continue 'candidates;
            }
        }
        kept.push(candidate);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qm::coverage::coverage_table;

    fn imp(s: &str) -> Implicant {
        s.parse().unwrap()
    }

    fn cover(implicants: &[&str]) -> Cover {
        implicants.iter().map(|s| imp(s)).collect()
    }

    #[test]
    fn test_empty_table_has_no_covers() {
        assert!(minimal_covers(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_singleton_factors_force_one_cover() {
        let mut table = BTreeMap::new();
        table.insert(0, vec![imp("0-")]);
        table.insert(3, vec![imp("1-")]);

        let covers = minimal_covers(&table);
        assert_eq!(covers, vec![cover(&["0-", "1-"])]);
    }

    #[test]
    fn test_shared_implicant_collapses_factors() {
        let mut table = BTreeMap::new();
        table.insert(1, vec![imp("0-"), imp("-1")]);
        table.insert(3, vec![imp("-1")]);

        let covers = minimal_covers(&table);
        assert_eq!(covers, vec![cover(&["-1"])]);
    }

    #[test]
    fn test_ties_are_all_reported() {
        // Two independent minterms, two choices each, no domination:
        // all four pair covers are minimal.
        let mut table = BTreeMap::new();
        table.insert(0, vec![imp("00-"), imp("0-0")]);
        table.insert(7, vec![imp("11-"), imp("1-1")]);

        let covers = minimal_covers(&table);
        assert_eq!(covers.len(), 4);
        assert!(covers.contains(&cover(&["00-", "11-"])));
        assert!(covers.contains(&cover(&["0-0", "1-1"])));
    }

    #[test]
    fn test_superset_pruning() {
        // Minterm 0 needs A or B; minterm 1 needs B. {B} dominates
        // {A, B}, so only {B} survives.
        let a = imp("00");
        let b = imp("0-");
        let mut table = BTreeMap::new();
        table.insert(0, vec![a.clone(), b.clone()]);
        table.insert(1, vec![b.clone()]);

        let covers = minimal_covers(&table);
        assert_eq!(covers, vec![BTreeSet::from([b])]);
    }

    #[test]
    fn test_uncoverable_minterm_yields_no_covers() {
        let mut table = BTreeMap::new();
        table.insert(0, vec![imp("0-")]);
        table.insert(2, Vec::new());

        assert!(minimal_covers(&table).is_empty());
    }

    #[test]
    fn test_minimality_no_proper_subset_covers() {
        // Built from a real QMC instance: every reported cover must
        // break when any single implicant is removed.
        let primes = vec![imp("-100"), imp("10--"), imp("1--0"), imp("1-1-")];
        let minterms = [4usize, 8, 9, 10, 11, 12, 14, 15];
        let table = coverage_table(&primes, &minterms);

        for cover in minimal_covers(&table) {
            for removed in &cover {
                let rest: Vec<&Implicant> =
                    cover.iter().filter(|prime| *prime != removed).collect();
                let still_covered = minterms
                    .iter()
                    .all(|&m| rest.iter().any(|prime| prime.covers(m)));
                assert!(!still_covered, "cover is not minimal");
            }
        }
    }
}
