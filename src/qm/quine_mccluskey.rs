//! Core Quine-McCluskey prime implicant generation
//!
//! Minterms are deduplicated, grouped by popcount, and merged pairwise
//! across adjacent groups until a pass produces nothing new. An
//! implicant never used in a successful merge is prime. Every pass is
//! recorded in the trace, the initial grouping included.

use std::collections::BTreeSet;

use super::group_table::GroupTable;
use super::implicant::Implicant;
use super::trace::{GroupSnapshot, MergeDetail, StepKind, TraceStep};

/// Run QMC over a minterm list.
///
/// Returns the canonical (deduplicated, ordered) prime implicant set
/// and the pass-by-pass trace. An empty minterm list yields both empty.
pub fn prime_implicants(minterms: &[usize], variables: usize) -> (Vec<Implicant>, Vec<TraceStep>) {
    if minterms.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let unique: BTreeSet<usize> = minterms.iter().copied().collect();
    let mut current = GroupTable::new();
    for &minterm in &unique {
        current.add(Implicant::from_minterm(minterm, variables));
    }

    let mut trace = vec![TraceStep::grouping(&current)];
    let mut primes: BTreeSet<Implicant> = BTreeSet::new();

    loop {
        let groups_before = GroupSnapshot::capture(&current);
        let keys: Vec<usize> = current.keys().collect();

        // (group key, index within group) of every implicant that took
        // part in a successful merge this pass
        let mut used: BTreeSet<(usize, usize)> = BTreeSet::new();
        let mut produced: BTreeSet<Implicant> = BTreeSet::new();
        let mut merges = Vec::new();

        for &key in &keys {
            let next_key = key + 1;
            let lower = current.get(key);
            let upper = current.get(next_key);
            if upper.is_empty() {
                continue;
            }

            let mut merged_here: BTreeSet<Implicant> = BTreeSet::new();
            let mut merged_lower = vec![false; lower.len()];

            for (i, a) in lower.iter().enumerate() {
                for (j, b) in upper.iter().enumerate() {
                    if let Some(combined) = a.combine(b) {
                        merged_lower[i] = true;
                        used.insert((key, i));
                        used.insert((next_key, j));
                        merged_here.insert(combined.clone());
                        produced.insert(combined);
                    }
                }
            }

            let unmerged_here: Vec<Implicant> = lower
                .iter()
                .enumerate()
                .filter(|(i, _)| !merged_lower[*i])
                .map(|(_, implicant)| implicant.clone())
                .collect();

            merges.push(MergeDetail {
                group_id: key,
                next_group_id: next_key,
                merged: merged_here.into_iter().collect(),
                unmerged: unmerged_here,
            });
        }

        let mut carried = Vec::new();
        for &key in &keys {
            for (i, implicant) in current.get(key).iter().enumerate() {
                if !used.contains(&(key, i)) {
                    carried.push(implicant.clone());
                }
            }
        }
        primes.extend(carried.iter().cloned());

        let mut next = GroupTable::new();
        for implicant in &produced {
            next.add(implicant.clone());
        }

        trace.push(TraceStep {
            kind: StepKind::Merge,
            groups_before,
            groups_after: GroupSnapshot::capture(&next),
            merges,
            unmerged_carried: carried,
        });

        if produced.is_empty() {
            break;
        }
        current = next;
    }

    (primes.into_iter().collect(), trace)
}
