//! GroupTable: implicants bucketed by their count of One bits
//!
//! Groups are the workspace of the QMC merge passes: implicants in
//! group k may combine only with implicants in group k+1. The BTreeMap
//! keeps group iteration in ascending key order, which makes the trace
//! reproducible.

use std::collections::BTreeMap;

use super::implicant::Implicant;

#[derive(Debug, Clone, Default)]
pub struct GroupTable {
    groups: BTreeMap<usize, Vec<Implicant>>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, implicant: Implicant) {
        self.groups.entry(implicant.ones()).or_default().push(implicant);
    }

    pub fn get(&self, ones: usize) -> &[Implicant] {
        self.groups.get(&ones).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Group keys present, ascending.
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Implicant])> {
        self.groups.iter().map(|(&ones, group)| (ones, group.as_slice()))
    }

    pub fn implicants(&self) -> impl Iterator<Item = &Implicant> {
        self.groups.values().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total implicant count across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imp(s: &str) -> Implicant {
        s.parse().unwrap()
    }

    #[test]
    fn test_grouping_by_ones() {
        let mut table = GroupTable::new();
        table.add(imp("101"));
        table.add(imp("011"));
        table.add(imp("000"));
        table.add(imp("1-1"));

        assert_eq!(table.get(0), &[imp("000")]);
        assert_eq!(table.get(2), &[imp("101"), imp("011"), imp("1-1")]);
        assert!(table.get(3).is_empty());
        assert_eq!(table.keys().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_empty_table() {
        let table = GroupTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.keys().count(), 0);
    }
}
