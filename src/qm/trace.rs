//! Value-typed trace records emitted by the QMC engine
//!
//! One step for the initial grouping, then one step per merge pass.
//! The trace is append-only; group and merge entries are ordered by
//! ascending group key so reruns produce identical traces.

use super::group_table::GroupTable;
use super::implicant::Implicant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Grouping,
    Merge,
}

/// One group bucket as it looked when the step was recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSnapshot {
    pub ones: usize,
    pub implicants: Vec<Implicant>,
}

impl GroupSnapshot {
    /// Snapshot every group of a table, ascending by key.
    pub fn capture(table: &GroupTable) -> Vec<GroupSnapshot> {
        table
            .iter()
            .map(|(ones, group)| GroupSnapshot {
                ones,
                implicants: group.to_vec(),
            })
            .collect()
    }
}

/// Outcome of pairing one group against its upper neighbor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeDetail {
    pub group_id: usize,
    pub next_group_id: usize,
    /// Combined implicants this pairing produced, deduplicated
    pub merged: Vec<Implicant>,
    /// Implicants of `group_id` that combined with nothing in
    /// `next_group_id`
    pub unmerged: Vec<Implicant>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    pub kind: StepKind,
    pub groups_before: Vec<GroupSnapshot>,
    pub groups_after: Vec<GroupSnapshot>,
    pub merges: Vec<MergeDetail>,
    /// Implicants untouched by every pairing of this pass; they are the
    /// prime candidates carried out of the pass
    pub unmerged_carried: Vec<Implicant>,
}

impl TraceStep {
    /// The initial-grouping step: no predecessor state, no merges.
    pub fn grouping(groups: &GroupTable) -> Self {
        TraceStep {
            kind: StepKind::Grouping,
            groups_before: Vec::new(),
            groups_after: GroupSnapshot::capture(groups),
            merges: Vec::new(),
            unmerged_carried: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imp(s: &str) -> Implicant {
        s.parse().unwrap()
    }

    #[test]
    fn test_grouping_step_shape() {
        let mut table = GroupTable::new();
        table.add(imp("00"));
        table.add(imp("11"));

        let step = TraceStep::grouping(&table);
        assert_eq!(step.kind, StepKind::Grouping);
        assert!(step.groups_before.is_empty());
        assert!(step.merges.is_empty());
        assert!(step.unmerged_carried.is_empty());
        assert_eq!(step.groups_after.len(), 2);
        assert_eq!(step.groups_after[0].ones, 0);
        assert_eq!(step.groups_after[1].implicants, vec![imp("11")]);
    }
}
