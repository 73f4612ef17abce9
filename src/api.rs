//! JSON API for embedding the minimizer
//!
//! `process` runs the whole pipeline on a formula string and returns
//! the minimized rendering, the truth table, and the diagnostic record.
//! The `*Response` types are the wire form: implicants are rendered as
//! `10--` pattern strings and assignments use ordered maps so the JSON
//! output is stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::expr::format::{FormatOptions, OperatorStyle, ParenStyle, format_expr};
use crate::expr::parse;
use crate::minimize::{self, Diagnostics};
use crate::qm::{StepKind, TraceStep};
use crate::table::TruthTable;

/// Options accepted by [`process`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessOptions {
    pub operators: OperatorStyle,
    pub parentheses: ParenStyle,
}

impl ProcessOptions {
    fn format_options(&self) -> FormatOptions {
        FormatOptions {
            operators: self.operators,
            parentheses: self.parentheses,
        }
    }
}

/// A full request, deserializable from a JSON document
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRequest {
    pub formula: String,
    #[serde(default)]
    pub operators: OperatorStyle,
    #[serde(default)]
    pub parentheses: ParenStyle,
}

impl ProcessRequest {
    pub fn options(&self) -> ProcessOptions {
        ProcessOptions {
            operators: self.operators,
            parentheses: self.parentheses,
        }
    }
}

/// Result of one full pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub simplified: String,
    pub truth_table: TruthTable,
    pub diagnostics: Diagnostics,
}

/// Parse, tabulate, minimize, and format in one call.
pub fn process(input: &str, options: &ProcessOptions) -> Result<ProcessOutput, Error> {
    let expr = parse(input)?;
    let truth_table = TruthTable::from_expr(&expr)?;
    let (tree, diagnostics) = minimize::simplify(&expr)?;

    Ok(ProcessOutput {
        simplified: format_expr(&tree, &options.format_options()),
        truth_table,
        diagnostics,
    })
}

/// Wire form of [`ProcessOutput`]
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub simplified: String,
    pub variables: Vec<String>,
    pub minterms: Vec<usize>,
    pub truth_table: Vec<RowResponse>,
    pub prime_implicants: Vec<String>,
    pub minimal_covers: Vec<Vec<String>>,
    pub selected_cover: Vec<String>,
    pub trace: Vec<TraceStepResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowResponse {
    pub index: usize,
    pub assignment: BTreeMap<String, bool>,
    pub result: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TraceStepResponse {
    pub kind: &'static str,
    pub groups_before: Vec<GroupResponse>,
    pub groups_after: Vec<GroupResponse>,
    pub merges: Vec<MergeResponse>,
    pub unmerged_carried: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupResponse {
    pub ones: usize,
    pub implicants: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MergeResponse {
    pub group_id: usize,
    pub next_group_id: usize,
    pub merged: Vec<String>,
    pub unmerged: Vec<String>,
}

impl ProcessResponse {
    pub fn from_output(output: &ProcessOutput) -> Self {
        let diagnostics = &output.diagnostics;
        ProcessResponse {
            simplified: output.simplified.clone(),
            variables: diagnostics.variables.clone(),
            minterms: diagnostics.minterms.clone(),
            truth_table: rows_response(&output.truth_table),
            prime_implicants: implicant_strings(&diagnostics.prime_implicants),
            minimal_covers: diagnostics
                .minimal_covers
                .iter()
                .map(|cover| implicant_strings(cover))
                .collect(),
            selected_cover: implicant_strings(&diagnostics.selected_cover),
            trace: diagnostics.trace.iter().map(trace_step_response).collect(),
        }
    }
}

/// Stable, ordered row encoding of a truth table.
pub fn rows_response(table: &TruthTable) -> Vec<RowResponse> {
    table
        .rows
        .iter()
        .map(|row| RowResponse {
            index: row.index,
            assignment: row
                .assignment
                .iter()
                .map(|(name, value)| (name.clone(), *value))
                .collect(),
            result: row.result,
        })
        .collect()
}

fn implicant_strings<'a, I>(implicants: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a crate::qm::Implicant>,
{
    implicants
        .into_iter()
        .map(|implicant| implicant.to_string())
        .collect()
}

fn trace_step_response(step: &TraceStep) -> TraceStepResponse {
    let group = |snapshots: &[crate::qm::GroupSnapshot]| -> Vec<GroupResponse> {
        snapshots
            .iter()
            .map(|snapshot| GroupResponse {
                ones: snapshot.ones,
                implicants: implicant_strings(&snapshot.implicants),
            })
            .collect()
    };

    TraceStepResponse {
        kind: match step.kind {
            StepKind::Grouping => "grouping",
            StepKind::Merge => "merge",
        },
        groups_before: group(&step.groups_before),
        groups_after: group(&step.groups_after),
        merges: step
            .merges
            .iter()
            .map(|detail| MergeResponse {
                group_id: detail.group_id,
                next_group_id: detail.next_group_id,
                merged: implicant_strings(&detail.merged),
                unmerged: implicant_strings(&detail.unmerged),
            })
            .collect(),
        unmerged_carried: implicant_strings(&step.unmerged_carried),
    }
}
