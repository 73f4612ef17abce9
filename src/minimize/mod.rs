// Minimizer facade: truth table -> QMC -> coverage -> Petrick -> tree

pub mod cover;
pub mod rewrite;

pub use cover::{cover_to_expr, implicant_to_expr};
pub use rewrite::rewrite;

use std::collections::BTreeSet;

use thiserror::Error;

use crate::expr::{EvalError, Expr};
use crate::qm::{self, Implicant, TraceStep};
use crate::table::TruthTable;

/// Truth-table sizing makes larger functions intractable by design.
pub const MAX_VARIABLES: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinimizeError {
    /// Petrick produced no cover while minterms exist. This is an
    /// internal invariant violation, not a property of the input.
    #[error("no minimal cover exists for the coverage table")]
    NoMinimalCover,
    #[error("too many variables: {count} (limit is {max})")]
    TooManyVariables { count: usize, max: usize },
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Everything the pipeline learned on the way to the minimized tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    pub variables: Vec<String>,
    /// Indices of the true rows of the truth table
    pub minterms: Vec<usize>,
    pub trace: Vec<TraceStep>,
    pub prime_implicants: Vec<Implicant>,
    /// Every minimal cover Petrick found, in natural order
    pub minimal_covers: Vec<Vec<Implicant>>,
    /// The cover the facade selected by literal count
    pub selected_cover: Vec<Implicant>,
}

/// Minimize a formula.
///
/// Returns a logically equivalent tree of lowest literal count among
/// the minimal covers, with XOR idioms restored, plus the diagnostic
/// record. A contradiction becomes `Const(false)`, a tautology
/// `Const(true)`.
pub fn simplify(expr: &Expr) -> Result<(Expr, Diagnostics), MinimizeError> {
    let variables = expr.variables();
    if variables.len() > MAX_VARIABLES {
        return Err(MinimizeError::TooManyVariables {
            count: variables.len(),
            max: MAX_VARIABLES,
        });
    }

    let table = TruthTable::from_expr(expr)?;
    let minterms = table.minterms();
    if minterms.is_empty() {
        return Ok((
            Expr::Const(false),
            Diagnostics {
                variables,
                minterms,
                trace: Vec::new(),
                prime_implicants: Vec::new(),
                minimal_covers: Vec::new(),
                selected_cover: Vec::new(),
            },
        ));
    }

    let (primes, trace) = qm::prime_implicants(&minterms, variables.len());
    let coverage = qm::coverage_table(&primes, &minterms);
    let covers = qm::minimal_covers(&coverage);

    let selected = covers
        .iter()
        .min_by_key(|cover| (cover_cost(cover), cover_key(cover, &variables)))
        .ok_or(MinimizeError::NoMinimalCover)?
        .clone();

    let candidate = rewrite(cover_to_expr(&selected, &variables));
    // Minimal sum-of-products can still lose to a compact factored or
    // XOR-chained input; never hand back more literals than we got.
    let tree = if candidate.literal_count() > expr.literal_count() {
        expr.clone()
    } else {
        candidate
    };

    let diagnostics = Diagnostics {
        variables,
        minterms,
        trace,
        prime_implicants: primes,
        minimal_covers: covers
            .iter()
            .map(|cover| cover.iter().cloned().collect())
            .collect(),
        selected_cover: selected.iter().cloned().collect(),
    };

    Ok((tree, diagnostics))
}

/// Total literal count of a cover.
fn cover_cost(cover: &BTreeSet<Implicant>) -> usize {
    cover.iter().map(Implicant::literal_count).sum()
}

/// Tie-break key among equal-cost covers: the cover's sorted term keys.
/// Comparing literal content instead of bit patterns keeps the choice
/// stable across different variable orderings of the same function.
fn cover_key(cover: &BTreeSet<Implicant>, variables: &[String]) -> Vec<Vec<(String, bool)>> {
    let mut keys: Vec<Vec<(String, bool)>> = cover
        .iter()
        .map(|implicant| cover::term_key(implicant, variables))
        .collect();
    keys.sort();
    keys
}
