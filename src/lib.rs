//! Boolean formula minimization
//!
//! A library for minimizing Boolean expressions with the
//! Quine-McCluskey algorithm and Petrick's method: parse a formula,
//! enumerate its truth table, generate every prime implicant, select a
//! lowest-literal-count cover among all minimal covers, and restore
//! XOR idioms in the result.

pub mod api;      // JSON process API
pub mod error;    // umbrella error for the string entry points
pub mod expr;     // trees, lexer, parser, formatter
pub mod minimize; // facade, cover conversion, rewriting
pub mod qm;       // Quine-McCluskey engine and Petrick's method
pub mod random;   // seeded random inputs
pub mod table;    // truth tables

// Re-export the main types
pub use error::Error;
pub use expr::{
    EvalError, Expr, FormatOptions, OperatorStyle, ParenStyle, ParseError, ParseErrorKind,
    format_expr, parse,
};
pub use minimize::{Diagnostics, MAX_VARIABLES, MinimizeError, simplify};
pub use qm::{BitState, Implicant, TraceStep};
pub use table::TruthTable;

use std::collections::HashMap;

/// Parse, minimize, and render with the default format options.
pub fn simplify_text(input: &str) -> Result<String, Error> {
    let expr = parse(input)?;
    let (tree, _) = minimize::simplify(&expr)?;
    Ok(format_expr(&tree, &FormatOptions::default()))
}

/// Parse and evaluate against an assignment.
pub fn eval_text(input: &str, assignment: &HashMap<String, bool>) -> Result<bool, Error> {
    Ok(parse(input)?.eval(assignment)?)
}

/// Parse and enumerate the full truth table.
pub fn truth_table_text(input: &str) -> Result<TruthTable, Error> {
    Ok(TruthTable::from_expr(&parse(input)?)?)
}

/// Truth-table equivalence over the union of both variable lists.
pub fn equivalent(left: &Expr, right: &Expr) -> Result<bool, EvalError> {
    let mut variables = left.variables();
    for name in right.variables() {
        if !variables.contains(&name) {
            variables.push(name);
        }
    }

    let n = variables.len();
    for index in 0..(1usize << n) {
        let mut assignment = HashMap::with_capacity(n);
        for (k, name) in variables.iter().enumerate() {
            assignment.insert(name.clone(), (index >> (n - 1 - k)) & 1 == 1);
        }
        if left.eval(&assignment)? != right.eval(&assignment)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Generate variable names (A, B, C, ...)
pub fn generate_variable_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| ((b'A' + i as u8) as char).to_string())
        .collect()
}

/// Parse a minterm string like "1,3,7,15"
pub fn parse_minterms(input: &str) -> Result<Vec<usize>, std::num::ParseIntError> {
    input.split(',').map(|s| s.trim().parse()).collect()
}
