// Truth table enumeration
//
// Rows are emitted in strict ascending minterm order. Bit layout is
// MSB-first: for row index i, variable k of the canonical list holds
// `(i >> (n - 1 - k)) & 1`. The QMC engine and the cover converter rely
// on this same convention.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::expr::{EvalError, Expr};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// The row's minterm index
    pub index: usize,
    pub assignment: HashMap<String, bool>,
    pub result: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    pub variables: Vec<String>,
    pub rows: Vec<Row>,
}

impl TruthTable {
    /// Enumerate all 2^n assignments of the tree's canonical variable
    /// list and evaluate each. A tree over only constants yields a
    /// single row with an empty assignment.
    pub fn from_expr(expr: &Expr) -> Result<Self, EvalError> {
        let variables = expr.variables();
        let n = variables.len();

        let mut rows = Vec::with_capacity(1 << n);
        for index in 0..(1usize << n) {
            let mut assignment = HashMap::with_capacity(n);
            for (k, name) in variables.iter().enumerate() {
                let bit = (index >> (n - 1 - k)) & 1 == 1;
                assignment.insert(name.clone(), bit);
            }
            let result = expr.eval(&assignment)?;
            rows.push(Row {
                index,
                assignment,
                result,
            });
        }

        Ok(TruthTable { variables, rows })
    }

    /// Indices of the rows where the formula is true.
    pub fn minterms(&self) -> Vec<usize> {
        self.rows
            .iter()
            .filter(|row| row.result)
            .map(|row| row.index)
            .collect()
    }

    /// The result column alone, in row order.
    pub fn results(&self) -> Vec<bool> {
        self.rows.iter().map(|row| row.result).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parse;

    #[test]
    fn test_row_count_and_order() {
        let table = TruthTable::from_expr(&parse("a & b").unwrap()).unwrap();
        assert_eq!(table.variables, vec!["a", "b"]);
        assert_eq!(table.rows.len(), 4);
        for (i, row) in table.rows.iter().enumerate() {
            assert_eq!(row.index, i);
        }
    }

    #[test]
    fn test_msb_first_layout() {
        // In row 2 (binary 10) of a two-variable table the FIRST
        // canonical variable holds the high bit.
        let table = TruthTable::from_expr(&parse("a & !b").unwrap()).unwrap();
        let row = &table.rows[2];
        assert_eq!(row.assignment["a"], true);
        assert_eq!(row.assignment["b"], false);
        assert_eq!(row.result, true);
    }

    #[test]
    fn test_minterms() {
        let table = TruthTable::from_expr(&parse("a | b").unwrap()).unwrap();
        assert_eq!(table.minterms(), vec![1, 2, 3]);
    }

    #[test]
    fn test_constant_formula_single_row() {
        let table = TruthTable::from_expr(&parse("1 & 0").unwrap()).unwrap();
        assert!(table.variables.is_empty());
        assert_eq!(table.rows.len(), 1);
        assert!(table.rows[0].assignment.is_empty());
        assert_eq!(table.rows[0].result, false);
    }

    #[test]
    fn test_xor_results() {
        let table = TruthTable::from_expr(&parse("a ^ b").unwrap()).unwrap();
        assert_eq!(table.results(), vec![false, true, true, false]);
    }
}
