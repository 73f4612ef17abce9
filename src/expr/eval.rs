// Pure truth evaluation and variable collection

use std::collections::HashMap;

use thiserror::Error;

use super::tree::Expr;

/// Errors from evaluating an expression against an assignment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unbound variable: {0}")]
    UnboundVariable(String),
}

impl Expr {
    /// Evaluate against a variable assignment.
    ///
    /// Every variable appearing in the tree must be present in the
    /// assignment; a missing one is `UnboundVariable`, not `false`.
    pub fn eval(&self, assignment: &HashMap<String, bool>) -> Result<bool, EvalError> {
        match self {
            Expr::Const(value) => Ok(*value),
            Expr::Var(name) => assignment
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::UnboundVariable(name.clone())),
            Expr::Not(inner) => Ok(!inner.eval(assignment)?),
            Expr::And(left, right) => Ok(left.eval(assignment)? && right.eval(assignment)?),
            Expr::Or(left, right) => Ok(left.eval(assignment)? || right.eval(assignment)?),
            Expr::Xor(left, right) => Ok(left.eval(assignment)? != right.eval(assignment)?),
        }
    }

    /// Distinct variable names in first-occurrence order, collected by a
    /// left-to-right depth-first walk. This order is canonical: it fixes
    /// the bit layout of every minterm and implicant derived from the
    /// tree.
    pub fn variables(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut Vec<String>) {
        match self {
            Expr::Const(_) => {}
            Expr::Var(name) => {
                if !names.iter().any(|known| known == name) {
                    names.push(name.clone());
                }
            }
            Expr::Not(inner) => inner.collect_variables(names),
            Expr::And(left, right) | Expr::Or(left, right) | Expr::Xor(left, right) => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
        }
    }
}
