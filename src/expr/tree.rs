// Expression tree for Boolean formulas

use std::fmt;

use super::format::{FormatOptions, format_expr};

/// A Boolean expression over named variables and the constants 0/1
///
/// All binary operators are strictly binary; associativity lives in the
/// tree shape, not in the node. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Const(bool),
    Var(String),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Xor(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn constant(value: bool) -> Self {
        Expr::Const(value)
    }

    pub fn var(name: &str) -> Self {
        Expr::Var(name.to_string())
    }

    pub fn not(expr: Expr) -> Self {
        Expr::Not(Box::new(expr))
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::Or(Box::new(left), Box::new(right))
    }

    pub fn xor(left: Expr, right: Expr) -> Self {
        Expr::Xor(Box::new(left), Box::new(right))
    }

    /// Count the literal leaves: every `Var` and every `Not` applied
    /// directly to a `Var` counts as one.
    pub fn literal_count(&self) -> usize {
        match self {
            Expr::Const(_) => 0,
            Expr::Var(_) => 1,
            Expr::Not(inner) => inner.literal_count(),
            Expr::And(left, right) | Expr::Or(left, right) | Expr::Xor(left, right) => {
                left.literal_count() + right.literal_count()
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_expr(self, &FormatOptions::default()))
    }
}
