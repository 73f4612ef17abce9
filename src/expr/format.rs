// Infix formatting with precedence-aware parenthesization

use serde::{Deserialize, Serialize};

use super::tree::Expr;

/// How operators are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorStyle {
    /// `!`, `&`, `|`, `^` and the constants `1`/`0`
    #[default]
    Symbolic,
    /// `NOT`, `AND`, `OR`, `XOR` and the constants `TRUE`/`FALSE`
    Word,
}

/// How much parenthesization to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParenStyle {
    /// Only where the precedence `or < xor < and < not` requires it
    #[default]
    Minimal,
    /// Around every binary node
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    pub operators: OperatorStyle,
    pub parentheses: ParenStyle,
}

/// Render a tree as an infix formula string.
pub fn format_expr(expr: &Expr, options: &FormatOptions) -> String {
    render(expr, options)
}

fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Or(_, _) => 0,
        Expr::Xor(_, _) => 1,
        Expr::And(_, _) => 2,
        Expr::Not(_) => 3,
        Expr::Const(_) | Expr::Var(_) => 4,
    }
}

fn render(expr: &Expr, options: &FormatOptions) -> String {
    let symbolic = options.operators == OperatorStyle::Symbolic;
    match expr {
        Expr::Const(true) => if symbolic { "1" } else { "TRUE" }.to_string(),
        Expr::Const(false) => if symbolic { "0" } else { "FALSE" }.to_string(),
        Expr::Var(name) => name.clone(),
        Expr::Not(inner) => {
            let body = child(inner, precedence(expr), options);
            if symbolic {
                format!("!{}", body)
            } else {
                format!("NOT {}", body)
            }
        }
        Expr::And(left, right) => binary(expr, left, right, if symbolic { "&" } else { "AND" }, options),
        Expr::Or(left, right) => binary(expr, left, right, if symbolic { "|" } else { "OR" }, options),
        Expr::Xor(left, right) => binary(expr, left, right, if symbolic { "^" } else { "XOR" }, options),
    }
}

fn binary(node: &Expr, left: &Expr, right: &Expr, op: &str, options: &FormatOptions) -> String {
    let prec = precedence(node);
    let rendered = format!(
        "{} {} {}",
        child(left, prec, options),
        op,
        child(right, prec, options)
    );
    match options.parentheses {
        ParenStyle::Full => format!("({})", rendered),
        ParenStyle::Minimal => rendered,
    }
}

fn child(expr: &Expr, parent_precedence: u8, options: &FormatOptions) -> String {
    let rendered = render(expr, options);
    // Full mode already wraps binary children inside `render`.
    let needs_parens = match options.parentheses {
        ParenStyle::Full => false,
        ParenStyle::Minimal => precedence(expr) < parent_precedence,
    };
    if needs_parens {
        format!("({})", rendered)
    } else {
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parser::parse;

    fn fmt(input: &str, options: &FormatOptions) -> String {
        format_expr(&parse(input).unwrap(), options)
    }

    #[test]
    fn test_minimal_symbolic() {
        let options = FormatOptions::default();
        assert_eq!(fmt("a & b | c", &options), "a & b | c");
        assert_eq!(fmt("(a | b) & c", &options), "(a | b) & c");
        assert_eq!(fmt("!(a & b)", &options), "!(a & b)");
        assert_eq!(fmt("!a & b", &options), "!a & b");
        assert_eq!(fmt("a ^ b | c & d", &options), "a ^ b | c & d");
        assert_eq!(fmt("(a | b) ^ c", &options), "(a | b) ^ c");
    }

    #[test]
    fn test_word_operators() {
        let options = FormatOptions {
            operators: OperatorStyle::Word,
            parentheses: ParenStyle::Minimal,
        };
        assert_eq!(fmt("!a & b | 1", &options), "NOT a AND b OR TRUE");
        assert_eq!(fmt("a ^ 0", &options), "a XOR FALSE");
    }

    #[test]
    fn test_full_parens() {
        let options = FormatOptions {
            operators: OperatorStyle::Symbolic,
            parentheses: ParenStyle::Full,
        };
        assert_eq!(fmt("a & b | c", &options), "((a & b) | c)");
        assert_eq!(fmt("!(a | b)", &options), "!(a | b)");
    }

    #[test]
    fn test_round_trip_through_parser() {
        let original = parse("!(a | b ^ c) & (d | 1)").unwrap();
        let reparsed = parse(&format_expr(&original, &FormatOptions::default())).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_double_negation() {
        assert_eq!(fmt("!!a", &FormatOptions::default()), "!!a");
    }
}
