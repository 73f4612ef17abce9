//! Convert selected covers back into expression trees
//!
//! Trees are built from the literal content of the implicants, keyed by
//! variable name rather than bit position. That makes the output a
//! function of the Boolean function alone, so re-minimizing a minimized
//! tree reproduces it even when its first-occurrence variable order
//! differs from the original formula's.

use std::collections::BTreeSet;

use crate::expr::Expr;
use crate::qm::{BitState, Implicant};

/// The literals of a term as `(name, polarity)` pairs, sorted by name.
/// This is the canonical sort key for terms and covers.
pub(crate) fn term_key(implicant: &Implicant, variables: &[String]) -> Vec<(String, bool)> {
    let mut literals: Vec<(String, bool)> = implicant
        .bits()
        .iter()
        .enumerate()
        .filter_map(|(i, &bit)| match bit {
            BitState::One => Some((variables[i].clone(), true)),
            BitState::Zero => Some((variables[i].clone(), false)),
            BitState::DontCare => None,
        })
        .collect();
    literals.sort();
    literals
}

/// Build the AND term of one implicant: `Var` for One, `Not(Var)` for
/// Zero, nothing for a don't-care; literals ordered by variable name.
/// No literals at all means the term is the constant true. The fold is
/// right-leaning: `[x, y, z]` becomes `And(x, And(y, z))`.
pub fn implicant_to_expr(implicant: &Implicant, variables: &[String]) -> Expr {
    let mut literals: Vec<Expr> = term_key(implicant, variables)
        .into_iter()
        .map(|(name, polarity)| {
            if polarity {
                Expr::Var(name)
            } else {
                Expr::not(Expr::Var(name))
            }
        })
        .collect();

    let Some(rightmost) = literals.pop() else {
        return Expr::Const(true);
    };
    literals
        .into_iter()
        .rev()
        .fold(rightmost, |term, literal| Expr::and(literal, term))
}

/// OR the terms of a cover together, ordered by their term keys; the
/// outer fold is left-leaning: `[t1, t2, t3]` becomes
/// `Or(Or(t1, t2), t3)`.
pub fn cover_to_expr(cover: &BTreeSet<Implicant>, variables: &[String]) -> Expr {
    let mut ordered: Vec<&Implicant> = cover.iter().collect();
    ordered.sort_by_key(|implicant| term_key(implicant, variables));

    let mut terms = ordered
        .into_iter()
        .map(|implicant| implicant_to_expr(implicant, variables));

    let Some(first) = terms.next() else {
        return Expr::Const(false);
    };
    terms.fold(first, Expr::or)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imp(s: &str) -> Implicant {
        s.parse().unwrap()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_literal_term() {
        let vars = names(&["a", "b"]);
        assert_eq!(implicant_to_expr(&imp("1-"), &vars), Expr::var("a"));
        assert_eq!(
            implicant_to_expr(&imp("-0"), &vars),
            Expr::not(Expr::var("b"))
        );
    }

    #[test]
    fn test_and_fold_is_right_leaning() {
        let vars = names(&["x", "y", "z"]);
        assert_eq!(
            implicant_to_expr(&imp("110"), &vars),
            Expr::and(
                Expr::var("x"),
                Expr::and(Expr::var("y"), Expr::not(Expr::var("z")))
            )
        );
    }

    #[test]
    fn test_literals_ordered_by_name_not_position() {
        // Canonical order a, c, b: the implicant covers c and b, but
        // the term reads b & c.
        let vars = names(&["a", "c", "b"]);
        assert_eq!(
            implicant_to_expr(&imp("-11"), &vars),
            Expr::and(Expr::var("b"), Expr::var("c"))
        );
    }

    #[test]
    fn test_no_literals_is_constant_true() {
        assert_eq!(
            implicant_to_expr(&imp("---"), &names(&["a", "b", "c"])),
            Expr::Const(true)
        );
        assert_eq!(implicant_to_expr(&imp(""), &[]), Expr::Const(true));
    }

    #[test]
    fn test_or_fold_is_left_leaning() {
        let vars = names(&["a", "b", "c"]);
        let cover: BTreeSet<Implicant> =
            [imp("1--"), imp("-1-"), imp("--1")].into_iter().collect();
        assert_eq!(
            cover_to_expr(&cover, &vars),
            Expr::or(
                Expr::or(Expr::var("a"), Expr::var("b")),
                Expr::var("c")
            )
        );
    }

    #[test]
    fn test_terms_sorted_by_variable_names() {
        // Canonical order is x, y, u, v but the u & v term sorts first
        // because "u" < "x".
        let vars = names(&["x", "y", "u", "v"]);
        let cover: BTreeSet<Implicant> =
            [imp("11--"), imp("--11")].into_iter().collect();
        assert_eq!(
            cover_to_expr(&cover, &vars),
            Expr::or(
                Expr::and(Expr::var("u"), Expr::var("v")),
                Expr::and(Expr::var("x"), Expr::var("y"))
            )
        );
    }

    #[test]
    fn test_negative_literal_sorts_before_positive() {
        // Same variable pair, mixed polarity: the term holding the
        // negated a comes first.
        let vars = names(&["a", "b"]);
        let cover: BTreeSet<Implicant> = [imp("10"), imp("01")].into_iter().collect();
        assert_eq!(
            cover_to_expr(&cover, &vars),
            Expr::or(
                Expr::and(Expr::not(Expr::var("a")), Expr::var("b")),
                Expr::and(Expr::var("a"), Expr::not(Expr::var("b")))
            )
        );
    }
}
