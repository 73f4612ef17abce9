//! Post-minimization rewriting
//!
//! QMC plus Petrick already deliver absorption-free sum-of-products
//! output, so the only structure worth restoring is XOR:
//!
//!   (!a & b) | (a & !b)  =>  a ^ b
//!
//! recognized under every commutation of the outer Or and both inner
//! Ands. The XNOR shape `(a & b) | (!a & !b)` is left alone. The
//! rewrite descends children first and is idempotent.

use crate::expr::Expr;

/// Rewrite bottom-up; returns the tree unchanged when nothing matches.
pub fn rewrite(expr: Expr) -> Expr {
    match expr {
        Expr::Not(inner) => Expr::not(rewrite(*inner)),
        Expr::And(left, right) => Expr::and(rewrite(*left), rewrite(*right)),
        Expr::Xor(left, right) => Expr::xor(rewrite(*left), rewrite(*right)),
        Expr::Or(left, right) => {
            let left = rewrite(*left);
            let right = rewrite(*right);
            match as_xor(&left, &right) {
                Some(xor) => xor,
                None => Expr::or(left, right),
            }
        }
        leaf @ (Expr::Const(_) | Expr::Var(_)) => leaf,
    }
}

/// Match `Or(left, right)` against the XOR idiom.
///
/// Both sides must be two-literal ANDs over the same pair of distinct
/// variables, each term with mixed polarity, and the polarities must be
/// opposite across the terms. Operand order of the result follows first
/// appearance in the matched node.
fn as_xor(left: &Expr, right: &Expr) -> Option<Expr> {
    let [(a, a_polarity), (b, b_polarity)] = literal_pair(left)?;
    let second = literal_pair(right)?;

    if a == b || a_polarity == b_polarity {
        return None;
    }

    let second_polarity = |name: &str| -> Option<bool> {
        second
            .iter()
            .find(|(other, _)| *other == name)
            .map(|(_, polarity)| *polarity)
    };

    let [(c, _), (d, _)] = second;
    if c == d {
        return None;
    }
    if second_polarity(a)? == a_polarity || second_polarity(b)? == b_polarity {
        return None;
    }

    Some(Expr::xor(Expr::var(a), Expr::var(b)))
}

/// `(name, polarity)` pairs for an `And` of exactly two literals
fn literal_pair(expr: &Expr) -> Option<[(&str, bool); 2]> {
    let Expr::And(left, right) = expr else {
        return None;
    };
    Some([literal(left)?, literal(right)?])
}

fn literal(expr: &Expr) -> Option<(&str, bool)> {
    match expr {
        Expr::Var(name) => Some((name, true)),
        Expr::Not(inner) => match inner.as_ref() {
            Expr::Var(name) => Some((name, false)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parse;

    fn rewritten(input: &str) -> Expr {
        rewrite(parse(input).unwrap())
    }

    #[test]
    fn test_basic_xor_pattern() {
        assert_eq!(
            rewritten("(!a & b) | (a & !b)"),
            Expr::xor(Expr::var("a"), Expr::var("b"))
        );
    }

    #[test]
    fn test_all_commutations_recognized() {
        // Operand order follows the first literal of the left term.
        let a_first = Expr::xor(Expr::var("a"), Expr::var("b"));
        for input in [
            "(!a & b) | (a & !b)",
            "(!a & b) | (!b & a)",
            "(a & !b) | (!a & b)",
            "(a & !b) | (b & !a)",
        ] {
            assert_eq!(rewritten(input), a_first, "input {:?}", input);
        }

        let b_first = Expr::xor(Expr::var("b"), Expr::var("a"));
        for input in ["(b & !a) | (a & !b)", "(!b & a) | (!a & b)"] {
            assert_eq!(rewritten(input), b_first, "input {:?}", input);
        }
    }

    #[test]
    fn test_xnor_shape_untouched() {
        let input = parse("(a & b) | (!a & !b)").unwrap();
        assert_eq!(rewrite(input.clone()), input);
    }

    #[test]
    fn test_different_variable_pairs_untouched() {
        let input = parse("(!a & b) | (a & !c)").unwrap();
        assert_eq!(rewrite(input.clone()), input);
    }

    #[test]
    fn test_three_literal_terms_untouched() {
        let input = parse("(!a & b & c) | (a & !b)").unwrap();
        assert_eq!(rewrite(input.clone()), input);
    }

    #[test]
    fn test_rewrites_nested_subtrees() {
        assert_eq!(
            rewritten("c & ((!a & b) | (a & !b))"),
            Expr::and(Expr::var("c"), Expr::xor(Expr::var("a"), Expr::var("b")))
        );
    }

    #[test]
    fn test_idempotent() {
        let once = rewritten("(!a & b) | (a & !b)");
        assert_eq!(rewrite(once.clone()), once);
    }

    #[test]
    fn test_untouched_sum_of_products() {
        let input = parse("a & b | !a & c").unwrap();
        assert_eq!(rewrite(input.clone()), input);
    }
}
