//! Pipeline scenarios with known minimal forms

use boolmin::expr::{Expr, parse};
use boolmin::qm::{self, Implicant};
use boolmin::{simplify, simplify_text};

fn imp(s: &str) -> Implicant {
    s.parse().unwrap()
}

fn simplified(input: &str) -> Expr {
    simplify(&parse(input).unwrap()).unwrap().0
}

#[test]
fn test_absorption() {
    assert_eq!(simplify_text("a & (a | b)").unwrap(), "a");
}

#[test]
fn test_de_morgan_shape() {
    assert_eq!(simplify_text("!(a & b)").unwrap(), "!a | !b");
}

#[test]
fn test_contradiction_is_zero() {
    assert_eq!(simplify_text("a & !a").unwrap(), "0");
}

#[test]
fn test_tautology_is_one() {
    assert_eq!(simplify_text("a | !a").unwrap(), "1");
}

#[test]
fn test_xor_recognized() {
    assert_eq!(simplify_text("(!a & b) | (a & !b)").unwrap(), "a ^ b");
    assert_eq!(simplify_text("(!a & b) | (!b & a)").unwrap(), "a ^ b");
}

#[test]
fn test_common_factor_pulled_through_distribution() {
    // ((x & y & z) | (u & v)) & ((x | !y | !z) | (u & v))
    // reduces to (u & v) | (x & y & z)
    let tree = simplified("((x & y & z) | (u & v)) & ((x | !y | !z) | (u & v))");
    assert_eq!(
        tree,
        Expr::or(
            Expr::and(Expr::var("u"), Expr::var("v")),
            Expr::and(Expr::var("x"), Expr::and(Expr::var("y"), Expr::var("z")))
        )
    );
}

#[test]
fn test_consensus_term_dropped() {
    // (a & b) | (!a & c) | (b & c): the b & c term is consensus
    let tree = simplified("(a & b) | (!a & c) | (b & c)");
    assert_eq!(
        tree,
        Expr::or(
            Expr::and(Expr::var("a"), Expr::var("b")),
            Expr::and(Expr::not(Expr::var("a")), Expr::var("c"))
        )
    );
}

#[test]
fn test_double_negation() {
    assert_eq!(simplify_text("!!a").unwrap(), "a");
}

#[test]
fn test_xor_operator_survives_round_trip() {
    assert_eq!(simplify_text("a ^ b").unwrap(), "a ^ b");
}

#[test]
fn test_constants_fold_away() {
    assert_eq!(simplify_text("a & 1").unwrap(), "a");
    assert_eq!(simplify_text("a & 0").unwrap(), "0");
    assert_eq!(simplify_text("a | 1").unwrap(), "1");
    assert_eq!(simplify_text("a | 0").unwrap(), "a");
}

#[test]
fn test_qmc_reference_example() {
    // Classic four-variable example: minterms 4,8,9,10,11,12,14,15
    let minterms = [4usize, 8, 9, 10, 11, 12, 14, 15];
    let (primes, trace) = qm::prime_implicants(&minterms, 4);

    for expected in ["-100", "10--", "1--0", "1-1-"] {
        assert!(primes.contains(&imp(expected)), "missing prime {}", expected);
    }
    assert_eq!(primes.len(), 4);
    assert!(!trace.is_empty());

    let coverage = qm::coverage_table(&primes, &minterms);
    let covers = qm::minimal_covers(&coverage);

    let best = covers
        .iter()
        .min_by_key(|cover| cover.iter().map(Implicant::literal_count).sum::<usize>())
        .unwrap();

    assert_eq!(best.len(), 3);
    assert!(best.contains(&imp("10--")));
    assert!(best.contains(&imp("-100")));
    let cost: usize = best.iter().map(Implicant::literal_count).sum();
    assert_eq!(cost, 7);
}

#[test]
fn test_coverage_reference_example() {
    let primes = vec![imp("1-0"), imp("0-1"), imp("--1")];
    let table = qm::coverage_table(&primes, &[2, 3]);

    assert!(table[&2].is_empty());
    assert_eq!(table[&3], vec![imp("0-1"), imp("--1")]);
}

#[test]
fn test_output_is_deterministic() {
    let input = "(a & b) | (c & d) | (!a & !c) | (b & d)";
    let first = simplify_text(input).unwrap();
    for _ in 0..5 {
        assert_eq!(simplify_text(input).unwrap(), first);
    }
}

#[test]
fn test_variable_names_preserve_case() {
    assert_eq!(simplify_text("Flag & (Flag | other)").unwrap(), "Flag");
}
