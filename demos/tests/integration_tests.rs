//! Integration tests for the demo suite.
//!
//! These tests drive the same paths the demo binaries take, with a fixed
//! seed so every run is reproducible.

use clap::Parser;

use kickback_algo::{
    DeutschCase, DjOracle, FunctionClass, bv_algorithm, bv_function, compile_circuit,
    deutsch_function, dj_algorithm,
};
use kickback_demos::{CommonArgs, ensure_fits, histogram_lines, log_level};
use kickback_hal::{Backend, Counts, HalError, RunOptions};

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    common: CommonArgs,
}

/// Test that verbosity counts map onto filter levels.
#[test]
fn test_log_levels() {
    assert_eq!(log_level(0), "warn");
    assert_eq!(log_level(1), "info");
    assert_eq!(log_level(2), "debug");
    assert_eq!(log_level(7), "trace");
}

/// Test that shared flags parse and configure the backend.
#[test]
fn test_common_args_parse() {
    let cli = TestCli::parse_from(["demo", "-vv", "--seed", "17"]);
    assert_eq!(cli.common.verbose, 2);
    assert_eq!(cli.common.seed, Some(17));

    let backend = cli.common.backend().unwrap();
    assert_eq!(backend.name(), "simulator");
    assert_eq!(backend.config().seed, Some(17));
}

/// Test that the seed fixes oracle selection.
#[test]
fn test_seeded_rng_is_reproducible() {
    let cli = TestCli::parse_from(["demo", "--seed", "5"]);
    let a = DjOracle::random(4, &mut cli.common.rng()).unwrap();
    let b = DjOracle::random(4, &mut cli.common.rng()).unwrap();
    assert_eq!(a, b);
}

/// Test the default Deutsch demo path (case 3).
#[test]
fn test_deutsch_default_case() {
    let cli = TestCli::parse_from(["demo", "--seed", "1"]);
    let backend = cli.common.backend().unwrap();
    let oracle = deutsch_function(3).unwrap();
    assert_eq!(
        dj_algorithm(&oracle, &backend).unwrap(),
        DeutschCase::Negation.class()
    );
}

/// Test the Deutsch-Jozsa demo path agrees with the oracle's class.
#[test]
fn test_deutsch_jozsa_demo_path() {
    for seed in 0..16 {
        let cli = TestCli::parse_from(["demo", "--seed", &seed.to_string()]);
        let backend = cli.common.backend().unwrap();
        let oracle = DjOracle::random(3, &mut cli.common.rng()).unwrap();
        let measured = dj_algorithm(&oracle.circuit().unwrap(), &backend).unwrap();
        assert_eq!(measured, oracle.class(), "seed {seed}");
    }
}

/// Test the default Bernstein-Vazirani secret.
#[test]
fn test_bernstein_vazirani_default_secret() {
    let cli = TestCli::parse_from(["demo"]);
    let backend = cli.common.backend().unwrap();
    assert_eq!(bv_algorithm("1001", &backend).unwrap(), "1001");
}

/// Test that the constant cases are labelled constant.
#[test]
fn test_constant_cases() {
    let cli = TestCli::parse_from(["demo", "--seed", "2"]);
    let backend = cli.common.backend().unwrap();
    for case in [1, 4] {
        let oracle = deutsch_function(case).unwrap();
        assert_eq!(
            dj_algorithm(&oracle, &backend).unwrap(),
            FunctionClass::Constant
        );
    }
}

/// Test that the Deutsch-Jozsa width check refuses inputs one past the
/// simulator limit before any oracle is drawn.
#[test]
fn test_oversized_input_rejected_early() {
    let cli = TestCli::parse_from(["demo", "--seed", "3"]);
    let backend = cli.common.backend().unwrap();
    assert_eq!(backend.capabilities().num_qubits, 20);

    // Inputs plus the ancilla.
    assert!(ensure_fits(&backend, 19 + 1).is_ok());
    let err = ensure_fits(&backend, 20 + 1).unwrap_err();
    assert!(matches!(err, HalError::CircuitTooLarge(_)));
    assert!(ensure_fits(&backend, u32::MAX).is_err());
}

/// Test the Bernstein-Vazirani histogram: every shot lands on the secret.
#[test]
fn test_bernstein_vazirani_histogram() {
    let cli = TestCli::parse_from(["demo", "--seed", "8"]);
    let backend = cli.common.backend().unwrap();
    let compiled = compile_circuit(&bv_function("0110").unwrap()).unwrap();
    let result = backend.run(&compiled, RunOptions::new(64)).unwrap();

    assert_eq!(result.counts.most_frequent(), Some(("0110", 64)));
    let lines = histogram_lines(&result.counts);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("0110     64  "));
    assert_eq!(lines[0].matches('█').count(), 30);
}

/// Test that histogram lines are ordered by bit-string.
#[test]
fn test_histogram_lines_sorted() {
    let mut counts = Counts::new();
    counts.insert("11", 1);
    counts.insert("00", 3);
    counts.insert("01", 0);

    let lines = histogram_lines(&counts);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("00"));
    assert!(lines[1].starts_with("01"));
    assert!(lines[2].starts_with("11"));
    assert_eq!(counts.most_frequent(), Some(("00", 3)));
}
