//! End-to-end runs of the oracle algorithms on the local simulator.

use rand::SeedableRng;
use rand::rngs::StdRng;

use kickback_adapter_sim::SimulatorBackend;
use kickback_algo::{
    AlgoError, DeutschCase, DjOracle, FunctionClass, bv_algorithm, bv_function, compile_circuit,
    deutsch_function, dj_algorithm, dj_function, run_single_shot,
};
use kickback_hal::{Backend, HalError, RunOptions};

// ---------------------------------------------------------------------------
// Deutsch
// ---------------------------------------------------------------------------

#[test]
fn deutsch_cases_are_labelled_correctly() {
    let backend = SimulatorBackend::with_seed(1);
    let expected = [
        (1, FunctionClass::Constant),
        (2, FunctionClass::Balanced),
        (3, FunctionClass::Balanced),
        (4, FunctionClass::Constant),
    ];
    for (case, class) in expected {
        let oracle = deutsch_function(case).unwrap();
        assert_eq!(dj_algorithm(&oracle, &backend).unwrap(), class, "case {case}");
    }
}

#[test]
fn deutsch_case_three_compiled_circuit_shape() {
    let oracle = deutsch_function(3).unwrap();
    let compiled = compile_circuit(&oracle).unwrap();
    assert_eq!(compiled.num_qubits(), 2);
    assert_eq!(compiled.num_clbits(), 1);

    let memory = SimulatorBackend::new()
        .run(&compiled, RunOptions::single_shot())
        .unwrap()
        .get_memory()
        .unwrap()
        .to_vec();
    assert_eq!(memory, ["1"]);
}

#[test]
fn deutsch_class_agrees_with_truth_table() {
    let backend = SimulatorBackend::with_seed(5);
    for case in DeutschCase::ALL {
        let measured = dj_algorithm(&case.circuit().unwrap(), &backend).unwrap();
        assert_eq!(measured, case.class());
    }
}

// ---------------------------------------------------------------------------
// Deutsch-Jozsa
// ---------------------------------------------------------------------------

#[test]
fn explicit_oracles_are_decided() {
    let backend = SimulatorBackend::with_seed(2);

    let constant = DjOracle::constant(3, true).unwrap();
    assert_eq!(
        dj_algorithm(&constant.circuit().unwrap(), &backend).unwrap(),
        FunctionClass::Constant
    );

    let balanced = DjOracle::balanced(3, false, vec![0, 3, 5, 6]).unwrap();
    assert_eq!(
        dj_algorithm(&balanced.circuit().unwrap(), &backend).unwrap(),
        FunctionClass::Balanced
    );
}

#[test]
fn balanced_measurement_is_never_all_zeros() {
    let backend = SimulatorBackend::with_seed(9);
    let oracle = DjOracle::balanced(2, true, vec![1, 2]).unwrap();
    let compiled = compile_circuit(&oracle.circuit().unwrap()).unwrap();

    let result = backend.run(&compiled, RunOptions::new(200)).unwrap();
    assert_eq!(result.counts.get("00"), 0);
}

#[test]
fn same_seed_builds_identical_oracles() {
    for n in 0..=4 {
        let a = dj_function(n, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = dj_function(n, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
        assert_eq!(compile_circuit(&a).unwrap(), compile_circuit(&b).unwrap());
    }
}

#[test]
fn zero_input_oracle_is_constant_end_to_end() {
    let backend = SimulatorBackend::with_seed(3);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..8 {
        let oracle = dj_function(0, &mut rng).unwrap();
        assert_eq!(
            dj_algorithm(&oracle, &backend).unwrap(),
            FunctionClass::Constant
        );
    }
}

// ---------------------------------------------------------------------------
// Bernstein-Vazirani
// ---------------------------------------------------------------------------

#[test]
fn bv_recovers_1001() {
    let backend = SimulatorBackend::new();
    assert_eq!(bv_algorithm("1001", &backend).unwrap(), "1001");

    let compiled = compile_circuit(&bv_function("1001").unwrap()).unwrap();
    assert_eq!(run_single_shot(&backend, &compiled).unwrap(), "1001");
}

#[test]
fn bv_rejects_bad_secret() {
    let backend = SimulatorBackend::new();
    assert!(matches!(
        bv_algorithm("10x", &backend),
        Err(AlgoError::InvalidArgument(_))
    ));
}

#[test]
fn oversized_oracle_surfaces_backend_error() {
    let backend = SimulatorBackend::with_max_qubits(3);
    let err = bv_algorithm("1111", &backend).unwrap_err();
    assert!(matches!(
        err,
        AlgoError::Execution(HalError::CircuitTooLarge(_))
    ));
}
