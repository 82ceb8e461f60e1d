//! Property-based tests for the statevector simulator.

use proptest::prelude::*;

use kickback_adapter_sim::SimulatorBackend;
use kickback_hal::{Backend, RunOptions};
use kickback_ir::{Circuit, ClbitId, QubitId};

/// Circuit that prepares the basis state `bits` with X gates and measures every qubit.
fn basis_state_circuit(bits: &[bool]) -> Circuit {
    let n = bits.len() as u32;
    let mut circuit = Circuit::with_size("basis", n, n);
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            circuit.x(QubitId(i as u32)).unwrap();
        }
    }
    circuit
        .measure_range((0..n).map(QubitId), (0..n).map(ClbitId))
        .unwrap();
    circuit
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn basis_states_measure_exactly(bits in prop::collection::vec(any::<bool>(), 1..8)) {
        let circuit = basis_state_circuit(&bits);
        let expected: String = bits.iter().rev().map(|&b| if b { '1' } else { '0' }).collect();

        let result = SimulatorBackend::new()
            .run(&circuit, RunOptions::new(20))
            .unwrap();
        prop_assert_eq!(result.counts.get(&expected), 20);
        prop_assert_eq!(result.counts.len(), 1);
    }

    #[test]
    fn counts_sum_to_shots(n in 1u32..6, shots in 1u32..200, seed in any::<u64>()) {
        let mut circuit = Circuit::with_size("uniform", n, n);
        circuit.h_all((0..n).map(QubitId)).unwrap();
        circuit
            .measure_range((0..n).map(QubitId), (0..n).map(ClbitId))
            .unwrap();

        let result = SimulatorBackend::with_seed(seed)
            .run(&circuit, RunOptions::new(shots).with_memory())
            .unwrap();
        prop_assert_eq!(result.counts.total(), u64::from(shots));

        let memory = result.get_memory().unwrap();
        prop_assert_eq!(memory.len(), shots as usize);
        for outcome in memory {
            prop_assert_eq!(outcome.len(), n as usize);
        }
    }

    #[test]
    fn double_hadamard_is_identity(n in 1u32..6, seed in any::<u64>()) {
        let mut circuit = Circuit::with_size("hh", n, n);
        circuit.h_all((0..n).map(QubitId)).unwrap();
        circuit.h_all((0..n).map(QubitId)).unwrap();
        circuit
            .measure_range((0..n).map(QubitId), (0..n).map(ClbitId))
            .unwrap();

        let result = SimulatorBackend::with_seed(seed)
            .run(&circuit, RunOptions::new(10))
            .unwrap();
        prop_assert_eq!(result.counts.get(&"0".repeat(n as usize)), 10);
    }
}
