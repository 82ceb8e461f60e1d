//! Wraps an oracle in the phase-kickback query circuit.

use kickback_ir::{Circuit, ClbitId, QubitId};

use crate::error::{AlgoError, AlgoResult};

/// Compile an oracle on `n + 1` qubits into the single-query algorithm.
///
/// The last qubit is the ancilla. The result prepares the ancilla in `|−⟩`
/// and the inputs in uniform superposition, applies the oracle unchanged,
/// undoes the input Hadamards and measures input qubit `i` into classical
/// bit `i`. The output has `n + 1` qubits and `n` classical bits.
#[allow(clippy::cast_possible_truncation)]
pub fn compile_circuit(function: &Circuit) -> AlgoResult<Circuit> {
    let Some(n) = function.num_qubits().checked_sub(1) else {
        return Err(AlgoError::InvalidArgument(
            "oracle needs at least one qubit for the ancilla".into(),
        ));
    };
    let n = n as u32;
    let ancilla = QubitId(n);

    let mut circuit = Circuit::with_size(format!("{}_compiled", function.name()), n + 1, n);
    circuit.x(ancilla)?;
    circuit.h_all((0..=n).map(QubitId))?;
    circuit.compose(function)?;
    circuit.h_all((0..n).map(QubitId))?;
    if n > 0 {
        circuit.measure_range((0..n).map(QubitId), (0..n).map(ClbitId))?;
    }
    Ok(circuit)
}
