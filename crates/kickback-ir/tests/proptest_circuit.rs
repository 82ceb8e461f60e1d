//! Property-based tests for circuit construction.
//!
//! Circuits built from random gate sequences must keep their structural
//! invariants: operands stay in range, depth never exceeds the operation
//! count, and composition preserves instruction order.

use kickback_ir::{Circuit, IrError, QubitId};
use proptest::prelude::*;

/// Gate operations that can be applied to a circuit.
#[derive(Debug, Clone)]
enum GateOp {
    H(u32),
    X(u32),
    Z(u32),
    CX(u32, u32),
    Mcx(Vec<u32>, u32),
}

impl GateOp {
    fn apply(&self, circuit: &mut Circuit) -> Result<(), IrError> {
        match self {
            GateOp::H(q) => circuit.h(QubitId(*q)).map(|_| ()),
            GateOp::X(q) => circuit.x(QubitId(*q)).map(|_| ()),
            GateOp::Z(q) => circuit.z(QubitId(*q)).map(|_| ()),
            GateOp::CX(c, t) => circuit.cx(QubitId(*c), QubitId(*t)).map(|_| ()),
            GateOp::Mcx(cs, t) => circuit
                .mcx(cs.iter().copied().map(QubitId), QubitId(*t))
                .map(|_| ()),
        }
    }
}

fn arb_gate_op(num_qubits: u32) -> impl Strategy<Value = GateOp> {
    let q = 0..num_qubits;
    prop_oneof![
        q.clone().prop_map(GateOp::H),
        q.clone().prop_map(GateOp::X),
        q.clone().prop_map(GateOp::Z),
        (q.clone(), q.clone()).prop_map(|(c, t)| GateOp::CX(c, t)),
        (prop::collection::vec(q.clone(), 0..3), q).prop_map(|(cs, t)| GateOp::Mcx(cs, t)),
    ]
}

fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (1_u32..=5).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_gate_op(num_qubits), 0..=12).prop_map(move |ops| {
            let mut circuit = Circuit::with_size("prop", num_qubits, 0);
            for op in ops {
                // Duplicate operands are rejected; the circuit stays unchanged.
                let _ = op.apply(&mut circuit);
            }
            circuit
        })
    })
}

proptest! {
    #[test]
    fn accepted_instructions_are_in_range(circuit in arb_circuit()) {
        prop_assert!(circuit.validate().is_ok());
        for inst in circuit.instructions() {
            for q in &inst.qubits {
                prop_assert!(q.index() < circuit.num_qubits());
            }
        }
    }

    #[test]
    fn depth_bounded_by_op_count(circuit in arb_circuit()) {
        prop_assert!(circuit.depth() <= circuit.num_ops());
    }

    #[test]
    fn draw_has_one_row_per_wire(circuit in arb_circuit()) {
        let drawing = circuit.draw();
        prop_assert_eq!(drawing.lines().count(), circuit.num_qubits() + circuit.num_clbits());
    }

    #[test]
    fn compose_onto_empty_reproduces_circuit(circuit in arb_circuit()) {
        #[allow(clippy::cast_possible_truncation)]
        let mut outer = Circuit::with_size(
            "outer",
            circuit.num_qubits() as u32,
            circuit.num_clbits() as u32,
        );
        outer.compose(&circuit).unwrap();
        prop_assert_eq!(outer, circuit);
    }
}
