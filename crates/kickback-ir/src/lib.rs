//! Kickback Circuit Representation
//!
//! This crate provides the data structures every other Kickback crate works
//! on: qubit and classical-bit indices, the gate set used by phase-kickback
//! oracles, instructions, and the [`Circuit`] builder.
//!
//! # Overview
//!
//! A [`Circuit`] is an ordered list of [`Instruction`]s over a fixed number
//! of qubits and classical bits. Every operand is checked when the
//! instruction is appended, so a circuit that exists is always well formed.
//! Circuits can be composed structurally with [`Circuit::compose`] and
//! rendered as text with [`Circuit::draw`].
//!
//! # Example: A Deutsch oracle
//!
//! ```rust
//! use kickback_ir::{Circuit, QubitId};
//!
//! // f(x) = NOT x on one input qubit plus one ancilla
//! let mut oracle = Circuit::with_size("deutsch", 2, 0);
//! oracle.cx(QubitId(0), QubitId(1)).unwrap();
//! oracle.x(QubitId(1)).unwrap();
//!
//! assert_eq!(oracle.num_qubits(), 2);
//! assert_eq!(oracle.depth(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `I` | 1 | Identity |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `H` | 1 | Hadamard gate |
//! | `S`, `Sdg` | 1 | S and S-dagger gates |
//! | `T`, `Tdg` | 1 | T and T-dagger gates |
//! | `CX` | 2 | Controlled-NOT (CNOT) |
//! | `CZ` | 2 | Controlled-Z |
//! | `Swap` | 2 | SWAP gate |
//! | `CCX` | 3 | Toffoli (CCNOT) gate |
//! | `Mcx` | k+1 | X on the last operand controlled by the first k |

pub mod circuit;
pub mod draw;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
