//! Kickback Oracle Algorithms
//!
//! Single-query algorithms built on phase kickback:
//! - **Deutsch**: decide whether one of the four one-bit functions is
//!   constant or balanced ([`deutsch_function`])
//! - **Deutsch-Jozsa**: the same decision for a random `n`-bit function
//!   that is promised to be constant or balanced ([`DjOracle`])
//! - **Bernstein-Vazirani**: recover a hidden string `s` from
//!   `f(x) = s·x mod 2` ([`bv_function`], [`bv_algorithm`])
//!
//! Every oracle is a [`Circuit`](kickback_ir::Circuit) on `n` input qubits
//! plus one ancilla (the last qubit). [`compile_circuit`] wraps an oracle in
//! the query circuit and [`dj_algorithm`] runs it once on any
//! [`Backend`](kickback_hal::Backend) and labels the outcome.
//!
//! # Example
//!
//! ```rust
//! use kickback_adapter_sim::SimulatorBackend;
//! use kickback_algo::{FunctionClass, bv_algorithm, deutsch_function, dj_algorithm};
//!
//! let backend = SimulatorBackend::with_seed(7);
//!
//! let oracle = deutsch_function(3).unwrap();
//! assert_eq!(dj_algorithm(&oracle, &backend).unwrap(), FunctionClass::Balanced);
//!
//! assert_eq!(bv_algorithm("1001", &backend).unwrap(), "1001");
//! ```

pub mod bernstein_vazirani;
pub mod compile;
pub mod decision;
pub mod deutsch;
pub mod deutsch_jozsa;
pub mod error;

pub use bernstein_vazirani::{BvSecret, bv_algorithm, bv_function};
pub use compile::compile_circuit;
pub use decision::{FunctionClass, classify, dj_algorithm, run_single_shot};
pub use deutsch::{DeutschCase, deutsch_function};
pub use deutsch_jozsa::{DjOracle, MAX_INPUTS, dj_function, with_pattern_flipped};
pub use error::{AlgoError, AlgoResult};
