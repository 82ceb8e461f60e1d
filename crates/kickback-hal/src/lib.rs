//! Kickback Backend Abstraction Layer
//!
//! This crate defines how circuits are executed without tying callers to a
//! particular simulator:
//! - A common [`Backend`] trait for synchronous execution
//! - [`Capabilities`] to describe size limits
//! - [`BackendConfig`] for construction through [`BackendFactory`]
//! - Unified result handling via [`ExecutionResult`] and [`Counts`]
//!
//! # Example: Running a Circuit
//!
//! ```ignore
//! use kickback_adapter_sim::SimulatorBackend;
//! use kickback_hal::{Backend, RunOptions};
//! use kickback_ir::{Circuit, ClbitId, QubitId};
//!
//! let mut circuit = Circuit::with_size("flip", 1, 1);
//! circuit.x(QubitId(0))?.measure(QubitId(0), ClbitId(0))?;
//!
//! let backend = SimulatorBackend::new();
//! let result = backend.run(&circuit, RunOptions::single_shot())?;
//! assert_eq!(result.get_memory()?, ["1"]);
//! ```
//!
//! # Bit-string convention
//!
//! Every outcome string has one character per classical bit, most
//! significant classical bit first: `c[n-1] … c[1] c[0]`.

pub mod backend;
pub mod capability;
pub mod error;
pub mod result;

pub use backend::{Backend, BackendConfig, BackendFactory, RunOptions};
pub use capability::Capabilities;
pub use error::{HalError, HalResult};
pub use result::{Counts, ExecutionResult};
