//! Kickback Local Statevector Simulator
//!
//! This crate provides the local simulator every Kickback algorithm runs
//! on. It keeps the full statevector, so results are exact up to sampling,
//! and it is limited to roughly 20-25 qubits.
//!
//! # Features
//!
//! - **Exact Simulation**: Full statevector representation
//! - **All Kickback Gates**: Including multi-controlled X over any number of controls
//! - **Projective Measurement**: Measurements collapse the state and write classical bits
//! - **Replayable Sampling**: Seed the random source through [`kickback_hal::BackendConfig`]
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//! | 25 | ~512 MB | Slow |
//!
//! # Example
//!
//! ```rust
//! use kickback_adapter_sim::SimulatorBackend;
//! use kickback_hal::{Backend, RunOptions};
//! use kickback_ir::{Circuit, ClbitId, QubitId};
//!
//! let mut circuit = Circuit::with_size("flip", 2, 2);
//! circuit.x(QubitId(1)).unwrap();
//! circuit.measure(QubitId(0), ClbitId(0)).unwrap();
//! circuit.measure(QubitId(1), ClbitId(1)).unwrap();
//!
//! let backend = SimulatorBackend::with_seed(42);
//! let result = backend.run(&circuit, RunOptions::new(100)).unwrap();
//!
//! // Most significant classical bit first
//! assert_eq!(result.counts.get("10"), 100);
//! ```

mod simulator;
mod statevector;

pub use simulator::{MAX_SIMULATOR_QUBITS, SimulatorBackend};
pub use statevector::Statevector;
