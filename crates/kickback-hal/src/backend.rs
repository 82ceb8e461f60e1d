//! Backend trait and configuration.
//!
//! The [`Backend`] lifecycle is deliberately small:
//!
//! ```text
//!   capabilities() ──→ validate() ──→ run() ──→ ExecutionResult
//!    (sync, &ref)        (sync)       (sync, blocking)
//! ```
//!
//! A run blocks until every shot has executed. There is no job queue,
//! polling or cancellation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use kickback_ir::Circuit;

use crate::capability::Capabilities;
use crate::error::{HalError, HalResult};
use crate::result::ExecutionResult;

/// Configuration for a backend instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// Seed for the backend's random source. `None` draws from entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Upper bound on circuit width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_qubits: Option<u32>,
    /// Upper bound on shots per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_shots: Option<u32>,
    /// Additional configuration.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    /// Create a new backend configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> HalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the maximum number of qubits.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = Some(max_qubits);
        self
    }

    /// Set the maximum number of shots.
    #[must_use]
    pub fn with_max_shots(mut self, max_shots: u32) -> Self {
        self.max_shots = Some(max_shots);
        self
    }

    /// Add extra configuration.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Read an unsigned integer, preferring the typed field over `extra[key]`.
    ///
    /// Fails if the `extra` entry exists but is not a `u32`.
    pub fn u32_setting(&self, typed: Option<u32>, key: &str) -> HalResult<Option<u32>> {
        if typed.is_some() {
            return Ok(typed);
        }
        match self.extra.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .map(Some)
                .ok_or_else(|| {
                    HalError::Configuration(format!("'{key}' must be a u32, got {value}"))
                }),
        }
    }
}

/// Options for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    /// Number of shots.
    pub shots: u32,
    /// Record the outcome of every shot in order.
    pub memory: bool,
}

impl RunOptions {
    /// Run `shots` shots without per-shot memory.
    pub fn new(shots: u32) -> Self {
        Self {
            shots,
            memory: false,
        }
    }

    /// One shot with its outcome recorded.
    pub fn single_shot() -> Self {
        Self::new(1).with_memory()
    }

    /// Record per-shot outcomes.
    #[must_use]
    pub fn with_memory(mut self) -> Self {
        self.memory = true;
        self
    }
}

/// Trait for quantum backends.
///
/// - `capabilities()` is synchronous and infallible; implementations cache
///   it at construction time.
/// - `validate()` has a default implementation checking circuit width and
///   the shot range against `capabilities()`.
/// - `run()` blocks until all shots have executed.
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Check a circuit and run options against backend constraints.
    fn validate(&self, circuit: &Circuit, options: &RunOptions) -> HalResult<()> {
        let caps = self.capabilities();

        if circuit.num_qubits() > caps.num_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but {} only supports {}",
                circuit.num_qubits(),
                self.name(),
                caps.num_qubits
            )));
        }

        if options.shots == 0 || options.shots > caps.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{} shots requested, {} accepts 1..={}",
                options.shots,
                self.name(),
                caps.max_shots
            )));
        }

        circuit
            .validate()
            .map_err(|e| HalError::InvalidCircuit(e.to_string()))?;

        debug!(
            backend = self.name(),
            qubits = circuit.num_qubits(),
            shots = options.shots,
            "circuit validated"
        );
        Ok(())
    }

    /// Execute a circuit.
    fn run(&self, circuit: &Circuit, options: RunOptions) -> HalResult<ExecutionResult>;
}

/// Construct a backend from a [`BackendConfig`].
pub trait BackendFactory: Backend + Sized {
    /// Create a backend from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}
