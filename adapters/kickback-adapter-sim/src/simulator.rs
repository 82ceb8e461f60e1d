//! Simulator backend implementation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Mutex;
use std::time::Instant;
use tracing::{debug, instrument};

use kickback_hal::{
    Backend, BackendConfig, BackendFactory, Capabilities, Counts, ExecutionResult, HalError,
    HalResult, RunOptions,
};
use kickback_ir::{Circuit, InstructionKind};

use crate::statevector::Statevector;

const DEFAULT_MAX_QUBITS: u32 = 20;

/// Widest circuit the statevector can address (2^30 amplitudes, 16 GiB).
pub const MAX_SIMULATOR_QUBITS: u32 = 30;

/// Local simulator backend.
///
/// Every shot starts from |0…0⟩ and applies the circuit's instructions in
/// order. Measurements collapse the state and write the classical register;
/// bits never written stay 0.
pub struct SimulatorBackend {
    /// Backend configuration.
    config: BackendConfig,
    /// Cached capabilities.
    capabilities: Capabilities,
    /// Random source for measurement sampling.
    rng: Mutex<StdRng>,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::build(
            BackendConfig::new("simulator"),
            DEFAULT_MAX_QUBITS,
            Capabilities::SIMULATOR_MAX_SHOTS,
        )
    }

    /// Create a simulator whose sampling is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(
            BackendConfig::new("simulator").with_seed(seed),
            DEFAULT_MAX_QUBITS,
            Capabilities::SIMULATOR_MAX_SHOTS,
        )
    }

    /// Create a simulator with custom max qubits, capped at [`MAX_SIMULATOR_QUBITS`].
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        let max_qubits = max_qubits.min(MAX_SIMULATOR_QUBITS);
        Self::build(
            BackendConfig::new("simulator").with_max_qubits(max_qubits),
            max_qubits,
            Capabilities::SIMULATOR_MAX_SHOTS,
        )
    }

    fn build(config: BackendConfig, max_qubits: u32, max_shots: u32) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut capabilities = Capabilities::simulator(max_qubits).with_max_shots(max_shots);
        capabilities.name.clone_from(&config.name);
        Self {
            config,
            capabilities,
            rng: Mutex::new(rng),
        }
    }

    /// Get the configuration this backend was built from.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Run one shot and return its classical register, index 0 first.
    fn run_shot(&self, circuit: &Circuit, rng: &mut StdRng) -> Vec<bool> {
        let mut sv = Statevector::new(circuit.num_qubits());
        let mut clbits = vec![false; circuit.num_clbits()];

        for inst in circuit.instructions() {
            match inst.kind {
                InstructionKind::Gate(gate) => sv.apply_gate(gate, &inst.qubits),
                InstructionKind::Measure => {
                    for (qubit, clbit) in inst.qubits.iter().zip(&inst.clbits) {
                        clbits[clbit.index()] = sv.measure(qubit.index(), rng);
                    }
                }
                InstructionKind::Barrier => {}
            }
        }

        clbits
    }

    /// Run simulation synchronously.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    fn run_simulation(&self, circuit: &Circuit, options: RunOptions) -> ExecutionResult {
        let start = Instant::now();

        debug!(
            "Starting simulation: {} qubits, {} shots",
            circuit.num_qubits(),
            options.shots
        );
        debug!("Circuit has {} instructions", circuit.instructions().len());

        let mut counts = Counts::new();
        let mut memory = options
            .memory
            .then(|| Vec::with_capacity(options.shots as usize));

        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        for shot in 0..options.shots {
            let clbits = self.run_shot(circuit, &mut rng);
            let bitstring = outcome_to_bitstring(&clbits);
            counts.insert(bitstring.clone(), 1);
            if let Some(memory) = memory.as_mut() {
                memory.push(bitstring);
            }

            if shot > 0 && shot % 1000 == 0 {
                debug!("Completed {} shots", shot);
            }
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        #[allow(clippy::cast_possible_truncation)]
        let result = ExecutionResult::new(counts, options.shots)
            .with_execution_time(elapsed.as_millis() as u64);
        match memory {
            Some(memory) => result.with_memory(memory),
            None => result,
        }
    }
}

/// Render a classical register with the highest index first.
fn outcome_to_bitstring(clbits: &[bool]) -> String {
    clbits
        .iter()
        .rev()
        .map(|&b| if b { '1' } else { '0' })
        .collect()
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn run(&self, circuit: &Circuit, options: RunOptions) -> HalResult<ExecutionResult> {
        self.validate(circuit, &options)?;
        Ok(self.run_simulation(circuit, options))
    }
}

impl BackendFactory for SimulatorBackend {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = config
            .u32_setting(config.max_qubits, "max_qubits")?
            .unwrap_or(DEFAULT_MAX_QUBITS);
        if max_qubits > MAX_SIMULATOR_QUBITS {
            return Err(HalError::Configuration(format!(
                "max_qubits {max_qubits} exceeds the simulator limit of {MAX_SIMULATOR_QUBITS}"
            )));
        }
        let max_shots = config
            .u32_setting(config.max_shots, "max_shots")?
            .unwrap_or(Capabilities::SIMULATOR_MAX_SHOTS);
        Ok(Self::build(config, max_qubits, max_shots))
    }
}
