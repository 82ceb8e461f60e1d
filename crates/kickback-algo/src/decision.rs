//! Decision procedure: run once, read the inputs, label the function.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use kickback_hal::{Backend, HalError, RunOptions};
use kickback_ir::Circuit;

use crate::compile::compile_circuit;
use crate::error::AlgoResult;

/// The two function classes the promise allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionClass {
    /// Same output for every input.
    Constant,
    /// Outputs 0 on exactly half the inputs.
    Balanced,
}

impl fmt::Display for FunctionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionClass::Constant => write!(f, "constant"),
            FunctionClass::Balanced => write!(f, "balanced"),
        }
    }
}

/// Label a measured input register.
///
/// All zeros (or no bits at all) means constant; anything else balanced.
pub fn classify(bits: &str) -> FunctionClass {
    if bits.chars().all(|c| c == '0') {
        FunctionClass::Constant
    } else {
        FunctionClass::Balanced
    }
}

/// Run `circuit` for exactly one shot and return its outcome.
pub fn run_single_shot<B: Backend + ?Sized>(backend: &B, circuit: &Circuit) -> AlgoResult<String> {
    let result = backend.run(circuit, RunOptions::single_shot())?;
    let outcome = result
        .get_memory()?
        .first()
        .cloned()
        .ok_or(HalError::EmptyResult)?;
    Ok(outcome)
}

/// Decide whether the oracle `function` is constant or balanced.
///
/// The oracle must act on `n` inputs plus a final ancilla and satisfy the
/// constant-or-balanced promise; for other functions the label is
/// meaningless.
#[instrument(skip(function, backend), fields(oracle = function.name(), backend = backend.name()))]
pub fn dj_algorithm<B: Backend + ?Sized>(
    function: &Circuit,
    backend: &B,
) -> AlgoResult<FunctionClass> {
    let compiled = compile_circuit(function)?;
    debug!(
        "Compiled oracle: {} qubits, {} ops",
        compiled.num_qubits(),
        compiled.num_ops()
    );

    let bits = run_single_shot(backend, &compiled)?;
    debug!("Measured inputs: {:?}", bits);

    let class = classify(&bits);
    info!("Function is {}", class);
    Ok(class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kickback_hal::{Capabilities, Counts, ExecutionResult, HalResult};

    /// Backend that returns a fixed memory.
    struct Canned {
        capabilities: Capabilities,
        memory: Vec<String>,
    }

    impl Canned {
        fn new(memory: &[&str]) -> Self {
            Self {
                capabilities: Capabilities::simulator(8),
                memory: memory.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl Backend for Canned {
        fn name(&self) -> &str {
            "canned"
        }

        fn capabilities(&self) -> &Capabilities {
            &self.capabilities
        }

        fn run(&self, _circuit: &Circuit, options: RunOptions) -> HalResult<ExecutionResult> {
            let mut counts = Counts::new();
            for m in &self.memory {
                counts.insert(m.clone(), 1);
            }
            Ok(ExecutionResult::new(counts, options.shots).with_memory(self.memory.clone()))
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("000"), FunctionClass::Constant);
        assert_eq!(classify(""), FunctionClass::Constant);
        assert_eq!(classify("010"), FunctionClass::Balanced);
        assert_eq!(classify("1"), FunctionClass::Balanced);
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(FunctionClass::Constant.to_string(), "constant");
        assert_eq!(FunctionClass::Balanced.to_string(), "balanced");
        assert_eq!(
            serde_json::to_string(&FunctionClass::Balanced).unwrap(),
            "\"balanced\""
        );
    }

    #[test]
    fn test_single_shot_takes_first_outcome() {
        let backend = Canned::new(&["101", "000"]);
        let circuit = Circuit::with_size("c", 3, 3);
        assert_eq!(run_single_shot(&backend, &circuit).unwrap(), "101");
    }

    #[test]
    fn test_empty_memory_is_an_error() {
        let backend = Canned::new(&[]);
        let circuit = Circuit::with_size("c", 1, 1);
        let err = run_single_shot(&backend, &circuit).unwrap_err();
        assert!(matches!(
            err,
            crate::AlgoError::Execution(HalError::EmptyResult)
        ));
    }

    #[test]
    fn test_dj_algorithm_labels_canned_outcome() {
        let oracle = Circuit::with_size("f", 3, 0);
        let backend = Canned::new(&["01"]);
        assert_eq!(
            dj_algorithm(&oracle, &backend).unwrap(),
            FunctionClass::Balanced
        );
    }
}
