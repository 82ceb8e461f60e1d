//! Deutsch-Jozsa oracles over `n` input bits.
//!
//! A [`DjOracle`] describes a function `f: {0,1}^n → {0,1}` that is either
//! constant or balanced. The descriptor is fixed once built; its
//! [`circuit`](DjOracle::circuit) realizes `|x, y⟩ → |x, y ⊕ f(x)⟩` on `n`
//! input qubits plus one ancilla (qubit `n`).
//!
//! A balanced oracle marks each of its on-states with a multi-controlled X
//! on the ancilla, sandwiched between X layers that map the on-state to
//! `|1…1⟩`:
//!
//! ```text
//! q0: ─░──X──■──X──░──■──░──
//! q1: ─░──X──■──X──░──■──░──
//! q2: ─░─────⊕─────░──⊕──░──
//! ```

use rand::Rng;
use rand::seq::index;
use rustc_hash::FxHashSet;

use kickback_ir::{Circuit, QubitId};

use crate::decision::FunctionClass;
use crate::error::{AlgoError, AlgoResult};

/// Largest supported number of input bits.
pub const MAX_INPUTS: u32 = 24;

/// Immutable description of a Deutsch-Jozsa oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DjOracle {
    num_inputs: u32,
    flip_output: bool,
    on_states: Option<Vec<u64>>,
}

impl DjOracle {
    /// Draw a random oracle.
    ///
    /// The output is inverted with probability 1/2. Independently, the
    /// function is constant with probability 1/2; otherwise exactly half of
    /// the `2^n` inputs are chosen, without replacement, to map to 1.
    /// With no inputs there is nothing to split, so the oracle is constant.
    pub fn random<R: Rng + ?Sized>(num_inputs: u32, rng: &mut R) -> AlgoResult<Self> {
        check_num_inputs(num_inputs)?;
        let flip_output = rng.gen_bool(0.5);
        let constant = rng.gen_bool(0.5);

        let half = half_of(num_inputs);
        if constant || half == 0 {
            return Ok(Self::new_constant(num_inputs, flip_output));
        }

        let on_states = index::sample(rng, half * 2, half)
            .into_iter()
            .map(|i| i as u64)
            .collect();
        Ok(Self {
            num_inputs,
            flip_output,
            on_states: Some(on_states),
        })
    }

    /// A constant oracle: `f(x) = flip_output` for every `x`.
    pub fn constant(num_inputs: u32, flip_output: bool) -> AlgoResult<Self> {
        check_num_inputs(num_inputs)?;
        Ok(Self::new_constant(num_inputs, flip_output))
    }

    /// A balanced oracle mapping exactly `on_states` to `!flip_output`.
    ///
    /// `on_states` must hold `2^n / 2` distinct values below `2^n`.
    pub fn balanced(num_inputs: u32, flip_output: bool, on_states: Vec<u64>) -> AlgoResult<Self> {
        check_num_inputs(num_inputs)?;
        let half = half_of(num_inputs);
        if half == 0 {
            return Err(AlgoError::InvalidArgument(
                "a balanced oracle needs at least one input bit".into(),
            ));
        }
        if on_states.len() != half {
            return Err(AlgoError::InvalidArgument(format!(
                "balanced oracle over {num_inputs} inputs needs {half} on-states, got {}",
                on_states.len()
            )));
        }

        let limit = 1u64 << num_inputs;
        let mut seen = FxHashSet::default();
        for &state in &on_states {
            if state >= limit {
                return Err(AlgoError::InvalidArgument(format!(
                    "on-state {state} does not fit in {num_inputs} bits"
                )));
            }
            if !seen.insert(state) {
                return Err(AlgoError::InvalidArgument(format!(
                    "on-state {state} listed twice"
                )));
            }
        }

        Ok(Self {
            num_inputs,
            flip_output,
            on_states: Some(on_states),
        })
    }

    fn new_constant(num_inputs: u32, flip_output: bool) -> Self {
        Self {
            num_inputs,
            flip_output,
            on_states: None,
        }
    }

    /// Number of input bits.
    pub fn num_inputs(&self) -> u32 {
        self.num_inputs
    }

    /// Whether the output is inverted.
    pub fn flip_output(&self) -> bool {
        self.flip_output
    }

    /// The marked inputs, in the order their gates are emitted. `None` for constant oracles.
    pub fn on_states(&self) -> Option<&[u64]> {
        self.on_states.as_deref()
    }

    /// Whether the function is constant or balanced.
    pub fn class(&self) -> FunctionClass {
        match self.on_states {
            Some(_) => FunctionClass::Balanced,
            None => FunctionClass::Constant,
        }
    }

    /// Evaluate `f(x)` classically. Bit `i` of `x` is input qubit `i`.
    pub fn evaluate(&self, x: u64) -> bool {
        let marked = self
            .on_states
            .as_ref()
            .is_some_and(|states| states.contains(&x));
        marked ^ self.flip_output
    }

    /// Build the oracle circuit on `n + 1` qubits.
    pub fn circuit(&self) -> AlgoResult<Circuit> {
        let n = self.num_inputs;
        let ancilla = QubitId(n);
        let mut circuit = Circuit::with_size(format!("dj_oracle_{n}"), n + 1, 0);

        if self.flip_output {
            circuit.x(ancilla)?;
        }

        if let Some(states) = &self.on_states {
            let inputs: Vec<QubitId> = (0..n).map(QubitId).collect();
            for &state in states {
                circuit.barrier_all()?;
                with_pattern_flipped(&mut circuit, &inputs, state, |c| {
                    c.mcx(inputs.iter().copied(), ancilla)?;
                    Ok(())
                })?;
            }
            circuit.barrier_all()?;
        }

        Ok(circuit)
    }
}

/// Run `action` with `pattern` mapped onto the all-ones state of `inputs`.
///
/// X is applied to every input whose bit in `pattern` is 0 (bit `i` belongs
/// to `inputs[i]`), then `action`, then the same X layer again. The two
/// layers cancel, so only the action's effect remains.
pub fn with_pattern_flipped<F>(
    circuit: &mut Circuit,
    inputs: &[QubitId],
    pattern: u64,
    action: F,
) -> AlgoResult<()>
where
    F: FnOnce(&mut Circuit) -> AlgoResult<()>,
{
    let flipped: Vec<QubitId> = inputs
        .iter()
        .enumerate()
        .filter(|&(i, _)| (pattern >> i) & 1 == 0)
        .map(|(_, &q)| q)
        .collect();

    circuit.x_all(flipped.iter().copied())?;
    action(circuit)?;
    circuit.x_all(flipped)?;
    Ok(())
}

/// Build a random Deutsch-Jozsa oracle circuit over `num_inputs` bits.
pub fn dj_function<R: Rng + ?Sized>(num_inputs: u32, rng: &mut R) -> AlgoResult<Circuit> {
    DjOracle::random(num_inputs, rng)?.circuit()
}

fn check_num_inputs(num_inputs: u32) -> AlgoResult<()> {
    if num_inputs > MAX_INPUTS {
        return Err(AlgoError::InvalidArgument(format!(
            "at most {MAX_INPUTS} input bits are supported, got {num_inputs}"
        )));
    }
    Ok(())
}

fn half_of(num_inputs: u32) -> usize {
    (1usize << num_inputs) / 2
}
