//! Bernstein-Vazirani oracles for a hidden bit-string.

use std::fmt;
use std::str::FromStr;

use kickback_hal::Backend;
use kickback_ir::{Circuit, QubitId};
use tracing::info;

use crate::compile::compile_circuit;
use crate::decision::run_single_shot;
use crate::error::{AlgoError, AlgoResult};

/// A secret bit-string, most significant character first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BvSecret {
    digits: String,
}

impl BvSecret {
    /// Number of bits.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Bit `i`, counted from the right.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn bit(&self, i: usize) -> bool {
        self.digits.as_bytes()[self.len() - 1 - i] == b'1'
    }

    /// The secret as written.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Build the oracle for `f(x) = s·x mod 2`.
    ///
    /// Qubit `i` carries bit `i` of `x` counted from the right; the ancilla
    /// is qubit `len`. Each set bit of the secret contributes one CX.
    #[allow(clippy::cast_possible_truncation)]
    pub fn circuit(&self) -> AlgoResult<Circuit> {
        let n = self.len() as u32;
        let ancilla = QubitId(n);
        let mut circuit = Circuit::with_size(format!("bv_oracle_{}", self.digits), n + 1, 0);
        for i in 0..n {
            if self.bit(i as usize) {
                circuit.cx(QubitId(i), ancilla)?;
            }
        }
        Ok(circuit)
    }
}

impl FromStr for BvSecret {
    type Err = AlgoError;

    fn from_str(s: &str) -> AlgoResult<Self> {
        if s.is_empty() {
            return Err(AlgoError::InvalidArgument(
                "secret must contain at least one bit".into(),
            ));
        }
        if let Some(bad) = s.chars().find(|c| !matches!(c, '0' | '1')) {
            return Err(AlgoError::InvalidArgument(format!(
                "secret must consist of '0' and '1', found {bad:?}"
            )));
        }
        Ok(Self {
            digits: s.to_string(),
        })
    }
}

impl fmt::Display for BvSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// Build the Bernstein-Vazirani oracle for `secret`.
pub fn bv_function(secret: &str) -> AlgoResult<Circuit> {
    secret.parse::<BvSecret>()?.circuit()
}

/// Recover `secret` with a single query.
///
/// Builds the oracle, compiles it, runs one shot and returns the measured
/// bit-string.
pub fn bv_algorithm<B: Backend + ?Sized>(secret: &str, backend: &B) -> AlgoResult<String> {
    let oracle = bv_function(secret)?;
    let compiled = compile_circuit(&oracle)?;
    let measured = run_single_shot(backend, &compiled)?;
    info!(secret, measured = %measured, "Bernstein-Vazirani run complete");
    Ok(measured)
}
