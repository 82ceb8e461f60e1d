//! Deutsch oracles: the four one-bit functions.

use std::fmt;

use kickback_ir::{Circuit, QubitId};

use crate::decision::FunctionClass;
use crate::error::{AlgoError, AlgoResult};

const INPUT: QubitId = QubitId(0);
const ANCILLA: QubitId = QubitId(1);

/// One of the four functions `f: {0,1} → {0,1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DeutschCase {
    /// f(x) = 0
    ConstantZero = 1,
    /// f(x) = x
    Identity = 2,
    /// f(x) = NOT x
    Negation = 3,
    /// f(x) = 1
    ConstantOne = 4,
}

impl DeutschCase {
    /// All cases in selector order.
    pub const ALL: [DeutschCase; 4] = [
        DeutschCase::ConstantZero,
        DeutschCase::Identity,
        DeutschCase::Negation,
        DeutschCase::ConstantOne,
    ];

    /// The numeric selector (1 to 4).
    pub fn selector(self) -> u8 {
        self as u8
    }

    /// Whether this function is constant or balanced.
    pub fn class(self) -> FunctionClass {
        match self {
            DeutschCase::ConstantZero | DeutschCase::ConstantOne => FunctionClass::Constant,
            DeutschCase::Identity | DeutschCase::Negation => FunctionClass::Balanced,
        }
    }

    /// Evaluate the function classically.
    pub fn evaluate(self, x: bool) -> bool {
        match self {
            DeutschCase::ConstantZero => false,
            DeutschCase::Identity => x,
            DeutschCase::Negation => !x,
            DeutschCase::ConstantOne => true,
        }
    }

    /// Build the two-qubit oracle `|x, y⟩ → |x, y ⊕ f(x)⟩`.
    pub fn circuit(self) -> AlgoResult<Circuit> {
        let mut circuit = Circuit::with_size(format!("deutsch_case_{}", self.selector()), 2, 0);
        match self {
            DeutschCase::ConstantZero => {}
            DeutschCase::Identity => {
                circuit.cx(INPUT, ANCILLA)?;
            }
            DeutschCase::Negation => {
                circuit.cx(INPUT, ANCILLA)?.x(ANCILLA)?;
            }
            DeutschCase::ConstantOne => {
                circuit.x(ANCILLA)?;
            }
        }
        Ok(circuit)
    }
}

impl TryFrom<u8> for DeutschCase {
    type Error = AlgoError;

    fn try_from(case: u8) -> AlgoResult<Self> {
        match case {
            1 => Ok(DeutschCase::ConstantZero),
            2 => Ok(DeutschCase::Identity),
            3 => Ok(DeutschCase::Negation),
            4 => Ok(DeutschCase::ConstantOne),
            other => Err(AlgoError::InvalidArgument(format!(
                "Deutsch case must be 1, 2, 3 or 4, got {other}"
            ))),
        }
    }
}

impl fmt::Display for DeutschCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self {
            DeutschCase::ConstantZero => "f(x) = 0",
            DeutschCase::Identity => "f(x) = x",
            DeutschCase::Negation => "f(x) = NOT x",
            DeutschCase::ConstantOne => "f(x) = 1",
        };
        write!(f, "case {} ({desc})", self.selector())
    }
}

/// Build the Deutsch oracle for case selector `case` (1 to 4).
pub fn deutsch_function(case: u8) -> AlgoResult<Circuit> {
    DeutschCase::try_from(case)?.circuit()
}
