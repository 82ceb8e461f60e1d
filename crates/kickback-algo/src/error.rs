//! Error types for oracle construction and algorithm runs.

use kickback_hal::HalError;
use kickback_ir::IrError;
use thiserror::Error;

/// Errors that can occur while building or running an oracle algorithm.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AlgoError {
    /// A caller-supplied value is outside what the builder accepts.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Circuit construction failed.
    #[error("Circuit error: {0}")]
    Ir(#[from] IrError),

    /// The backend could not produce an outcome.
    #[error("Execution error: {0}")]
    Execution(#[from] HalError),
}

/// Result type for algorithm operations.
pub type AlgoResult<T> = Result<T, AlgoError>;
