//! Error types for the transpiler.

use thiserror::Error;

use alsvid_ir::IrError;

/// Errors that can occur during transpilation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Circuit needs more qubits than the backend has.
    #[error("Circuit requires {required} qubits but backend only has {available}")]
    TooManyQubits {
        /// Qubits needed.
        required: usize,
        /// Qubits available.
        available: usize,
    },

    /// Gate with no decomposition rule for the target basis.
    #[error("Gate '{gate}' is not supported by backend '{backend}'")]
    UnsupportedGate {
        /// Name of the gate.
        gate: String,
        /// Name of the backend.
        backend: String,
    },

    /// Rewrite produced an invalid circuit.
    #[error("IR error during rewrite: {0}")]
    Ir(#[from] IrError),
}

impl From<CompileError> for alsvid_hal::HalError {
    fn from(e: CompileError) -> Self {
        match e {
            CompileError::TooManyQubits { .. } => {
                alsvid_hal::HalError::CircuitTooLarge(e.to_string())
            }
            CompileError::UnsupportedGate { .. } => {
                alsvid_hal::HalError::Unsupported(e.to_string())
            }
            CompileError::Ir(_) => alsvid_hal::HalError::InvalidCircuit(e.to_string()),
        }
    }
}

/// Result type for transpilation.
pub type CompileResult<T> = Result<T, CompileError>;
