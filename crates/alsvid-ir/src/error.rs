//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not found in circuit.
    #[error("Qubit {qubit} not found in circuit of {num_qubits} qubits")]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: u32,
    },

    /// Classical bit not found in circuit.
    #[error("Classical bit {clbit} not found in circuit of {num_clbits} classical bits")]
    ClbitNotFound {
        /// The classical bit that was not found.
        clbit: ClbitId,
        /// Number of classical bits in the circuit.
        num_clbits: u32,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in '{gate_name}'")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the gate.
        gate_name: String,
    },

    /// Instruction operand count disagrees with the gate arity.
    #[error("Gate '{gate_name}' takes {expected} qubit(s) but instruction has {actual}")]
    ArityMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Qubits the gate acts on.
        expected: u32,
        /// Qubits the instruction carries.
        actual: usize,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
