//! Quantum gate alphabet.

use serde::{Deserialize, Serialize};

/// Standard gates with known arity.
///
/// Names follow the OpenQASM 3 convention, which is also what backend
/// capability descriptors use for their gate sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Hadamard gate.
    H,
    /// sqrt(X) gate.
    SX,
    /// Rotation around the Z axis by a fixed angle (radians).
    Rz(f64),
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
}

impl StandardGate {
    /// OpenQASM 3 name of the gate.
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::H => "h",
            StandardGate::SX => "sx",
            StandardGate::Rz(_) => "rz",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
        }
    }

    /// Number of qubits the gate acts on.
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::H
            | StandardGate::SX
            | StandardGate::Rz(_) => 1,
            StandardGate::CX | StandardGate::CZ => 2,
        }
    }
}
