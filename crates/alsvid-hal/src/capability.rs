//! Backend capability introspection.
//!
//! Describes what a backend can do: qubit count, supported gates, shot
//! limits. The transpiler uses this to decide whether a circuit can be
//! submitted as-is or needs a basis rewrite.

use serde::{Deserialize, Serialize};

/// Supported gate operations, OpenQASM 3 naming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateSet {
    gates: Vec<String>,
}

impl GateSet {
    /// Create a gate set from gate names.
    pub fn new(gates: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            gates: gates.into_iter().map(Into::into).collect(),
        }
    }

    /// Gate set accepting everything this IR can express.
    pub fn universal() -> Self {
        Self::new(["id", "x", "h", "sx", "rz", "cx", "cz"])
    }

    /// Typical superconducting-hardware basis set.
    pub fn hardware_basis() -> Self {
        Self::new(["id", "x", "sx", "rz", "cx"])
    }

    /// Check whether a gate name is supported.
    pub fn contains(&self, name: &str) -> bool {
        self.gates.iter().any(|g| g == name)
    }

    /// Iterate over the gate names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.gates.iter().map(String::as_str)
    }
}

/// Hardware capabilities of a quantum backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Supported gate set.
    pub gate_set: GateSet,
    /// Maximum number of shots per job.
    pub max_shots: u32,
    /// Whether this backend synthesizes results rather than running hardware.
    pub is_simulator: bool,
}

impl Capabilities {
    /// Capabilities of the synthetic uniform sampler.
    ///
    /// The sampler ignores gate semantics entirely, so it accepts the full
    /// gate alphabet and a generous qubit count.
    pub fn uniform(num_qubits: u32) -> Self {
        Self {
            name: "uniform".into(),
            num_qubits,
            gate_set: GateSet::universal(),
            max_shots: 1_000_000,
            is_simulator: true,
        }
    }

    /// Capabilities for a remote hardware backend.
    pub fn hardware(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            gate_set: GateSet::hardware_basis(),
            max_shots: 100_000,
            is_simulator: false,
        }
    }
}
