//! Alsvid Transpiler
//!
//! Adapts a circuit to a target backend's capabilities. The pass is
//! deliberately small: a qubit-count check and a basis rewrite that
//! decomposes gates the backend does not natively support.
//!
//! # Example
//!
//! ```rust
//! use alsvid_compile::transpile;
//! use alsvid_hal::Capabilities;
//! use alsvid_ir::Circuit;
//!
//! let circuit = Circuit::bell().unwrap();
//! let caps = Capabilities::hardware("aurora_7", 127);
//!
//! // H is not in the hardware basis; it gets rewritten to rz/sx/rz.
//! let adapted = transpile(&circuit, &caps).unwrap();
//! assert!(adapted.gates().all(|g| caps.gate_set.contains(g.name())));
//! ```

pub mod error;

pub use error::{CompileError, CompileResult};

use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use alsvid_hal::Capabilities;
use alsvid_ir::{Circuit, InstructionKind, StandardGate};

/// Adapt a circuit to a backend's capabilities.
///
/// Gates already in the backend gate set pass through unchanged.
/// `H` is decomposed into `rz(π/2) · sx · rz(π/2)` (up to global phase)
/// when the target supports `rz` and `sx`. Any other unsupported gate
/// is an error rather than a silent drop.
pub fn transpile(circuit: &Circuit, caps: &Capabilities) -> CompileResult<Circuit> {
    if circuit.num_qubits() > caps.num_qubits as usize {
        return Err(CompileError::TooManyQubits {
            required: circuit.num_qubits(),
            available: caps.num_qubits as usize,
        });
    }

    let mut adapted = Circuit::with_size(
        circuit.name(),
        circuit.num_qubits() as u32,
        circuit.num_clbits() as u32,
    );

    let mut rewritten = 0usize;

    for inst in circuit.instructions() {
        match &inst.kind {
            InstructionKind::Gate(gate) if !caps.gate_set.contains(gate.name()) => {
                match gate {
                    StandardGate::H
                        if caps.gate_set.contains("rz") && caps.gate_set.contains("sx") =>
                    {
                        let q = inst.qubits[0];
                        adapted.rz(FRAC_PI_2, q)?;
                        adapted.sx(q)?;
                        adapted.rz(FRAC_PI_2, q)?;
                        rewritten += 1;
                    }
                    _ => {
                        return Err(CompileError::UnsupportedGate {
                            gate: gate.name().to_string(),
                            backend: caps.name.clone(),
                        });
                    }
                }
            }
            _ => {
                adapted.push(inst.clone())?;
            }
        }
    }

    debug!(
        circuit = circuit.name(),
        backend = %caps.name,
        rewritten,
        "transpiled circuit"
    );

    Ok(adapted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_ir::QubitId;

    #[test]
    fn test_passthrough_on_universal_set() {
        let circuit = Circuit::bell().unwrap();
        let caps = Capabilities::uniform(16);

        let adapted = transpile(&circuit, &caps).unwrap();
        assert_eq!(adapted, circuit);
    }

    #[test]
    fn test_h_decomposition_for_hardware_basis() {
        let circuit = Circuit::bell().unwrap();
        let caps = Capabilities::hardware("aurora_7", 127);

        let adapted = transpile(&circuit, &caps).unwrap();

        // One H becomes rz/sx/rz; CX and the measurements survive.
        let gates: Vec<_> = adapted.gates().map(StandardGate::name).collect();
        assert_eq!(gates, vec!["rz", "sx", "rz", "cx"]);
        assert_eq!(adapted.num_measurements(), 2);
        assert!(adapted.gates().all(|g| caps.gate_set.contains(g.name())));
    }

    #[test]
    fn test_too_many_qubits() {
        let circuit = Circuit::ghz(8).unwrap();
        let caps = Capabilities::hardware("tiny", 4);

        let err = transpile(&circuit, &caps).unwrap_err();
        assert!(matches!(err, CompileError::TooManyQubits { .. }));
    }

    #[test]
    fn test_unsupported_gate_is_an_error() {
        let mut circuit = Circuit::with_size("cz_test", 2, 0);
        circuit.cz(QubitId(0), QubitId(1)).unwrap();

        // Hardware basis has no cz and no decomposition rule for it.
        let caps = Capabilities::hardware("aurora_7", 127);
        let err = transpile(&circuit, &caps).unwrap_err();
        assert!(matches!(err, CompileError::UnsupportedGate { .. }));
    }
}
