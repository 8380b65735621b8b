//! High-level circuit builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit.
///
/// Instructions are kept in insertion order. There is no optimization or
/// scheduling machinery here; backends and the transpiler consume the
/// instruction list as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// Number of classical bits.
    num_clbits: u32,
    /// Instructions in program order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            instructions: vec![],
        }
    }

    fn check_qubit(&self, qubit: QubitId) -> IrResult<()> {
        if qubit.0 >= self.num_qubits {
            return Err(IrError::QubitNotFound {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    fn check_clbit(&self, clbit: ClbitId) -> IrResult<()> {
        if clbit.0 >= self.num_clbits {
            return Err(IrError::ClbitNotFound {
                clbit,
                num_clbits: self.num_clbits,
            });
        }
        Ok(())
    }

    fn apply_single(&mut self, gate: StandardGate, qubit: QubitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit)?;
        self.instructions
            .push(Instruction::single_qubit_gate(gate, qubit));
        Ok(self)
    }

    fn apply_two(
        &mut self,
        gate: StandardGate,
        q1: QubitId,
        q2: QubitId,
    ) -> IrResult<&mut Self> {
        self.check_qubit(q1)?;
        self.check_qubit(q2)?;
        if q1 == q2 {
            return Err(IrError::DuplicateQubit {
                qubit: q1,
                gate_name: gate.name().to_string(),
            });
        }
        self.instructions
            .push(Instruction::two_qubit_gate(gate, q1, q2));
        Ok(self)
    }

    // =========================================================================
    // Gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::H, qubit)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::X, qubit)
    }

    /// Apply sqrt(X) gate.
    pub fn sx(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::SX, qubit)
    }

    /// Apply Z rotation by `angle` radians.
    pub fn rz(&mut self, angle: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::Rz(angle), qubit)
    }

    /// Apply CNOT gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply_two(StandardGate::CX, control, target)
    }

    /// Apply controlled-Z gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply_two(StandardGate::CZ, control, target)
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit)?;
        self.check_clbit(clbit)?;
        self.instructions.push(Instruction::measure(qubit, clbit));
        Ok(self)
    }

    /// Measure all qubits to corresponding classical bits.
    ///
    /// Grows the classical register if it is smaller than the qubit count.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        if self.num_clbits < self.num_qubits {
            self.num_clbits = self.num_qubits;
        }
        for i in 0..self.num_qubits {
            self.instructions
                .push(Instruction::measure(QubitId(i), ClbitId(i)));
        }
        Ok(self)
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits = (0..self.num_qubits).map(QubitId);
        self.instructions.push(Instruction::barrier(qubits));
        Ok(self)
    }

    /// Push an already-built instruction, validating its operands.
    ///
    /// Checks operand ranges and, for gates, that the instruction carries
    /// exactly as many qubits as the gate acts on. Consumers index gate
    /// operands positionally and rely on this.
    pub fn push(&mut self, inst: Instruction) -> IrResult<&mut Self> {
        if let InstructionKind::Gate(gate) = &inst.kind {
            let expected = gate.num_qubits();
            if inst.qubits.len() != expected as usize {
                return Err(IrError::ArityMismatch {
                    gate_name: gate.name().to_string(),
                    expected,
                    actual: inst.qubits.len(),
                });
            }
        }
        for &q in &inst.qubits {
            self.check_qubit(q)?;
        }
        for &c in &inst.clbits {
            self.check_clbit(c)?;
        }
        self.instructions.push(inst);
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// Get the instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Count the measurement instructions.
    pub fn num_measurements(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_measure()).count()
    }

    /// Number of classical bits actually written by measurements.
    ///
    /// This is the measured bit width, which is what the width of result
    /// bitstrings must equal. Distinct from [`num_clbits`](Self::num_clbits):
    /// a register bit that no measurement targets does not appear in results.
    pub fn measured_width(&self) -> usize {
        let mut seen: Vec<ClbitId> = self
            .instructions
            .iter()
            .filter(|i| i.is_measure())
            .flat_map(|i| i.clbits.iter().copied())
            .collect();
        seen.sort_by_key(|c| c.0);
        seen.dedup();
        seen.len()
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a Bell state circuit: H(q0), CX(q0, q1), measure both.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_size("bell", 2, 2);
        let q0 = QubitId(0);
        let q1 = QubitId(1);

        circuit
            .h(q0)?
            .cx(q0, q1)?
            .measure(q0, ClbitId(0))?
            .measure(q1, ClbitId(1))?;

        Ok(circuit)
    }

    /// Create a GHZ state circuit over `n` qubits.
    pub fn ghz(n: u32) -> IrResult<Self> {
        let mut circuit = Self::with_size("ghz", n, n);
        if n == 0 {
            return Ok(circuit);
        }

        circuit.h(QubitId(0))?;
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        circuit.measure_all()?;

        Ok(circuit)
    }
}

impl Circuit {
    /// Iterate over the gates in the circuit, skipping measurements and barriers.
    pub fn gates(&self) -> impl Iterator<Item = &StandardGate> {
        self.instructions.iter().filter_map(|i| match &i.kind {
            InstructionKind::Gate(g) => Some(g),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_size() {
        let circuit = Circuit::with_size("test", 3, 2);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
        assert!(circuit.instructions().is_empty());
    }

    #[test]
    fn test_bell_circuit() {
        let circuit = Circuit::bell().unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(circuit.num_measurements(), 2);
        assert_eq!(circuit.measured_width(), 2);

        let gates: Vec<_> = circuit.gates().map(StandardGate::name).collect();
        assert_eq!(gates, vec!["h", "cx"]);
    }

    #[test]
    fn test_ghz_circuit() {
        let circuit = Circuit::ghz(4).unwrap();
        assert_eq!(circuit.num_qubits(), 4);
        assert_eq!(circuit.num_measurements(), 4);
        // H plus 3 CX
        assert_eq!(circuit.gates().count(), 4);
    }

    #[test]
    fn test_qubit_out_of_range() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        let err = circuit.h(QubitId(2)).unwrap_err();
        assert!(matches!(err, IrError::QubitNotFound { .. }));
    }

    #[test]
    fn test_duplicate_qubit_rejected() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = circuit.cx(QubitId(0), QubitId(0)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_push_rejects_arity_mismatch() {
        let mut circuit = Circuit::with_size("test", 2, 2);

        // A two-qubit gate carrying one operand must not slip past push();
        // downstream passes index gate operands positionally.
        let short = Instruction::gate(StandardGate::CX, [QubitId(0)]);
        let err = circuit.push(short).unwrap_err();
        assert!(matches!(err, IrError::ArityMismatch { .. }));

        let long = Instruction::gate(StandardGate::H, [QubitId(0), QubitId(1)]);
        let err = circuit.push(long).unwrap_err();
        assert!(matches!(err, IrError::ArityMismatch { .. }));

        let ok = Instruction::gate(StandardGate::CX, [QubitId(0), QubitId(1)]);
        assert!(circuit.push(ok).is_ok());
    }

    #[test]
    fn test_measure_all_grows_clbits() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit.measure_all().unwrap();
        assert_eq!(circuit.num_clbits(), 3);
        assert_eq!(circuit.num_measurements(), 3);
    }

    #[test]
    fn test_measured_width_partial() {
        let mut circuit = Circuit::with_size("test", 3, 3);
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();
        // Only one clbit is written even though the register has three.
        assert_eq!(circuit.measured_width(), 1);
    }

    #[test]
    fn test_serde_roundtrip() {
        let circuit = Circuit::bell().unwrap();
        let json = serde_json::to_string(&circuit).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(circuit, back);
    }
}
