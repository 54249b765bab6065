//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::gate::StandardGate;
use crate::qubit::QubitId;

/// A gate applied to specific qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate being applied.
    pub gate: StandardGate,
    /// Qubits this instruction operates on, in operand order.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: StandardGate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            gate,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: StandardGate, control: QubitId, target: QubitId) -> Self {
        Self::gate(gate, [control, target])
    }

    /// Get the name of the underlying gate.
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_qubit_instruction() {
        let inst = Instruction::single_qubit_gate(StandardGate::H, QubitId(0));
        assert_eq!(inst.name(), "h");
        assert_eq!(inst.qubits, vec![QubitId(0)]);
    }

    #[test]
    fn test_two_qubit_instruction() {
        let inst = Instruction::two_qubit_gate(StandardGate::CX, QubitId(1), QubitId(0));
        assert_eq!(inst.name(), "cx");
        assert_eq!(inst.qubits, vec![QubitId(1), QubitId(0)]);
    }
}
