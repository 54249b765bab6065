//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// Standard gates with known semantics.
///
/// Rotation angles are concrete values; circuits are always fully bound
/// before they reach the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),
    /// General single-qubit rotation Rot(φ, θ, ω) = Rz(ω)·Ry(θ)·Rz(φ).
    Rot(f64, f64, f64),
    /// Controlled-X (CNOT) gate.
    CX,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::Rot(_, _, _) => "rot",
            StandardGate::CX => "cx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::CX => 2,
            _ => 1,
        }
    }

    /// Check if this gate carries rotation angles.
    pub fn is_parameterized(&self) -> bool {
        matches!(
            self,
            StandardGate::Rx(_)
                | StandardGate::Ry(_)
                | StandardGate::Rz(_)
                | StandardGate::Rot(_, _, _)
        )
    }

    /// Get the rotation angles of this gate.
    pub fn parameters(&self) -> Vec<f64> {
        match *self {
            StandardGate::Rx(theta) | StandardGate::Ry(theta) | StandardGate::Rz(theta) => {
                vec![theta]
            }
            StandardGate::Rot(phi, theta, omega) => vec![phi, theta, omega],
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
        assert_eq!(StandardGate::Rot(0.0, 0.0, 0.0).num_qubits(), 1);

        assert!(!StandardGate::H.is_parameterized());
        assert!(StandardGate::Rx(PI).is_parameterized());
        assert!(StandardGate::Rot(0.1, 0.2, 0.3).is_parameterized());
    }

    #[test]
    fn test_gate_names() {
        assert_eq!(StandardGate::X.name(), "x");
        assert_eq!(StandardGate::Rot(0.0, 0.0, 0.0).name(), "rot");
        assert_eq!(StandardGate::CX.name(), "cx");
    }

    #[test]
    fn test_gate_parameters() {
        assert!(StandardGate::CX.parameters().is_empty());
        assert_eq!(StandardGate::Ry(PI).parameters(), vec![PI]);
        assert_eq!(
            StandardGate::Rot(0.1, 0.2, 0.3).parameters(),
            vec![0.1, 0.2, 0.3]
        );
    }
}
