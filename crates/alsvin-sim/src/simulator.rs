//! Simulator front end.

use tracing::debug;

use alsvin_ir::{Circuit, PauliHamiltonian};

use crate::statevector::Statevector;
use crate::{SimError, SimResult};

/// Default qubit capacity; a 2^20 amplitude vector is ~16 MiB.
const DEFAULT_MAX_QUBITS: u32 = 20;

/// Local statevector simulator.
///
/// Runs circuits by exact statevector evolution and evaluates Hamiltonian
/// expectation values against the resulting state. Capacity is bounded
/// because memory grows exponentially with qubit count.
pub struct StatevectorSimulator {
    /// Maximum number of qubits supported.
    max_qubits: u32,
}

impl StatevectorSimulator {
    /// Create a new simulator with the default qubit capacity.
    pub fn new() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }

    /// Create a simulator with a custom qubit capacity.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self { max_qubits }
    }

    /// Run a circuit from |0...0⟩ and return the final state.
    pub fn run(&self, circuit: &Circuit) -> SimResult<Statevector> {
        let num_qubits = circuit.num_qubits();
        if num_qubits > self.max_qubits as usize {
            return Err(SimError::CircuitTooLarge {
                requested: num_qubits,
                max: self.max_qubits,
            });
        }

        debug!(
            num_qubits,
            num_gates = circuit.num_gates(),
            "running statevector simulation"
        );

        let mut statevector = Statevector::new(num_qubits);
        for instruction in circuit.instructions() {
            statevector.apply(instruction);
        }
        Ok(statevector)
    }

    /// Evaluate ⟨ψ|H|ψ⟩ for the state prepared by a circuit.
    pub fn expectation(&self, circuit: &Circuit, hamiltonian: &PauliHamiltonian) -> SimResult<f64> {
        if hamiltonian.num_qubits() > circuit.num_qubits() {
            return Err(SimError::QubitCountMismatch {
                hamiltonian: hamiltonian.num_qubits(),
                circuit: circuit.num_qubits(),
            });
        }
        Ok(self.run(circuit)?.expectation(hamiltonian))
    }
}

impl Default for StatevectorSimulator {
    fn default() -> Self {
        Self::new()
    }
}
