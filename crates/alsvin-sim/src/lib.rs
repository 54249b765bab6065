//! Alsvin statevector simulation backend.
//!
//! This crate evaluates circuits produced by `alsvin-ir` against an exact
//! statevector simulation and computes expectation values of Pauli-string
//! Hamiltonians. It is the numerical collaborator of the VQE driver: the
//! driver hands it a bound ansatz circuit and a Hamiltonian, and gets back a
//! real-valued energy.
//!
//! # Example
//!
//! ```rust
//! use alsvin_ir::{Circuit, PauliHamiltonian, PauliTerm, QubitId};
//! use alsvin_sim::StatevectorSimulator;
//!
//! let mut circuit = Circuit::new("flip", 1);
//! circuit.x(QubitId(0)).unwrap();
//!
//! let h = PauliHamiltonian::new(vec![PauliTerm::z(1.0, 0)]);
//! let simulator = StatevectorSimulator::new();
//!
//! let energy = simulator.expectation(&circuit, &h).unwrap();
//! assert!((energy - (-1.0)).abs() < 1e-12);
//! ```

pub mod simulator;
pub mod statevector;

pub use simulator::StatevectorSimulator;
pub use statevector::Statevector;

use thiserror::Error;

/// Errors that can occur during simulation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Circuit is wider than the simulator's qubit capacity.
    #[error("circuit has {requested} qubits but the simulator supports at most {max}")]
    CircuitTooLarge {
        /// Qubits requested by the circuit.
        requested: usize,
        /// Configured capacity.
        max: u32,
    },

    /// Hamiltonian acts on qubits the circuit does not have.
    #[error("Hamiltonian acts on {hamiltonian} qubits but the circuit only has {circuit}")]
    QubitCountMismatch {
        /// Qubits the Hamiltonian acts on.
        hamiltonian: usize,
        /// Qubits in the circuit.
        circuit: usize,
    },
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
