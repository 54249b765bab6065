//! Alsvin Circuit Intermediate Representation
//!
//! This crate provides the core data structures for the Alsvin VQE stack:
//! quantum circuits as ordered gate-instruction lists, and Hamiltonians as
//! weighted sums of Pauli strings.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] for addressing wires in a circuit
//! - **Gates**: [`StandardGate`] for the supported gate set (Paulis,
//!   rotations, the three-angle [`StandardGate::Rot`], and CX)
//! - **Instructions**: [`Instruction`] combining a gate with its operands
//! - **Circuit**: [`Circuit`] high-level builder API over a flat instruction
//!   list
//! - **Operators**: [`Pauli`], [`PauliTerm`], [`PauliHamiltonian`] for the
//!   observable algebra
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use alsvin_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new("bell_state", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.num_gates(), 2);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod pauli;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::Instruction;
pub use pauli::{Pauli, PauliHamiltonian, PauliTerm};
pub use qubit::QubitId;
