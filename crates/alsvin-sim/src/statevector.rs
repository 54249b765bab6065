//! Statevector simulation engine.

use num_complex::Complex64;

use alsvin_ir::{Instruction, Pauli, PauliHamiltonian, StandardGate};

/// A statevector representing a quantum state.
#[derive(Debug, Clone)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Get the probability of measuring a computational basis state.
    pub fn probability(&self, basis_state: usize) -> f64 {
        self.amplitudes
            .get(basis_state)
            .map_or(0.0, num_complex::Complex::norm_sqr)
    }

    /// Apply an instruction to the statevector.
    ///
    /// Qubit operands are assumed to be in range; the [`Circuit`] builder
    /// validates them when the instruction is recorded.
    ///
    /// [`Circuit`]: alsvin_ir::Circuit
    pub fn apply(&mut self, instruction: &Instruction) {
        let qubits: Vec<usize> = instruction.qubits.iter().map(|q| q.0 as usize).collect();
        self.apply_gate(instruction.gate, &qubits);
    }

    /// Apply a standard gate to specific qubits.
    fn apply_gate(&mut self, gate: StandardGate, qubits: &[usize]) {
        match gate {
            StandardGate::I => {}
            StandardGate::X => self.apply_x(qubits[0]),
            StandardGate::Y => self.apply_y(qubits[0]),
            StandardGate::Z => self.apply_z(qubits[0]),
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::Rx(theta) => self.apply_rx(qubits[0], theta),
            StandardGate::Ry(theta) => self.apply_ry(qubits[0], theta),
            StandardGate::Rz(theta) => self.apply_rz(qubits[0], theta),
            StandardGate::Rot(phi, theta, omega) => {
                // Rot(φ, θ, ω) = Rz(ω)·Ry(θ)·Rz(φ): Rz(φ) acts first.
                self.apply_rz(qubits[0], phi);
                self.apply_ry(qubits[0], theta);
                self.apply_rz(qubits[0], omega);
            }
            StandardGate::CX => self.apply_cx(qubits[0], qubits[1]),
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_rx(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        let neg_i_s = Complex64::new(0.0, -s);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    fn apply_ry(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                self.amplitudes[i] *= phase_0;
            } else {
                self.amplitudes[i] *= phase_1;
            }
        }
    }

    // =========================================================================
    // Two-qubit gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    // =========================================================================
    // Expectation values
    // =========================================================================

    /// Compute ⟨ψ|P|ψ⟩ for a Pauli string.
    ///
    /// Works per basis index: P maps |i⟩ to phase·|target⟩, so each source
    /// amplitude contributes `conj(ψ_target) · phase · ψ_i`. No operator
    /// matrix is materialized.
    pub fn expectation_pauli(&self, operators: &[(usize, Pauli)]) -> f64 {
        let mut value = Complex64::new(0.0, 0.0);
        for (source, &amplitude) in self.amplitudes.iter().enumerate() {
            let (target, phase) = pauli_basis_action(source, operators);
            value += self.amplitudes[target].conj() * phase * amplitude;
        }
        value.re
    }

    /// Compute the expectation value of a Hamiltonian, ⟨ψ|H|ψ⟩.
    ///
    /// Identity terms contribute their coefficient directly.
    pub fn expectation(&self, hamiltonian: &PauliHamiltonian) -> f64 {
        let mut energy = hamiltonian.identity_coefficient();
        for term in hamiltonian.non_identity_terms() {
            energy += term.coefficient * self.expectation_pauli(&term.operators);
        }
        energy
    }
}

/// Apply a Pauli string to a computational basis state |index⟩.
///
/// Returns the target basis index and the accumulated phase, such that
/// P|index⟩ = phase·|target⟩.
fn pauli_basis_action(index: usize, operators: &[(usize, Pauli)]) -> (usize, Complex64) {
    let mut target = index;
    let mut phase = Complex64::new(1.0, 0.0);

    for &(qubit, pauli) in operators {
        let bit = (index >> qubit) & 1;

        match pauli {
            Pauli::I => {}
            Pauli::X => {
                target ^= 1 << qubit;
            }
            Pauli::Y => {
                // Y|0⟩ = i|1⟩, Y|1⟩ = -i|0⟩
                target ^= 1 << qubit;
                if bit == 0 {
                    phase *= Complex64::new(0.0, 1.0);
                } else {
                    phase *= Complex64::new(0.0, -1.0);
                }
            }
            Pauli::Z => {
                if bit == 1 {
                    phase = -phase;
                }
            }
        }
    }

    (target, phase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvin_ir::{Circuit, PauliTerm, QubitId};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    fn run(circuit: &Circuit) -> Statevector {
        let mut sv = Statevector::new(circuit.num_qubits());
        for inst in circuit.instructions() {
            sv.apply(inst);
        }
        sv
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[3], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_x_gate() {
        let mut circuit = Circuit::new("x", 1);
        circuit.x(QubitId(0)).unwrap();
        let sv = run(&circuit);

        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_pauli_gates_on_flipped_state() {
        // I leaves the state alone; Y|0⟩ = i|1⟩; Z|1⟩ = -|1⟩.
        let mut circuit = Circuit::new("paulis", 1);
        circuit
            .apply(Instruction::single_qubit_gate(StandardGate::I, QubitId(0)))
            .unwrap();
        circuit.y(QubitId(0)).unwrap();
        circuit.z(QubitId(0)).unwrap();
        let sv = run(&circuit);

        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(0.0, -1.0)));
    }

    #[test]
    fn test_hadamard() {
        let mut circuit = Circuit::new("h", 1);
        circuit.h(QubitId(0)).unwrap();
        let sv = run(&circuit);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(
            sv.amplitudes()[0],
            Complex64::new(sqrt2_inv, 0.0)
        ));
        assert!(approx_eq(
            sv.amplitudes()[1],
            Complex64::new(sqrt2_inv, 0.0)
        ));
    }

    #[test]
    fn test_bell_state() {
        let mut circuit = Circuit::new("bell", 2);
        circuit.h(QubitId(0)).unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();
        let sv = run(&circuit);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(
            sv.amplitudes()[0],
            Complex64::new(sqrt2_inv, 0.0)
        ));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(
            sv.amplitudes()[3],
            Complex64::new(sqrt2_inv, 0.0)
        ));
    }

    #[test]
    fn test_rot_matches_ry_for_zero_z_angles() {
        let mut rot = Circuit::new("rot", 1);
        rot.rot(0.0, 0.7, 0.0, QubitId(0)).unwrap();

        let mut ry = Circuit::new("ry", 1);
        ry.ry(0.7, QubitId(0)).unwrap();

        let sv_rot = run(&rot);
        let sv_ry = run(&ry);
        for (a, b) in sv_rot.amplitudes().iter().zip(sv_ry.amplitudes()) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn test_z_expectation() {
        // <0|Z|0> = 1
        let sv = Statevector::new(1);
        assert!((sv.expectation_pauli(&[(0, Pauli::Z)]) - 1.0).abs() < 1e-12);

        // <1|Z|1> = -1
        let mut circuit = Circuit::new("x", 1);
        circuit.x(QubitId(0)).unwrap();
        let sv = run(&circuit);
        assert!((sv.expectation_pauli(&[(0, Pauli::Z)]) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_x_expectation_on_plus_state() {
        let mut circuit = Circuit::new("h", 1);
        circuit.h(QubitId(0)).unwrap();
        let sv = run(&circuit);
        assert!((sv.expectation_pauli(&[(0, Pauli::X)]) - 1.0).abs() < 1e-12);
        assert!(sv.expectation_pauli(&[(0, Pauli::Z)]).abs() < 1e-12);
    }

    #[test]
    fn test_y_expectation_on_y_eigenstate() {
        // Rx(-π/2)|0⟩ = (|0⟩ + i|1⟩)/√2, the +1 eigenstate of Y.
        let mut circuit = Circuit::new("rx", 1);
        circuit.rx(-FRAC_PI_2, QubitId(0)).unwrap();
        let sv = run(&circuit);
        assert!((sv.expectation_pauli(&[(0, Pauli::Y)]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bell_correlations() {
        let mut circuit = Circuit::new("bell", 2);
        circuit.h(QubitId(0)).unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();
        let sv = run(&circuit);

        // (|00⟩ + |11⟩)/√2: <XX> = 1, <ZZ> = 1, <YY> = -1
        assert!((sv.expectation_pauli(&[(0, Pauli::X), (1, Pauli::X)]) - 1.0).abs() < 1e-12);
        assert!((sv.expectation_pauli(&[(0, Pauli::Z), (1, Pauli::Z)]) - 1.0).abs() < 1e-12);
        assert!((sv.expectation_pauli(&[(0, Pauli::Y), (1, Pauli::Y)]) + 1.0).abs() < 1e-12);
        // Single-qubit Z averages to zero.
        assert!(sv.expectation_pauli(&[(0, Pauli::Z)]).abs() < 1e-12);
    }

    #[test]
    fn test_hamiltonian_expectation() {
        let h = PauliHamiltonian::new(vec![
            PauliTerm::identity(0.5),
            PauliTerm::z(1.0, 0),
            PauliTerm::zz(-0.25, 0, 1),
        ]);

        // On |01⟩ (qubit 0 flipped): <Z0> = -1, <Z0 Z1> = -1
        let mut circuit = Circuit::new("flip", 2);
        circuit.x(QubitId(0)).unwrap();
        let sv = run(&circuit);

        let expected = 0.5 - 1.0 + 0.25;
        assert!((sv.expectation(&h) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_rz_is_phase_only() {
        let mut circuit = Circuit::new("rz", 1);
        circuit.h(QubitId(0)).unwrap();
        circuit.rz(PI / 3.0, QubitId(0)).unwrap();
        let sv = run(&circuit);

        // Rz only rephases amplitudes; Z-basis probabilities are unchanged.
        assert!((sv.probability(0) - 0.5).abs() < 1e-12);
        assert!((sv.probability(1) - 0.5).abs() < 1e-12);
    }
}
