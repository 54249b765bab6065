//! Layered variational ansatz.
//!
//! The ansatz alternates full layers of three-angle rotations (one per wire)
//! with a ring of CX entanglers, then spends any remaining parameter rows as
//! extra rotations on the trailing wires. It is a pure function: the circuit
//! comes back as data and the simulator applies it.

use anyhow::{Result, ensure};
use rand::Rng;
use std::f64::consts::FRAC_PI_2;

use alsvin_ir::{Circuit, QubitId};

/// Angles per rotation row (the three Euler angles of a `Rot` gate).
const ANGLES_PER_ROTATION: usize = 3;

/// Number of parameter rows the ansatz requires for `n_qubits` wires.
///
/// The layering scheme is built around exactly 2^n − 1 rotation rows.
pub fn required_parameter_sets(n_qubits: usize) -> usize {
    (1 << n_qubits) - 1
}

/// Draw a fresh flat parameter vector of `num_sets` rotation rows,
/// uniformly in [−π/2, π/2].
pub fn random_parameters<R: Rng>(num_sets: usize, rng: &mut R) -> Vec<f64> {
    (0..num_sets * ANGLES_PER_ROTATION)
        .map(|_| rng.gen_range(-FRAC_PI_2..FRAC_PI_2))
        .collect()
}

/// Build the layered ansatz circuit for a parameter assignment.
///
/// `params` is a flat vector read as rows of three angles. With `n` wires and
/// `r = params.len() / 3` rows:
///
/// - `r == 1`: a single rotation on the sole wire.
/// - `r > 1`: `r / n` full layers, each one rotation per wire (row `i` of the
///   layer slice on wire `i`) followed by a ring of CX gates (wire `i` to
///   wire `(i+1) mod n`); then the last `r mod n` rows as extra rotations on
///   the last `r mod n` wires in reverse order.
///
/// Fails fast unless `r` equals [`required_parameter_sets`] for the wire
/// count, which is what keeps the layer slicing well-defined.
pub fn layered_ansatz(params: &[f64], wires: &[QubitId]) -> Result<Circuit> {
    let n_qubits = wires.len();
    ensure!(n_qubits > 0, "ansatz requires at least one wire");
    ensure!(
        params.len() % ANGLES_PER_ROTATION == 0,
        "parameter length {} is not a multiple of {}",
        params.len(),
        ANGLES_PER_ROTATION
    );

    let rows: Vec<&[f64]> = params.chunks_exact(ANGLES_PER_ROTATION).collect();
    let n_rotations = rows.len();
    ensure!(
        n_rotations == required_parameter_sets(n_qubits),
        "expected {} parameter sets for {} qubits, got {}",
        required_parameter_sets(n_qubits),
        n_qubits,
        n_rotations
    );

    let mut circuit = Circuit::new("layered_ansatz", n_qubits as u32);

    if n_rotations == 1 {
        // 1-qubit case: a single rotation on the sole wire.
        let row = rows[0];
        circuit.rot(row[0], row[1], row[2], wires[0])?;
        return Ok(circuit);
    }

    let n_layers = n_rotations / n_qubits;
    let n_extra = n_rotations - n_layers * n_qubits;

    // Alternating layers of rotations on every wire followed by a ring
    // cascade of CX gates.
    for layer in 0..n_layers {
        let layer_rows = &rows[layer * n_qubits..(layer + 1) * n_qubits];
        for (wire, row) in wires.iter().zip(layer_rows) {
            circuit.rot(row[0], row[1], row[2], *wire)?;
        }
        for i in 0..n_qubits {
            circuit.cx(wires[i], wires[(i + 1) % n_qubits])?;
        }
    }

    // Leftover rows go onto the trailing wires in reverse order.
    let extra_rows = &rows[n_rotations - n_extra..];
    for (k, row) in extra_rows.iter().enumerate() {
        circuit.rot(row[0], row[1], row[2], wires[n_qubits - 1 - k])?;
    }

    Ok(circuit)
}
