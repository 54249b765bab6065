//! VQE driver loop.

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use alsvin_ir::{PauliHamiltonian, QubitId};
use alsvin_sim::StatevectorSimulator;

use crate::ansatz::{layered_ansatz, random_parameters, required_parameter_sets};
use crate::optimizer::AdamOptimizer;

/// Default iteration budget of the optimization loop.
pub const DEFAULT_MAX_ITERATIONS: usize = 200;

/// Default Adam step size.
pub const DEFAULT_STEP_SIZE: f64 = 0.1;

/// Progress is reported every this many iterations.
const REPORT_INTERVAL: usize = 10;

/// Result of a VQE run.
#[derive(Debug, Clone)]
pub struct VqeResult {
    /// Final energy estimate.
    pub energy: f64,
    /// Parameters at the end of the run.
    pub parameters: Vec<f64>,
    /// Number of optimizer iterations performed.
    pub iterations: usize,
    /// Whether the tolerance-based early exit triggered.
    pub converged: bool,
}

/// VQE runner configuration.
///
/// By default the loop runs its full iteration budget; setting a tolerance
/// opts into stopping early once the energy change per iteration falls
/// below it.
pub struct VqeRunner {
    hamiltonian: PauliHamiltonian,
    max_iterations: usize,
    step_size: f64,
    tolerance: Option<f64>,
    seed: Option<u64>,
}

impl VqeRunner {
    /// Create a runner for a Hamiltonian with default settings.
    pub fn new(hamiltonian: PauliHamiltonian) -> Self {
        Self {
            hamiltonian,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            step_size: DEFAULT_STEP_SIZE,
            tolerance: None,
            seed: None,
        }
    }

    /// Set the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the Adam step size.
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Enable tolerance-based early exit.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Seed the random parameter initialization.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the variational loop and return the final energy estimate.
    pub fn run(&self) -> Result<VqeResult> {
        let num_qubits = self.hamiltonian.num_qubits();
        let wires: Vec<QubitId> = (0..num_qubits).map(QubitId::from).collect();
        let num_sets = required_parameter_sets(num_qubits);

        info!(
            num_qubits,
            terms = self.hamiltonian.num_terms(),
            parameter_sets = num_sets,
            "starting VQE optimization"
        );

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut params = random_parameters(num_sets, &mut rng);

        let simulator = StatevectorSimulator::new();
        let hamiltonian = &self.hamiltonian;
        let mut cost = |p: &[f64]| -> Result<f64> {
            let circuit = layered_ansatz(p, &wires)?;
            Ok(simulator.expectation(&circuit, hamiltonian)?)
        };

        let mut optimizer = AdamOptimizer::new(self.step_size);
        let mut energy = 0.0;
        let mut iterations = 0;
        let mut converged = false;

        for n in 0..self.max_iterations {
            let (next, previous_energy) = optimizer.step_and_cost(&mut cost, &params)?;
            params = next;
            energy = cost(&params)?;
            iterations = n + 1;

            if n % REPORT_INTERVAL == 0 {
                println!(" Energy for iteration {n} : {energy}");
            }
            debug!(iteration = n, energy, "optimizer step");

            if let Some(tolerance) = self.tolerance {
                if (energy - previous_energy).abs() < tolerance {
                    info!(iteration = n, energy, "converged below tolerance");
                    converged = true;
                    break;
                }
            }
        }

        Ok(VqeResult {
            energy,
            parameters: params,
            iterations,
            converged,
        })
    }
}
