//! Alsvin command-line entry point.
//!
//! Reads a Pauli-string Hamiltonian from standard input, runs the
//! variational quantum eigensolver, and prints the estimated ground-state
//! energy on standard output. Diagnostics go to standard error.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use alsvin_vqe::parser::{UnknownOperatorPolicy, parse_hamiltonian};
use alsvin_vqe::runner::{DEFAULT_MAX_ITERATIONS, DEFAULT_STEP_SIZE, VqeRunner};

/// Ground-state energy estimation for Pauli-string Hamiltonians
#[derive(Parser, Debug)]
#[command(name = "alsvin")]
#[command(about = "Estimate the ground-state energy of a Hamiltonian with VQE")]
struct Args {
    /// Number of optimizer iterations
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Adam optimizer step size
    #[arg(short, long, default_value_t = DEFAULT_STEP_SIZE)]
    step_size: f64,

    /// Stop early once the energy change per iteration drops below this value
    #[arg(long)]
    tolerance: Option<f64>,

    /// Drop unrecognized Pauli operator tokens instead of failing
    #[arg(long)]
    skip_unknown: bool,

    /// Seed for the random parameter initialization
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging on stderr; stdout carries only the energy lines.
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read Hamiltonian from stdin")?;

    let policy = if args.skip_unknown {
        UnknownOperatorPolicy::Skip
    } else {
        UnknownOperatorPolicy::Reject
    };
    let hamiltonian = parse_hamiltonian(&input, policy)?;
    info!(
        terms = hamiltonian.num_terms(),
        qubits = hamiltonian.num_qubits(),
        "parsed Hamiltonian"
    );

    let mut runner = VqeRunner::new(hamiltonian)
        .with_max_iterations(args.max_iterations)
        .with_step_size(args.step_size);
    if let Some(tolerance) = args.tolerance {
        runner = runner.with_tolerance(tolerance);
    }
    if let Some(seed) = args.seed {
        runner = runner.with_seed(seed);
    }

    let result = runner.run()?;

    println!(
        " Ground state Energy of given Hamiltonian is :  {:.6}",
        result.energy
    );
    Ok(())
}
