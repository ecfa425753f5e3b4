//! Itersolve - iterative solver comparison
//!
//! Runs Jacobi, Gauss-Seidel and an SOR sweep over the reference systems,
//! prints a summary and writes one error curve per run.
//!
//! # Usage
//!
//! ```bash
//! itersolve --output-dir target --omega 0.8 --omega 1.0 --omega 1.2 -v
//! ```

use std::path::PathBuf;

use clap::Parser;
use itersolve::{
    error::Result,
    experiment::DEFAULT_OMEGAS,
    report::{format_summary, ErrorCurveWriter, DEFAULT_OUTPUT_DIR},
    solver::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE},
    Experiment, ExperimentConfig, SolverConfig,
};
use tracing_subscriber::filter::LevelFilter;

/// Compare Jacobi, Gauss-Seidel and SOR on the reference systems
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory for the error-curve files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Maximum number of sweeps per run
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Tolerance on the infinity norm of the update step
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// SOR relaxation factor (repeatable; defaults to a 0.5..1.2 sweep)
    #[arg(short = 'w', long = "omega", value_name = "OMEGA")]
    omegas: Vec<f64>,

    /// Skip writing error-curve files
    #[arg(long)]
    no_write: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Install the stderr subscriber; library `log` records are bridged into it.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let omegas = if args.omegas.is_empty() {
        DEFAULT_OMEGAS.to_vec()
    } else {
        args.omegas
    };

    let config = ExperimentConfig::new()
        .with_solver(
            SolverConfig::new()
                .with_max_iterations(args.max_iterations)
                .with_tolerance(args.tolerance),
        )
        .with_omegas(omegas);

    // Run every method on the reference systems
    let report = Experiment::with_examples(config)?.run()?;

    print!("{}", format_summary(&report));

    if !args.no_write {
        let writer = ErrorCurveWriter::new(&args.output_dir)?;
        let paths = writer.write_report(&report)?;
        println!(
            "Error curves written to {} ({} files)",
            writer.dir().display(),
            paths.len()
        );
    }

    Ok(())
}
