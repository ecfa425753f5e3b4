//! Experiment driver.
//!
//! Runs every configured method against a set of systems, alongside the
//! exact solution and the spectral analysis of each method. Solver runs are
//! independent of each other and execute on the rayon pool when the
//! `parallel` feature is enabled; results always come back in job order.

use log::{debug, info};

use crate::analysis::{analyze, SpectralAnalysis};
use crate::error::{Result, SolverError};
use crate::matrix::LinearSystem;
use crate::solver::{solve, solve_exact, ConvergenceOutcome, Method, SolverConfig};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Relaxation factors swept by default.
pub const DEFAULT_OMEGAS: [f64; 10] = [0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.05, 1.1, 1.15, 1.2];

/// A numbered system with its initial guess.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentSystem {
    /// 1-based identifier used in reports and file names
    pub id: usize,
    /// The system to solve
    pub system: LinearSystem,
    /// Starting iterate
    pub x0: Vec<f64>,
}

impl ExperimentSystem {
    /// Create a system entry, checking the initial guess length.
    pub fn new(id: usize, system: LinearSystem, x0: Vec<f64>) -> Result<Self> {
        system.check_vector(&x0)?;
        Ok(Self { id, system, x0 })
    }
}

/// The two reference systems, both started from zero.
///
/// System 1 is Gauss-Seidel friendly (rho(Bg) = 0.5) while its Jacobi
/// matrix has rho = 1. System 2 is the opposite: Bj is nilpotent and
/// rho(Bg) = 2.
pub fn example_systems() -> Result<Vec<ExperimentSystem>> {
    let one = LinearSystem::from_rows(
        &[[2.0, -1.0, -1.0], [2.0, 2.0, 2.0], [-1.0, -1.0, 2.0]],
        &[-1.0, 4.0, 5.0],
    )?;
    let two = LinearSystem::from_rows(
        &[[1.0, 2.0, -2.0], [1.0, 1.0, 1.0], [2.0, 2.0, 1.0]],
        &[7.0, 2.0, 5.0],
    )?;

    Ok(vec![
        ExperimentSystem::new(1, one, vec![0.0; 3])?,
        ExperimentSystem::new(2, two, vec![0.0; 3])?,
    ])
}

/// Configuration for an experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Parameters shared by every iterative run.
    pub solver: SolverConfig,
    /// Relaxation factors for the SOR sweep (empty disables SOR).
    pub omegas: Vec<f64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            omegas: DEFAULT_OMEGAS.to_vec(),
        }
    }
}

impl ExperimentConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iterative solver parameters.
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Set the SOR relaxation factors.
    pub fn with_omegas(mut self, omegas: Vec<f64>) -> Self {
        self.omegas = omegas;
        self
    }

    /// Methods run for every system, in report order.
    pub fn methods(&self) -> Vec<Method> {
        let mut methods = vec![Method::Jacobi, Method::GaussSeidel];
        methods.extend(self.omegas.iter().map(|&omega| Method::Sor { omega }));
        methods
    }

    /// Check the parameters before any work is scheduled.
    pub fn validate(&self) -> Result<()> {
        self.solver.validate()?;
        if let Some(bad) = self.omegas.iter().find(|w| !w.is_finite()) {
            return Err(SolverError::invalid_parameter(format!(
                "omega must be finite, got {}",
                bad
            )));
        }
        Ok(())
    }
}

/// Everything computed for one system.
#[derive(Debug)]
pub struct SystemReport {
    /// System identifier
    pub id: usize,
    /// Reference solution, or why elimination failed
    pub exact: Result<Vec<f64>>,
    /// Spectral analysis per method, in method order
    pub analyses: Vec<(Method, Result<SpectralAnalysis>)>,
    /// Iterative runs, in method order
    pub runs: Vec<ConvergenceOutcome>,
}

impl SystemReport {
    /// Outcome of a given method, if it was run.
    pub fn run(&self, method: Method) -> Option<&ConvergenceOutcome> {
        self.runs.iter().find(|r| r.method == method)
    }

    /// Spectral analysis of a given method, if it succeeded.
    pub fn analysis(&self, method: Method) -> Option<&SpectralAnalysis> {
        self.analyses
            .iter()
            .find(|(m, _)| *m == method)
            .and_then(|(_, a)| a.as_ref().ok())
    }
}

/// Results of a complete experiment.
#[derive(Debug)]
pub struct ExperimentReport {
    /// One entry per system, in input order
    pub systems: Vec<SystemReport>,
}

/// One unit of solver work.
#[derive(Debug, Clone, Copy)]
struct Job {
    system: usize,
    method: Method,
}

/// A batch of systems and the methods to compare on them.
#[derive(Debug, Clone)]
pub struct Experiment {
    systems: Vec<ExperimentSystem>,
    config: ExperimentConfig,
}

impl Experiment {
    /// Create an experiment over the given systems.
    pub fn new(systems: Vec<ExperimentSystem>, config: ExperimentConfig) -> Self {
        Self { systems, config }
    }

    /// The two reference systems under the given configuration.
    pub fn with_examples(config: ExperimentConfig) -> Result<Self> {
        Ok(Self::new(example_systems()?, config))
    }

    /// Run every method on every system.
    ///
    /// Numerical failures (singular elimination, failed analysis, unstable
    /// iterations) are recorded in the report. Only malformed parameters
    /// make the whole run fail.
    pub fn run(&self) -> Result<ExperimentReport> {
        self.config.validate()?;

        let methods = self.config.methods();
        let jobs: Vec<Job> = (0..self.systems.len())
            .flat_map(|system| methods.iter().map(move |&method| Job { system, method }))
            .collect();

        info!(
            "running {} solver jobs over {} systems",
            jobs.len(),
            self.systems.len()
        );

        let mut outcomes = self.run_jobs(&jobs)?.into_iter();

        let systems = self
            .systems
            .iter()
            .map(|entry| {
                let a = entry.system.matrix();
                if !a.is_strictly_diagonally_dominant() {
                    debug!("system {} is not strictly diagonally dominant", entry.id);
                }
                let exact = solve_exact(&entry.system);
                if let Err(e) = &exact {
                    debug!("system {}: exact solve failed: {}", entry.id, e);
                }
                let analyses = methods.iter().map(|&m| (m, analyze(a, m))).collect();
                let runs = outcomes.by_ref().take(methods.len()).collect();
                SystemReport {
                    id: entry.id,
                    exact,
                    analyses,
                    runs,
                }
            })
            .collect();

        Ok(ExperimentReport { systems })
    }

    fn run_job(&self, job: &Job) -> Result<ConvergenceOutcome> {
        let entry = &self.systems[job.system];
        solve(job.method, &entry.system, &entry.x0, &self.config.solver)
    }

    #[cfg(feature = "parallel")]
    fn run_jobs(&self, jobs: &[Job]) -> Result<Vec<ConvergenceOutcome>> {
        jobs.par_iter().map(|job| self.run_job(job)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn run_jobs(&self, jobs: &[Job]) -> Result<Vec<ConvergenceOutcome>> {
        jobs.iter().map(|job| self.run_job(job)).collect()
    }
}
