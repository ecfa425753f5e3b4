//! Jacobi, Gauss-Seidel and SOR iteration.
//!
//! All three methods share one convergence loop. Each sweep produces a new
//! iterate; the loop records the infinity norm of the step and stops once
//! it drops below the tolerance or the iteration cap is reached.
//!
//! Every component update is guarded: a diagonal entry below
//! [`PIVOT_THRESHOLD`] or a NaN/infinite result stops the solve at once and
//! is reported through [`StopReason`] instead of propagating garbage.

use std::fmt;

use log::{debug, warn};

use crate::error::{Result, SolverError};
use crate::matrix::LinearSystem;

use super::{SolverConfig, PIVOT_THRESHOLD};

/// Iterative method selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    /// Simultaneous update from the previous iterate.
    Jacobi,
    /// In-place update using already refreshed components.
    GaussSeidel,
    /// Gauss-Seidel blended with the previous value by `omega`.
    Sor { omega: f64 },
}

impl Method {
    /// Short snake_case name, used for file names.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Jacobi => "jacobi",
            Method::GaussSeidel => "gauss_seidel",
            Method::Sor { .. } => "sor",
        }
    }

    /// Relaxation factor, if the method has one.
    pub fn omega(&self) -> Option<f64> {
        match self {
            Method::Sor { omega } => Some(*omega),
            _ => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Jacobi => write!(f, "Jacobi"),
            Method::GaussSeidel => write!(f, "Gauss-Seidel"),
            Method::Sor { omega } => write!(f, "SOR (omega = {})", omega),
        }
    }
}

/// Why an iterative solve stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopReason {
    /// The update step fell below the tolerance.
    Converged,
    /// The iteration cap was reached first.
    MaxIterations,
    /// A diagonal entry was below the pivot threshold.
    SingularPivot { row: usize, iteration: usize },
    /// An updated component was NaN or infinite.
    NonFinite { row: usize, iteration: usize },
}

impl StopReason {
    /// The error matching an abnormal stop, if any.
    ///
    /// Running out of iterations is a normal outcome and maps to `None`.
    pub fn error(&self) -> Option<SolverError> {
        match *self {
            StopReason::Converged | StopReason::MaxIterations => None,
            StopReason::SingularPivot { row, .. } => Some(SolverError::SingularMatrix { row }),
            StopReason::NonFinite { row, iteration } => {
                Some(SolverError::NumericInstability { row, iteration })
            }
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Converged => write!(f, "converged"),
            StopReason::MaxIterations => write!(f, "iteration limit reached"),
            StopReason::SingularPivot { row, iteration } => write!(
                f,
                "near-zero diagonal A[{row}][{row}] at iteration {iteration}"
            ),
            StopReason::NonFinite { row, iteration } => write!(
                f,
                "NaN or infinite value in row {row} at iteration {iteration}"
            ),
        }
    }
}

/// Result of one iterative solve.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceOutcome {
    /// Method that produced this outcome.
    pub method: Method,
    /// Whether the tolerance was met.
    pub converged: bool,
    /// Final (or last valid partial) iterate.
    pub solution: Vec<f64>,
    /// Infinity norm of the update step, one entry per completed sweep.
    pub error_history: Vec<f64>,
    /// Initial guess followed by the iterate after every completed sweep.
    pub iterate_history: Vec<Vec<f64>>,
    /// Number of completed sweeps.
    pub iterations: usize,
    /// Why iteration stopped.
    pub stop: StopReason,
}

impl ConvergenceOutcome {
    /// Error of the last completed sweep.
    pub fn final_error(&self) -> Option<f64> {
        self.error_history.last().copied()
    }

    /// Infinity-norm distance between the solution and a reference vector.
    pub fn distance_to(&self, reference: &[f64]) -> f64 {
        self.solution
            .iter()
            .zip(reference)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

/// A guard tripped inside a sweep.
#[derive(Debug, Clone, Copy)]
enum Breakdown {
    SingularPivot(usize),
    NonFinite(usize),
}

impl Breakdown {
    fn at(self, iteration: usize) -> StopReason {
        match self {
            Breakdown::SingularPivot(row) => StopReason::SingularPivot { row, iteration },
            Breakdown::NonFinite(row) => StopReason::NonFinite { row, iteration },
        }
    }
}

/// Solve with the given method.
pub fn solve(
    method: Method,
    system: &LinearSystem,
    x0: &[f64],
    config: &SolverConfig,
) -> Result<ConvergenceOutcome> {
    match method {
        Method::Jacobi => jacobi(system, x0, config),
        Method::GaussSeidel => gauss_seidel(system, x0, config),
        Method::Sor { omega } => sor(system, x0, omega, config),
    }
}

/// Jacobi iteration.
///
/// Every component of the new iterate is computed from the previous one:
/// `x_new[i] = (b[i] - sum_{j != i} A[i][j] x[j]) / A[i][i]`.
/// On a guard stop the last completed iterate is returned.
pub fn jacobi(
    system: &LinearSystem,
    x0: &[f64],
    config: &SolverConfig,
) -> Result<ConvergenceOutcome> {
    let mut x_new = vec![0.0; system.size()];
    iterate(Method::Jacobi, system, x0, config, |x| {
        jacobi_sweep(system, x, &mut x_new)
    })
}

/// Gauss-Seidel iteration.
///
/// Components are overwritten left to right, so row `i` already sees the
/// refreshed values of rows `< i`.
pub fn gauss_seidel(
    system: &LinearSystem,
    x0: &[f64],
    config: &SolverConfig,
) -> Result<ConvergenceOutcome> {
    iterate(Method::GaussSeidel, system, x0, config, |x| {
        relaxed_sweep(system, x, 1.0)
    })
}

/// Successive over-relaxation.
///
/// `x[i] <- (1 - omega) x[i] + omega * gs_update`, where `gs_update` is the
/// Gauss-Seidel value for row `i`. `omega = 1` reproduces Gauss-Seidel
/// exactly.
pub fn sor(
    system: &LinearSystem,
    x0: &[f64],
    omega: f64,
    config: &SolverConfig,
) -> Result<ConvergenceOutcome> {
    if !omega.is_finite() {
        return Err(SolverError::invalid_parameter(format!(
            "omega must be finite, got {}",
            omega
        )));
    }
    if omega <= 0.0 || omega >= 2.0 {
        warn!("SOR with omega = {} outside (0, 2) cannot converge in general", omega);
    }

    iterate(Method::Sor { omega }, system, x0, config, |x| {
        relaxed_sweep(system, x, omega)
    })
}

/// Shared convergence loop.
fn iterate<F>(
    method: Method,
    system: &LinearSystem,
    x0: &[f64],
    config: &SolverConfig,
    mut sweep: F,
) -> Result<ConvergenceOutcome>
where
    F: FnMut(&mut [f64]) -> std::result::Result<(), Breakdown>,
{
    config.validate()?;
    system.check_vector(x0)?;
    if x0.iter().any(|v| !v.is_finite()) {
        return Err(SolverError::invalid_parameter(
            "initial guess contains NaN or infinite values",
        ));
    }

    let mut x = x0.to_vec();
    let mut x_prev = x0.to_vec();
    let mut error_history = Vec::new();
    let mut iterate_history = vec![x.clone()];

    for iter in 0..config.max_iterations {
        x_prev.copy_from_slice(&x);

        if let Err(breakdown) = sweep(x.as_mut_slice()) {
            let stop = breakdown.at(iter + 1);
            warn!("{} stopped: {}", method, stop);
            return Ok(ConvergenceOutcome {
                method,
                converged: false,
                solution: x,
                error_history,
                iterate_history,
                iterations: iter,
                stop,
            });
        }

        let error = step_norm(&x, &x_prev);
        error_history.push(error);
        iterate_history.push(x.clone());

        if error < config.tolerance {
            debug!(
                "{} converged after {} iterations (error {:.2e})",
                method,
                iter + 1,
                error
            );
            return Ok(ConvergenceOutcome {
                method,
                converged: true,
                solution: x,
                error_history,
                iterate_history,
                iterations: iter + 1,
                stop: StopReason::Converged,
            });
        }
    }

    debug!(
        "{} did not converge within {} iterations (error {:.2e})",
        method,
        config.max_iterations,
        error_history.last().copied().unwrap_or(f64::NAN)
    );

    Ok(ConvergenceOutcome {
        method,
        converged: false,
        solution: x,
        error_history,
        iterate_history,
        iterations: config.max_iterations,
        stop: StopReason::MaxIterations,
    })
}

/// One Jacobi sweep. `x` is only overwritten when every row succeeded.
fn jacobi_sweep(
    system: &LinearSystem,
    x: &mut [f64],
    x_new: &mut [f64],
) -> std::result::Result<(), Breakdown> {
    let a = system.matrix();
    let b = system.rhs();

    for i in 0..x.len() {
        let diag = a.get(i, i);
        if diag.abs() < PIVOT_THRESHOLD {
            return Err(Breakdown::SingularPivot(i));
        }
        let value = (b[i] - off_diagonal_sum(a.row(i), i, x)) / diag;
        if !value.is_finite() {
            return Err(Breakdown::NonFinite(i));
        }
        x_new[i] = value;
    }

    x.copy_from_slice(x_new);
    Ok(())
}

/// One in-place Gauss-Seidel sweep relaxed by `omega`.
fn relaxed_sweep(
    system: &LinearSystem,
    x: &mut [f64],
    omega: f64,
) -> std::result::Result<(), Breakdown> {
    let a = system.matrix();
    let b = system.rhs();

    for i in 0..x.len() {
        let diag = a.get(i, i);
        if diag.abs() < PIVOT_THRESHOLD {
            return Err(Breakdown::SingularPivot(i));
        }
        let gs = (b[i] - off_diagonal_sum(a.row(i), i, x)) / diag;
        let value = if omega == 1.0 {
            gs
        } else {
            (1.0 - omega) * x[i] + omega * gs
        };
        if !value.is_finite() {
            return Err(Breakdown::NonFinite(i));
        }
        x[i] = value;
    }

    Ok(())
}

/// `sum_{j != i} row[j] * x[j]`
fn off_diagonal_sum(row: &[f64], i: usize, x: &[f64]) -> f64 {
    row.iter()
        .zip(x)
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(_, (a, v))| a * v)
        .sum()
}

/// Infinity norm of `x - x_prev`.
fn step_norm(x: &[f64], x_prev: &[f64]) -> f64 {
    x.iter()
        .zip(x_prev)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}
