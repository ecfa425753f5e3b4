//! # Itersolve
//!
//! Stationary iterative methods for dense linear systems, and the tools to
//! predict whether they converge.
//!
//! This library provides:
//! - Jacobi, Gauss-Seidel and SOR solvers sharing one guarded convergence loop
//! - An exact reference solver (Gaussian elimination with partial pivoting)
//! - Iteration matrices Bj, Bg and B_omega built without explicit inversion
//! - Spectral radius of any real square matrix via Schur decomposition
//! - An experiment driver and error-curve reporting (CLI only)
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`matrix`] - Dense matrix and linear system containers
//! - [`solver`] - Direct and iterative solvers
//! - [`analysis`] - Iteration matrices and spectral radius
//! - [`experiment`] - Batch runs over systems, methods and relaxation factors
//! - [`report`] - Error-curve files and console summaries
//!
//! ## Usage
//!
//! ```
//! use itersolve::{analysis, solver, LinearSystem, SolverConfig};
//!
//! let system = LinearSystem::from_rows(
//!     &[[4.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 4.0]],
//!     &[2.0, 4.0, 10.0],
//! )?;
//!
//! let outcome = solver::gauss_seidel(&system, &[0.0; 3], &SolverConfig::default())?;
//! assert!(outcome.converged);
//!
//! let bg = analysis::gauss_seidel_matrix(system.matrix())?;
//! assert!(analysis::spectral_radius(&bg)? < 1.0);
//! # Ok::<(), itersolve::SolverError>(())
//! ```
//!
//! ## Convergence criterion
//!
//! Every method stops when the infinity norm of the update step,
//! `max_i |x_new[i] - x[i]|`, drops below the tolerance. A method converges
//! from every initial guess iff the spectral radius of its iteration
//! matrix is below one.

pub mod analysis;
pub mod error;
pub mod experiment;
pub mod matrix;
pub mod report;
pub mod solver;

// Re-export main types for convenience
pub use error::{Result, SolverError};
pub use experiment::{Experiment, ExperimentConfig};
pub use matrix::{LinearSystem, Matrix};
pub use solver::{ConvergenceOutcome, Method, SolverConfig, StopReason};
