//! Direct and iterative linear solvers.
//!
//! This module provides the numerical engines of the crate.
//!
//! ## Splitting
//!
//! The iterative methods split the coefficient matrix as
//! ```text
//! A = D + L + U
//! ```
//!
//! where:
//! - D is the diagonal of A
//! - L is the strictly lower triangle
//! - U is the strictly upper triangle
//!
//! and refine an initial guess with one of the sweeps:
//! ```text
//! Jacobi:        x_new = D^-1 (b - (L + U) x)
//! Gauss-Seidel:  x_new = (D + L)^-1 (b - U x)
//! SOR:           x_new = (1 - w) x + w * GaussSeidel(x)
//! ```
//!
//! The direct solver (Gaussian elimination with partial pivoting) provides
//! the exact reference solution the iterates are compared against.

mod config;
mod direct;
mod iterative;

pub use config::SolverConfig;
pub use direct::solve_exact;
pub use iterative::{gauss_seidel, jacobi, solve, sor, ConvergenceOutcome, Method, StopReason};

/// Default convergence tolerance on the infinity norm of the update step.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Pivots and diagonal entries below this magnitude are treated as zero.
pub const PIVOT_THRESHOLD: f64 = 1e-12;
