//! Convergence analysis of the stationary iterations.
//!
//! Each iterative method is a linear recurrence `x_(k+1) = B x_k + c`. The
//! iteration matrix `B` depends only on `A` and the method, and the method
//! converges from every starting point iff the spectral radius of `B` is
//! below one.
//!
//! - [`iteration_matrix`] builds Bj, Bg and the SOR operator
//! - [`spectral_radius`] computes `max |lambda|` over all eigenvalues

mod iteration_matrix;
mod spectral;

pub use iteration_matrix::{gauss_seidel_matrix, iteration_matrix, jacobi_matrix, sor_matrix};
pub use spectral::{analyze, eigenvalues, spectral_radius, SpectralAnalysis};
