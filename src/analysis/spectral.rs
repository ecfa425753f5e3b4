//! Spectral radius via real Schur decomposition.

use log::debug;
use nalgebra::{Complex, DMatrix};

use crate::error::{Result, SolverError};
use crate::matrix::Matrix;
use crate::solver::Method;

use super::iteration_matrix;

/// Iteration cap for the Schur QR sweeps.
const MAX_SCHUR_ITERATIONS: usize = 10_000;

/// All eigenvalues of a real square matrix, in Schur order.
///
/// Complex-conjugate pairs come from the 2x2 blocks of the real Schur form.
pub fn eigenvalues(m: &Matrix) -> Result<Vec<Complex<f64>>> {
    let n = m.size();
    if n == 0 {
        return Ok(Vec::new());
    }

    if let Some(row) = (0..n).find(|&i| m.row(i).iter().any(|v| !v.is_finite())) {
        return Err(SolverError::NumericInstability { row, iteration: 0 });
    }

    // The QR sweeps stall on Hessenberg forms with a zero diagonal (e.g. any
    // Jacobi matrix), so decompose M + s*I and shift the spectrum back.
    let shift = 1.0 + (0..n)
        .flat_map(|i| m.row(i).iter())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let shifted = m.to_dmatrix() + DMatrix::<f64>::identity(n, n) * shift;

    let schur = shifted
        .try_schur(f64::EPSILON, MAX_SCHUR_ITERATIONS)
        .ok_or(SolverError::EigenDecomposition { size: n })?;

    Ok(schur
        .complex_eigenvalues()
        .iter()
        .map(|lambda| *lambda - shift)
        .collect())
}

/// Largest eigenvalue modulus of `m`.
pub fn spectral_radius(m: &Matrix) -> Result<f64> {
    let radius = eigenvalues(m)?
        .iter()
        .map(|lambda| lambda.norm())
        .fold(0.0, f64::max);
    Ok(radius)
}

/// Convergence prediction for one method on one matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralAnalysis {
    /// Method the iteration matrix belongs to
    pub method: Method,
    /// Spectral radius of the iteration matrix
    pub radius: f64,
}

impl SpectralAnalysis {
    /// The method converges from every initial guess iff `rho < 1`.
    pub fn converges(&self) -> bool {
        self.radius < 1.0
    }

    /// Asymptotic convergence rate `-ln(rho)`.
    ///
    /// Roughly the number of decimal digits gained per sweep times `ln 10`.
    /// Infinite for a nilpotent iteration, non-positive when the method
    /// does not converge.
    pub fn asymptotic_rate(&self) -> f64 {
        if self.radius == 0.0 {
            f64::INFINITY
        } else {
            -self.radius.ln()
        }
    }
}

/// Build the iteration matrix of `method` for `a` and compute its spectral radius.
pub fn analyze(a: &Matrix, method: Method) -> Result<SpectralAnalysis> {
    let b = iteration_matrix(a, method)?;
    let radius = spectral_radius(&b)?;
    debug!("rho({}) = {:.6}", method, radius);
    Ok(SpectralAnalysis { method, radius })
}
