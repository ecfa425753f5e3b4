//! Linear system `A x = b` and its validation.

use crate::error::{Result, SolverError};

use super::Matrix;

/// A square linear system `A x = b`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    a: Matrix,
    b: Vec<f64>,
}

impl LinearSystem {
    /// Create a validated linear system.
    pub fn new(a: Matrix, b: Vec<f64>) -> Result<Self> {
        validate_system(&a, &b)?;
        Ok(Self { a, b })
    }

    /// Build a system from nested rows and a right-hand side.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R], b: &[f64]) -> Result<Self> {
        Self::new(Matrix::from_rows(rows)?, b.to_vec())
    }

    /// Coefficient matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.a
    }

    /// Right-hand side.
    pub fn rhs(&self) -> &[f64] {
        &self.b
    }

    /// Number of unknowns.
    pub fn size(&self) -> usize {
        self.a.size()
    }

    /// Check that a vector has one entry per unknown.
    pub fn check_vector(&self, x: &[f64]) -> Result<()> {
        if x.len() != self.size() {
            return Err(SolverError::dimension_mismatch(self.size(), x.len()));
        }
        Ok(())
    }

    /// Infinity norm of the residual `A x - b`.
    pub fn residual_norm(&self, x: &[f64]) -> Result<f64> {
        let ax = self.a.mul_vec(x)?;
        Ok(ax
            .iter()
            .zip(&self.b)
            .map(|(l, r)| (l - r).abs())
            .fold(0.0, f64::max))
    }
}

/// Validate a system before solving.
///
/// Checks:
/// - The system has at least one unknown
/// - The right-hand side has one entry per row
/// - All coefficients are finite
pub fn validate_system(a: &Matrix, b: &[f64]) -> Result<()> {
    if a.size() == 0 {
        return Err(SolverError::EmptySystem);
    }

    if b.len() != a.size() {
        return Err(SolverError::dimension_mismatch(a.size(), b.len()));
    }

    if !a.is_finite() || b.iter().any(|v| !v.is_finite()) {
        return Err(SolverError::invalid_parameter(
            "system contains NaN or infinite coefficients",
        ));
    }

    Ok(())
}
