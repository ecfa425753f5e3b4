//! Error types for the itersolve crate.
//!
//! This module provides a unified error type [`SolverError`] that covers
//! malformed input, singular pivots, numeric blow-up, eigenvalue failures
//! and the I/O performed by the reporting layer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`SolverError`].
pub type Result<T> = std::result::Result<T, SolverError>;

/// Unified error type for all itersolve operations.
#[derive(Error, Debug)]
pub enum SolverError {
    // ============ Input Validation Errors ============
    /// Coefficient matrix is not square
    #[error("Matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// Vector length does not match the matrix dimension
    #[error("Dimension mismatch: expected length {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// System with zero unknowns
    #[error("Linear system is empty (n = 0)")]
    EmptySystem,

    /// Invalid solver or experiment parameter
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    // ============ Numerical Errors ============
    /// Pivot or diagonal entry is zero or below the pivot threshold
    #[error("Singular matrix - pivot in row {row} is zero or below threshold")]
    SingularMatrix { row: usize },

    /// A value became NaN or infinite
    #[error("Numeric instability at row {row}, iteration {iteration}: value is NaN or infinite")]
    NumericInstability { row: usize, iteration: usize },

    /// Eigenvalue decomposition did not converge
    #[error("Eigenvalue decomposition of a {size}x{size} matrix did not converge")]
    EigenDecomposition { size: usize },

    // ============ I/O Errors ============
    /// Error creating the output directory
    #[error("Failed to create output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing an error-curve file
    #[error("Failed to write '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SolverError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create a file write error
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}
