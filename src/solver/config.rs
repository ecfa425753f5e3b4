//! Iterative solver configuration.

use crate::error::{Result, SolverError};

use super::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

/// Configuration shared by the iterative solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Maximum number of sweeps.
    pub max_iterations: usize,
    /// Convergence tolerance on the infinity norm of the update step.
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of sweeps.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance.
    ///
    /// Iteration stops once `max_i |x_new[i] - x[i]| < tolerance`.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Check that the parameters are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(SolverError::invalid_parameter(
                "max_iterations must be positive",
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SolverError::invalid_parameter(format!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = SolverConfig::new()
            .with_max_iterations(25)
            .with_tolerance(1e-9);
        assert_eq!(config.max_iterations, 25);
        assert_eq!(config.tolerance, 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(SolverConfig::new().with_max_iterations(0).validate().is_err());
        assert!(SolverConfig::new().with_tolerance(0.0).validate().is_err());
        assert!(SolverConfig::new().with_tolerance(-1.0).validate().is_err());
        assert!(SolverConfig::new().with_tolerance(f64::NAN).validate().is_err());
    }
}
