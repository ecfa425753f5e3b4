//! Dense matrix and linear system containers.
//!
//! This module provides the storage shared by every solver and analyzer.
//! [`Matrix`] is a square row-major matrix of `f64`; [`LinearSystem`] pairs
//! one with a right-hand side and checks the shapes once, so the solvers
//! can index without further validation.

mod dense;
mod system;

pub use dense::Matrix;
pub use system::{validate_system, LinearSystem};
