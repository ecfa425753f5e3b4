//! Reporting of experiment results.
//!
//! The solvers never print or touch the filesystem. This module turns a
//! finished [`ExperimentReport`](crate::experiment::ExperimentReport) into:
//!
//! - error-curve files, one `"<iteration> <error>"` line per sweep
//! - a human-readable console summary

mod curve;
mod summary;

pub use curve::{curve_file_name, write_error_curve, ErrorCurveWriter};
pub use summary::{format_summary, format_vector};

/// Default directory for error-curve files.
pub const DEFAULT_OUTPUT_DIR: &str = "target";
