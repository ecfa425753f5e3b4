//! Two-column error-curve files.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Result, SolverError};
use crate::experiment::ExperimentReport;
use crate::solver::{ConvergenceOutcome, Method};

/// File name for one (system, method) error curve.
///
/// `jacobi_error_1.dat`, `gauss_seidel_error_1.dat`,
/// `sor_error_1_omega_0.500000.dat`.
pub fn curve_file_name(system_id: usize, method: Method) -> String {
    match method.omega() {
        Some(omega) => format!("{}_error_{}_omega_{:.6}.dat", method.name(), system_id, omega),
        None => format!("{}_error_{}.dat", method.name(), system_id),
    }
}

/// Write an error history as `"<index> <error>"` lines, index 0-based.
pub fn write_error_curve<W: Write>(mut out: W, errors: &[f64]) -> io::Result<()> {
    for (i, e) in errors.iter().enumerate() {
        writeln!(out, "{} {}", i, e)?;
    }
    out.flush()
}

/// Writes error curves into an output directory.
#[derive(Debug, Clone)]
pub struct ErrorCurveWriter {
    dir: PathBuf,
}

impl ErrorCurveWriter {
    /// Create a writer, creating the directory if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| SolverError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the error curve of one run and return its path.
    pub fn write(&self, system_id: usize, outcome: &ConvergenceOutcome) -> Result<PathBuf> {
        let path = self.dir.join(curve_file_name(system_id, outcome.method));
        let file = File::create(&path).map_err(|e| SolverError::file_write(&path, e))?;
        write_error_curve(BufWriter::new(file), &outcome.error_history)
            .map_err(|e| SolverError::file_write(&path, e))?;
        Ok(path)
    }

    /// Write the error curves of every run in a report.
    pub fn write_report(&self, report: &ExperimentReport) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for system in &report.systems {
            for run in &system.runs {
                paths.push(self.write(system.id, run)?);
            }
        }
        info!("wrote {} error curves to {}", paths.len(), self.dir.display());
        Ok(paths)
    }
}
