//! Console summary of an experiment.

use std::fmt;

use crate::experiment::{ExperimentReport, SystemReport};

/// Format a vector as `x1 = .., x2 = .., ...`.
pub fn format_vector(x: &[f64]) -> String {
    x.iter()
        .enumerate()
        .map(|(i, v)| format!("x{} = {:.6}", i + 1, v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the whole report as plain text.
pub fn format_summary(report: &ExperimentReport) -> String {
    report
        .systems
        .iter()
        .map(|system| format!("{}\n", system))
        .collect()
}

impl fmt::Display for SystemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "System {}", self.id)?;
        writeln!(f, "-----------------")?;

        match &self.exact {
            Ok(x) => writeln!(f, "Exact solution: {}", format_vector(x))?,
            Err(e) => writeln!(f, "Exact solution unavailable: {}", e)?,
        }

        for (method, analysis) in &self.analyses {
            match analysis {
                Ok(a) => {
                    let verdict = if a.converges() { "converges" } else { "diverges" };
                    writeln!(f, "rho({}) = {:.6} ({})", method, a.radius, verdict)?;
                }
                Err(e) => writeln!(f, "rho({}) unavailable: {}", method, e)?,
            }
        }

        let exact = self.exact.as_ref().ok();
        for run in &self.runs {
            writeln!(f, "{}:", run.method)?;
            writeln!(f, "  solution: {}", format_vector(&run.solution))?;
            writeln!(
                f,
                "  converged: {} after {} iterations ({})",
                if run.converged { "yes" } else { "no" },
                run.iterations,
                run.stop
            )?;
            if let Some(err) = run.final_error() {
                writeln!(f, "  last step: {:.3e}", err)?;
            }
            if let Some(x) = exact {
                writeln!(f, "  distance to exact: {:.3e}", run.distance_to(x))?;
            }
        }
        Ok(())
    }
}
