//! Gaussian elimination with partial pivoting.

use log::debug;

use crate::error::{Result, SolverError};
use crate::matrix::LinearSystem;

use super::PIVOT_THRESHOLD;

/// Solve `A x = b` exactly by Gaussian elimination with partial pivoting.
///
/// The system is copied; the caller's matrix and right-hand side are left
/// untouched. Returns [`SolverError::SingularMatrix`] naming the pivot row
/// when no usable pivot exists in a column.
pub fn solve_exact(system: &LinearSystem) -> Result<Vec<f64>> {
    let n = system.size();
    let mut a = system.matrix().clone();
    let mut b = system.rhs().to_vec();

    for k in 0..n {
        // Find pivot
        let mut max_val = a.get(k, k).abs();
        let mut max_row = k;

        for i in (k + 1)..n {
            let val = a.get(i, k).abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val < PIVOT_THRESHOLD {
            debug!("elimination found no pivot in column {} (max |a| = {:.2e})", k, max_val);
            return Err(SolverError::SingularMatrix { row: k });
        }

        // Swap rows if needed
        if max_row != k {
            a.swap_rows(k, max_row);
            b.swap(k, max_row);
        }

        // Eliminate
        let pivot = a.get(k, k);
        for i in (k + 1)..n {
            let factor = a.get(i, k) / pivot;
            if factor == 0.0 {
                continue;
            }
            a.set(i, k, 0.0);
            for j in (k + 1)..n {
                a.add(i, j, -factor * a.get(k, j));
            }
            b[i] -= factor * b[k];
        }
    }

    // Back substitution (U * x = b')
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum -= a.get(i, j) * x[j];
        }
        x[i] = sum / a.get(i, i);
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_system_one_exact() {
        let sys = LinearSystem::from_rows(
            &[[2.0, -1.0, -1.0], [2.0, 2.0, 2.0], [-1.0, -1.0, 2.0]],
            &[-1.0, 4.0, 5.0],
        )
        .unwrap();
        let x = solve_exact(&sys).unwrap();

        assert_abs_diff_eq!(x[0], 1.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], -2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[2], 7.0 / 3.0, epsilon = 1e-12);
        assert!(sys.residual_norm(&x).unwrap() < 1e-12);
    }

    #[test]
    fn test_system_two_exact() {
        let sys = LinearSystem::from_rows(
            &[[1.0, 2.0, -2.0], [1.0, 1.0, 1.0], [2.0, 2.0, 1.0]],
            &[7.0, 2.0, 5.0],
        )
        .unwrap();
        let x = solve_exact(&sys).unwrap();

        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[2], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_needs_pivoting() {
        // Zero in the leading position, solvable after a row swap
        let sys = LinearSystem::from_rows(&[[0.0, 1.0], [1.0, 0.0]], &[3.0, 5.0]).unwrap();
        let x = solve_exact(&sys).unwrap();
        assert_abs_diff_eq!(x[0], 5.0, epsilon = 1e-15);
        assert_abs_diff_eq!(x[1], 3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_singular_reports_row() {
        let sys = LinearSystem::from_rows(
            &[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]],
            &[1.0, 2.0, 3.0],
        )
        .unwrap();
        let err = solve_exact(&sys).unwrap_err();
        assert!(matches!(err, SolverError::SingularMatrix { row: 2 }));
    }

    #[test]
    fn test_zero_matrix_is_singular_at_first_column() {
        let sys = LinearSystem::from_rows(&[[0.0, 0.0], [0.0, 0.0]], &[1.0, 1.0]).unwrap();
        assert!(matches!(
            solve_exact(&sys),
            Err(SolverError::SingularMatrix { row: 0 })
        ));
    }

    #[test]
    fn test_pivot_below_threshold_is_singular() {
        let sys = LinearSystem::from_rows(&[[1e-13, 0.0], [0.0, 1.0]], &[1.0, 1.0]).unwrap();
        assert!(matches!(
            solve_exact(&sys),
            Err(SolverError::SingularMatrix { row: 0 })
        ));

        let sys = LinearSystem::from_rows(&[[1e-11, 0.0], [0.0, 1.0]], &[1e-11, 1.0]).unwrap();
        let x = solve_exact(&sys).unwrap();
        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_input_not_mutated() {
        let sys = LinearSystem::from_rows(&[[1.0, 2.0], [3.0, 4.0]], &[5.0, 6.0]).unwrap();
        let before = sys.clone();
        solve_exact(&sys).unwrap();
        assert_eq!(sys, before);
    }
}
