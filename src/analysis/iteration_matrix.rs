//! Iteration matrices of the Jacobi, Gauss-Seidel and SOR methods.

use crate::error::{Result, SolverError};
use crate::matrix::Matrix;
use crate::solver::{Method, PIVOT_THRESHOLD};

/// Build the iteration matrix for a method.
pub fn iteration_matrix(a: &Matrix, method: Method) -> Result<Matrix> {
    match method {
        Method::Jacobi => jacobi_matrix(a),
        Method::GaussSeidel => gauss_seidel_matrix(a),
        Method::Sor { omega } => sor_matrix(a, omega),
    }
}

/// Jacobi iteration matrix `Bj = -D^-1 (L + U)`.
///
/// `Bj[i][j] = -A[i][j] / A[i][i]` off the diagonal, zero on it.
pub fn jacobi_matrix(a: &Matrix) -> Result<Matrix> {
    check_diagonal(a)?;

    let n = a.size();
    let mut bj = Matrix::zeros(n);
    for i in 0..n {
        let d = a.get(i, i);
        for j in 0..n {
            if i != j {
                bj.set(i, j, -a.get(i, j) / d);
            }
        }
    }
    Ok(bj)
}

/// Gauss-Seidel iteration matrix `Bg = -(D + L)^-1 U`.
pub fn gauss_seidel_matrix(a: &Matrix) -> Result<Matrix> {
    sor_matrix(a, 1.0)
}

/// SOR iteration matrix `B_w = (D + wL)^-1 ((1 - w) D - wU)`.
///
/// `(D + wL)` is lower triangular, so each column of the result is obtained
/// by forward substitution against the matching column of the right-hand
/// factor. No inverse is formed.
pub fn sor_matrix(a: &Matrix, omega: f64) -> Result<Matrix> {
    if !omega.is_finite() {
        return Err(SolverError::invalid_parameter(format!(
            "omega must be finite, got {}",
            omega
        )));
    }
    check_diagonal(a)?;

    let n = a.size();
    let mut b = Matrix::zeros(n);
    for col in 0..n {
        for i in 0..n {
            // Column `col` of (1 - w) D - wU
            let mut sum = if i == col {
                (1.0 - omega) * a.get(i, i)
            } else if col > i {
                -omega * a.get(i, col)
            } else {
                0.0
            };
            for k in 0..i {
                sum -= omega * a.get(i, k) * b.get(k, col);
            }
            b.set(i, col, sum / a.get(i, i));
        }
    }
    Ok(b)
}

fn check_diagonal(a: &Matrix) -> Result<()> {
    match (0..a.size()).find(|&i| a.get(i, i).abs() < PIVOT_THRESHOLD) {
        Some(row) => Err(SolverError::SingularMatrix { row }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::matrix::LinearSystem;
    use crate::solver::{gauss_seidel, SolverConfig};

    fn system_one() -> Matrix {
        Matrix::from_rows(&[[2.0, -1.0, -1.0], [2.0, 2.0, 2.0], [-1.0, -1.0, 2.0]]).unwrap()
    }

    #[test]
    fn test_jacobi_matrix_entries() {
        let bj = jacobi_matrix(&system_one()).unwrap();
        let expected = [[0.0, 0.5, 0.5], [-1.0, 0.0, -1.0], [0.5, 0.5, 0.0]];
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(bj.get(i, j), expected[i][j], epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_gauss_seidel_matrix_entries() {
        let bg = gauss_seidel_matrix(&system_one()).unwrap();
        let expected = [[0.0, 0.5, 0.5], [0.0, -0.5, -1.5], [0.0, 0.0, -0.5]];
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(bg.get(i, j), expected[i][j], epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_gauss_seidel_matrix_drives_one_sweep() {
        // One sweep is affine in x0: x1(x0) - x1(0) = Bg x0
        let sys = LinearSystem::new(system_one(), vec![-1.0, 4.0, 5.0]).unwrap();
        let config = SolverConfig::new().with_max_iterations(1);
        let x0 = [0.3, -1.2, 2.0];

        let from_x0 = gauss_seidel(&sys, &x0, &config).unwrap();
        let from_zero = gauss_seidel(&sys, &[0.0; 3], &config).unwrap();
        let bg_x0 = gauss_seidel_matrix(sys.matrix()).unwrap().mul_vec(&x0).unwrap();

        for i in 0..3 {
            let diff = from_x0.iterate_history[1][i] - from_zero.iterate_history[1][i];
            assert_abs_diff_eq!(diff, bg_x0[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sor_matrix_at_omega_one_is_gauss_seidel() {
        let a = system_one();
        assert_eq!(sor_matrix(&a, 1.0).unwrap(), gauss_seidel_matrix(&a).unwrap());
    }

    #[test]
    fn test_sor_matrix_diagonal_system() {
        // L = U = 0, so B_w = (1 - w) I
        let a = Matrix::from_rows(&[[3.0, 0.0], [0.0, 5.0]]).unwrap();
        let b = sor_matrix(&a, 0.75).unwrap();
        assert_abs_diff_eq!(b.get(0, 0), 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(b.get(1, 1), 0.25, epsilon = 1e-15);
        assert_eq!(b.get(0, 1), 0.0);
    }

    #[test]
    fn test_zero_diagonal_is_singular() {
        let a = Matrix::from_rows(&[[0.0, 1.0], [1.0, 2.0]]).unwrap();
        assert!(matches!(
            jacobi_matrix(&a),
            Err(SolverError::SingularMatrix { row: 0 })
        ));
        assert!(matches!(
            gauss_seidel_matrix(&a),
            Err(SolverError::SingularMatrix { row: 0 })
        ));
        assert!(matches!(
            iteration_matrix(&a, Method::Sor { omega: 1.5 }),
            Err(SolverError::SingularMatrix { row: 0 })
        ));
    }

    #[test]
    fn test_tiny_diagonal_is_singular() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 1e-13]]).unwrap();
        assert!(matches!(
            jacobi_matrix(&a),
            Err(SolverError::SingularMatrix { row: 1 })
        ));
        assert!(matches!(
            gauss_seidel_matrix(&a),
            Err(SolverError::SingularMatrix { row: 1 })
        ));

        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 1e-11]]).unwrap();
        assert!(jacobi_matrix(&a).is_ok());
    }
}
