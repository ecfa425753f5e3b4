//! Square dense matrix stored row-major.

use nalgebra::DMatrix;

use crate::error::{Result, SolverError};

/// Square dense matrix (row-major).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Entries, row-major
    data: Vec<f64>,
    /// Matrix dimension
    size: usize,
}

impl Matrix {
    /// Create a zero matrix of the given dimension.
    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Build a matrix from nested rows.
    ///
    /// Every row must have as many entries as there are rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(SolverError::NotSquare {
                    rows: size,
                    cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, size })
    }

    /// Matrix dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.size + col]
    }

    /// Set matrix element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.size + col] = value;
    }

    /// Add to matrix element at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.size + col] += value;
    }

    /// Borrow one row.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.size..(row + 1) * self.size]
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let n = self.size;
        for j in 0..n {
            self.data.swap(a * n + j, b * n + j);
        }
    }

    /// Matrix-vector product `A * x`.
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vec<f64>> {
        if x.len() != self.size {
            return Err(SolverError::dimension_mismatch(self.size, x.len()));
        }
        Ok((0..self.size)
            .map(|i| self.row(i).iter().zip(x).map(|(a, v)| a * v).sum::<f64>())
            .collect())
    }

    /// Whether `|A[i][i]| > sum_{j != i} |A[i][j]|` holds for every row.
    pub fn is_strictly_diagonally_dominant(&self) -> bool {
        (0..self.size).all(|i| {
            let off: f64 = self
                .row(i)
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, a)| a.abs())
                .sum();
            self.get(i, i).abs() > off
        })
    }

    /// Whether every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Convert to an nalgebra matrix for decompositions.
    pub fn to_dmatrix(&self) -> DMatrix<f64> {
        DMatrix::from_row_slice(self.size, self.size, &self.data)
    }
}
