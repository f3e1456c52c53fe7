//! Determinant by cofactor expansion
//!
//! Used to screen randomly generated systems before they are handed to the
//! solver. The expansion is O(n!) and only meant for small matrices.

use crate::dense::Matrix;
use crate::error::{GaussError, Result};

/// Determinant of a square matrix, expanded along the first row
pub fn determinant(matrix: &Matrix) -> Result<f64> {
    if !matrix.is_square() {
        return Err(GaussError::DimensionMismatch {
            expected: matrix.rows(),
            got: matrix.columns(),
        });
    }
    cofactor_expansion(matrix)
}

/// Whether the determinant is exactly non-zero
pub fn is_invertible(matrix: &Matrix) -> Result<bool> {
    Ok(determinant(matrix)? != 0.0)
}

/// Copy of `matrix` without row `exclude_row` and column `exclude_column`
pub fn submatrix(matrix: &Matrix, exclude_row: usize, exclude_column: usize) -> Result<Matrix> {
    if exclude_row >= matrix.rows() {
        return Err(GaussError::IndexOutOfRange {
            index: exclude_row,
            bound: matrix.rows(),
        });
    }
    if exclude_column >= matrix.columns() {
        return Err(GaussError::IndexOutOfRange {
            index: exclude_column,
            bound: matrix.columns(),
        });
    }

    let rows: Vec<Vec<f64>> = (0..matrix.rows())
        .filter(|&i| i != exclude_row)
        .map(|i| {
            (0..matrix.columns())
                .filter(|&j| j != exclude_column)
                .map(|j| matrix[(i, j)])
                .collect()
        })
        .collect();
    Matrix::from_rows(rows)
}

fn cofactor_expansion(matrix: &Matrix) -> Result<f64> {
    let n = matrix.rows();
    match n {
        1 => Ok(matrix[(0, 0)]),
        2 => Ok(matrix[(0, 0)] * matrix[(1, 1)] - matrix[(0, 1)] * matrix[(1, 0)]),
        _ => {
            let mut det = 0.0;
            for p in 0..n {
                let sign = if p % 2 == 0 { 1.0 } else { -1.0 };
                let minor = cofactor_expansion(&submatrix(matrix, 0, p)?)?;
                det += matrix[(0, p)] * minor * sign;
            }
            Ok(det)
        }
    }
}
