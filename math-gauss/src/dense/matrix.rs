//! Dense row-major matrix of `f64` values

use crate::dense::Vector;
use crate::error::{GaussError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense matrix stored in row-major order.
///
/// The shape is fixed at construction and both dimensions are non-zero.
/// `get`/`set` report out-of-range access as an error, while the `Index`
/// operators panic on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Array2<f64>,
}

impl Matrix {
    /// Create a zero-filled matrix
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GaussError::InvalidDimension { rows, columns });
        }
        Ok(Self {
            data: Array2::zeros((rows, columns)),
        })
    }

    /// Create a matrix from a list of rows
    ///
    /// All rows must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_rows == 0 || num_cols == 0 {
            return Err(GaussError::InvalidDimension {
                rows: num_rows,
                columns: num_cols,
            });
        }
        if let Some(ragged) = rows.iter().find(|row| row.len() != num_cols) {
            return Err(GaussError::DimensionMismatch {
                expected: num_cols,
                got: ragged.len(),
            });
        }

        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let got = flat.len();
        let data = Array2::from_shape_vec((num_rows, num_cols), flat).map_err(|_| {
            GaussError::DimensionMismatch {
                expected: num_rows * num_cols,
                got,
            }
        })?;
        Ok(Self { data })
    }

    /// Wrap an existing ndarray
    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        let (rows, columns) = data.dim();
        if rows == 0 || columns == 0 {
            return Err(GaussError::InvalidDimension { rows, columns });
        }
        Ok(Self { data })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.data.ncols()
    }

    /// Whether rows == columns
    pub fn is_square(&self) -> bool {
        self.rows() == self.columns()
    }

    /// Entry at (row, column)
    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        self.check_bounds(row, column)?;
        Ok(self.data[[row, column]])
    }

    /// Overwrite the entry at (row, column)
    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<()> {
        self.check_bounds(row, column)?;
        self.data[[row, column]] = value;
        Ok(())
    }

    /// Independent copy with its own storage
    pub fn deep_copy(&self) -> Self {
        Self {
            data: self.data.to_owned(),
        }
    }

    /// Entries of one row
    ///
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> Vec<f64> {
        self.data.row(row).to_vec()
    }

    /// Borrow the backing array
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Rows as nested vectors
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Matrix-vector product `A·x`
    pub fn dot(&self, x: &Vector) -> Result<Vector> {
        if x.len() != self.columns() {
            return Err(GaussError::DimensionMismatch {
                expected: self.columns(),
                got: x.len(),
            });
        }
        let product = self.data.dot(x.as_array());
        Vector::from_array(product)
    }

    /// Ensure `row` is a valid row index
    pub(crate) fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows() {
            return Err(GaussError::IndexOutOfRange {
                index: row,
                bound: self.rows(),
            });
        }
        Ok(())
    }

    fn check_bounds(&self, row: usize, column: usize) -> Result<()> {
        self.check_row(row)?;
        if column >= self.columns() {
            return Err(GaussError::IndexOutOfRange {
                index: column,
                bound: self.columns(),
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &f64 {
        &self.data[[row, column]]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f64 {
        &mut self.data[[row, column]]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = GaussError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.outer_iter() {
            for value in row.iter() {
                write!(f, "{:.2}\t", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_filled() {
        let m = Matrix::new(2, 3).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 3);
        assert!(!m.is_square());
        assert!(m.as_array().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(matches!(
            Matrix::new(0, 3),
            Err(GaussError::InvalidDimension {
                rows: 0,
                columns: 3
            })
        ));
        assert!(Matrix::new(3, 0).is_err());
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(
            result,
            Err(GaussError::DimensionMismatch {
                expected: 2,
                got: 1
            })
        ));
        assert!(Matrix::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn test_get_set_bounds() {
        let mut m = Matrix::new(2, 2).unwrap();
        m.set(1, 0, 4.5).unwrap();
        assert_eq!(m.get(1, 0).unwrap(), 4.5);
        assert_eq!(m[(1, 0)], 4.5);

        assert!(matches!(
            m.get(2, 0),
            Err(GaussError::IndexOutOfRange { index: 2, bound: 2 })
        ));
        assert!(matches!(
            m.set(0, 5, 1.0),
            Err(GaussError::IndexOutOfRange { index: 5, bound: 2 })
        ));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let m = Matrix::new(2, 2).unwrap();
        let _ = m[(2, 2)];
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let original = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let mut copy = original.deep_copy();
        copy[(0, 0)] = 100.0;

        assert_eq!(original[(0, 0)], 1.0);
        assert_eq!(copy[(0, 0)], 100.0);
    }

    #[test]
    fn test_dot() {
        let m = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
        let x = Vector::from_vec(vec![0.8, 1.4]).unwrap();
        let b = m.dot(&x).unwrap();
        assert!((b[0] - 3.0).abs() < 1e-12);
        assert!((b[1] - 5.0).abs() < 1e-12);

        let wrong = Vector::from_vec(vec![1.0, 2.0, 3.0]).unwrap();
        assert!(m.dot(&wrong).is_err());
    }

    #[test]
    fn test_display_two_decimals() {
        let m = Matrix::from_rows(vec![vec![1.0, 0.5], vec![-2.25, 3.0]]).unwrap();
        assert_eq!(m.to_string(), "1.00\t0.50\t\n-2.25\t3.00\t\n");
    }

    #[test]
    fn test_serde_nested_rows() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");

        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert!(serde_json::from_str::<Matrix>("[[1.0],[2.0,3.0]]").is_err());
    }
}
