//! Conversion of raw text cells into a linear system
//!
//! Matrix cells are given row by row (`size * size` of them), right-hand
//! side cells one per equation.

use crate::dense::{Matrix, Vector};
use crate::error::{GaussError, Result};

/// Parsed system ready for solving
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedInput {
    /// Coefficient matrix
    pub matrix: Matrix,
    /// Right-hand side
    pub rhs: Vector,
}

/// Parse text cells into a `size`×`size` matrix and a right-hand side.
pub fn convert_input<S: AsRef<str>>(
    matrix_cells: &[S],
    rhs_cells: &[S],
    size: usize,
) -> Result<ConvertedInput> {
    if size == 0 {
        return Err(GaussError::InvalidDimension {
            rows: 0,
            columns: 0,
        });
    }
    if matrix_cells.len() != size * size {
        return Err(GaussError::InputSizeMismatch {
            name: "matrix",
            expected: size * size,
            got: matrix_cells.len(),
        });
    }
    if rhs_cells.len() != size {
        return Err(GaussError::InputSizeMismatch {
            name: "right-hand side",
            expected: size,
            got: rhs_cells.len(),
        });
    }

    let mut matrix = Matrix::new(size, size)?;
    for i in 0..size {
        for j in 0..size {
            let raw = matrix_cells[i * size + j].as_ref();
            let location = || format!("matrix cell ({}, {})", i + 1, j + 1);
            matrix[(i, j)] = parse_cell(raw, location)?;
        }
    }

    let mut rhs = Vector::new(size)?;
    for (i, cell) in rhs_cells.iter().enumerate() {
        let location = || format!("right-hand side cell {}", i + 1);
        rhs[i] = parse_cell(cell.as_ref(), location)?;
    }

    Ok(ConvertedInput { matrix, rhs })
}

fn parse_cell(raw: &str, location: impl FnOnce() -> String) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| GaussError::ParseCell {
        location: location(),
        value: raw.to_string(),
    })
}
