//! Elementary row operations
//!
//! In-place mutators used by forward elimination. Pivot repair only
//! avoids exact zeros: the first non-zero entry below the pivot wins,
//! whatever its magnitude.

use crate::dense::Matrix;
use crate::error::{GaussError, Result};

/// Exchange every column entry of rows `r1` and `r2`
pub fn swap_rows(matrix: &mut Matrix, r1: usize, r2: usize) -> Result<()> {
    matrix.check_row(r1)?;
    matrix.check_row(r2)?;
    if r1 == r2 {
        return Ok(());
    }

    for j in 0..matrix.columns() {
        let tmp = matrix[(r1, j)];
        matrix[(r1, j)] = matrix[(r2, j)];
        matrix[(r2, j)] = tmp;
    }
    Ok(())
}

/// `row[target] -= factor * row[pivot]` across all columns
pub fn subtract_row(matrix: &mut Matrix, target: usize, pivot: usize, factor: f64) -> Result<()> {
    matrix.check_row(target)?;
    matrix.check_row(pivot)?;

    for j in 0..matrix.columns() {
        let update = factor * matrix[(pivot, j)];
        matrix[(target, j)] -= update;
    }
    Ok(())
}

/// Swap the first row below `pivot_index` with a non-zero entry in the
/// pivot column into the pivot position.
///
/// Returns the index of the row that was swapped in, or `None` when every
/// entry below the pivot is exactly zero. The matrix is left untouched in
/// the `None` case.
pub fn try_swap_rows_for_pivot(matrix: &mut Matrix, pivot_index: usize) -> Result<Option<usize>> {
    matrix.check_row(pivot_index)?;
    if pivot_index >= matrix.columns() {
        return Err(GaussError::IndexOutOfRange {
            index: pivot_index,
            bound: matrix.columns(),
        });
    }

    let candidate =
        ((pivot_index + 1)..matrix.rows()).find(|&i| matrix[(i, pivot_index)] != 0.0);

    match candidate {
        Some(row) => {
            swap_rows(matrix, pivot_index, row)?;
            Ok(Some(row))
        }
        None => Ok(None),
    }
}
