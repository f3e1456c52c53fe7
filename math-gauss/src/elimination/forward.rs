//! Forward elimination
//!
//! Reduces a square matrix to upper-triangular form in place. A zero pivot
//! is repaired with a single row swap; the paired right-hand side, when
//! given, receives the same swaps and row updates.

use crate::dense::{Matrix, Vector};
use crate::error::{GaussError, Result};
use crate::row_ops::{subtract_row, try_swap_rows_for_pivot};
use crate::step_log::StepLog;

/// Reduce `matrix` to upper-triangular form.
///
/// Pivots are compared against zero exactly. On `SingularMatrix` the matrix
/// (and `rhs`) hold the partially reduced state reached so far.
pub fn forward_eliminate(
    matrix: &mut Matrix,
    mut rhs: Option<&mut Vector>,
    log: &mut StepLog,
) -> Result<()> {
    let n = matrix.rows();
    if !matrix.is_square() {
        return Err(GaussError::DimensionMismatch {
            expected: n,
            got: matrix.columns(),
        });
    }
    if let Some(len) = rhs.as_deref().map(Vector::len)
        && len != n
    {
        return Err(GaussError::DimensionMismatch {
            expected: n,
            got: len,
        });
    }

    log.record("Starting forward elimination.");

    for k in 0..n {
        log.record(format!(
            "Step {}: Ensuring pivot a[{},{}] is non-zero.",
            k + 1,
            k + 1,
            k + 1
        ));
        ensure_nonzero_pivot(matrix, rhs.as_deref_mut(), k, log)?;

        log.record(format!(
            "Step {}: Eliminating entries below pivot a[{},{}].",
            k + 1,
            k + 1,
            k + 1
        ));
        eliminate_below_pivot(matrix, rhs.as_deref_mut(), k, log)?;

        log.record(format!("Step {} completed.", k + 1));
    }

    log.record("Forward elimination completed.");
    log::debug!("forward elimination reduced {n}x{n} matrix");
    Ok(())
}

fn ensure_nonzero_pivot(
    matrix: &mut Matrix,
    rhs: Option<&mut Vector>,
    k: usize,
    log: &mut StepLog,
) -> Result<()> {
    if matrix[(k, k)] != 0.0 {
        log.record(format!("Pivot a[{},{}] is already non-zero.", k + 1, k + 1));
        return Ok(());
    }

    log.record(format!(
        "Pivot a[{},{}] is zero. Attempting to swap rows.",
        k + 1,
        k + 1
    ));

    match try_swap_rows_for_pivot(matrix, k)? {
        Some(row) => {
            if let Some(b) = rhs {
                b.swap(k, row)?;
            }
            log::debug!("pivot {k}: swapped in row {row}");
            log.record(format!(
                "Swapped rows {} and {} to ensure a[{},{}] is non-zero.",
                k + 1,
                row + 1,
                k + 1,
                k + 1
            ));
            Ok(())
        }
        None => {
            log::warn!("no non-zero pivot available in column {k}");
            log.record("Matrix is singular and cannot be reduced further.");
            Err(GaussError::SingularMatrix { column: k })
        }
    }
}

fn eliminate_below_pivot(
    matrix: &mut Matrix,
    mut rhs: Option<&mut Vector>,
    k: usize,
    log: &mut StepLog,
) -> Result<()> {
    let pivot = matrix[(k, k)];

    for i in (k + 1)..matrix.rows() {
        let factor = matrix[(i, k)] / pivot;
        log.record(format!(
            "Eliminating row {}: Multiplying row {} by {:.2} and subtracting from row {}.",
            i + 1,
            k + 1,
            factor,
            i + 1
        ));

        subtract_row(matrix, i, k, factor)?;
        if let Some(b) = rhs.as_deref_mut() {
            let update = factor * b[k];
            b[i] -= update;
        }

        log.record(format!(
            "Row {} eliminated using factor {:.2}.",
            i + 1,
            factor
        ));
    }
    Ok(())
}
