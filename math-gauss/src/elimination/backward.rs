//! Backward substitution on an upper-triangular system

use crate::dense::{Matrix, Vector};
use crate::error::{GaussError, Result};
use crate::step_log::StepLog;

/// Solve `U·x = b'` for an upper-triangular `U` produced by
/// [`forward_eliminate`](super::forward_eliminate).
///
/// Entries below the diagonal are never read. A diagonal entry that is
/// exactly zero yields `SingularMatrix` instead of an infinite or NaN
/// solution.
pub fn backward_substitute(upper: &Matrix, rhs: &Vector, log: &mut StepLog) -> Result<Vector> {
    let n = upper.rows();
    if !upper.is_square() {
        return Err(GaussError::DimensionMismatch {
            expected: n,
            got: upper.columns(),
        });
    }
    if rhs.len() != n {
        return Err(GaussError::DimensionMismatch {
            expected: n,
            got: rhs.len(),
        });
    }

    log.record("Starting backward substitution.");
    let mut solution = Vector::new(n)?;

    log.record(format!("Step 1: Computing x_{n} = b'_{n} / a'_{n},{n}"));
    solution[n - 1] = rhs[n - 1] / checked_diagonal(upper, n - 1)?;
    log.record(format!("x_{} = {:.2}", n, solution[n - 1]));

    for i in (0..n - 1).rev() {
        log.record(format!("Step 2: Computing x_{}.", i + 1));

        let mut sum = 0.0;
        for j in (i + 1)..n {
            log.record(format!(
                "Adding a'_{},{} * x_{} to the sum.",
                i + 1,
                j + 1,
                j + 1
            ));
            sum += upper[(i, j)] * solution[j];
        }

        log.record(format!(
            "Calculating x_{} = (b'_{} - sum) / a'_{},{}.",
            i + 1,
            i + 1,
            i + 1,
            i + 1
        ));
        solution[i] = (rhs[i] - sum) / checked_diagonal(upper, i)?;
        log.record(format!("x_{} = {:.2}", i + 1, solution[i]));
    }

    log.record("Backward substitution completed.");
    Ok(solution)
}

fn checked_diagonal(upper: &Matrix, i: usize) -> Result<f64> {
    let pivot = upper[(i, i)];
    if pivot == 0.0 {
        log::warn!("zero diagonal entry at {i} during back substitution");
        return Err(GaussError::SingularMatrix { column: i });
    }
    Ok(pivot)
}
