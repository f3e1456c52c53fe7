//! Validating entry point for solving `A·x = b`
//!
//! The caller's matrix and right-hand side are never mutated: each solve
//! works on deep copies and records into its own [`StepLog`].

use crate::dense::{Matrix, Vector};
use crate::elimination::EliminationController;
use crate::error::{GaussError, Result};
use crate::step_log::StepLog;

/// Outcome of a successful solve
#[derive(Debug, Clone)]
pub struct Solution {
    /// Solution vector, `x[i]` is the unknown x_{i+1}
    pub x: Vector,
    /// Upper-triangular form of the input matrix
    pub upper: Matrix,
    /// Right-hand side after forward elimination
    pub transformed_rhs: Vector,
    /// Chronological trace of the solve
    pub log: StepLog,
}

impl Solution {
    /// Trace lines joined with `\n`
    pub fn log_text(&self) -> String {
        self.log.to_text()
    }
}

/// Solver for dense square systems.
///
/// Holds no state between solves; every call builds its own working copies
/// and trace, so one solver can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSystemSolver;

impl LinearSystemSolver {
    /// Create a solver
    pub fn new() -> Self {
        Self
    }

    /// Solve `matrix · x = rhs`
    pub fn solve(&self, matrix: &Matrix, rhs: &Vector) -> Result<Solution> {
        self.solve_checked(Some(matrix), Some(rhs))
    }

    /// Solve with possibly absent inputs, reporting `NullInput` for a
    /// missing matrix or right-hand side.
    pub fn solve_checked(&self, matrix: Option<&Matrix>, rhs: Option<&Vector>) -> Result<Solution> {
        let mut log = StepLog::new();
        log.record("Starting the solve process.");

        let (matrix, rhs) = validate_inputs(matrix, rhs, &mut log)?;
        log.record("Solving linear equation system...");

        let mut upper = matrix.deep_copy();
        let mut transformed_rhs = rhs.deep_copy();
        let mut controller = EliminationController::new();
        let result = controller.run(&mut upper, &mut transformed_rhs);

        log.append(controller.take_log());

        let x = result?;
        log.record("Linear equation system solved.");
        log::info!("solved {}x{} system", matrix.rows(), matrix.columns());

        Ok(Solution {
            x,
            upper,
            transformed_rhs,
            log,
        })
    }
}

/// Solve `matrix · x = rhs` with a fresh solver
pub fn solve(matrix: &Matrix, rhs: &Vector) -> Result<Solution> {
    LinearSystemSolver::new().solve(matrix, rhs)
}

fn validate_inputs<'a>(
    matrix: Option<&'a Matrix>,
    rhs: Option<&'a Vector>,
    log: &mut StepLog,
) -> Result<(&'a Matrix, &'a Vector)> {
    log.record("Validating inputs.");

    let Some(matrix) = matrix else {
        log.record("Validation failed: Matrix is missing.");
        return Err(GaussError::NullInput { argument: "matrix" });
    };
    let Some(rhs) = rhs else {
        log.record("Validation failed: Right-hand side vector is missing.");
        return Err(GaussError::NullInput {
            argument: "right-hand side",
        });
    };
    if !matrix.is_square() {
        log.record("Validation failed: Matrix is not square.");
        return Err(GaussError::DimensionMismatch {
            expected: matrix.rows(),
            got: matrix.columns(),
        });
    }
    if matrix.rows() != rhs.len() {
        log.record("Validation failed: Matrix and vector dimensions do not match.");
        return Err(GaussError::DimensionMismatch {
            expected: matrix.rows(),
            got: rhs.len(),
        });
    }

    log.record("Inputs are valid.");
    Ok((matrix, rhs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_leaves_inputs_untouched() {
        let a = Matrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 1.0]]).unwrap();
        let b = Vector::from_vec(vec![2.0, 3.0]).unwrap();
        let a_before = a.deep_copy();
        let b_before = b.deep_copy();

        let solution = solve(&a, &b).unwrap();

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
        assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(solution.x[1], 2.0, epsilon = 1e-12);
        assert_eq!(solution.transformed_rhs.to_vec(), vec![3.0, 2.0]);
        assert_eq!(solution.upper.to_rows(), vec![vec![1.0, 1.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn test_solve_checked_null_inputs() {
        let solver = LinearSystemSolver::new();
        let a = Matrix::from_rows(vec![vec![1.0]]).unwrap();
        let b = Vector::from_vec(vec![1.0]).unwrap();

        assert!(matches!(
            solver.solve_checked(None, Some(&b)),
            Err(GaussError::NullInput { argument: "matrix" })
        ));
        assert!(matches!(
            solver.solve_checked(Some(&a), None),
            Err(GaussError::NullInput { .. })
        ));
    }

    #[test]
    fn test_solve_rejects_bad_shapes() {
        let rectangular = Matrix::new(2, 3).unwrap();
        let square = Matrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let b2 = Vector::from_vec(vec![1.0, 2.0]).unwrap();
        let b3 = Vector::from_vec(vec![1.0, 2.0, 3.0]).unwrap();

        assert!(solve(&rectangular, &b2).unwrap_err().is_dimension_error());
        assert!(matches!(
            solve(&square, &b3),
            Err(GaussError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        ));
    }

    #[test]
    fn test_log_wraps_elimination_trace() {
        let a = Matrix::from_rows(vec![vec![5.0]]).unwrap();
        let b = Vector::from_vec(vec![10.0]).unwrap();

        let solution = solve(&a, &b).unwrap();
        let lines = solution.log.lines();

        assert_eq!(lines[0], "Starting the solve process.");
        assert_eq!(lines[1], "Validating inputs.");
        assert_eq!(lines[2], "Inputs are valid.");
        assert_eq!(lines.last().unwrap(), "Linear equation system solved.");
        assert!(solution.log_text().contains("x_1 = 2.00"));
    }

    #[test]
    fn test_elimination_trace_appears_once() {
        let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
        let b = Vector::from_vec(vec![3.0, 5.0]).unwrap();

        let solution = solve(&a, &b).unwrap();
        let lines = solution.log.lines();
        let count = |needle: &str| lines.iter().filter(|l| *l == needle).count();

        assert_eq!(count("Starting forward elimination."), 1);
        assert_eq!(count("Backward substitution completed."), 1);
    }
}
