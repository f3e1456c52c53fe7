//! Sequencing of forward elimination and back substitution

use super::{backward_substitute, forward_eliminate};
use crate::dense::{Matrix, Vector};
use crate::error::Result;
use crate::step_log::StepLog;
use serde::{Deserialize, Serialize};

/// Progress of a single solve.
///
/// `ForwardFailed`, `BackwardFailed` and `Solved` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveState {
    /// Nothing has run yet
    Idle,
    /// Reducing to upper-triangular form
    ForwardInProgress,
    /// Forward elimination found no usable pivot
    ForwardFailed,
    /// Matrix is upper-triangular
    ForwardDone,
    /// Substituting from the last unknown upwards
    BackwardInProgress,
    /// Back substitution hit a zero diagonal entry
    BackwardFailed,
    /// Solution available
    Solved,
}

impl SolveState {
    /// Whether the solve can make no further progress
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SolveState::ForwardFailed | SolveState::BackwardFailed | SolveState::Solved
        )
    }
}

/// Runs forward elimination then back substitution on one system and
/// collects the trace of both stages.
///
/// Each call to [`run`](Self::run) starts from a fresh [`StepLog`], so a
/// controller never carries lines over from a previous system.
#[derive(Debug)]
pub struct EliminationController {
    state: SolveState,
    log: StepLog,
}

impl Default for EliminationController {
    fn default() -> Self {
        Self::new()
    }
}

impl EliminationController {
    /// Controller in the `Idle` state with an empty log
    pub fn new() -> Self {
        Self {
            state: SolveState::Idle,
            log: StepLog::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> SolveState {
        self.state
    }

    /// Trace recorded so far
    pub fn log(&self) -> &StepLog {
        &self.log
    }

    /// Take the trace, leaving an empty one behind
    pub fn take_log(&mut self) -> StepLog {
        std::mem::take(&mut self.log)
    }

    /// Solve `matrix · x = rhs`.
    ///
    /// `matrix` is reduced to upper-triangular form and `rhs` transformed in
    /// place; back substitution reads both after the forward stage.
    pub fn run(&mut self, matrix: &mut Matrix, rhs: &mut Vector) -> Result<Vector> {
        self.state = SolveState::Idle;
        self.log = StepLog::new();

        self.log.record("Starting Gaussian Elimination.");

        self.state = SolveState::ForwardInProgress;
        if let Err(err) = forward_eliminate(matrix, Some(&mut *rhs), &mut self.log) {
            self.state = SolveState::ForwardFailed;
            return Err(err);
        }
        self.state = SolveState::ForwardDone;

        self.state = SolveState::BackwardInProgress;
        let solution = match backward_substitute(matrix, rhs, &mut self.log) {
            Ok(x) => x,
            Err(err) => {
                self.state = SolveState::BackwardFailed;
                return Err(err);
            }
        };

        self.log.record("Gaussian Elimination completed.");
        self.state = SolveState::Solved;
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GaussError;

    #[test]
    fn test_run_solves_and_reaches_solved() {
        let mut a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
        let mut b = Vector::from_vec(vec![3.0, 5.0]).unwrap();
        let mut controller = EliminationController::new();
        assert_eq!(controller.state(), SolveState::Idle);

        let x = controller.run(&mut a, &mut b).unwrap();

        assert_eq!(controller.state(), SolveState::Solved);
        assert!(controller.state().is_terminal());
        assert!((x[0] - 0.8).abs() < 1e-12);
        assert!((x[1] - 1.4).abs() < 1e-12);

        let lines = controller.log().lines();
        assert_eq!(lines.first().unwrap(), "Starting Gaussian Elimination.");
        assert_eq!(lines.last().unwrap(), "Gaussian Elimination completed.");
    }

    #[test]
    fn test_run_forward_failure() {
        let mut a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        let mut b = Vector::from_vec(vec![1.0, 2.0]).unwrap();
        let mut controller = EliminationController::new();

        let err = controller.run(&mut a, &mut b).unwrap_err();

        assert!(matches!(err, GaussError::SingularMatrix { column: 1 }));
        assert_eq!(controller.state(), SolveState::ForwardFailed);
        assert!(
            !controller
                .log()
                .lines()
                .iter()
                .any(|l| l == "Starting backward substitution.")
        );
    }

    #[test]
    fn test_run_resets_log_between_systems() {
        let mut controller = EliminationController::new();

        let mut a = Matrix::from_rows(vec![vec![5.0]]).unwrap();
        let mut b = Vector::from_vec(vec![10.0]).unwrap();
        controller.run(&mut a, &mut b).unwrap();
        let first = controller.take_log();
        assert!(controller.log().is_empty());

        let mut a = Matrix::from_rows(vec![vec![5.0]]).unwrap();
        let mut b = Vector::from_vec(vec![10.0]).unwrap();
        controller.run(&mut a, &mut b).unwrap();

        assert_eq!(controller.log(), &first);
    }
}
