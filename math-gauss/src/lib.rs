//! Dense Gaussian elimination with an auditable step trace
//!
//! This crate solves square linear systems `A·x = b` by forward elimination
//! followed by back substitution, recording every pivot decision, row
//! update and resolved unknown as a line of text.
//!
//! # Features
//!
//! - **Containers**: bounds-checked dense [`Matrix`] and [`Vector`]
//! - **Elimination**: zero-avoidance pivoting (first non-zero entry below the
//!   pivot, exact comparison against zero), no magnitude-based pivoting
//! - **Step trace**: a fresh [`StepLog`] per solve, in chronological order
//! - **Helpers**: cofactor determinant, random solvable systems, text-cell
//!   input conversion, JSON system files and reports
//!
//! # Example
//!
//! ```
//! use math_audio_gauss::{Matrix, Vector, solve};
//!
//! let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
//! let b = Vector::from_vec(vec![3.0, 5.0]).unwrap();
//!
//! let solution = solve(&a, &b).unwrap();
//! assert!((solution.x[0] - 0.8).abs() < 1e-12);
//! assert!((solution.x[1] - 1.4).abs() < 1e-12);
//! println!("{}", solution.log_text());
//! ```

pub mod config;
pub mod dense;
pub mod determinant;
pub mod elimination;
pub mod error;
pub mod generator;
pub mod input;
pub mod output;
pub mod row_ops;
pub mod solve;
pub mod step_log;

// Re-export main types
pub use dense::{Matrix, Vector};
pub use error::{GaussError, Result};
pub use step_log::StepLog;

// Re-export elimination stages
pub use elimination::{
    EliminationController, SolveState, backward_substitute, forward_eliminate,
};
pub use solve::{LinearSystemSolver, Solution, solve};

// Re-export helpers
pub use config::{SolverConfig, SystemFile};
pub use determinant::{determinant, is_invertible, submatrix};
pub use generator::{
    MAX_GENERATED_SIZE, RandomSystem, generate_solvable_system, generate_solvable_system_seeded,
};
pub use input::{ConvertedInput, convert_input};
pub use output::{SolveReport, relative_residual};
pub use row_ops::{subtract_row, swap_rows, try_swap_rows_for_pivot};
