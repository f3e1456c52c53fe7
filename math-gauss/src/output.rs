//! Solve reports for display and JSON export

use crate::config::SolverConfig;
use crate::dense::{Matrix, Vector};
use crate::error::Result;
use crate::solve::Solution;
use serde::{Deserialize, Serialize};
use std::fmt::Write as FmtWrite;

/// Everything a front end needs to present a finished solve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// Input matrix as given by the caller
    pub original: Matrix,
    /// Input right-hand side
    pub rhs: Vector,
    /// Upper-triangular reduction
    pub upper: Matrix,
    /// Right-hand side after forward elimination
    pub transformed_rhs: Vector,
    /// Solution vector
    pub solution: Vector,
    /// `‖A·x − b‖ / ‖b‖` (absolute when `b` is zero)
    pub residual: f64,
    /// Whether `residual` is within the configured tolerance
    pub accurate: bool,
    /// Step trace, empty when disabled in the config
    pub log: Vec<String>,
}

impl SolveReport {
    /// Build a report and measure the residual against the original system
    pub fn new(
        original: &Matrix,
        rhs: &Vector,
        solution: &Solution,
        config: &SolverConfig,
    ) -> Result<Self> {
        let residual = relative_residual(original, rhs, &solution.x)?;
        let accurate = residual <= config.verify_tolerance;
        if !accurate {
            log::warn!(
                "relative residual {:.3e} exceeds tolerance {:.3e}",
                residual,
                config.verify_tolerance
            );
        }

        Ok(Self {
            original: original.deep_copy(),
            rhs: rhs.deep_copy(),
            upper: solution.upper.deep_copy(),
            transformed_rhs: solution.transformed_rhs.deep_copy(),
            solution: solution.x.deep_copy(),
            residual,
            accurate,
            log: if config.emit_log {
                solution.log.lines().to_vec()
            } else {
                Vec::new()
            },
        })
    }

    /// Plain-text rendering, values with two decimals
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Original matrix:");
        let _ = write!(out, "{}", self.original);
        let _ = writeln!(out, "Right-hand side: {}", self.rhs);
        let _ = writeln!(out);
        let _ = writeln!(out, "Upper triangular matrix:");
        let _ = write!(out, "{}", self.upper);
        let _ = writeln!(out, "Transformed right-hand side: {}", self.transformed_rhs);
        let _ = writeln!(out);
        let _ = writeln!(out, "Solution:");
        for (i, value) in self.solution.iter().enumerate() {
            let _ = writeln!(out, "x_{} = {:.2}", i + 1, value);
        }
        let _ = writeln!(out, "Relative residual: {:.3e}", self.residual);

        if !self.log.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Calculation log:");
            for line in &self.log {
                let _ = writeln!(out, "{}", line);
            }
        }
        out
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `‖A·x − b‖ / ‖b‖`, falling back to the absolute residual for `b = 0`
pub fn relative_residual(matrix: &Matrix, rhs: &Vector, x: &Vector) -> Result<f64> {
    let ax = matrix.dot(x)?;
    let error = ax.distance(rhs)?;
    let b_norm = rhs.iter().map(|v| v * v).sum::<f64>().sqrt();
    Ok(if b_norm > 0.0 { error / b_norm } else { error })
}
