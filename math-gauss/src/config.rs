//! JSON system files
//!
//! ```json
//! {
//!   "matrix": [[2.0, 1.0], [1.0, 3.0]],
//!   "rhs": [3.0, 5.0],
//!   "solver": { "emit_log": true, "verify_tolerance": 1e-9 }
//! }
//! ```

use crate::dense::{Matrix, Vector};
use crate::error::Result;
use crate::generator::RandomSystem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A linear system as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemFile {
    /// Coefficient matrix, one list per row
    pub matrix: Matrix,
    /// Right-hand side
    pub rhs: Vector,
    /// Solver options
    #[serde(default)]
    pub solver: SolverConfig,
}

/// Options for a solve run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Include the step trace in reports
    #[serde(default = "default_emit_log")]
    pub emit_log: bool,
    /// Relative residual above which a solution is flagged as inaccurate
    #[serde(default = "default_verify_tolerance")]
    pub verify_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            emit_log: default_emit_log(),
            verify_tolerance: default_verify_tolerance(),
        }
    }
}

fn default_emit_log() -> bool {
    true
}

fn default_verify_tolerance() -> f64 {
    1e-9
}

impl SystemFile {
    /// System with default solver options
    pub fn new(matrix: Matrix, rhs: Vector) -> Self {
        Self {
            matrix,
            rhs,
            solver: SolverConfig::default(),
        }
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save as JSON
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl From<RandomSystem> for SystemFile {
    fn from(system: RandomSystem) -> Self {
        SystemFile::new(system.matrix, system.rhs)
    }
}
