//! Error types for Gaussian elimination.
//!
//! Every failure is raised where it is detected and propagated unchanged
//! to the caller. The only recovery performed anywhere in the crate is the
//! single row swap that repairs a zero pivot.

use thiserror::Error;

/// Errors that can occur while building containers or solving a system.
#[derive(Debug, Error)]
pub enum GaussError {
    /// A container was requested with a zero dimension.
    #[error("invalid dimension: {rows}x{columns} (all dimensions must be > 0)")]
    InvalidDimension {
        /// Requested number of rows (or vector length)
        rows: usize,
        /// Requested number of columns (1 for vectors)
        columns: usize,
    },

    /// Indexed access beyond the container bounds.
    #[error("index {index} out of range (bound {bound})")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// The exclusive upper bound for that axis
        bound: usize,
    },

    /// Matrix not square, ragged rows, or matrix/vector size disagreement.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected size
        expected: usize,
        /// Actual size provided
        got: usize,
    },

    /// No usable pivot exists in a column.
    #[error("matrix is singular: no non-zero pivot in column {column}")]
    SingularMatrix {
        /// Zero-based column where elimination stopped
        column: usize,
    },

    /// A required argument was absent.
    #[error("required input '{argument}' is missing")]
    NullInput {
        /// Name of the missing argument
        argument: &'static str,
    },

    /// Number of input cells does not match the declared system size.
    #[error("input size mismatch: expected {expected} cells for {name}, got {got}")]
    InputSizeMismatch {
        /// Which input ("matrix" or "right-hand side")
        name: &'static str,
        /// Expected cell count
        expected: usize,
        /// Provided cell count
        got: usize,
    },

    /// A generated system was requested beyond the supported size.
    #[error("system size {size} exceeds the generator limit of {max}")]
    SizeLimit {
        /// Requested size
        size: usize,
        /// Largest size the generator accepts
        max: usize,
    },

    /// A text cell could not be parsed as a number.
    #[error("invalid value in {location}: '{value}'")]
    ParseCell {
        /// Human readable, 1-based cell location
        location: String,
        /// The raw cell text
        value: String,
    },

    /// Reading or writing a system file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A system file is not valid JSON for the expected layout.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for elimination operations.
pub type Result<T> = std::result::Result<T, GaussError>;

impl GaussError {
    /// Returns `true` if this is a shape-related error.
    ///
    /// This includes `InvalidDimension`, `DimensionMismatch`,
    /// `InputSizeMismatch` and `SizeLimit`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            GaussError::InvalidDimension { .. }
                | GaussError::DimensionMismatch { .. }
                | GaussError::InputSizeMismatch { .. }
                | GaussError::SizeLimit { .. }
        )
    }

    /// Returns `true` if the system has no unique solution.
    pub fn is_singular(&self) -> bool {
        matches!(self, GaussError::SingularMatrix { .. })
    }

    /// Returns `true` if the error comes from caller-supplied input
    /// (missing arguments, unparsable cells, wrong cell counts).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GaussError::NullInput { .. }
                | GaussError::ParseCell { .. }
                | GaussError::InputSizeMismatch { .. }
        )
    }
}
