//! Dense storage for linear systems
//!
//! - [`Matrix`]: row-major `f64` matrix with checked and unchecked access
//! - [`Vector`]: fixed-length `f64` vector (right-hand sides and solutions)

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
