//! Random solvable systems
//!
//! Entries are integers in `1..=9`. Candidates are redrawn until the
//! determinant is exactly non-zero. The determinant is a cofactor
//! expansion, so sizes are capped at [`MAX_GENERATED_SIZE`].

use crate::dense::{Matrix, Vector};
use crate::determinant::is_invertible;
use crate::error::{GaussError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Largest system the generator will draw (10! cofactor terms per check)
pub const MAX_GENERATED_SIZE: usize = 10;

/// A square system with a unique solution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomSystem {
    /// Coefficient matrix
    pub matrix: Matrix,
    /// Right-hand side
    pub rhs: Vector,
}

/// Draw a `size`×`size` system with a non-zero determinant
pub fn generate_solvable_system<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<RandomSystem> {
    if size == 0 {
        return Err(GaussError::InvalidDimension {
            rows: 0,
            columns: 0,
        });
    }
    if size > MAX_GENERATED_SIZE {
        return Err(GaussError::SizeLimit {
            size,
            max: MAX_GENERATED_SIZE,
        });
    }

    let mut attempts = 0usize;
    loop {
        attempts += 1;
        let mut matrix = Matrix::new(size, size)?;
        let mut rhs = Vector::new(size)?;
        for i in 0..size {
            for j in 0..size {
                matrix[(i, j)] = random_entry(rng);
            }
            rhs[i] = random_entry(rng);
        }

        if is_invertible(&matrix)? {
            log::debug!("generated invertible {size}x{size} system after {attempts} draw(s)");
            return Ok(RandomSystem { matrix, rhs });
        }
    }
}

/// Reproducible variant of [`generate_solvable_system`]
pub fn generate_solvable_system_seeded(size: usize, seed: u64) -> Result<RandomSystem> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_solvable_system(size, &mut rng)
}

fn random_entry<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.random_range(1..=9_u8))
}
