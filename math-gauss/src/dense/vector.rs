//! Dense fixed-length vector of `f64` values

use crate::error::{GaussError, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense vector with a non-zero length fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    /// Create a zero-filled vector
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(GaussError::InvalidDimension {
                rows: 0,
                columns: 1,
            });
        }
        Ok(Self {
            data: Array1::zeros(len),
        })
    }

    /// Create a vector from its entries
    pub fn from_vec(values: Vec<f64>) -> Result<Self> {
        Self::from_array(Array1::from_vec(values))
    }

    /// Wrap an existing ndarray
    pub fn from_array(data: Array1<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(GaussError::InvalidDimension {
                rows: 0,
                columns: 1,
            });
        }
        Ok(Self { data })
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.data[index])
    }

    /// Overwrite the entry at `index`
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        self.check_index(index)?;
        self.data[index] = value;
        Ok(())
    }

    /// Exchange two entries
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.data.swap(a, b);
        Ok(())
    }

    /// Independent copy with its own storage
    pub fn deep_copy(&self) -> Self {
        Self {
            data: self.data.to_owned(),
        }
    }

    /// Borrow the backing array
    pub fn as_array(&self) -> &Array1<f64> {
        &self.data
    }

    /// Iterate over the entries
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }

    /// Copy the entries into a `Vec`
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    /// Euclidean distance to another vector of the same length
    pub fn distance(&self, other: &Vector) -> Result<f64> {
        if other.len() != self.len() {
            return Err(GaussError::DimensionMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt())
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(GaussError::IndexOutOfRange {
                index,
                bound: self.len(),
            });
        }
        Ok(())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = GaussError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Vector::from_vec(values)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.data.to_vec()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.data.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", parts.join(", "))
    }
}
