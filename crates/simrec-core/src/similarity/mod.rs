//! All-pairs cosine similarity over feature vectors
//!
//! The matrix is dense and square, so memory grows with N². It is meant for
//! catalogs in the low thousands of items; larger corpora need a different
//! index altogether. Every rebuild recomputes the whole matrix.

mod cosine;

use std::time::Instant;

use crate::error::{Result, SimrecError};
use crate::trace_time;
use crate::vectorize::FeatureMatrix;

pub use cosine::cosine_similarity;

/// Dense symmetric N×N similarity matrix, row-major `f32`
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    dim: usize,
    values: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute cosine similarity between every pair of feature rows
    ///
    /// Only the upper triangle is computed; the lower one is mirrored. A zero
    /// row scores 0 against every row, itself included.
    pub fn from_features(features: &FeatureMatrix) -> Self {
        let start = Instant::now();
        let n = features.rows();

        let rows: Vec<Vec<(usize, u32)>> = (0..n).map(|r| features.sparse_row(r)).collect();
        let norms: Vec<f64> = rows.iter().map(|row| cosine::norm(row)).collect();

        let mut values = vec![0f32; n * n];
        for i in 0..n {
            if norms[i] == 0.0 {
                continue;
            }
            values[i * n + i] = 1.0;
            for j in (i + 1)..n {
                if norms[j] == 0.0 {
                    continue;
                }
                let score = cosine::from_parts(cosine::dot(&rows[i], &rows[j]), norms[i], norms[j]);
                values[i * n + j] = score;
                values[j * n + i] = score;
            }
        }

        trace_time!(start, "similarity_matrix", rows = n, cols = features.cols());
        SimilarityMatrix { dim: n, values }
    }

    /// Rebuild a matrix from persisted row-major values
    pub fn from_values(dim: usize, values: Vec<f32>) -> Result<Self> {
        let expected = dim.checked_mul(dim).ok_or_else(|| {
            SimrecError::Other(format!("similarity matrix dimension {} overflows", dim))
        })?;
        if values.len() != expected {
            return Err(SimrecError::Other(format!(
                "similarity matrix of dimension {} needs {} values, got {}",
                dim,
                expected,
                values.len()
            )));
        }
        Ok(SimilarityMatrix { dim, values })
    }

    pub fn empty() -> Self {
        SimilarityMatrix {
            dim: 0,
            values: Vec::new(),
        }
    }

    /// Number of rows (and columns)
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.values[i * self.dim + j]
    }

    /// Scores of row `r` against every item, in row order
    pub fn row(&self, r: usize) -> &[f32] {
        &self.values[r * self.dim..(r + 1) * self.dim]
    }

    /// Row-major values, as persisted
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}
