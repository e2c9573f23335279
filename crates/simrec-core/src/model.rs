//! The queryable model: a catalog paired with its similarity matrix

use std::time::Instant;

use tracing::debug;

use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::error::{Result, SimrecError};
use crate::similarity::SimilarityMatrix;
use crate::trace_time;
use crate::vectorize::Vectorizer;
use crate::vocabulary::Vocabulary;

/// Catalog and similarity matrix, always the same size and never mutated
/// once built
#[derive(Debug, Clone)]
pub struct Model {
    catalog: Catalog,
    similarity: SimilarityMatrix,
    vocabulary_size: usize,
}

impl Model {
    /// Pair a catalog with a matrix, rejecting mismatched sizes
    pub fn new(
        catalog: Catalog,
        similarity: SimilarityMatrix,
        vocabulary_size: usize,
    ) -> Result<Self> {
        if catalog.size() != similarity.dim() {
            return Err(SimrecError::Other(format!(
                "catalog has {} items but similarity matrix is {}x{}",
                catalog.size(),
                similarity.dim(),
                similarity.dim()
            )));
        }
        Ok(Model {
            catalog,
            similarity,
            vocabulary_size,
        })
    }

    /// Full rebuild: vocabulary, features and similarity over the whole catalog
    pub fn build(catalog: Catalog, config: &EngineConfig) -> Self {
        let start = Instant::now();
        let tokenizer = config.tokenizer();

        let (similarity, vocabulary_size) = {
            let corpus = catalog.tags();

            let vocabulary = Vocabulary::build(&corpus, &tokenizer, config.max_features);
            trace_time!(start, "vocabulary", terms = vocabulary.len());

            let features = Vectorizer::new(&vocabulary, &tokenizer).feature_matrix(&corpus);
            trace_time!(start, "feature_matrix", rows = features.rows());

            let zero_rows = (0..features.rows())
                .filter(|&r| features.row(r).iter().all(|&c| c == 0))
                .count();
            if zero_rows > 0 {
                debug!(zero_rows, "items without vocabulary terms score 0 against everything");
            }

            (SimilarityMatrix::from_features(&features), vocabulary.len())
        };

        Model {
            catalog,
            similarity,
            vocabulary_size,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    pub fn size(&self) -> usize {
        self.catalog.size()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
