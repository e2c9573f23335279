//! Term-count vectorization over a fixed vocabulary

use crate::text::Tokenizer;
use crate::vocabulary::Vocabulary;

/// Dense N×V matrix of raw term counts, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureMatrix {
    rows: usize,
    cols: usize,
    counts: Vec<u32>,
}

impl FeatureMatrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Counts for one row
    pub fn row(&self, r: usize) -> &[u32] {
        &self.counts[r * self.cols..(r + 1) * self.cols]
    }

    /// Non-zero `(column, count)` pairs of a row, in column order
    pub fn sparse_row(&self, r: usize) -> Vec<(usize, u32)> {
        self.row(r)
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(col, &count)| (col, count))
            .collect()
    }
}

/// Maps tag strings onto count vectors
pub struct Vectorizer<'a> {
    vocabulary: &'a Vocabulary,
    tokenizer: &'a Tokenizer,
}

impl<'a> Vectorizer<'a> {
    pub fn new(vocabulary: &'a Vocabulary, tokenizer: &'a Tokenizer) -> Self {
        Vectorizer {
            vocabulary,
            tokenizer,
        }
    }

    /// Count vocabulary terms in `tags`; out-of-vocabulary tokens are ignored
    pub fn vectorize(&self, tags: &str) -> Vec<u32> {
        let mut counts = vec![0u32; self.vocabulary.len()];
        for token in self.tokenizer.tokenize(tags) {
            if let Some(col) = self.vocabulary.column(&token) {
                counts[col] += 1;
            }
        }
        counts
    }

    /// Vectorize every document, one row per document in input order
    pub fn feature_matrix<S: AsRef<str>>(&self, corpus: &[S]) -> FeatureMatrix {
        let cols = self.vocabulary.len();
        let mut counts = Vec::with_capacity(corpus.len() * cols);
        for doc in corpus {
            counts.extend(self.vectorize(doc.as_ref()));
        }
        FeatureMatrix {
            rows: corpus.len(),
            cols,
            counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectorize_counts_terms() {
        let tokenizer = Tokenizer::default();
        let vocab = Vocabulary::build(&["space alien", "alien robot"], &tokenizer, 10);
        let vectorizer = Vectorizer::new(&vocab, &tokenizer);

        // columns: alien, robot, space
        assert_eq!(vectorizer.vectorize("Alien alien SPACE"), vec![2, 0, 1]);
    }

    #[test]
    fn test_out_of_vocabulary_ignored() {
        let tokenizer = Tokenizer::default();
        let vocab = Vocabulary::build(&["space"], &tokenizer, 10);
        let vectorizer = Vectorizer::new(&vocab, &tokenizer);

        assert_eq!(vectorizer.vectorize("romance space heart"), vec![1]);
        assert_eq!(vectorizer.vectorize("romance heart"), vec![0]);
    }

    #[test]
    fn test_feature_matrix_shape_and_rows() {
        let tokenizer = Tokenizer::default();
        let corpus = ["space wormhole", "space alien robot", ""];
        let vocab = Vocabulary::build(&corpus, &tokenizer, 10);
        let matrix = Vectorizer::new(&vocab, &tokenizer).feature_matrix(&corpus);

        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 4);
        // columns: alien, robot, space, wormhole
        assert_eq!(matrix.row(0), &[0, 0, 1, 1]);
        assert_eq!(matrix.row(1), &[1, 1, 1, 0]);
        assert_eq!(matrix.row(2), &[0, 0, 0, 0]);
        assert_eq!(matrix.sparse_row(1), vec![(0, 1), (1, 1), (2, 1)]);
        assert!(matrix.sparse_row(2).is_empty());
    }

    #[test]
    fn test_empty_vocabulary_gives_zero_width_rows() {
        let tokenizer = Tokenizer::default();
        let vocab = Vocabulary::default();
        let matrix = Vectorizer::new(&vocab, &tokenizer).feature_matrix(&["anything"]);
        assert_eq!(matrix.rows(), 1);
        assert_eq!(matrix.cols(), 0);
        assert!(matrix.row(0).is_empty());
    }
}
