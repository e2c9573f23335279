//! Vocabulary selection over a corpus of tag strings
//!
//! The vocabulary is the set of feature columns. It holds the `max_features`
//! most frequent tokens of the whole corpus; frequency ties are broken by
//! ascending token string so the result depends only on the multiset of
//! tokens, never on item order. Selected terms are laid out in lexical order.

use std::collections::HashMap;

use crate::text::Tokenizer;

/// Ordered set of feature terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    columns: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary of at most `max_features` terms from `corpus`
    pub fn build<S: AsRef<str>>(corpus: &[S], tokenizer: &Tokenizer, max_features: usize) -> Self {
        let mut frequencies: HashMap<String, u64> = HashMap::new();
        for doc in corpus {
            for token in tokenizer.tokenize(doc.as_ref()) {
                *frequencies.entry(token).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, u64)> = frequencies.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(max_features);

        let mut terms: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        terms.sort();

        Self::from_terms(terms)
    }

    fn from_terms(terms: Vec<String>) -> Self {
        let columns = terms
            .iter()
            .enumerate()
            .map(|(col, term)| (term.clone(), col))
            .collect();
        Vocabulary { terms, columns }
    }

    /// Column index of `term`, if it is part of the vocabulary
    pub fn column(&self, term: &str) -> Option<usize> {
        self.columns.get(term).copied()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
