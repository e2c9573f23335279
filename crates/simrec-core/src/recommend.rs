//! Top-K similar item queries

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::{Result, SimrecError};
use crate::model::Model;

/// One entry of a recommendation list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub score: f32,
    /// Catalog row of the recommended item
    pub row: usize,
}

/// The `k` items most similar to the first item titled `title`
///
/// The query item is never part of its own result. Scores are sorted
/// descending; equal scores keep catalog order (smaller row first).
pub fn recommend(model: &Model, title: &str, k: usize) -> Result<Vec<Recommendation>> {
    if model.is_empty() {
        return Err(SimrecError::empty_model("catalog is empty"));
    }

    let catalog = model.catalog();
    let query_row = catalog.row_of(title)?;
    let scores = model.similarity().row(query_row);

    let mut ranked: Vec<(usize, f32)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|&(row, _)| row != query_row)
        .collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(k);

    ranked
        .into_iter()
        .map(|(row, score)| {
            let item = catalog.get_by_row(row).ok_or_else(|| {
                SimrecError::Other(format!("similarity row {} has no catalog item", row))
            })?;
            Ok(Recommendation {
                id: item.id.clone(),
                title: item.title.clone(),
                score,
                row,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Item};
    use crate::config::EngineConfig;

    fn model(items: Vec<Item>) -> Model {
        let mut catalog = Catalog::new();
        catalog.append(items).unwrap();
        Model::build(catalog, &EngineConfig::default())
    }

    fn abc() -> Model {
        model(vec![
            Item::new("a", "A", "space wormhole survival"),
            Item::new("b", "B", "space alien robot"),
            Item::new("c", "C", "romance heart love"),
        ])
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_shared_term_ranks_first() {
        let recs = recommend(&abc(), "A", 2).unwrap();
        assert_eq!(titles(&recs), vec!["B", "C"]);
        assert!(recs[0].score > recs[1].score);
        assert_eq!(recs[1].score, 0.0);
    }

    #[test]
    fn test_query_item_excluded() {
        for title in ["A", "B", "C"] {
            let recs = recommend(&abc(), title, 10).unwrap();
            assert_eq!(recs.len(), 2);
            assert!(recs.iter().all(|r| r.title != title));
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let m = model(vec![
            Item::new("q", "Query", "space"),
            Item::new("x", "Late", "romance"),
            Item::new("y", "Early", "heart"),
            Item::new("z", "Match", "space"),
        ]);
        let recs = recommend(&m, "Query", 3).unwrap();
        assert_eq!(titles(&recs), vec!["Match", "Late", "Early"]);
        assert_eq!(recs[1].row, 1);
        assert_eq!(recs[2].row, 2);
    }

    #[test]
    fn test_scores_non_increasing() {
        let m = model(vec![
            Item::new("1", "One", "crime drama mafia"),
            Item::new("2", "Two", "crime drama"),
            Item::new("3", "Three", "crime"),
            Item::new("4", "Four", "drama mafia family"),
            Item::new("5", "Five", "space"),
        ]);
        let recs = recommend(&m, "One", 4).unwrap();
        for pair in recs.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_k_limits_and_zero_k() {
        assert_eq!(recommend(&abc(), "A", 1).unwrap().len(), 1);
        assert!(recommend(&abc(), "A", 0).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_title() {
        let err = recommend(&abc(), "Z", 5).unwrap_err();
        assert!(matches!(err, SimrecError::NotFound { .. }));
    }

    #[test]
    fn test_empty_model_rejected() {
        let empty = Model::build(Catalog::new(), &EngineConfig::default());
        let err = recommend(&empty, "A", 5).unwrap_err();
        assert!(matches!(err, SimrecError::EmptyModel { .. }));
    }

    #[test]
    fn test_single_item_catalog() {
        let m = model(vec![Item::new("a", "Solo", "space")]);
        assert!(recommend(&m, "Solo", 5).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_title_queries_first_row() {
        let m = model(vec![
            Item::new("1", "Twin", "space"),
            Item::new("2", "Other", "space"),
            Item::new("3", "Twin", "romance"),
        ]);
        let recs = recommend(&m, "Twin", 2).unwrap();
        // row 0 is the query; the second "Twin" at row 2 is a regular candidate
        assert_eq!(recs[0].row, 1);
        assert_eq!(recs[1].row, 2);
    }
}
