//! Simrec Core Library
//!
//! Content similarity engine: term-count feature vectors over a bounded
//! vocabulary, an all-pairs cosine similarity matrix persisted with the item
//! catalog as one snapshot, and top-K "most similar" queries.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod recommend;
pub mod records;
pub mod sample;
pub mod similarity;
pub mod snapshot;
pub mod text;
pub mod vectorize;
pub mod vocabulary;

pub use catalog::{Catalog, Item};
pub use engine::Engine;
pub use error::{Result, SimrecError};
pub use recommend::Recommendation;
