//! Loaders for the trained knowledge-graph embedding artifacts.
//!
//! The triples file rebuilds the entity and relation id mapping the model was trained with, and
//! the model file holds one embedding row per id. Together they answer link-prediction queries.

pub mod kge;
pub mod scoring;
pub mod vocabulary;

mod error;

pub use error::{Error, Result};
pub use kge::EmbeddingModel;
pub use scoring::ScoringFunction;
pub use vocabulary::Vocabulary;
