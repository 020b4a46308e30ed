//! Vocabulary conventions shared by every SAGE crate.
//!
//! Graph entities are addressed by flat `<entity_type>_<value>` labels. The matching engine filters
//! and strips those labels by prefix, so the helpers here are the single place where the
//! convention is spelled out.

pub mod facet;
pub mod health;
pub mod node;
pub mod prediction;
pub mod recipe;
pub mod relation;

mod error;

pub use error::{Error, Result};
pub use facet::{CriterionTerm, Facet, FacetKind, encode};
pub use health::classify_health_attribute;
pub use node::{EntityKind, NodeId, RECIPE_LABEL_PREFIX};
pub use prediction::PredictionRow;
pub use recipe::RecipeId;
pub use relation::Relation;
