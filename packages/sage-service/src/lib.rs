pub mod matching;
pub mod recipe;
pub mod recommend;

mod error;

pub use error::{Error, Result};
pub use matching::{CriteriaMatcher, MatchPolicy, merge::JoinKind};
pub use recommend::RecommendRequest;

use std::sync::Arc;

use sage_config::Config;
use sage_domain::PredictionRow;
use sage_providers::{EmbeddingModel, Vocabulary};
use sage_storage::RecipeStore;

pub type OracleResult<T> = std::result::Result<T, OracleError>;

/// Answers "which heads `h` satisfy `h --relation--> tail`", scoring every head in the vocabulary.
pub trait LinkPredictionOracle
where
	Self: Send + Sync,
{
	fn predict(&self, relation: &str, tail: &str) -> OracleResult<Vec<PredictionRow>>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
	/// The relation or tail is unknown to the model. Matching treats this as no predictions.
	#[error("Vocabulary miss: {message}")]
	VocabularyMiss { message: String },
	#[error("Oracle fault: {message}")]
	Fault { message: String },
}

/// Read-only state shared by every matching request.
#[derive(Clone)]
pub struct MatchingContext {
	pub oracle: Arc<dyn LinkPredictionOracle>,
	pub vocabulary: Option<Arc<Vocabulary>>,
}
impl MatchingContext {
	pub fn new(oracle: Arc<dyn LinkPredictionOracle>) -> Self {
		Self { oracle, vocabulary: None }
	}

	pub fn with_vocabulary(mut self, vocabulary: Arc<Vocabulary>) -> Self {
		self.vocabulary = Some(vocabulary);

		self
	}

	pub fn from_model(model: EmbeddingModel) -> Self {
		let vocabulary = Arc::clone(model.vocabulary());

		Self::new(Arc::new(DefaultOracle { model })).with_vocabulary(vocabulary)
	}
}

pub struct SageService {
	pub cfg: Config,
	pub context: MatchingContext,
	pub recipes: RecipeStore,
}
impl SageService {
	pub fn new(cfg: Config, context: MatchingContext, recipes: RecipeStore) -> Self {
		Self { cfg, context, recipes }
	}

	pub fn matcher(&self) -> CriteriaMatcher<'_> {
		CriteriaMatcher::new(&self.context, MatchPolicy::from_config(&self.cfg.matching))
	}
}

struct DefaultOracle {
	model: EmbeddingModel,
}

impl LinkPredictionOracle for DefaultOracle {
	fn predict(&self, relation: &str, tail: &str) -> OracleResult<Vec<PredictionRow>> {
		self.model.predict_heads(relation, tail).map_err(|err| {
			if err.is_vocabulary_miss() {
				OracleError::VocabularyMiss { message: err.to_string() }
			} else {
				OracleError::Fault { message: err.to_string() }
			}
		})
	}
}
