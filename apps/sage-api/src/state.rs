use std::sync::Arc;

use sage_config::Config;
use sage_providers::{EmbeddingModel, Vocabulary};
use sage_service::{MatchingContext, SageService};
use sage_storage::RecipeStore;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<SageService>,
}
impl AppState {
	/// Loads every artifact named by `config` and builds the shared service.
	pub fn new(config: Config) -> color_eyre::Result<Self> {
		let artifacts = &config.artifacts;
		let vocabulary = Arc::new(Vocabulary::load(&artifacts.triples_path)?);
		let model = EmbeddingModel::load(&artifacts.model_path, Arc::clone(&vocabulary))?;
		let recipes = RecipeStore::load(&artifacts.recipes_path, &config.dataset)?;

		tracing::info!(
			entities = vocabulary.entity_count(),
			relations = vocabulary.relation_count(),
			triples = vocabulary.triple_count(),
			scoring = model.scoring().as_str(),
			dim = model.dim(),
			recipes = recipes.len(),
			ingredients = recipes.unique_ingredients().len(),
			"Artifacts loaded."
		);

		let service = SageService::new(config, MatchingContext::from_model(model), recipes);

		Ok(Self::from_service(service))
	}

	pub fn from_service(service: SageService) -> Self {
		Self { service: Arc::new(service) }
	}
}
