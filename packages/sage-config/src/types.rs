use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub artifacts: Artifacts,
	#[serde(default)]
	pub dataset: Dataset,
	#[serde(default)]
	pub matching: Matching,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
	#[serde(default = "default_cors_permissive")]
	pub cors_permissive: bool,
}

/// Read-only files produced by the graph-building and training pipelines.
#[derive(Debug, Clone, Deserialize)]
pub struct Artifacts {
	/// `Head,Relation,Tail` CSV used to rebuild the model vocabulary.
	pub triples_path: PathBuf,
	/// Trained embedding tables, indexed by vocabulary id.
	pub model_path: PathBuf,
	/// Tabular recipe records used for hydration and the ingredient catalogue.
	pub recipes_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Dataset {
	pub recipe_id_column: String,
	pub ingredient_column: String,
	pub ingredient_delimiter: String,
}
impl Default for Dataset {
	fn default() -> Self {
		Self {
			recipe_id_column: "RecipeId".to_string(),
			ingredient_column: "BestUsdaIngredientName".to_string(),
			ingredient_delimiter: ";".to_string(),
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Matching {
	pub default_top_k: u32,
	/// Upper bound applied to every request's `top_k`. Unset means no cap.
	pub max_top_k: Option<u32>,
	pub flexible_default: bool,
	pub parallel_queries: bool,
	/// Deadline for the whole oracle fan-out of one request. Zero disables it.
	pub oracle_timeout_ms: u64,
}
impl Default for Matching {
	fn default() -> Self {
		Self {
			default_top_k: 5,
			max_top_k: None,
			flexible_default: false,
			parallel_queries: true,
			oracle_timeout_ms: 0,
		}
	}
}

fn default_cors_permissive() -> bool {
	true
}
