mod error;

pub use error::{Error, Result};

use std::{
	collections::{HashMap, HashSet},
	fs,
	path::{Path, PathBuf},
	sync::{
		Mutex,
		atomic::{AtomicUsize, Ordering},
	},
	thread,
	time::Duration,
};

use tempfile::TempDir;

use sage_config::{Artifacts, Config, Dataset, Matching, Service};
use sage_domain::PredictionRow;
use sage_service::{LinkPredictionOracle, OracleError, OracleResult};

/// Five entities, two relations, three recipes.
///
/// With `transe` at dimension one, `hasDietType -> diet_type_Vegan` ranks recipes 38, 39, 40 and
/// `containsIngredient -> ingredient_rice` ranks them 40, 39, 38.
pub const SAMPLE_TRIPLES_CSV: &str = "Head,Relation,Tail\n\
\"('recipe', 38)\",hasDietType,\"('diet_type', 'Vegan')\"\n\
\"('recipe', 39)\",hasDietType,\"('diet_type', 'Vegan')\"\n\
recipe_39,containsIngredient,ingredient_rice\n\
\"('recipe', 40)\",containsIngredient,\"('ingredient', 'rice')\"\n";

/// Rows follow the sorted vocabulary: `diet_type_Vegan`, `ingredient_rice`, `recipe_38`,
/// `recipe_39`, `recipe_40` and `containsIngredient`, `hasDietType`.
pub const SAMPLE_MODEL_JSON: &str = r#"{
	"scoring": "transe",
	"entity_embeddings": [[0.0], [10.0], [1.0], [4.0], [8.0]],
	"relation_embeddings": [[1.0], [0.0]]
}"#;

pub const SAMPLE_RECIPES_CSV: &str = "RecipeId,Name,CuisineRegion,Calories,BestUsdaIngredientName\n\
38,Lemon Rice,Asian,310.5,rice;lemon\n\
39,Tofu Bowl,Asian,420,rice;tofu\n\
40,Fried Rice,,515,rice;egg;onion\n";

/// Map-backed oracle with a call log.
///
/// Unknown `(relation, tail)` pairs answer with a vocabulary miss.
#[derive(Default)]
pub struct StaticOracle {
	answers: HashMap<(String, String), Vec<PredictionRow>>,
	faults: HashSet<(String, String)>,
	delay: Option<Duration>,
	calls: AtomicUsize,
	queries: Mutex<Vec<(String, String)>>,
}
impl StaticOracle {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_rows(mut self, relation: &str, tail: &str, rows: &[(&str, f32)]) -> Self {
		let rows = rows.iter().map(|(head, score)| PredictionRow::new(*head, *score)).collect();

		self.answers.insert((relation.to_string(), tail.to_string()), rows);

		self
	}

	pub fn with_fault(mut self, relation: &str, tail: &str) -> Self {
		self.faults.insert((relation.to_string(), tail.to_string()));

		self
	}

	/// Blocks every query for `delay` before answering.
	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = Some(delay);

		self
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	/// Queries received so far, in arrival order.
	pub fn queries(&self) -> Vec<(String, String)> {
		self.queries.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}
}

impl LinkPredictionOracle for StaticOracle {
	fn predict(&self, relation: &str, tail: &str) -> OracleResult<Vec<PredictionRow>> {
		if let Some(delay) = self.delay {
			thread::sleep(delay);
		}

		let key = (relation.to_string(), tail.to_string());

		self.calls.fetch_add(1, Ordering::SeqCst);
		self.queries.lock().unwrap_or_else(|err| err.into_inner()).push(key.clone());

		if self.faults.contains(&key) {
			return Err(OracleError::Fault {
				message: format!("Injected fault for {relation} -> {tail}."),
			});
		}

		self.answers.get(&key).cloned().ok_or_else(|| OracleError::VocabularyMiss {
			message: format!("No answers for {relation} -> {tail}."),
		})
	}
}

/// Artifact files in a private temporary directory, removed on drop.
pub struct TempArtifacts {
	_dir: TempDir,
	triples_path: PathBuf,
	model_path: PathBuf,
	recipes_path: PathBuf,
}
impl TempArtifacts {
	pub fn new(triples_csv: &str, model_json: &str, recipes_csv: &str) -> Result<Self> {
		let dir = tempfile::Builder::new().prefix("sage_artifacts_").tempdir()?;
		let triples_path = write_file(dir.path(), "triples.csv", triples_csv)?;
		let model_path = write_file(dir.path(), "model.json", model_json)?;
		let recipes_path = write_file(dir.path(), "recipes.csv", recipes_csv)?;

		Ok(Self { _dir: dir, triples_path, model_path, recipes_path })
	}

	pub fn sample() -> Result<Self> {
		Self::new(SAMPLE_TRIPLES_CSV, SAMPLE_MODEL_JSON, SAMPLE_RECIPES_CSV)
	}

	pub fn artifacts(&self) -> Artifacts {
		Artifacts {
			triples_path: self.triples_path.clone(),
			model_path: self.model_path.clone(),
			recipes_path: self.recipes_path.clone(),
		}
	}

	/// Config pointing at these artifacts with default dataset and matching sections.
	pub fn config(&self) -> Config {
		Config {
			service: Service {
				http_bind: "127.0.0.1:0".to_string(),
				log_level: "info".to_string(),
				cors_permissive: true,
			},
			artifacts: self.artifacts(),
			dataset: Dataset::default(),
			matching: Matching::default(),
		}
	}
}

fn write_file(dir: &Path, name: &str, payload: &str) -> Result<PathBuf> {
	let path = dir.join(name);

	fs::write(&path, payload)
		.map_err(|err| Error::Message(format!("Failed to write {}: {err}.", path.display())))?;

	Ok(path)
}
