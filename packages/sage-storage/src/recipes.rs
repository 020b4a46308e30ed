//! In-memory recipe dataset backing record hydration and the ingredient catalogue.

use std::{
	collections::{HashMap, hash_map::Entry},
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

use serde_json::Map;

use sage_config::Dataset;
use sage_domain::RecipeId;

use crate::{
	Error, Result,
	ingredients::IngredientCounter,
	models::{RecipeRecord, cell_value},
};

#[derive(Debug, Default)]
pub struct RecipeStore {
	records: HashMap<RecipeId, RecipeRecord>,
	ingredients: Vec<String>,
}
impl RecipeStore {
	pub fn load(path: &Path, dataset: &Dataset) -> Result<Self> {
		let file =
			File::open(path).map_err(|err| Error::Read { path: path.to_path_buf(), source: err })?;

		Self::from_reader(BufReader::new(file), dataset)
	}

	pub fn from_reader<R: Read>(reader: R, dataset: &Dataset) -> Result<Self> {
		let delimiter = dataset.ingredient_delimiter.chars().next().ok_or_else(|| {
			Error::InvalidDataset("Ingredient delimiter must be one character.".to_string())
		})?;
		let mut reader =
			csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);
		let headers: Vec<String> =
			reader.headers()?.iter().map(|header| header.trim().to_string()).collect();
		let id_idx = headers
			.iter()
			.position(|header| header == &dataset.recipe_id_column)
			.ok_or_else(|| {
				Error::InvalidDataset(format!("Missing recipe id column {}.", dataset.recipe_id_column))
			})?;
		let ingredient_idx = headers.iter().position(|header| header == &dataset.ingredient_column);

		if ingredient_idx.is_none() {
			tracing::warn!(
				column = dataset.ingredient_column.as_str(),
				"Ingredient column missing; the ingredient catalogue will be empty."
			);
		}

		let mut records = HashMap::new();
		let mut counter = IngredientCounter::default();
		let mut skipped = 0_usize;

		for (row_idx, record) in reader.records().enumerate() {
			let record = record?;

			if let Some(cell) = ingredient_idx.and_then(|idx| record.get(idx)) {
				counter.observe(cell, delimiter);
			}

			let raw_id = record.get(id_idx).unwrap_or_default();
			let Ok(recipe_id) = parse_recipe_key(raw_id) else {
				tracing::warn!(row = row_idx + 1, raw_id, "Skipping row with an invalid recipe id.");

				skipped += 1;

				continue;
			};
			let mut attributes = Map::with_capacity(headers.len());

			for (idx, header) in headers.iter().enumerate() {
				attributes.insert(header.clone(), cell_value(record.get(idx).unwrap_or_default()));
			}

			match records.entry(recipe_id) {
				Entry::Vacant(slot) => {
					slot.insert(RecipeRecord { recipe_id, attributes });
				},
				Entry::Occupied(_) => {
					tracing::warn!(%recipe_id, "Duplicate recipe id; keeping the first row.");
				},
			}
		}

		tracing::debug!(recipes = records.len(), skipped, "Recipe dataset parsed.");

		Ok(Self { records, ingredients: counter.into_sorted() })
	}

	pub fn get(&self, recipe_id: RecipeId) -> Option<&RecipeRecord> {
		self.records.get(&recipe_id)
	}

	pub fn contains(&self, recipe_id: RecipeId) -> bool {
		self.records.contains_key(&recipe_id)
	}

	/// Distinct ingredient names ordered by descending usage, then alphabetically.
	pub fn unique_ingredients(&self) -> &[String] {
		&self.ingredients
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

/// Dataframe loaders hand integer keys back as `38` or `38.0`; both name recipe 38.
fn parse_recipe_key(raw: &str) -> sage_domain::Result<RecipeId> {
	let trimmed = raw.trim();

	match trimmed.strip_suffix(".0") {
		Some(integral) => integral.parse(),
		None => trimmed.parse(),
	}
}
