use sage_domain::RecipeId;
use sage_storage::RecipeRecord;

use crate::{Error, Result, SageService};

impl SageService {
	/// Full attribute record for a recipe id given as text.
	///
	/// Unparseable ids and absent records are both `NotFound`.
	pub fn recipe(&self, raw_id: &str) -> Result<&RecipeRecord> {
		let recipe_id: RecipeId = raw_id
			.parse()
			.map_err(|_| Error::NotFound { message: format!("Recipe {raw_id:?} not found.") })?;

		self.recipes
			.get(recipe_id)
			.ok_or_else(|| Error::NotFound { message: format!("Recipe {recipe_id} not found.") })
	}

	/// Ingredient names ordered by descending usage, then alphabetically.
	pub fn unique_ingredients(&self) -> &[String] {
		self.recipes.unique_ingredients()
	}
}
