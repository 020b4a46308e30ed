use serde::{Deserialize, Serialize};

use sage_domain::{Facet, FacetKind, RecipeId};

use crate::{Error, JoinKind, Result, SageService};

/// Recommendation criteria.
///
/// `cooking_method`, `servings_bin` and `cook_time` are accepted for display but never matched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendRequest {
	pub cooking_method: Option<String>,
	pub servings_bin: Option<String>,
	pub diet_types: Vec<String>,
	pub meal_type: Vec<String>,
	pub cook_time: Option<String>,
	pub health_types: Vec<String>,
	pub cuisine_region: Option<String>,
	pub ingredients: Vec<String>,
	pub top_k: Option<i64>,
	pub flexible: Option<bool>,
}
impl RecommendRequest {
	/// Matchable facets in request order.
	pub fn facets(&self) -> Vec<Facet> {
		let lists = [
			(FacetKind::DietType, &self.diet_types),
			(FacetKind::MealType, &self.meal_type),
			(FacetKind::HealthAttribute, &self.health_types),
		];
		let mut facets = lists
			.into_iter()
			.flat_map(|(kind, values)| {
				values.iter().map(move |value| Facet::new(kind, value.as_str()))
			})
			.collect::<Vec<_>>();

		if let Some(region) = &self.cuisine_region {
			facets.push(Facet::new(FacetKind::CuisineRegion, region.as_str()));
		}

		facets.extend(
			self.ingredients.iter().map(|value| Facet::new(FacetKind::Ingredient, value.as_str())),
		);

		facets
	}
}

impl SageService {
	/// Ranked recipe ids for `req`.
	///
	/// `top_k` defaults to `matching.default_top_k` and is clamped to `matching.max_top_k` when that is
	/// set. Any empty outcome, including a request without matchable criteria, is `NoMatches`.
	pub async fn recommend(&self, req: RecommendRequest) -> Result<Vec<RecipeId>> {
		let matching = &self.cfg.matching;
		let top_k = req.top_k.unwrap_or_else(|| i64::from(matching.default_top_k));
		let top_k = match matching.max_top_k {
			Some(max_top_k) => top_k.min(i64::from(max_top_k)),
			None => top_k,
		};
		let join = JoinKind::from_flexible(req.flexible.unwrap_or(matching.flexible_default));
		let terms = sage_domain::encode(&req.facets());
		let recipe_ids = self.matcher().rank(&terms, top_k, join).await?;

		tracing::info!(
			terms = terms.len(),
			top_k,
			join = join.as_str(),
			results = recipe_ids.len(),
			"Recommendation ranked."
		);

		if recipe_ids.is_empty() {
			return Err(Error::NoMatches);
		}

		Ok(recipe_ids)
	}
}
