//! User criteria and their translation into link-prediction query terms.

use serde::{Deserialize, Serialize};

use crate::{health, node::EntityKind, relation::Relation};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetKind {
	DietType,
	MealType,
	HealthAttribute,
	CuisineRegion,
	Ingredient,
}
impl FacetKind {
	pub fn entity_kind(self) -> EntityKind {
		match self {
			Self::DietType => EntityKind::DietType,
			Self::MealType => EntityKind::MealType,
			Self::HealthAttribute => EntityKind::HealthAttribute,
			Self::CuisineRegion => EntityKind::CuisineRegion,
			Self::Ingredient => EntityKind::Ingredient,
		}
	}

	/// Position of the kind's group in encoded output.
	fn group_order(self) -> u8 {
		match self {
			Self::DietType => 0,
			Self::MealType => 1,
			Self::HealthAttribute => 2,
			Self::CuisineRegion => 3,
			Self::Ingredient => 4,
		}
	}

	fn relation_for(self, value: &str) -> Relation {
		match self {
			Self::DietType => Relation::HasDietType,
			Self::MealType => Relation::IsForMealType,
			Self::HealthAttribute => health::classify_health_attribute(value),
			Self::CuisineRegion => Relation::HasCuisineRegion,
			Self::Ingredient => Relation::ContainsIngredient,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Facet {
	kind: FacetKind,
	raw_value: String,
}
impl Facet {
	pub fn new(kind: FacetKind, raw_value: impl Into<String>) -> Self {
		Self { kind, raw_value: raw_value.into() }
	}

	pub fn kind(&self) -> FacetKind {
		self.kind
	}

	/// Canonical query term for this facet, or `None` when the value is blank.
	pub fn to_term(&self) -> Option<CriterionTerm> {
		let value = self.raw_value.trim();

		if value.is_empty() {
			return None;
		}

		let tail_label = format!("{}_{value}", self.kind.entity_kind().as_str());

		Some(CriterionTerm { tail_label, relation: self.kind.relation_for(value) })
	}
}

/// A `(tail, relation)` pair asking the oracle which heads satisfy `head --relation--> tail`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CriterionTerm {
	pub tail_label: String,
	pub relation: Relation,
}
impl CriterionTerm {
	pub fn new(tail_label: impl Into<String>, relation: Relation) -> Self {
		Self { tail_label: tail_label.into(), relation }
	}
}

/// Encodes facets into query terms.
///
/// Output is grouped as diet types, meal types, health attributes, the cuisine region, then
/// ingredients, keeping input order within a group. Blank values are dropped and only the first
/// non-blank cuisine region is kept.
pub fn encode(facets: &[Facet]) -> Vec<CriterionTerm> {
	let mut keyed: Vec<(u8, CriterionTerm)> = Vec::with_capacity(facets.len());
	let mut has_region = false;

	for facet in facets {
		let Some(term) = facet.to_term() else { continue };

		if facet.kind == FacetKind::CuisineRegion {
			if has_region {
				continue;
			}

			has_region = true;
		}

		keyed.push((facet.kind.group_order(), term));
	}

	// Stable, so input order survives inside each group.
	keyed.sort_by_key(|(group, _)| *group);

	keyed.into_iter().map(|(_, term)| term).collect()
}
