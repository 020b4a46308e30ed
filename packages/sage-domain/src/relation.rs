use serde::{Deserialize, Serialize};

/// Edge labels of the recipe graph that the matching engine queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
	#[serde(rename = "hasDietType")]
	HasDietType,
	#[serde(rename = "isForMealType")]
	IsForMealType,
	#[serde(rename = "hasCuisineRegion")]
	HasCuisineRegion,
	#[serde(rename = "containsIngredient")]
	ContainsIngredient,
	HasProteinLevel,
	HasCarbLevel,
	HasFatLevel,
	HasSaturatedFatLevel,
	HasCalorieLevel,
	HasSodiumLevel,
	HasSugarLevel,
	HasFiberLevel,
	HasCholesterolLevel,
	HasHealthAttribute,
}
impl Relation {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::HasDietType => "hasDietType",
			Self::IsForMealType => "isForMealType",
			Self::HasCuisineRegion => "hasCuisineRegion",
			Self::ContainsIngredient => "containsIngredient",
			Self::HasProteinLevel => "HasProteinLevel",
			Self::HasCarbLevel => "HasCarbLevel",
			Self::HasFatLevel => "HasFatLevel",
			Self::HasSaturatedFatLevel => "HasSaturatedFatLevel",
			Self::HasCalorieLevel => "HasCalorieLevel",
			Self::HasSodiumLevel => "HasSodiumLevel",
			Self::HasSugarLevel => "HasSugarLevel",
			Self::HasFiberLevel => "HasFiberLevel",
			Self::HasCholesterolLevel => "HasCholesterolLevel",
			Self::HasHealthAttribute => "HasHealthAttribute",
		}
	}
}

impl std::fmt::Display for Relation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
