//! Relation classifier for free-text health attributes.
//!
//! Rules are evaluated top to bottom and the first hit wins. The fat rule excludes anything
//! mentioning "saturated", which is what lets `saturated_fat` fall through to its own rule even
//! though it also contains "fat".

use crate::relation::Relation;

#[derive(Clone, Copy, Debug)]
enum Pattern {
	Contains(&'static str),
	ContainsExcluding { needle: &'static str, excluded: &'static str },
}
impl Pattern {
	fn matches(self, lowered: &str) -> bool {
		match self {
			Self::Contains(needle) => lowered.contains(needle),
			Self::ContainsExcluding { needle, excluded } =>
				lowered.contains(needle) && !lowered.contains(excluded),
		}
	}
}

const HEALTH_RULES: [(Pattern, Relation); 9] = [
	(Pattern::Contains("protein"), Relation::HasProteinLevel),
	(Pattern::Contains("carb"), Relation::HasCarbLevel),
	(Pattern::ContainsExcluding { needle: "fat", excluded: "saturated" }, Relation::HasFatLevel),
	(Pattern::Contains("saturated_fat"), Relation::HasSaturatedFatLevel),
	(Pattern::Contains("calorie"), Relation::HasCalorieLevel),
	(Pattern::Contains("sodium"), Relation::HasSodiumLevel),
	(Pattern::Contains("sugar"), Relation::HasSugarLevel),
	(Pattern::Contains("fiber"), Relation::HasFiberLevel),
	(Pattern::Contains("cholesterol"), Relation::HasCholesterolLevel),
];

pub fn classify_health_attribute(value: &str) -> Relation {
	let lowered = value.to_lowercase();

	HEALTH_RULES
		.iter()
		.find(|(pattern, _)| pattern.matches(&lowered))
		.map(|(_, relation)| *relation)
		.unwrap_or(Relation::HasHealthAttribute)
}
