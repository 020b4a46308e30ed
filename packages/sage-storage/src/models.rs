use serde::Serialize;
use serde_json::{Map, Value};

use sage_domain::RecipeId;

/// One dataset row keyed by its recipe id.
///
/// Every column of the source row is present in `attributes`; a blank cell is `null`, so a found
/// record with missing attributes stays distinguishable from an absent record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecipeRecord {
	#[serde(skip)]
	pub recipe_id: RecipeId,
	#[serde(flatten)]
	pub attributes: Map<String, Value>,
}
impl RecipeRecord {
	pub fn attribute(&self, column: &str) -> Option<&Value> {
		self.attributes.get(column).filter(|value| !value.is_null())
	}
}

/// Types a raw CSV cell: integers, then finite floats, then text. Blank and `nan` cells are null.
pub fn cell_value(raw: &str) -> Value {
	let trimmed = raw.trim();

	if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
		return Value::Null;
	}
	if let Ok(int) = trimmed.parse::<i64>() {
		return Value::from(int);
	}
	if let Ok(float) = trimmed.parse::<f64>()
		&& let Some(number) = serde_json::Number::from_f64(float)
	{
		return Value::Number(number);
	}

	Value::String(raw.to_string())
}
