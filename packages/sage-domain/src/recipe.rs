use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, RECIPE_LABEL_PREFIX, Result};

/// Native key of a recipe row in the tabular dataset.
///
/// Serialized as a string because the HTTP surface returns identifiers as JSON strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(u64);
impl RecipeId {
	pub fn new(value: u64) -> Self {
		Self(value)
	}

	pub fn get(self) -> u64 {
		self.0
	}

	/// Strips the recipe prefix from a graph label and parses the remainder.
	pub fn from_label(label: &str) -> Result<Self> {
		let value = label
			.strip_prefix(RECIPE_LABEL_PREFIX)
			.ok_or_else(|| Error::UnknownLabelPrefix { label: label.to_string() })?;

		value.parse()
	}

	pub fn label(self) -> String {
		format!("{RECIPE_LABEL_PREFIX}{}", self.0)
	}
}

impl FromStr for RecipeId {
	type Err = Error;

	/// Accepts only the canonical decimal form, so `to_string` gives back exactly `raw`.
	fn from_str(raw: &str) -> Result<Self> {
		let invalid = || Error::InvalidRecipeId { value: raw.to_string() };
		let value = raw.parse::<u64>().map_err(|_| invalid())?;

		if value.to_string() != raw {
			return Err(invalid());
		}

		Ok(Self(value))
	}
}

impl fmt::Display for RecipeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for RecipeId {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for RecipeId {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;

		raw.parse().map_err(serde::de::Error::custom)
	}
}
