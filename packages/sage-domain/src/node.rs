//! Typed graph node identifiers.
//!
//! The triples file written by the graph builder stores nodes as tuple literals such as
//! `('recipe', 123)` or `('ingredient', 'tomato')`. [`NodeId::parse_literal`] accepts exactly that
//! shape and nothing else, and [`NodeId::label`] produces the flat `<kind>_<value>` form the
//! embedding vocabulary is keyed by.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const RECIPE_LABEL_PREFIX: &str = "recipe_";

static TUPLE_LITERAL: LazyLock<Option<Regex>> = LazyLock::new(|| {
	Regex::new(r#"^\(\s*(?:'([a-z_]+)'|"([a-z_]+)")\s*,\s*(.+?)\s*,?\s*\)$"#).ok()
});
static NUMBER_LITERAL: LazyLock<Option<Regex>> =
	LazyLock::new(|| Regex::new(r"^-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?$").ok());

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
	Recipe,
	DietType,
	MealType,
	HealthAttribute,
	CuisineRegion,
	Ingredient,
	CookingMethod,
	ServingsBin,
	CookTime,
}
impl EntityKind {
	pub const ALL: [Self; 9] = [
		Self::Recipe,
		Self::DietType,
		Self::MealType,
		Self::HealthAttribute,
		Self::CuisineRegion,
		Self::Ingredient,
		Self::CookingMethod,
		Self::ServingsBin,
		Self::CookTime,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Recipe => "recipe",
			Self::DietType => "diet_type",
			Self::MealType => "meal_type",
			Self::HealthAttribute => "health_attribute",
			Self::CuisineRegion => "cuisine_region",
			Self::Ingredient => "ingredient",
			Self::CookingMethod => "cooking_method",
			Self::ServingsBin => "servings_bin",
			Self::CookTime => "cook_time",
		}
	}

	pub fn parse(raw: &str) -> Result<Self> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str() == raw)
			.ok_or_else(|| Error::UnknownEntityKind { kind: raw.to_string() })
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId {
	pub kind: EntityKind,
	pub value: String,
}
impl NodeId {
	pub fn new(kind: EntityKind, value: impl Into<String>) -> Self {
		Self { kind, value: value.into() }
	}

	pub fn label(&self) -> String {
		format!("{}_{}", self.kind.as_str(), self.value)
	}

	pub fn parse_literal(literal: &str) -> Result<Self> {
		let malformed = || Error::MalformedNodeLiteral { literal: literal.to_string() };
		let trimmed = literal.trim();
		let pattern = TUPLE_LITERAL.as_ref().ok_or_else(malformed)?;
		let captures = pattern.captures(trimmed).ok_or_else(malformed)?;
		let kind = captures.get(1).or_else(|| captures.get(2)).ok_or_else(malformed)?;
		let kind = EntityKind::parse(kind.as_str())?;
		let raw_value = captures.get(3).ok_or_else(malformed)?.as_str();
		let value = parse_scalar(raw_value).ok_or_else(malformed)?;

		Ok(Self::new(kind, value))
	}
}

impl std::fmt::Display for NodeId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}_{}", self.kind.as_str(), self.value)
	}
}

fn parse_scalar(raw: &str) -> Option<String> {
	let mut chars = raw.chars();
	let first = chars.next()?;

	if first == '\'' || first == '"' {
		return unquote(raw, first);
	}

	let is_number = NUMBER_LITERAL.as_ref().map(|re| re.is_match(raw)).unwrap_or(false);

	is_number.then(|| raw.to_string())
}

fn unquote(raw: &str, quote: char) -> Option<String> {
	let inner = raw.strip_prefix(quote)?.strip_suffix(quote)?;
	let mut out = String::with_capacity(inner.len());
	let mut chars = inner.chars();

	while let Some(ch) = chars.next() {
		if ch == quote {
			return None;
		}
		if ch != '\\' {
			out.push(ch);

			continue;
		}

		match chars.next()? {
			'n' => out.push('\n'),
			't' => out.push('\t'),
			'r' => out.push('\r'),
			escaped @ ('\\' | '\'' | '"') => out.push(escaped),
			other => {
				out.push('\\');
				out.push(other);
			},
		}
	}

	Some(out)
}
