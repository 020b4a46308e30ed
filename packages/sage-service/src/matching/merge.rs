use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-query `head_label -> score` mapping.
pub type ScoreMap = HashMap<String, f32>;

/// How two score maps are combined.
///
/// `Inner` keeps heads present on both sides, `Outer` keeps heads present on either side and
/// counts a missing side as `0.0`. Both sum the scores of surviving heads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinKind {
	Inner,
	Outer,
}
impl JoinKind {
	pub fn from_flexible(flexible: bool) -> Self {
		if flexible { Self::Outer } else { Self::Inner }
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Inner => "inner",
			Self::Outer => "outer",
		}
	}
}

/// Collapses normalized rows into a map, summing repeated heads.
pub fn score_map(normalized: Vec<(String, f32)>) -> ScoreMap {
	let mut map = ScoreMap::with_capacity(normalized.len());

	for (label, score) in normalized {
		*map.entry(label).or_insert(0.0) += score;
	}

	map
}

pub fn join(left: ScoreMap, mut right: ScoreMap, kind: JoinKind) -> ScoreMap {
	match kind {
		JoinKind::Inner => left
			.into_iter()
			.filter_map(|(label, score)| right.remove(&label).map(|other| (label, score + other)))
			.collect(),
		JoinKind::Outer => {
			for (label, score) in left {
				*right.entry(label).or_insert(0.0) += score;
			}

			right
		},
	}
}

/// Folds per-query maps left to right, starting from the first one.
pub fn merge_all(maps: Vec<ScoreMap>, kind: JoinKind) -> ScoreMap {
	let mut maps = maps.into_iter();
	let Some(first) = maps.next() else { return ScoreMap::new() };

	maps.fold(first, |acc, next| join(acc, next, kind))
}
