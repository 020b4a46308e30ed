use std::cmp::Ordering;

use sage_domain::{RECIPE_LABEL_PREFIX, RecipeId};

use crate::matching::merge::ScoreMap;

/// Keeps recipe heads, ranks them and returns at most `top_k` ids.
///
/// Ranking is by merged score descending, ties broken by head label ascending. Heads whose suffix
/// is not a valid id are skipped before truncation.
pub fn project(merged: ScoreMap, top_k: usize) -> Vec<RecipeId> {
	let mut candidates: Vec<(String, f32)> =
		merged.into_iter().filter(|(label, _)| label.starts_with(RECIPE_LABEL_PREFIX)).collect();

	candidates.sort_by(|(label_a, score_a), (label_b, score_b)| {
		cmp_f32_desc(*score_a, *score_b).then_with(|| label_a.cmp(label_b))
	});

	let mut out = Vec::with_capacity(top_k.min(candidates.len()));

	for (label, _) in candidates {
		if out.len() >= top_k {
			break;
		}

		match RecipeId::from_label(&label) {
			Ok(recipe_id) => out.push(recipe_id),
			Err(err) => {
				tracing::warn!(error = %err, label = %label, "Skipping recipe head with an invalid id.");
			},
		}
	}

	out
}

pub fn cmp_f32_desc(a: f32, b: f32) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}
