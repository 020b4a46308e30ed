//! Criteria matching: one link-prediction query per term, then normalize, merge and project.

pub mod merge;
pub mod normalize;
pub mod projection;

use std::{sync::Arc, time::Duration};

use tokio::task::JoinSet;

use sage_config::Matching;
use sage_domain::{CriterionTerm, PredictionRow, RecipeId};

use crate::{
	Error, LinkPredictionOracle, MatchingContext, OracleError, Result, matching::merge::JoinKind,
};

/// Execution knobs for the per-term oracle fan-out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchPolicy {
	pub parallel: bool,
	pub deadline: Option<Duration>,
}
impl MatchPolicy {
	pub fn from_config(matching: &Matching) -> Self {
		let deadline = (matching.oracle_timeout_ms > 0)
			.then(|| Duration::from_millis(matching.oracle_timeout_ms));

		Self { parallel: matching.parallel_queries, deadline }
	}
}
impl Default for MatchPolicy {
	fn default() -> Self {
		Self { parallel: true, deadline: None }
	}
}

pub struct CriteriaMatcher<'a> {
	context: &'a MatchingContext,
	policy: MatchPolicy,
}
impl<'a> CriteriaMatcher<'a> {
	pub fn new(context: &'a MatchingContext, policy: MatchPolicy) -> Self {
		Self { context, policy }
	}

	/// Ranks recipes satisfying `terms`.
	///
	/// The oracle is queried exactly once per term, including repeated terms. No terms or a
	/// non-positive `top_k` yield an empty ranking without touching the oracle.
	pub async fn rank(
		&self,
		terms: &[CriterionTerm],
		top_k: i64,
		join: JoinKind,
	) -> Result<Vec<RecipeId>> {
		let Ok(top_k) = usize::try_from(top_k) else { return Ok(Vec::new()) };

		if terms.is_empty() || top_k == 0 {
			return Ok(Vec::new());
		}

		self.log_vocabulary_gaps(terms);

		let per_term = match self.policy.deadline {
			Some(deadline) => tokio::time::timeout(deadline, self.query_all(terms))
				.await
				.map_err(|_| Error::DeadlineExceeded {
					timeout_ms: u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX),
				})??,
			None => self.query_all(terms).await?,
		};

		Ok(rank_predictions(per_term, join, top_k))
	}

	async fn query_all(&self, terms: &[CriterionTerm]) -> Result<Vec<Vec<PredictionRow>>> {
		if !self.policy.parallel {
			let oracle = Arc::clone(&self.context.oracle);
			let terms = terms.to_vec();

			return tokio::task::spawn_blocking(move || {
				terms.iter().map(|term| query_term(oracle.as_ref(), term)).collect::<Result<Vec<_>>>()
			})
			.await
			.map_err(|err| Error::Oracle { message: format!("Oracle task failed: {err}.") })?;
		}

		let mut tasks = JoinSet::new();

		for (idx, term) in terms.iter().enumerate() {
			let oracle = Arc::clone(&self.context.oracle);
			let term = term.clone();

			tasks.spawn_blocking(move || (idx, query_term(oracle.as_ref(), &term)));
		}

		let mut per_term = vec![Vec::new(); terms.len()];

		while let Some(joined) = tasks.join_next().await {
			let (idx, rows) = joined
				.map_err(|err| Error::Oracle { message: format!("Oracle task failed: {err}.") })?;

			per_term[idx] = rows?;
		}

		Ok(per_term)
	}

	fn log_vocabulary_gaps(&self, terms: &[CriterionTerm]) {
		let Some(vocabulary) = self.context.vocabulary.as_ref() else { return };

		for term in terms {
			if !vocabulary.contains_entity(&term.tail_label) {
				tracing::debug!(tail = %term.tail_label, "Criterion tail is not in the graph vocabulary.");
			}
			if !vocabulary.contains_relation(term.relation.as_str()) {
				tracing::debug!(
					relation = term.relation.as_str(),
					"Criterion relation is not in the graph vocabulary."
				);
			}
		}
	}
}

/// Normalizes each term's rows, merges them with `join` and projects the top `top_k` recipes.
pub fn rank_predictions(
	per_term: Vec<Vec<PredictionRow>>,
	join: JoinKind,
	top_k: usize,
) -> Vec<RecipeId> {
	let maps = per_term
		.into_iter()
		.map(|rows| merge::score_map(normalize::normalize(rows)))
		.collect::<Vec<_>>();
	let merged = merge::merge_all(maps, join);

	projection::project(merged, top_k)
}

fn query_term(
	oracle: &dyn LinkPredictionOracle,
	term: &CriterionTerm,
) -> Result<Vec<PredictionRow>> {
	let relation = term.relation.as_str();

	match oracle.predict(relation, &term.tail_label) {
		Ok(rows) => {
			if let Some(row) = rows.iter().find(|row| !row.raw_score.is_finite()) {
				return Err(Error::Oracle {
					message: format!("Non-finite score for head {} under {relation}.", row.head_label),
				});
			}

			Ok(rows)
		},
		Err(OracleError::VocabularyMiss { message }) => {
			tracing::debug!(
				relation,
				tail = %term.tail_label,
				reason = %message,
				"Oracle has no predictions for criterion."
			);

			Ok(Vec::new())
		},
		Err(OracleError::Fault { message }) => Err(Error::Oracle { message }),
	}
}
