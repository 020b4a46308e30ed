//! Link prediction over a trained embedding table.

use std::{fs::File, io::BufReader, path::Path, sync::Arc};

use serde::Deserialize;

use sage_domain::PredictionRow;

use crate::{Error, Result, ScoringFunction, Vocabulary};

#[derive(Debug, Deserialize)]
struct ModelFile {
	scoring: ScoringFunction,
	entity_embeddings: Vec<Vec<f32>>,
	relation_embeddings: Vec<Vec<f32>>,
}

#[derive(Debug)]
pub struct EmbeddingModel {
	vocabulary: Arc<Vocabulary>,
	scoring: ScoringFunction,
	dim: usize,
	entity_embeddings: Vec<Vec<f32>>,
	relation_embeddings: Vec<Vec<f32>>,
}
impl EmbeddingModel {
	pub fn load(path: &Path, vocabulary: Arc<Vocabulary>) -> Result<Self> {
		let file =
			File::open(path).map_err(|err| Error::Read { path: path.to_path_buf(), source: err })?;
		let model: ModelFile = serde_json::from_reader(BufReader::new(file))?;

		Self::from_parts(
			vocabulary,
			model.scoring,
			model.entity_embeddings,
			model.relation_embeddings,
		)
	}

	/// Builds a model after checking that the tables line up with the vocabulary.
	pub fn from_parts(
		vocabulary: Arc<Vocabulary>,
		scoring: ScoringFunction,
		entity_embeddings: Vec<Vec<f32>>,
		relation_embeddings: Vec<Vec<f32>>,
	) -> Result<Self> {
		if entity_embeddings.len() != vocabulary.entity_count() {
			return Err(Error::InvalidArtifact {
				message: format!(
					"Model has {} entity embeddings but the vocabulary has {} entities.",
					entity_embeddings.len(),
					vocabulary.entity_count()
				),
			});
		}
		if relation_embeddings.len() != vocabulary.relation_count() {
			return Err(Error::InvalidArtifact {
				message: format!(
					"Model has {} relation embeddings but the vocabulary has {} relations.",
					relation_embeddings.len(),
					vocabulary.relation_count()
				),
			});
		}

		let dim =
			entity_embeddings.first().or(relation_embeddings.first()).map(Vec::len).unwrap_or(0);

		if dim == 0 && !(entity_embeddings.is_empty() && relation_embeddings.is_empty()) {
			return Err(Error::InvalidArtifact {
				message: "Embedding dimension must be greater than zero.".to_string(),
			});
		}
		if entity_embeddings.iter().chain(&relation_embeddings).any(|row| row.len() != dim) {
			return Err(Error::InvalidArtifact {
				message: format!("Every embedding row must have dimension {dim}."),
			});
		}
		if scoring.requires_even_dim() && dim % 2 != 0 {
			return Err(Error::InvalidArtifact {
				message: format!(
					"Scoring function {} needs an even embedding dimension, got {dim}.",
					scoring.as_str()
				),
			});
		}

		Ok(Self { vocabulary, scoring, dim, entity_embeddings, relation_embeddings })
	}

	pub fn vocabulary(&self) -> &Arc<Vocabulary> {
		&self.vocabulary
	}

	pub fn scoring(&self) -> ScoringFunction {
		self.scoring
	}

	pub fn dim(&self) -> usize {
		self.dim
	}

	/// Scores every entity as the head of `head --relation--> tail`.
	///
	/// Rows come back in entity id order with no cap.
	pub fn predict_heads(&self, relation: &str, tail: &str) -> Result<Vec<PredictionRow>> {
		let relation_id = self
			.vocabulary
			.relation_id(relation)
			.ok_or_else(|| Error::UnknownRelation { relation: relation.to_string() })?;
		let tail_id = self
			.vocabulary
			.entity_id(tail)
			.ok_or_else(|| Error::UnknownEntity { entity: tail.to_string() })?;
		let relation_vec = &self.relation_embeddings[relation_id];
		let tail_vec = &self.entity_embeddings[tail_id];
		let mut rows = Vec::with_capacity(self.entity_embeddings.len());

		for (label, head_vec) in self.vocabulary.entities().iter().zip(&self.entity_embeddings) {
			let score = self.scoring.score(head_vec, relation_vec, tail_vec);

			if !score.is_finite() {
				return Err(Error::NonFiniteScore { head: label.clone() });
			}

			rows.push(PredictionRow::new(label.clone(), score));
		}

		Ok(rows)
	}
}
