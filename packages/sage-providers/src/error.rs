pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read artifact at {path:?}.")]
	Read { path: std::path::PathBuf, source: std::io::Error },
	#[error(transparent)]
	Csv(#[from] csv::Error),
	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
	#[error("{message}")]
	InvalidArtifact { message: String },
	#[error("Relation {relation:?} is not in the model vocabulary.")]
	UnknownRelation { relation: String },
	#[error("Entity {entity:?} is not in the model vocabulary.")]
	UnknownEntity { entity: String },
	#[error("Model produced a non-finite score for {head:?}.")]
	NonFiniteScore { head: String },
}
impl Error {
	/// Whether the failure means "the query mentions something the model was never trained on".
	pub fn is_vocabulary_miss(&self) -> bool {
		matches!(self, Self::UnknownRelation { .. } | Self::UnknownEntity { .. })
	}
}
