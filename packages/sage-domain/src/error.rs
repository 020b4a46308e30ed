pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("Node literal {literal:?} is malformed.")]
	MalformedNodeLiteral { literal: String },
	#[error("Entity kind {kind:?} is not part of the recipe graph.")]
	UnknownEntityKind { kind: String },
	#[error("Label {label:?} does not carry a known entity prefix.")]
	UnknownLabelPrefix { label: String },
	#[error("Recipe key {value:?} is not a valid recipe identifier.")]
	InvalidRecipeId { value: String },
}
