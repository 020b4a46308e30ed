#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read dataset at {path:?}.")]
	Read { path: std::path::PathBuf, source: std::io::Error },
	#[error(transparent)]
	Csv(#[from] csv::Error),
	#[error("Invalid dataset: {0}")]
	InvalidDataset(String),
}
