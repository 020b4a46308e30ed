pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("No matching recipes found.")]
	NoMatches,
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Oracle error: {message}")]
	Oracle { message: String },
	#[error("Oracle queries exceeded the {timeout_ms} ms deadline.")]
	DeadlineExceeded { timeout_ms: u64 },
}
