//! Error type shared by the engine, the loader and the browser glue.

use thiserror::Error;

/// Errors surfaced by the matrix engine and the dataset loader.
///
/// Missing data is never an error: lookups return `None` or `0` instead.
#[derive(Error, Debug)]
pub enum MatrixError {
	/// Source or target is empty.
	#[error("Please select both source and target languages")]
	MissingSelection,

	/// Source and target are the same code.
	#[error("Source and target languages cannot be the same")]
	SameLanguage,

	/// No registered dataset has this key.
	#[error("Unknown dataset: {0}")]
	UnknownDataset(String),

	/// The request failed or returned a non-success status.
	#[error("Error loading language data: {0}")]
	Fetch(String),

	/// The payload is not a `{ source: { target: 0..=255 } }` object.
	#[error("Malformed dataset payload: {0}")]
	Parse(#[from] serde_json::Error),

	/// No response within the configured wait, in milliseconds.
	#[error("Dataset request timed out after {0} ms")]
	Timeout(u64),

	/// A DOM or Web API call was rejected.
	#[error("Browser call failed: {0}")]
	Dom(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Check a (source, target) selection before any search runs.
pub fn validate_pair(source: &str, target: &str) -> Result<()> {
	if source.trim().is_empty() || target.trim().is_empty() {
		return Err(MatrixError::MissingSelection);
	}
	if source == target {
		return Err(MatrixError::SameLanguage);
	}
	Ok(())
}
