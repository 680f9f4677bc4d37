//! Settings errors

use thiserror::Error;

/// Errors raised while loading or validating settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
	#[error("File error: {0}")]
	FileError(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),
}
