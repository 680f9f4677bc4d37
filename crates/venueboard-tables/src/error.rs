//! Error types for table sorting and filtering

use thiserror::Error;

/// Result type alias for table operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors raised while setting up a table
///
/// Sorting and filtering themselves never fail; only constructing the
/// collation machinery can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
	/// The locale tag could not be parsed as BCP-47
	#[error("Invalid locale tag: {0}")]
	InvalidLocale(String),

	/// No collation data could be loaded for the locale
	#[error("Collator unavailable for locale {locale}: {reason}")]
	Collator {
		/// The requested locale tag
		locale: String,
		/// Underlying failure reported by the collation backend
		reason: String,
	},
}
