//! Filtering functionality for tables

use crate::row::Row;

/// Trait for filterable tables
pub trait Filterable {
	/// Applies a search query to the table
	fn filter_by(&mut self, query: &str);

	/// Clears the search query, showing every row
	fn clear_filter(&mut self);

	/// Returns the current search query, if any
	fn current_filter(&self) -> Option<&str>;
}

/// A case-insensitive substring query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
	raw: String,
	needle: String,
}

impl SearchQuery {
	/// Creates a query from user input
	pub fn new(raw: impl Into<String>) -> Self {
		let raw = raw.into();
		let needle = raw.to_lowercase();
		Self { raw, needle }
	}

	/// Returns the query as typed
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// Returns true when the query matches every row
	pub fn is_empty(&self) -> bool {
		self.needle.is_empty()
	}

	/// Returns true when `row`'s text content contains the query
	pub fn matches(&self, row: &Row) -> bool {
		self.is_empty() || row.text_content().to_lowercase().contains(&self.needle)
	}
}

/// Computes which rows stay visible for `query`
///
/// Entry `i` is `true` when row `i` should be shown. An empty query shows
/// every row.
///
/// # Example
///
/// ```rust
/// use venueboard_tables::{Row, visibility_mask};
///
/// let rows = vec![Row::new(["Banana", "3"]), Row::new(["Apple", "1"])];
/// assert_eq!(visibility_mask(&rows, "APP"), [false, true]);
/// assert_eq!(visibility_mask(&rows, ""), [true, true]);
/// ```
pub fn visibility_mask(rows: &[Row], query: &str) -> Vec<bool> {
	let query = SearchQuery::new(query);
	rows.iter().map(|row| query.matches(row)).collect()
}
