//! Row snapshot used by the sort and filter computations

/// One record of a table body, captured at the moment of interaction
///
/// A row is just its cell texts plus the full text content of the row. The
/// full text is what the search filter matches against; for rows read from
/// the page it is the element's `textContent`, which may include whitespace
/// between cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
	cells: Vec<String>,
	text_content: String,
}

impl Row {
	/// Creates a row whose text content is its cells concatenated
	pub fn new<I, S>(cells: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
		let text_content = cells.concat();
		Self {
			cells,
			text_content,
		}
	}

	/// Creates a row with an explicit text content
	pub fn with_text_content<I, S>(cells: I, text_content: impl Into<String>) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			cells: cells.into_iter().map(Into::into).collect(),
			text_content: text_content.into(),
		}
	}

	/// Returns the raw cell texts
	pub fn cells(&self) -> &[String] {
		&self.cells
	}

	/// Returns the trimmed text of the cell at `column`
	///
	/// A row shorter than `column + 1` yields the empty string.
	pub fn sort_key(&self, column: usize) -> &str {
		self.cells.get(column).map(|c| c.trim()).unwrap_or("")
	}

	/// Returns the full text content of the row
	pub fn text_content(&self) -> &str {
		&self.text_content
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_text_content_defaults_to_concatenated_cells() {
		let row = Row::new(["Court 3", "12:00-13:00"]);
		assert_eq!(row.text_content(), "Court 312:00-13:00");
	}

	#[rstest]
	#[case(0, "Apple")]
	#[case(1, "1")]
	#[case(7, "")]
	fn test_sort_key_trims_and_tolerates_missing_cells(#[case] column: usize, #[case] expected: &str) {
		let row = Row::new(["  Apple\n", " 1 "]);
		assert_eq!(row.sort_key(column), expected);
	}
}
