//! In-memory table surface

use crate::row::Row;
use crate::sorting::SortDirection;
use crate::surface::TableSurface;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Header {
	label: String,
	sortable: bool,
	direction: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BodyRow {
	row: Row,
	visible: bool,
}

/// A table held entirely in memory
///
/// Useful for pre-sorting listings before they are rendered, and as a
/// stand-in for the page in tests. Every header starts sortable and every row
/// starts visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryTable {
	headers: Vec<Header>,
	body: Vec<BodyRow>,
}

impl MemoryTable {
	/// Creates a table from header labels and body rows
	pub fn new<I, S>(headers: I, rows: Vec<Row>) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			headers: headers
				.into_iter()
				.map(|label| Header {
					label: label.into(),
					sortable: true,
					direction: None,
				})
				.collect(),
			body: rows
				.into_iter()
				.map(|row| BodyRow { row, visible: true })
				.collect(),
		}
	}

	/// Sets whether the header at `column` is sortable
	pub fn sortable(mut self, column: usize, sortable: bool) -> Self {
		if let Some(header) = self.headers.get_mut(column) {
			header.sortable = sortable;
		}
		self
	}

	/// Returns the header labels
	pub fn header_labels(&self) -> Vec<&str> {
		self.headers.iter().map(|h| h.label.as_str()).collect()
	}

	/// Returns the direction marker on the header at `column`
	pub fn header_direction(&self, column: usize) -> Option<SortDirection> {
		self.headers.get(column).and_then(|h| h.direction)
	}

	/// Returns how many headers carry a direction marker
	pub fn marked_header_count(&self) -> usize {
		self.headers.iter().filter(|h| h.direction.is_some()).count()
	}

	/// Returns the rows in display order, hidden ones included
	pub fn rows(&self) -> Vec<&Row> {
		self.body.iter().map(|b| &b.row).collect()
	}

	/// Returns whether the row at `index` is visible
	pub fn is_visible(&self, index: usize) -> bool {
		self.body.get(index).is_some_and(|b| b.visible)
	}

	/// Returns the trimmed texts of `column` for every row in display order
	pub fn column_texts(&self, column: usize) -> Vec<String> {
		self.body
			.iter()
			.map(|b| b.row.sort_key(column).to_string())
			.collect()
	}

	/// Returns the trimmed texts of `column` for the visible rows only
	pub fn visible_texts(&self, column: usize) -> Vec<String> {
		self.body
			.iter()
			.filter(|b| b.visible)
			.map(|b| b.row.sort_key(column).to_string())
			.collect()
	}
}

impl TableSurface for MemoryTable {
	fn header_count(&self) -> usize {
		self.headers.len()
	}

	fn is_sortable(&self, column: usize) -> bool {
		self.headers.get(column).is_some_and(|h| h.sortable)
	}

	fn snapshot_rows(&self) -> Vec<Row> {
		self.body.iter().map(|b| b.row.clone()).collect()
	}

	fn reorder_rows(&mut self, order: &[usize]) {
		let mut slots: Vec<Option<BodyRow>> = self.body.drain(..).map(Some).collect();
		self.body = order
			.iter()
			.filter_map(|&index| slots.get_mut(index).and_then(Option::take))
			.collect();
		// Rows missing from `order` stay, after the reordered ones
		self.body.extend(slots.into_iter().flatten());
	}

	fn set_row_visible(&mut self, index: usize, visible: bool) {
		if let Some(body_row) = self.body.get_mut(index) {
			body_row.visible = visible;
		}
	}

	fn set_header_direction(&mut self, column: usize, direction: Option<SortDirection>) {
		if let Some(header) = self.headers.get_mut(column) {
			header.direction = direction;
		}
	}
}
