//! Presentation seam between the controller and whatever displays the table

use crate::row::Row;
use crate::sorting::SortDirection;

/// Something that displays a table and can be rearranged in place
///
/// Implementations read the rows as they are currently shown and apply the
/// results computed by [`crate::TableController`]. The browser binding
/// implements this over live DOM nodes; [`crate::MemoryTable`] implements it
/// over plain vectors.
pub trait TableSurface {
	/// Returns the number of header cells in the header row
	fn header_count(&self) -> usize;

	/// Returns whether the header at `column` accepts sort clicks
	fn is_sortable(&self, column: usize) -> bool;

	/// Captures the body rows in their current display order
	///
	/// A table without a body yields no rows.
	fn snapshot_rows(&self) -> Vec<Row>;

	/// Redisplays the body rows in `order`
	///
	/// `order[i]` is the current index of the row to show at position `i`.
	/// Each row keeps its visibility when moved.
	fn reorder_rows(&mut self, order: &[usize]);

	/// Shows or hides the row at `index` without moving it
	fn set_row_visible(&mut self, index: usize, visible: bool);

	/// Sets or clears the direction marker on the header at `column`
	fn set_header_direction(&mut self, column: usize, direction: Option<SortDirection>);

	/// Shows row `i` exactly when `mask[i]` is true
	///
	/// Rows beyond the end of `mask` are left alone. Surfaces where locating
	/// a row is expensive should override this to walk the rows once.
	fn apply_visibility(&mut self, mask: &[bool]) {
		for (index, &visible) in mask.iter().enumerate() {
			self.set_row_visible(index, visible);
		}
	}

	/// Sets the marker of header `i` to `directions[i]`
	fn apply_header_directions(&mut self, directions: &[Option<SortDirection>]) {
		for (column, &direction) in directions.iter().enumerate() {
			self.set_header_direction(column, direction);
		}
	}
}
