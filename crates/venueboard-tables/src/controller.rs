//! Sort and filter controller for a single table

use crate::collation::TextCollator;
use crate::filtering::{Filterable, SearchQuery, visibility_mask};
use crate::sorting::{SortDirection, Sortable, sort_order};
use crate::state::{SortState, TableSortState};
use crate::surface::TableSurface;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Drives sorting and filtering of one table
///
/// The controller owns the table's [`TableSortState`] and the active search
/// query. Each operation snapshots the rows from the surface, computes the
/// new order or visibility with the pure functions in [`crate::sorting`] and
/// [`crate::filtering`], and writes the result back.
///
/// ```mermaid
/// sequenceDiagram
///     participant U as Header click
///     participant C as TableController
///     participant S as TableSurface
///     U->>C: sort(column)
///     C->>C: next_direction(column)
///     C->>S: snapshot_rows()
///     C->>C: sort_order(rows, column, direction)
///     C->>S: reorder_rows(order)
///     C->>S: set_header_direction(each column)
/// ```
#[derive(Debug)]
pub struct TableController<S, C> {
	surface: S,
	collator: C,
	state: TableSortState,
	query: SearchQuery,
}

impl<S, C> TableController<S, C>
where
	S: TableSurface,
	C: TextCollator,
{
	/// Creates a controller for `surface`, comparing cells with `collator`
	pub fn new(surface: S, collator: C) -> Self {
		Self {
			surface,
			collator,
			state: TableSortState::new(),
			query: SearchQuery::default(),
		}
	}

	/// Returns the table being controlled
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Returns the table's sort state
	pub fn sort_state(&self) -> TableSortState {
		self.state
	}

	/// Consumes the controller, returning the table
	pub fn into_surface(self) -> S {
		self.surface
	}

	fn can_sort(&self, column: usize) -> bool {
		column < self.surface.header_count() && self.surface.is_sortable(column)
	}

	fn apply_sort(&mut self, column: usize, direction: SortDirection) {
		let rows = self.surface.snapshot_rows();
		if rows.len() > 1 {
			let order = sort_order(&rows, column, direction, &self.collator);
			self.surface.reorder_rows(&order);
		}
		tracing::debug!(column, ?direction, rows = rows.len(), "sorted table");

		self.state.record(column, direction);
		let directions: Vec<Option<SortDirection>> = (0..self.surface.header_count())
			.map(|header| self.state.direction_of(header))
			.collect();
		self.surface.apply_header_directions(&directions);
	}

	fn apply_filter(&mut self) {
		let rows = self.surface.snapshot_rows();
		let mask = visibility_mask(&rows, self.query.as_str());
		self.surface.apply_visibility(&mask);
		let shown = mask.iter().filter(|&&visible| visible).count();
		tracing::debug!(query = self.query.as_str(), shown, total = rows.len(), "filtered table");
	}
}

impl<S, C> Sortable for TableController<S, C>
where
	S: TableSurface,
	C: TextCollator,
{
	fn sort(&mut self, column: usize) -> Option<SortDirection> {
		if !self.can_sort(column) {
			tracing::trace!(column, "ignoring sort on non-sortable column");
			return None;
		}
		let direction = self.state.next_direction(column);
		self.apply_sort(column, direction);
		Some(direction)
	}

	fn sort_by(&mut self, column: usize, direction: SortDirection) -> bool {
		if !self.can_sort(column) {
			return false;
		}
		self.apply_sort(column, direction);
		true
	}

	fn current_sort(&self) -> Option<SortState> {
		self.state.active()
	}
}

impl<S, C> Filterable for TableController<S, C>
where
	S: TableSurface,
	C: TextCollator,
{
	fn filter_by(&mut self, query: &str) {
		self.query = SearchQuery::new(query);
		self.apply_filter();
	}

	fn clear_filter(&mut self) {
		self.filter_by("");
	}

	fn current_filter(&self) -> Option<&str> {
		if self.query.is_empty() {
			None
		} else {
			Some(self.query.as_str())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::collation::OrdinalCollator;
	use crate::memory::MemoryTable;
	use crate::row::Row;
	use rstest::{fixture, rstest};

	#[fixture]
	fn controller() -> TableController<MemoryTable, OrdinalCollator> {
		let table = MemoryTable::new(
			["Name", "Count", "Actions"],
			vec![Row::new(["Banana", "3", ""]), Row::new(["Apple", "1", ""]), Row::new(["Cherry", "2", ""])],
		)
		.sortable(2, false);
		TableController::new(table, OrdinalCollator)
	}

	#[rstest]
	fn test_non_sortable_header_is_noop(mut controller: TableController<MemoryTable, OrdinalCollator>) {
		assert_eq!(controller.sort(2), None);
		assert_eq!(controller.sort(9), None);
		assert_eq!(controller.current_sort(), None);
		assert_eq!(controller.surface().column_texts(0), ["Banana", "Apple", "Cherry"]);
	}

	#[rstest]
	fn test_switching_columns_restarts_ascending(mut controller: TableController<MemoryTable, OrdinalCollator>) {
		assert_eq!(controller.sort(0), Some(SortDirection::Ascending));
		assert_eq!(controller.sort(1), Some(SortDirection::Ascending));
		assert_eq!(controller.surface().column_texts(1), ["1", "2", "3"]);
		assert_eq!(controller.surface().header_direction(0), None);
		assert_eq!(controller.surface().header_direction(1), Some(SortDirection::Ascending));
		assert_eq!(controller.sort(0), Some(SortDirection::Ascending));
	}

	#[rstest]
	fn test_sort_by_explicit_direction(mut controller: TableController<MemoryTable, OrdinalCollator>) {
		assert!(controller.sort_by(0, SortDirection::Descending));
		assert_eq!(controller.surface().column_texts(0), ["Cherry", "Banana", "Apple"]);
		// The next click toggles from the recorded descending state
		assert_eq!(controller.sort(0), Some(SortDirection::Ascending));
	}

	#[rstest]
	fn test_filter_state(mut controller: TableController<MemoryTable, OrdinalCollator>) {
		assert_eq!(controller.current_filter(), None);
		controller.filter_by("an");
		assert_eq!(controller.current_filter(), Some("an"));
		assert_eq!(controller.surface().visible_texts(0), ["Banana"]);
		controller.clear_filter();
		assert_eq!(controller.current_filter(), None);
		assert_eq!(controller.surface().visible_texts(0), ["Banana", "Apple", "Cherry"]);
	}

	/// Counts how the controller talks to the table
	struct CountingTable {
		inner: MemoryTable,
		single_row_calls: usize,
		visibility_batches: usize,
		header_batches: usize,
	}

	impl CountingTable {
		fn wrap(table: MemoryTable) -> Self {
			Self {
				inner: table,
				single_row_calls: 0,
				visibility_batches: 0,
				header_batches: 0,
			}
		}

		fn table(&self) -> &MemoryTable {
			&self.inner
		}

		fn table_mut(&mut self) -> &mut MemoryTable {
			&mut self.inner
		}
	}

	impl TableSurface for CountingTable {
		fn header_count(&self) -> usize {
			self.table().header_count()
		}

		fn is_sortable(&self, column: usize) -> bool {
			self.table().is_sortable(column)
		}

		fn snapshot_rows(&self) -> Vec<Row> {
			self.table().snapshot_rows()
		}

		fn reorder_rows(&mut self, order: &[usize]) {
			self.table_mut().reorder_rows(order);
		}

		fn set_row_visible(&mut self, index: usize, visible: bool) {
			self.single_row_calls += 1;
			self.table_mut().set_row_visible(index, visible);
		}

		fn set_header_direction(&mut self, column: usize, direction: Option<SortDirection>) {
			self.table_mut().set_header_direction(column, direction);
		}

		fn apply_visibility(&mut self, mask: &[bool]) {
			self.visibility_batches += 1;
			self.table_mut().apply_visibility(mask);
		}

		fn apply_header_directions(&mut self, directions: &[Option<SortDirection>]) {
			self.header_batches += 1;
			self.table_mut().apply_header_directions(directions);
		}
	}

	#[rstest]
	fn test_filter_and_sort_update_the_table_in_one_batch() {
		let rows = (0..50).map(|i| Row::new([format!("Court {i}")])).collect();
		let mut controller = TableController::new(CountingTable::wrap(MemoryTable::new(["Name"], rows)), OrdinalCollator);

		controller.filter_by("court 1");
		assert_eq!(controller.surface().visibility_batches, 1);
		assert_eq!(controller.surface().single_row_calls, 0);
		// Court 1 and Court 10..=19
		assert_eq!(controller.surface().table().visible_texts(0).len(), 11);

		controller.sort(0);
		assert_eq!(controller.surface().header_batches, 1);
		assert_eq!(
			controller.surface().table().header_direction(0),
			Some(SortDirection::Ascending)
		);
	}

	#[rstest]
	fn test_default_visibility_batch_ignores_rows_past_the_mask() {
		let mut table = MemoryTable::new(["Name"], vec![Row::new(["A"]), Row::new(["B"]), Row::new(["C"])]);
		table.apply_visibility(&[false]);
		assert_eq!(table.visible_texts(0), ["B", "C"]);
	}

	#[rstest]
	fn test_single_row_still_toggles() {
		let table = MemoryTable::new(["Name"], vec![Row::new(["Solo"])]);
		let mut controller = TableController::new(table, OrdinalCollator);
		assert_eq!(controller.sort(0), Some(SortDirection::Ascending));
		assert_eq!(controller.sort(0), Some(SortDirection::Descending));
		assert_eq!(controller.surface().header_direction(0), Some(SortDirection::Descending));
	}
}
