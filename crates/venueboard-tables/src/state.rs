//! Per-table sort state
//!
//! The active sort column and direction are tracked here rather than read back
//! from the header classes, so the next toggle never depends on presentation.

use std::collections::HashMap;

use crate::sorting::SortDirection;

/// The column a table is currently sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortState {
	/// Column index among the header cells
	pub column: usize,
	/// Direction last applied to that column
	pub direction: SortDirection,
}

/// Sort state of a single table
///
/// At most one column is active at a time; recording a sort on one column
/// clears every other column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSortState {
	active: Option<SortState>,
}

impl TableSortState {
	/// Creates an unsorted state
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the direction the next click on `column` should apply
	///
	/// Only an ascending sort on the same column flips to descending; every
	/// other case starts from ascending.
	pub fn next_direction(&self, column: usize) -> SortDirection {
		match self.active {
			Some(SortState {
				column: active,
				direction: SortDirection::Ascending,
			}) if active == column => SortDirection::Descending,
			_ => SortDirection::Ascending,
		}
	}

	/// Records `column` as the active sort, clearing any other column
	pub fn record(&mut self, column: usize, direction: SortDirection) {
		self.active = Some(SortState { column, direction });
	}

	/// Returns the direction marker of `column`, if it is the active one
	pub fn direction_of(&self, column: usize) -> Option<SortDirection> {
		self.active
			.filter(|state| state.column == column)
			.map(|state| state.direction)
	}

	/// Returns the active sort
	pub fn active(&self) -> Option<SortState> {
		self.active
	}

	/// Forgets the active sort
	pub fn clear(&mut self) {
		self.active = None;
	}
}

/// Sort states indexed by table identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortRegistry {
	tables: HashMap<String, TableSortState>,
}

impl SortRegistry {
	/// Creates an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the state of `table_id`, unsorted if it was never recorded
	pub fn get(&self, table_id: &str) -> TableSortState {
		self.tables.get(table_id).copied().unwrap_or_default()
	}

	/// Returns a mutable state for `table_id`, inserting an unsorted one
	pub fn get_mut(&mut self, table_id: impl Into<String>) -> &mut TableSortState {
		self.tables.entry(table_id.into()).or_default()
	}

	/// Replaces the state of `table_id`
	pub fn insert(&mut self, table_id: impl Into<String>, state: TableSortState) {
		self.tables.insert(table_id.into(), state);
	}

	/// Removes the state of `table_id`
	pub fn remove(&mut self, table_id: &str) -> Option<TableSortState> {
		self.tables.remove(table_id)
	}

	/// Returns the number of tracked tables
	pub fn len(&self) -> usize {
		self.tables.len()
	}

	/// Returns true if no table is tracked
	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}
}
