//! Sorting functionality for tables

use std::cmp::Ordering;

use crate::collation::TextCollator;
use crate::row::Row;
use crate::state::SortState;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Applies this direction to an ascending comparison result
	pub fn apply(&self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}
}

/// Trait for sortable tables
pub trait Sortable {
	/// Toggles the sort on `column` and returns the direction applied
	///
	/// Returns `None` when the column cannot be sorted.
	fn sort(&mut self, column: usize) -> Option<SortDirection>;

	/// Sorts by `column` in an explicit direction
	fn sort_by(&mut self, column: usize, direction: SortDirection) -> bool;

	/// Returns the current sort column and direction
	fn current_sort(&self) -> Option<SortState>;
}

/// Computes the display order of `rows` when sorted by `column`
///
/// The result is a permutation of row indices: position `i` holds the index
/// of the row that should be displayed `i`-th. The sort is stable, so rows
/// whose keys collate equal keep their current relative order in both
/// directions.
///
/// # Example
///
/// ```rust
/// use venueboard_tables::{OrdinalCollator, Row, SortDirection, sort_order};
///
/// let rows = vec![Row::new(["Banana"]), Row::new(["Apple"]), Row::new(["Cherry"])];
/// assert_eq!(sort_order(&rows, 0, SortDirection::Ascending, &OrdinalCollator), [1, 0, 2]);
/// assert_eq!(sort_order(&rows, 0, SortDirection::Descending, &OrdinalCollator), [2, 0, 1]);
/// ```
pub fn sort_order<C>(rows: &[Row], column: usize, direction: SortDirection, collator: &C) -> Vec<usize>
where
	C: TextCollator + ?Sized,
{
	let mut order: Vec<usize> = (0..rows.len()).collect();
	if rows.len() < 2 {
		return order;
	}
	order.sort_by(|&a, &b| {
		direction.apply(collator.compare(rows[a].sort_key(column), rows[b].sort_key(column)))
	});
	order
}
