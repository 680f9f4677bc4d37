mod fixtures;

use fixtures::*;
use rstest::*;
use venueboard_tables::{
	Filterable, LocaleCollator, MemoryTable, SortDirection, Sortable, TableController,
};

#[rstest]
fn test_sort_fruit_ascending_then_descending(mut fruit_controller: FruitController) {
	assert_eq!(fruit_controller.sort(0), Some(SortDirection::Ascending));
	assert_eq!(fruit_controller.surface().column_texts(0), ["Apple", "Banana", "Cherry"]);
	assert_eq!(fruit_controller.surface().column_texts(1), ["1", "3", "2"]);

	assert_eq!(fruit_controller.sort(0), Some(SortDirection::Descending));
	assert_eq!(fruit_controller.surface().column_texts(0), ["Cherry", "Banana", "Apple"]);
	assert_eq!(fruit_controller.surface().column_texts(1), ["2", "3", "1"]);
}

#[rstest]
fn test_filter_fruit(mut fruit_controller: FruitController) {
	fruit_controller.filter_by("app");
	assert_eq!(fruit_controller.surface().visible_texts(0), ["Apple"]);

	fruit_controller.filter_by("");
	assert_eq!(fruit_controller.surface().visible_texts(0), ["Banana", "Apple", "Cherry"]);
}

#[rstest]
fn test_hidden_rows_move_with_sort(mut fruit_controller: FruitController) {
	fruit_controller.filter_by("an");
	fruit_controller.sort(0);

	let table = fruit_controller.surface();
	assert_eq!(table.column_texts(0), ["Apple", "Banana", "Cherry"]);
	assert!(!table.is_visible(0));
	assert!(table.is_visible(1));
	assert!(!table.is_visible(2));
}

#[rstest]
fn test_filter_does_not_reorder(mut fruit_controller: FruitController) {
	fruit_controller.sort(0);
	fruit_controller.sort(0);
	fruit_controller.filter_by("e");
	assert_eq!(fruit_controller.surface().column_texts(0), ["Cherry", "Banana", "Apple"]);
	assert_eq!(fruit_controller.surface().visible_texts(0), ["Cherry", "Apple"]);
}

#[rstest]
fn test_only_clicked_header_is_marked(mut fruit_controller: FruitController) {
	fruit_controller.sort(1);
	fruit_controller.sort(0);
	fruit_controller.sort(0);

	let table = fruit_controller.surface();
	assert_eq!(table.marked_header_count(), 1);
	assert_eq!(table.header_direction(0), Some(SortDirection::Descending));
	assert_eq!(table.header_direction(1), None);
}

#[rstest]
fn test_numeric_column_sorts_lexically() {
	let table = MemoryTable::new(
		["Venue"],
		vec![
			venueboard_tables::Row::new(["2"]),
			venueboard_tables::Row::new(["10"]),
			venueboard_tables::Row::new(["1"]),
		],
	);
	let mut controller = TableController::new(table, LocaleCollator::new("en").unwrap());
	controller.sort(0);
	assert_eq!(controller.surface().column_texts(0), ["1", "10", "2"]);
}

#[rstest]
fn test_booking_listing_sort_and_search(booking_table: MemoryTable) {
	let mut controller = TableController::new(booking_table, LocaleCollator::new("zh-CN").unwrap());

	controller.sort(0);
	assert_eq!(
		controller.surface().column_texts(0),
		["场地 12", "场地 21", "场地 3", "场地 7"]
	);

	controller.sort(3);
	assert_eq!(controller.surface().column_texts(3)[0], "待审核");

	controller.filter_by("一群");
	let mut visible = controller.surface().visible_texts(0);
	visible.sort();
	assert_eq!(visible, ["场地 3", "场地 7"]);

	controller.filter_by("12:00");
	assert_eq!(controller.surface().visible_texts(1), ["12:00-13:00", "12:00-13:00"]);
}

#[rstest]
fn test_empty_table_is_noop() {
	let table = MemoryTable::new(["Name"], Vec::new());
	let mut controller = TableController::new(table, LocaleCollator::new("en").unwrap());
	assert_eq!(controller.sort(0), Some(SortDirection::Ascending));
	controller.filter_by("anything");
	assert!(controller.surface().rows().is_empty());
}
