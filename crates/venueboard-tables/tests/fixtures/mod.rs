//! Common test fixtures for venueboard-tables tests

use rstest::*;
use venueboard_tables::{LocaleCollator, MemoryTable, Row, TableController};

/// Controller type used across the integration tests
pub type FruitController = TableController<MemoryTable, LocaleCollator>;

/// Fixture providing the three-row fruit table
#[fixture]
pub fn fruit_table() -> MemoryTable {
	MemoryTable::new(
		["Name", "Count"],
		vec![
			Row::new(["Banana", "3"]),
			Row::new(["Apple", "1"]),
			Row::new(["Cherry", "2"]),
		],
	)
}

/// Fixture providing a controller over the fruit table with English collation
#[fixture]
pub fn fruit_controller(fruit_table: MemoryTable) -> FruitController {
	TableController::new(fruit_table, LocaleCollator::new("en").unwrap())
}

/// Fixture providing venue booking rows as rendered by the listing page
#[fixture]
pub fn booking_table() -> MemoryTable {
	let rows = [
		("场地 12", "12:00-13:00", "二群", "已确认"),
		("场地 3", "13:00-14:00", "一群", "待审核"),
		("场地 7", "12:00-13:00", "一群", "已确认"),
		("场地 21", "14:00-15:00", "二群", "已取消"),
	];
	MemoryTable::new(
		["场地", "时间段", "群组", "状态"],
		rows.into_iter()
			.map(|(venue, slot, group, status)| {
				Row::with_text_content(
					[venue, slot, group, status],
					format!("\n\t{venue}\n\t{slot}\n\t{group}\n\t{status}\n"),
				)
			})
			.collect(),
	)
}
