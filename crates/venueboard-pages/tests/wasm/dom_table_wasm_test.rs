//! Browser tests for table binding
//!
//! Run with `wasm-pack test --headless --chrome crates/venueboard-pages`.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use venueboard_conf::{TableSettings, UiSettings};
use venueboard_pages::dom::{DomTable, init, mount, with_mounted};
use venueboard_tables::{
	Filterable, LocaleCollator, SortDirection, Sortable, TableController, TableSurface,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const VENUES: &str = r#"
<table class="table" id="venues">
	<thead><tr><th data-sort>Name</th><th>Seats</th></tr></thead>
	<tbody>
		<tr><td>Cherry Hall</td><td>120</td></tr>
		<tr><td>apple Room</td><td>40</td></tr>
		<tr><td>Banana Loft</td><td>8</td></tr>
	</tbody>
</table>
"#;

fn mount_fragment(html: &str) -> Element {
	let document = web_sys::window().unwrap().document().unwrap();
	let container = document.create_element("div").unwrap();
	container.set_inner_html(html);
	document.body().unwrap().append_child(&container).unwrap();
	container
}

fn first_column(container: &Element) -> Vec<String> {
	let cells = container.query_selector_all("tbody tr td:first-child").unwrap();
	(0..cells.length())
		.filter_map(|i| cells.item(i))
		.map(|cell| cell.text_content().unwrap_or_default())
		.collect()
}

fn hidden_rows(container: &Element) -> usize {
	let rows = container.query_selector_all("tbody tr").unwrap();
	(0..rows.length())
		.filter_map(|i| rows.item(i))
		.filter_map(|row| row.dyn_into::<HtmlElement>().ok())
		.filter(|row| row.style().get_property_value("display").unwrap_or_default() == "none")
		.count()
}

fn venue_controller(container: &Element) -> TableController<DomTable, LocaleCollator> {
	let table = container.query_selector("table").unwrap().unwrap();
	let surface = DomTable::new(table, &TableSettings::default());
	TableController::new(surface, LocaleCollator::new("en").unwrap())
}

#[wasm_bindgen_test]
fn test_dom_table_reads_headers_and_rows() {
	let container = mount_fragment(VENUES);
	let controller = venue_controller(&container);

	assert_eq!(controller.surface().header_count(), 2);
	assert!(controller.surface().is_sortable(0));
	assert!(!controller.surface().is_sortable(1));
	assert_eq!(controller.surface().snapshot_rows().len(), 3);

	container.remove();
}

#[wasm_bindgen_test]
fn test_sort_moves_rows_and_marks_header() {
	let container = mount_fragment(VENUES);
	let mut controller = venue_controller(&container);

	assert_eq!(controller.sort(0), Some(SortDirection::Ascending));
	assert_eq!(first_column(&container), vec!["apple Room", "Banana Loft", "Cherry Hall"]);

	assert_eq!(controller.sort(0), Some(SortDirection::Descending));
	assert_eq!(first_column(&container), vec!["Cherry Hall", "Banana Loft", "apple Room"]);

	let header = container.query_selector("th[data-sort]").unwrap().unwrap();
	assert!(header.class_list().contains("sort-desc"));
	assert!(!header.class_list().contains("sort-asc"));

	container.remove();
}

#[wasm_bindgen_test]
fn test_unsortable_column_is_ignored() {
	let container = mount_fragment(VENUES);
	let mut controller = venue_controller(&container);

	assert_eq!(controller.sort(1), None);
	assert_eq!(first_column(&container), vec!["Cherry Hall", "apple Room", "Banana Loft"]);

	container.remove();
}

#[wasm_bindgen_test]
fn test_filter_hides_and_restores_rows() {
	let container = mount_fragment(VENUES);
	let mut controller = venue_controller(&container);

	controller.filter_by("LOFT");
	assert_eq!(hidden_rows(&container), 2);

	controller.clear_filter();
	assert_eq!(hidden_rows(&container), 0);

	container.remove();
}

#[wasm_bindgen_test]
fn test_init_binds_header_clicks() {
	let container = mount_fragment(VENUES);
	let bindings = init(&container, &UiSettings::default()).unwrap();
	assert_eq!(bindings.table_count(), 1);

	let header: HtmlElement = container
		.query_selector("th[data-sort]")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();
	assert!(header.text_content().unwrap().ends_with(" ↕️"));

	header.click();
	assert_eq!(first_column(&container), vec!["apple Room", "Banana Loft", "Cherry Hall"]);
	assert_eq!(
		bindings.sort_states().get("venues").direction_of(0),
		Some(SortDirection::Ascending)
	);

	bindings.filter("cherry");
	assert_eq!(hidden_rows(&container), 2);

	container.remove();
}

#[wasm_bindgen_test]
fn test_shared_collator_across_tables() {
	let container = mount_fragment(VENUES);
	let collator = Rc::new(LocaleCollator::new("zh-CN").unwrap());
	let table = container.query_selector("table").unwrap().unwrap();
	let mut controller = TableController::new(DomTable::new(table, &TableSettings::default()), Rc::clone(&collator));

	assert!(controller.sort(0).is_some());
	assert_eq!(Rc::strong_count(&collator), 2);

	container.remove();
}

#[wasm_bindgen_test]
fn test_typing_in_search_box_filters_bound_tables() {
	let container = mount_fragment(&format!(r#"<input id="searchInput" type="text">{VENUES}"#));
	let _bindings = init(&container, &UiSettings::default()).unwrap();

	let input: HtmlInputElement = container
		.query_selector("#searchInput")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();
	input.set_value("HALL");
	input.dispatch_event(&Event::new("input").unwrap()).unwrap();
	assert_eq!(hidden_rows(&container), 2);

	input.set_value("");
	input.dispatch_event(&Event::new("input").unwrap()).unwrap();
	assert_eq!(hidden_rows(&container), 0);

	container.remove();
}

#[wasm_bindgen_test]
fn test_init_rejects_class_names_with_whitespace() {
	let container = mount_fragment(VENUES);
	let mut broken = UiSettings::default();
	broken.tables.sort_asc_class = "sort asc".to_string();
	assert!(init(&container, &broken).is_err());

	container.remove();
}

#[wasm_bindgen_test]
fn test_mount_after_load_binds_immediately() {
	let container = mount_fragment(VENUES);
	let document = web_sys::window().unwrap().document().unwrap();
	assert_ne!(document.ready_state(), "loading");

	mount(UiSettings::default()).unwrap();

	assert_eq!(with_mounted(|_, bindings| bindings.table("venues").is_some()), Some(true));
	assert_eq!(with_mounted(|_, bindings| bindings.back_to_top().is_some()), Some(true));

	let header: HtmlElement = container
		.query_selector("th[data-sort]")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();
	header.click();
	assert_eq!(first_column(&container), vec!["apple Room", "Banana Loft", "Cherry Hall"]);

	if let Some(button) = with_mounted(|_, bindings| bindings.back_to_top().cloned()).flatten() {
		button.remove();
	}
	container.remove();
}
