//! Sortable, searchable tables over live DOM nodes

use std::cell::RefCell;
use std::rc::Rc;

use venueboard_conf::TableSettings;
use venueboard_tables::{
	Filterable, LocaleCollator, Row, SortDirection, Sortable, TableController, TableSurface,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use super::{listen, query_all};

/// Controller shared between a table's event handlers
pub type SharedController = Rc<RefCell<TableController<DomTable, Rc<LocaleCollator>>>>;

/// A `<table>` element seen through [`TableSurface`]
///
/// Headers are the children of the row holding the table's first sortable
/// header; rows are the `tr` elements of its first `tbody`. Rows are read
/// from the document on every call, so rows added by other scripts are
/// picked up on the next interaction.
#[derive(Debug, Clone)]
pub struct DomTable {
	table: Element,
	header_row: Option<Element>,
	sortable_selector: String,
	asc_class: String,
	desc_class: String,
}

impl DomTable {
	/// Wraps `table` using the selectors and class names from `settings`
	pub fn new(table: Element, settings: &TableSettings) -> Self {
		let header_row = query_all(&table, &settings.sortable_header_selector)
			.into_iter()
			.find(|header| belongs_to(header, &table))
			.and_then(|header| header.parent_element());
		Self {
			table,
			header_row,
			sortable_selector: settings.sortable_header_selector.clone(),
			asc_class: settings.sort_asc_class.clone(),
			desc_class: settings.sort_desc_class.clone(),
		}
	}

	/// Returns the wrapped element
	pub fn element(&self) -> &Element {
		&self.table
	}

	/// Returns the header cells of the sortable header row
	pub fn headers(&self) -> Vec<Element> {
		self.header_row
			.as_ref()
			.map(|row| children(row))
			.unwrap_or_default()
	}

	fn body_rows(&self) -> Vec<Element> {
		let Ok(Some(tbody)) = self.table.query_selector("tbody") else {
			return Vec::new();
		};
		children(&tbody)
			.into_iter()
			.filter(|row| row.tag_name().eq_ignore_ascii_case("tr"))
			.collect()
	}
}

impl TableSurface for DomTable {
	fn header_count(&self) -> usize {
		self.headers().len()
	}

	fn is_sortable(&self, column: usize) -> bool {
		self.headers()
			.get(column)
			.is_some_and(|header| header.matches(&self.sortable_selector).unwrap_or(false))
	}

	fn snapshot_rows(&self) -> Vec<Row> {
		self.body_rows()
			.iter()
			.map(|row| {
				let cells: Vec<String> = children(row)
					.iter()
					.map(|cell| cell.text_content().unwrap_or_default())
					.collect();
				Row::with_text_content(cells, row.text_content().unwrap_or_default())
			})
			.collect()
	}

	fn reorder_rows(&mut self, order: &[usize]) {
		let rows = self.body_rows();
		let Ok(Some(tbody)) = self.table.query_selector("tbody") else {
			return;
		};
		for &index in order {
			if let Some(row) = rows.get(index)
				&& let Err(err) = tbody.append_child(row)
			{
				crate::error_log!("failed to move table row: {err:?}");
			}
		}
	}

	fn set_row_visible(&mut self, index: usize, visible: bool) {
		if let Some(row) = self.body_rows().get(index) {
			set_display(row, visible);
		}
	}

	fn set_header_direction(&mut self, column: usize, direction: Option<SortDirection>) {
		if let Some(header) = self.headers().get(column) {
			self.mark_header(header, direction);
		}
	}

	fn apply_visibility(&mut self, mask: &[bool]) {
		for (row, &visible) in self.body_rows().iter().zip(mask) {
			set_display(row, visible);
		}
	}

	fn apply_header_directions(&mut self, directions: &[Option<SortDirection>]) {
		for (header, &direction) in self.headers().iter().zip(directions) {
			self.mark_header(header, direction);
		}
	}
}

impl DomTable {
	fn mark_header(&self, header: &Element, direction: Option<SortDirection>) {
		let classes = header.class_list();
		if let Err(err) = classes.remove_2(&self.asc_class, &self.desc_class) {
			crate::error_log!("failed to clear sort marker: {err:?}");
		}
		let class = match direction {
			Some(SortDirection::Ascending) => &self.asc_class,
			Some(SortDirection::Descending) => &self.desc_class,
			None => return,
		};
		if let Err(err) = classes.add_1(class) {
			crate::error_log!("failed to set sort marker {class:?}: {err:?}");
		}
	}
}

fn set_display(row: &Element, visible: bool) {
	let Some(row) = row.dyn_ref::<HtmlElement>() else {
		return;
	};
	let style = row.style();
	let result = if visible {
		style.remove_property("display").map(|_| ())
	} else {
		style.set_property("display", "none")
	};
	if let Err(err) = result {
		crate::error_log!("failed to toggle table row: {err:?}");
	}
}

fn children(element: &Element) -> Vec<Element> {
	let collection = element.children();
	(0..collection.length())
		.filter_map(|i| collection.item(i))
		.collect()
}

/// True when `element` sits in `table` itself rather than a nested table
fn belongs_to(element: &Element, table: &Element) -> bool {
	matches!(element.closest("table"), Ok(Some(owner)) if &owner == table)
}

fn index_in_parent(element: &Element) -> Option<usize> {
	let parent = element.parent_element()?;
	children(&parent).iter().position(|sibling| sibling == element)
}

/// Binds header clicks of `table` to its controller
///
/// Sortable headers get a pointer cursor and the configured indicator.
pub(crate) fn bind_sorting(controller: &SharedController, settings: &TableSettings) -> Result<usize, JsValue> {
	let headers: Vec<Element> = {
		let borrowed = controller.borrow();
		let table = borrowed.surface().element().clone();
		query_all(&table, &settings.sortable_header_selector)
			.into_iter()
			.filter(|header| belongs_to(header, &table))
			.collect()
	};

	for header in &headers {
		if let Some(html) = header.dyn_ref::<HtmlElement>() {
			html.style().set_property("cursor", "pointer")?;
		}
		header.insert_adjacent_text("beforeend", &settings.sort_indicator)?;

		let controller = Rc::clone(controller);
		let clicked = header.clone();
		listen(header, "click", move |_event| {
			let Some(column) = index_in_parent(&clicked) else {
				return;
			};
			let Ok(mut controller) = controller.try_borrow_mut() else {
				crate::warn_log!("table busy, ignoring sort click");
				return;
			};
			let _direction = controller.sort(column);
			crate::debug_log!("sorted column {column}: {_direction:?}");
		})?;
	}
	Ok(headers.len())
}

/// Filters every table in `controllers` as the user types into `input`
pub(crate) fn bind_search(input: &HtmlElement, controllers: Vec<SharedController>) -> Result<(), JsValue> {
	let source = input.clone();
	listen(input, "input", move |_event| {
		let query = source
			.dyn_ref::<web_sys::HtmlInputElement>()
			.map(|input| input.value())
			.unwrap_or_else(|| source.text_content().unwrap_or_default());
		for controller in &controllers {
			if let Ok(mut controller) = controller.try_borrow_mut() {
				controller.filter_by(&query);
			}
		}
	})
}
