//! Page initialisation

use std::cell::RefCell;
use std::rc::Rc;

use venueboard_conf::UiSettings;
use venueboard_tables::{Filterable, LocaleCollator, SortRegistry, TableController};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use super::alerts::bind_alerts;
use super::forms::{bind_confirm_links, bind_forms};
use super::table::{DomTable, SharedController, bind_search, bind_sorting};
use super::upload::bind_upload;
use super::widgets::{format_times, init_tooltips, install_back_to_top};
use super::{listen, query_all};

// Bindings created by `mount`, kept alive for the page lifetime
thread_local! {
	static MOUNTED: RefCell<Option<(UiSettings, Bindings)>> = const { RefCell::new(None) };
}

/// Everything [`init`] bound on a page
///
/// Dropping it does not unbind handlers; the event closures own their own
/// handles to the controllers.
#[derive(Debug, Default)]
pub struct Bindings {
	tables: Vec<(String, SharedController)>,
	back_to_top: Option<HtmlElement>,
}

impl Bindings {
	/// Number of tables bound for sorting and search
	pub fn table_count(&self) -> usize {
		self.tables.len()
	}

	/// Controller of the table with key `id`
	///
	/// Tables are keyed by their `id` attribute, or `table-<n>` by position.
	pub fn table(&self, id: &str) -> Option<&SharedController> {
		self.tables
			.iter()
			.find(|(key, _)| key == id)
			.map(|(_, controller)| controller)
	}

	/// Current sort state of every bound table
	pub fn sort_states(&self) -> SortRegistry {
		let mut registry = SortRegistry::default();
		for (id, controller) in &self.tables {
			if let Ok(controller) = controller.try_borrow() {
				registry.insert(id.clone(), controller.sort_state());
			}
		}
		registry
	}

	/// Applies `query` to every bound table, as typing into the search box does
	pub fn filter(&self, query: &str) {
		for (_, controller) in &self.tables {
			if let Ok(mut controller) = controller.try_borrow_mut() {
				controller.filter_by(query);
			}
		}
	}

	/// The back-to-top button, when one was installed
	pub fn back_to_top(&self) -> Option<&HtmlElement> {
		self.back_to_top.as_ref()
	}
}

/// Binds every widget found under `root`
///
/// Widgets whose elements are missing are skipped. The back-to-top button is
/// only installed when `root` is the document body.
///
/// # Errors
///
/// Returns an error when `settings` fail validation, the configured locale
/// has no collation data, or a listener cannot be attached.
pub fn init(root: &Element, settings: &UiSettings) -> Result<Bindings, JsValue> {
	settings
		.validate()
		.map_err(|err| JsValue::from_str(&err.to_string()))?;

	let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("No document object"))?;

	let collator =
		Rc::new(LocaleCollator::new(&settings.locale).map_err(|err| JsValue::from_str(&err.to_string()))?);

	let mut bindings = Bindings::default();
	for (position, element) in query_all(root, &settings.tables.table_selector)
		.into_iter()
		.enumerate()
	{
		let id = match element.id() {
			id if id.is_empty() => format!("table-{position}"),
			id => id,
		};
		let surface = DomTable::new(element, &settings.tables);
		let controller = Rc::new(RefCell::new(TableController::new(surface, Rc::clone(&collator))));
		bind_sorting(&controller, &settings.tables)?;
		bindings.tables.push((id, controller));
	}

	if let Some(input) = document
		.get_element_by_id(&settings.tables.search_input_id)
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
	{
		let controllers = bindings
			.tables
			.iter()
			.map(|(_, controller)| Rc::clone(controller))
			.collect();
		bind_search(&input, controllers)?;
	}

	let alerts = bind_alerts(root, &settings.alerts)?;
	let forms = bind_forms(root, &settings.forms)?;
	let confirms = bind_confirm_links(root, &settings.forms)?;
	bind_upload(&document, &settings.upload)?;
	let times = format_times(root, &settings.widgets, settings.utc_offset_minutes);
	let tooltips = init_tooltips(root, &settings.widgets);

	let is_body = document
		.body()
		.is_some_and(|body| AsRef::<Element>::as_ref(&body) == root);
	if is_body {
		bindings.back_to_top = Some(install_back_to_top(&document, &settings.widgets)?);
	}

	crate::info_log!(
		"bound {} tables, {alerts} alerts, {forms} forms, {confirms} confirm links, {times} timestamps, {tooltips} tooltips",
		bindings.table_count()
	);
	Ok(bindings)
}

/// Runs [`init`] on the document body once the document has loaded
///
/// The resulting [`Bindings`] are kept for the page lifetime.
pub fn mount(settings: UiSettings) -> Result<(), JsValue> {
	settings
		.validate()
		.map_err(|err| JsValue::from_str(&err.to_string()))?;
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("No document object"))?;

	if document.ready_state() == "loading" {
		let mut pending = Some(settings);
		listen(&document, "DOMContentLoaded", move |_event| {
			if let Some(settings) = pending.take()
				&& let Err(err) = mount_now(settings)
			{
				crate::error_log!("mount failed: {err:?}");
			}
		})
	} else {
		mount_now(settings)
	}
}

fn mount_now(settings: UiSettings) -> Result<(), JsValue> {
	let body = web_sys::window()
		.and_then(|window| window.document())
		.and_then(|document| document.body())
		.ok_or_else(|| JsValue::from_str("No body element"))?;
	let bindings = init(&body, &settings)?;
	MOUNTED.with(|mounted| *mounted.borrow_mut() = Some((settings, bindings)));
	Ok(())
}

/// Runs `f` with the settings and bindings created by [`mount`]
///
/// Returns `None` before the page has been mounted.
pub fn with_mounted<F, R>(f: F) -> Option<R>
where
	F: FnOnce(&UiSettings, &Bindings) -> R,
{
	MOUNTED.with(|mounted| {
		mounted
			.borrow()
			.as_ref()
			.map(|(settings, bindings)| f(settings, bindings))
	})
}

/// JS entry point
///
/// `settings_json` overrides the defaults; pass nothing to use them as is.
#[wasm_bindgen]
pub fn venueboard_start(settings_json: Option<String>) -> Result<(), JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let settings = match settings_json {
		Some(json) => UiSettings::from_json_str(&json).map_err(|err| JsValue::from_str(&err.to_string()))?,
		None => UiSettings::default(),
	};
	mount(settings)
}
