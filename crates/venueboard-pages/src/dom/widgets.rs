//! Local timestamps, tooltips and the back-to-top button

use venueboard_conf::WidgetSettings;
use venueboard_utils::timefmt::offset_from_minutes;
use venueboard_utils::{BackToTop, format_timestamp};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::{bootstrap_instance, listen, query_all};
use crate::markup::{BACK_TO_TOP_CLASS, BACK_TO_TOP_LABEL, BACK_TO_TOP_STYLE};

/// Rewrites the configured timestamp attribute as local time
///
/// Elements whose value does not parse keep their text.
pub(crate) fn format_times(root: &Element, settings: &WidgetSettings, utc_offset_minutes: i32) -> usize {
	let Some(offset) = offset_from_minutes(utc_offset_minutes) else {
		crate::warn_log!("utc offset {utc_offset_minutes} out of range");
		return 0;
	};
	let mut formatted = 0;
	for element in query_all(root, &settings.time_selector) {
		let Some(raw) = element.get_attribute(&settings.time_attribute) else {
			continue;
		};
		match format_timestamp(&raw, offset) {
			Some(text) => {
				element.set_text_content(Some(&text));
				formatted += 1;
			}
			None => crate::debug_log!("unparseable timestamp {raw:?}"),
		}
	}
	formatted
}

/// Creates Bootstrap tooltips; does nothing without Bootstrap
pub(crate) fn init_tooltips(root: &Element, settings: &WidgetSettings) -> usize {
	query_all(root, &settings.tooltip_selector)
		.iter()
		.filter(|element| bootstrap_instance("Tooltip", element).is_some())
		.count()
}

/// Appends the back-to-top button and follows the scroll position
pub(crate) fn install_back_to_top(document: &Document, settings: &WidgetSettings) -> Result<HtmlElement, JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))?;
	let body = document.body().ok_or_else(|| JsValue::from_str("No body element"))?;

	let button: HtmlElement = document.create_element("button")?.dyn_into()?;
	button.set_inner_text(BACK_TO_TOP_LABEL);
	button.set_class_name(BACK_TO_TOP_CLASS);
	button.style().set_css_text(BACK_TO_TOP_STYLE);
	body.append_child(&button)?;

	let scroller = window.clone();
	listen(&button, "click", move |_event| {
		let options = ScrollToOptions::new();
		options.set_top(0.0);
		options.set_behavior(ScrollBehavior::Smooth);
		scroller.scroll_to_with_scroll_to_options(&options);
	})?;

	let back_to_top = BackToTop::new(settings.back_to_top_threshold_px);
	let watched = window.clone();
	let target = button.clone();
	listen(&window, "scroll", move |_event| {
		let offset = watched.scroll_y().unwrap_or(0.0);
		let _ = target.style().set_property("display", back_to_top.display_at(offset));
	})?;

	Ok(button)
}
