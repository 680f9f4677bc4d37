//! Form validation hints and confirm links

use venueboard_conf::FormSettings;
use venueboard_utils::extract_confirm_message;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlFormElement};

use super::{listen, query_all};

/// Blocks submission of invalid forms and marks submitted forms
pub(crate) fn bind_forms(root: &Element, settings: &FormSettings) -> Result<usize, JsValue> {
	let forms: Vec<HtmlFormElement> = query_all(root, &settings.selector)
		.into_iter()
		.filter_map(|el| el.dyn_into::<HtmlFormElement>().ok())
		.collect();

	for form in &forms {
		let target = form.clone();
		let validated_class = settings.validated_class.clone();
		listen(form, "submit", move |event| {
			if !target.check_validity() {
				event.prevent_default();
				event.stop_propagation();
			}
			let _ = target.class_list().add_1(&validated_class);
		})?;
	}
	Ok(forms.len())
}

/// Asks for confirmation before following links with an inline `confirm('…')`
pub(crate) fn bind_confirm_links(root: &Element, settings: &FormSettings) -> Result<usize, JsValue> {
	let mut bound = 0;
	for link in query_all(root, &settings.confirm_link_selector) {
		let Some(message) = link
			.get_attribute("onclick")
			.and_then(|onclick| extract_confirm_message(&onclick))
		else {
			continue;
		};
		listen(&link, "click", move |event| {
			let confirmed = web_sys::window()
				.and_then(|window| window.confirm_with_message(&message).ok())
				.unwrap_or(false);
			if !confirmed {
				event.prevent_default();
			}
		})?;
		bound += 1;
	}
	Ok(bound)
}
