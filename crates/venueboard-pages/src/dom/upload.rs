//! Screenshot upload checks and preview

use venueboard_conf::UploadSettings;
use venueboard_utils::UploadPolicy;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, File, FileReader, HtmlInputElement};

use super::listen;
use crate::markup::{PREVIEW_CLASS, image_preview, upload_rejection_message};

/// Validates the chosen file and previews it
///
/// Returns `Ok(false)` when the page has no upload input.
pub(crate) fn bind_upload(document: &Document, settings: &UploadSettings) -> Result<bool, JsValue> {
	let Some(input) = document
		.get_element_by_id(&settings.input_id)
		.and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
	else {
		return Ok(false);
	};

	let policy = UploadPolicy::new(settings.max_bytes, settings.allowed_types.iter().cloned());
	let preview_id = settings.preview_id.clone();
	let document = document.clone();
	let source = input.clone();
	listen(&input, "change", move |_event| {
		let Some(file) = source.files().and_then(|files| files.get(0)) else {
			return;
		};
		// File sizes are integral byte counts
		let size = file.size() as u64;
		if let Err(rejection) = policy.check(&file.name(), &file.type_(), size) {
			crate::info_log!("{rejection}");
			if let Some(window) = web_sys::window() {
				let _ = window.alert_with_message(&upload_rejection_message(&rejection));
			}
			source.set_value("");
			return;
		}
		if let Err(err) = show_preview(&document, &source, &preview_id, file) {
			crate::error_log!("failed to preview upload: {err:?}");
		}
	})?;
	Ok(true)
}

fn show_preview(document: &Document, input: &HtmlInputElement, preview_id: &str, file: File) -> Result<(), JsValue> {
	let reader = FileReader::new()?;
	let container = preview_container(document, input, preview_id)?;
	let loaded = reader.clone();
	let file_name = file.name();
	let onload = Closure::once_into_js(move || {
		let Some(data_url) = loaded.result().ok().and_then(|result| result.as_string()) else {
			return;
		};
		container.set_inner_html(&image_preview(&data_url, &file_name));
	});
	reader.set_onload(Some(onload.unchecked_ref()));
	reader.read_as_data_url(&file)
}

/// Finds the preview element or creates it after the input
fn preview_container(document: &Document, input: &HtmlInputElement, preview_id: &str) -> Result<Element, JsValue> {
	if let Some(existing) = document.get_element_by_id(preview_id) {
		return Ok(existing);
	}
	let container = document.create_element("div")?;
	container.set_id(preview_id);
	container.set_class_name(PREVIEW_CLASS);
	if let Some(parent) = input.parent_node() {
		parent.append_child(&container)?;
	}
	Ok(container)
}
