//! Helpers exposed to page scripts

use venueboard_conf::WidgetSettings;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlElement;

use super::set_timeout;
use crate::markup::{COPIED_TEXT, TOAST_CONTAINER_CLASS, TOAST_Z_INDEX, loading_indicator, toast};

/// Disables `button` and shows the loading indicator
///
/// Returns the previous markup for [`hide_loading`].
pub fn show_loading(button: &HtmlElement) -> String {
	let original = button.inner_html();
	let _ = button.set_attribute("disabled", "");
	button.set_inner_html(&loading_indicator());
	original
}

/// Re-enables `button` and restores `original_html`
pub fn hide_loading(button: &HtmlElement, original_html: &str) {
	let _ = button.remove_attribute("disabled");
	button.set_inner_html(original_html);
}

/// Writes `text` to the clipboard and shows a toast on success
///
/// The write is asynchronous; failures are logged and shown nowhere.
pub fn copy_to_clipboard(text: String, settings: &WidgetSettings) {
	let duration_ms = settings.toast_duration_ms;
	spawn_local(async move {
		match write_clipboard(&text).await {
			Ok(()) => {
				if let Err(err) = show_toast(COPIED_TEXT, duration_ms) {
					crate::error_log!("failed to show toast: {err:?}");
				}
			}
			Err(err) => crate::error_log!("复制失败: {err:?}"),
		}
	});
}

async fn write_clipboard(text: &str) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))?;
	let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
	if clipboard.is_undefined() {
		return Err(JsValue::from_str("Clipboard API unavailable"));
	}
	let write_text: js_sys::Function =
		js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
	let promise: js_sys::Promise = write_text.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()?;
	JsFuture::from(promise).await?;
	Ok(())
}

fn show_toast(message: &str, duration_ms: u32) -> Result<(), JsValue> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| JsValue::from_str("No document"))?;
	let body = document.body().ok_or_else(|| JsValue::from_str("No body element"))?;

	let container: HtmlElement = document.create_element("div")?.dyn_into()?;
	container.set_class_name(TOAST_CONTAINER_CLASS);
	container.style().set_property("z-index", TOAST_Z_INDEX)?;
	container.set_inner_html(&toast(message));
	body.append_child(&container)?;

	set_timeout(duration_ms, move || container.remove())
}

/// `formatFileSize(bytes)` for page scripts
#[wasm_bindgen(js_name = formatFileSize)]
pub fn format_file_size_js(bytes: f64) -> String {
	// Negative and fractional sizes are not meaningful byte counts
	venueboard_utils::format_file_size(bytes.max(0.0) as u64)
}

/// `showLoading(button)` for page scripts
#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading_js(button: &HtmlElement) -> String {
	show_loading(button)
}

/// `hideLoading(button, originalHtml)` for page scripts
#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading_js(button: &HtmlElement, original_html: &str) {
	hide_loading(button, original_html);
}

/// `copyToClipboard(text)` for page scripts, using the mounted settings
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard_js(text: String) {
	let settings = super::init::with_mounted(|settings, _| settings.widgets.clone()).unwrap_or_default();
	copy_to_clipboard(text, &settings);
}
