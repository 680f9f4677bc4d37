//! Browser binding
//!
//! Every widget is bound through [`init`], which receives the container to
//! search and the settings to apply. Event closures live for the lifetime of
//! the page and are leaked with `Closure::forget` once attached.

mod alerts;
mod forms;
mod helpers;
mod init;
mod table;
mod upload;
mod widgets;

pub use helpers::{copy_to_clipboard, hide_loading, show_loading};
pub use init::{Bindings, init, mount, venueboard_start, with_mounted};
pub use table::{DomTable, SharedController};

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget};

/// Collects the elements under `root` matching `selector`
///
/// An invalid selector yields nothing.
pub(crate) fn query_all(root: &Element, selector: &str) -> Vec<Element> {
	let Ok(list) = root.query_selector_all(selector) else {
		crate::warn_log!("invalid selector {selector:?}");
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Attaches `handler` to `target` for the page lifetime
pub(crate) fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
	F: FnMut(Event) + 'static,
{
	let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
	target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

/// Runs `callback` once after `delay_ms`
pub(crate) fn set_timeout<F>(delay_ms: u32, callback: F) -> Result<(), JsValue>
where
	F: FnOnce() + 'static,
{
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))?;
	let callback = Closure::once_into_js(callback);
	window.set_timeout_with_callback_and_timeout_and_arguments_0(
		callback.unchecked_ref(),
		i32::try_from(delay_ms).unwrap_or(i32::MAX),
	)?;
	Ok(())
}

/// Instantiates `bootstrap.<component>` on `element` when Bootstrap is loaded
pub(crate) fn bootstrap_instance(component: &str, element: &Element) -> Option<JsValue> {
	let window = web_sys::window()?;
	let bootstrap = Reflect::get(&window, &JsValue::from_str("bootstrap")).ok()?;
	if bootstrap.is_undefined() || bootstrap.is_null() {
		return None;
	}
	let constructor: Function = Reflect::get(&bootstrap, &JsValue::from_str(component))
		.ok()?
		.dyn_into()
		.ok()?;
	Reflect::construct(&constructor, &Array::of1(element)).ok()
}

/// Calls a zero-argument method on a JS object
pub(crate) fn call_method(target: &JsValue, method: &str) -> Result<JsValue, JsValue> {
	let function: Function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
	function.call0(target)
}
