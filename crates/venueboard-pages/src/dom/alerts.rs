//! Auto-dismissed alerts

use venueboard_conf::AlertSettings;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::{bootstrap_instance, call_method, query_all, set_timeout};

/// Schedules every matching alert under `root` to close
///
/// Returns how many alerts were scheduled.
pub(crate) fn bind_alerts(root: &Element, settings: &AlertSettings) -> Result<usize, JsValue> {
	let alerts = query_all(root, &settings.selector);
	for alert in &alerts {
		let alert = alert.clone();
		set_timeout(settings.dismiss_after_ms, move || close_alert(&alert))?;
	}
	Ok(alerts.len())
}

/// Closes through Bootstrap so its fade transition runs, else removes the node
fn close_alert(alert: &Element) {
	match bootstrap_instance("Alert", alert) {
		Some(instance) => {
			if let Err(err) = call_method(&instance, "close") {
				crate::warn_log!("bootstrap alert close failed: {err:?}");
				alert.remove();
			}
		}
		None => alert.remove(),
	}
}
