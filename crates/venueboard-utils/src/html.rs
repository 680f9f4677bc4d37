//! Markup escaping

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use venueboard_utils::escape_html;
///
/// assert_eq!(escape_html("<b>\"Court\" & 'Hall'</b>"), "&lt;b&gt;&quot;Court&quot; &amp; &#x27;Hall&#x27;&lt;/b&gt;");
/// ```
pub fn escape_html(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}
