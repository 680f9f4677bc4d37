//! Confirmation prompts embedded in link handlers

use regex::Regex;
use std::sync::LazyLock;

static CONFIRM_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"confirm\('(.+?)'\)").expect("confirm pattern is valid"));

/// Extracts the prompt from an inline `onclick="return confirm('…')"` handler
///
/// Returns `None` when the handler carries no single-quoted `confirm` call,
/// in which case the link is left alone.
///
/// # Examples
///
/// ```
/// use venueboard_utils::extract_confirm_message;
///
/// assert_eq!(
///     extract_confirm_message("return confirm('确定要删除这个场地吗？')").as_deref(),
///     Some("确定要删除这个场地吗？")
/// );
/// assert_eq!(extract_confirm_message("window.print()"), None);
/// ```
pub fn extract_confirm_message(onclick: &str) -> Option<String> {
	CONFIRM_RE
		.captures(onclick)
		.and_then(|caps| caps.get(1))
		.map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("return confirm('Delete booking?')", Some("Delete booking?"))]
	#[case("if (!confirm('a')) return false; confirm('b')", Some("a"))]
	#[case("confirm('Cancel 12:00-13:00?');", Some("Cancel 12:00-13:00?"))]
	#[case("return confirm(\"double quoted\")", None)]
	#[case("confirm('')", None)]
	#[case("", None)]
	fn test_extract_confirm_message(#[case] onclick: &str, #[case] expected: Option<&str>) {
		assert_eq!(extract_confirm_message(onclick).as_deref(), expected);
	}
}
