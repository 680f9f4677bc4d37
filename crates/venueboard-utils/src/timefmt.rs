//! Timestamp display
//!
//! Server templates emit raw timestamps in `data-time` attributes, either as
//! RFC 3339 strings or as Python's default `YYYY-MM-DD HH:MM:SS[.ffffff]`
//! rendering. They are shown the way the `zh-CN` locale prints a date and
//! time: `2024/1/15 14:30:00`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

/// Output format, matching `Date.prototype.toLocaleString("zh-CN")`
pub const DISPLAY_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S";

const NAIVE_FORMATS: [&str; 4] = [
	"%Y-%m-%d %H:%M:%S%.f",
	"%Y-%m-%dT%H:%M:%S%.f",
	"%Y-%m-%d %H:%M",
	"%Y-%m-%dT%H:%M",
];

/// Builds a fixed offset from a number of minutes east of UTC
pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
	FixedOffset::east_opt(minutes.checked_mul(60)?)
}

/// Parses a raw timestamp into the display offset
///
/// - Strings carrying their own offset are converted to `offset`.
/// - Date-times without an offset are taken to already be in `offset`.
/// - A bare date is midnight UTC, the way browsers read ISO dates.
pub fn parse_timestamp(raw: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
	let raw = raw.trim();

	if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
		return Some(dt.with_timezone(&offset));
	}

	for format in NAIVE_FORMATS {
		if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
			return offset.from_local_datetime(&naive).single();
		}
	}

	if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
		let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
		return Some(midnight.with_timezone(&offset));
	}

	None
}

/// Formats a raw timestamp for display, or `None` if it cannot be parsed
///
/// # Examples
///
/// ```
/// use chrono::FixedOffset;
/// use venueboard_utils::format_timestamp;
///
/// let beijing = FixedOffset::east_opt(8 * 3600).unwrap();
/// assert_eq!(
///     format_timestamp("2024-01-15 14:30:00", beijing).as_deref(),
///     Some("2024/1/15 14:30:00")
/// );
/// assert_eq!(format_timestamp("yesterday", beijing), None);
/// ```
pub fn format_timestamp(raw: &str, offset: FixedOffset) -> Option<String> {
	let parsed = parse_timestamp(raw, offset);
	if parsed.is_none() {
		tracing::trace!(raw, "unparseable timestamp");
	}
	parsed.map(|dt| dt.format(DISPLAY_FORMAT).to_string())
}
