//! Human-readable file sizes

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count using binary multiples
///
/// The value is rounded to two decimals and trailing zeros are dropped.
/// Sizes of a terabyte or more are still expressed in GB.
///
/// # Examples
///
/// ```
/// use venueboard_utils::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(16 * 1024 * 1024), "16 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
	let mut value = bytes as f64;
	let mut unit = 0;
	while value >= 1024.0 && unit < UNITS.len() - 1 {
		value /= 1024.0;
		unit += 1;
	}

	let rounded = format!("{value:.2}");
	let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
	format!("{trimmed} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, "0 Bytes")]
	#[case(1, "1 Bytes")]
	#[case(1023, "1023 Bytes")]
	#[case(1024, "1 KB")]
	#[case(1126, "1.1 KB")]
	#[case(1_572_864, "1.5 MB")]
	#[case(1_073_741_824, "1 GB")]
	#[case(5 * 1_099_511_627_776, "5120 GB")]
	fn test_format_file_size(#[case] bytes: u64, #[case] expected: &str) {
		assert_eq!(format_file_size(bytes), expected);
	}
}
