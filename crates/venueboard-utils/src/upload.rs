//! Upload checks for venue screenshots

use thiserror::Error;

use crate::filesize::format_file_size;

fn human(bytes: &u64) -> String {
	format_file_size(*bytes)
}

fn joined(types: &[String]) -> String {
	types.join(", ")
}

/// Why an upload was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
	/// The file is larger than the configured limit
	#[error("{file_name} is {}, larger than the {} limit", human(.size), human(.limit))]
	TooLarge {
		/// Name of the selected file
		file_name: String,
		/// Size of the file in bytes
		size: u64,
		/// Largest accepted size in bytes
		limit: u64,
	},

	/// The file's MIME type is not accepted
	#[error("{file_name} has unsupported type {mime_type:?}; accepted: {}", joined(.allowed))]
	UnsupportedType {
		/// Name of the selected file
		file_name: String,
		/// MIME type reported by the browser
		mime_type: String,
		/// Accepted MIME types
		allowed: Vec<String>,
	},
}

/// Size and type limits for a file input
///
/// # Examples
///
/// ```
/// use venueboard_utils::UploadPolicy;
///
/// let policy = UploadPolicy::new(16 * 1024 * 1024, ["image/png", "image/jpeg"]);
/// assert!(policy.check("court.png", "image/png", 2048).is_ok());
/// assert!(policy.check("court.webp", "image/webp", 2048).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
	max_bytes: u64,
	allowed_types: Vec<String>,
}

impl UploadPolicy {
	/// Creates a policy from a size limit and accepted MIME types
	pub fn new<I, S>(max_bytes: u64, allowed_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			max_bytes,
			allowed_types: allowed_types.into_iter().map(Into::into).collect(),
		}
	}

	/// Returns the size limit in bytes
	pub fn max_bytes(&self) -> u64 {
		self.max_bytes
	}

	/// Returns the accepted MIME types
	pub fn allowed_types(&self) -> &[String] {
		&self.allowed_types
	}

	/// Checks a selected file, size first
	///
	/// MIME types are compared case-insensitively.
	pub fn check(&self, file_name: &str, mime_type: &str, size: u64) -> Result<(), UploadRejection> {
		if size > self.max_bytes {
			tracing::debug!(file_name, size, limit = self.max_bytes, "upload too large");
			return Err(UploadRejection::TooLarge {
				file_name: file_name.to_string(),
				size,
				limit: self.max_bytes,
			});
		}

		if !self
			.allowed_types
			.iter()
			.any(|allowed| allowed.eq_ignore_ascii_case(mime_type))
		{
			tracing::debug!(file_name, mime_type, "upload type refused");
			return Err(UploadRejection::UnsupportedType {
				file_name: file_name.to_string(),
				mime_type: mime_type.to_string(),
				allowed: self.allowed_types.clone(),
			});
		}

		Ok(())
	}
}
