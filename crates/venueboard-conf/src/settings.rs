//! Settings structures and loaders

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Top-level settings for the page widgets
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
	/// BCP-47 tag used for column collation and timestamp display
	#[serde(default = "default_locale")]
	pub locale: String,

	/// Offset from UTC, in minutes, used to display timestamps
	#[serde(default = "default_utc_offset_minutes")]
	pub utc_offset_minutes: i32,

	/// Sortable and searchable tables
	#[serde(default)]
	pub tables: TableSettings,

	/// Auto-dismissed alerts
	#[serde(default)]
	pub alerts: AlertSettings,

	/// Form validation and confirm links
	#[serde(default)]
	pub forms: FormSettings,

	/// Screenshot upload validation and preview
	#[serde(default)]
	pub upload: UploadSettings,

	/// Timestamps, tooltips, back-to-top button and toasts
	#[serde(default)]
	pub widgets: WidgetSettings,
}

fn default_locale() -> String {
	"zh-CN".to_string()
}

fn default_utc_offset_minutes() -> i32 {
	8 * 60
}

impl Default for UiSettings {
	fn default() -> Self {
		Self {
			locale: default_locale(),
			utc_offset_minutes: default_utc_offset_minutes(),
			tables: TableSettings::default(),
			alerts: AlertSettings::default(),
			forms: FormSettings::default(),
			upload: UploadSettings::default(),
			widgets: WidgetSettings::default(),
		}
	}
}

/// Sortable table configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Selector for header cells that accept sort clicks
	pub sortable_header_selector: String,
	/// Selector for the tables the search box filters
	pub table_selector: String,
	/// Id of the search input
	pub search_input_id: String,
	/// Class marking an ascending header
	pub sort_asc_class: String,
	/// Class marking a descending header
	pub sort_desc_class: String,
	/// Text appended to sortable headers
	pub sort_indicator: String,
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			sortable_header_selector: ".table th[data-sort]".to_string(),
			table_selector: "table".to_string(),
			search_input_id: "searchInput".to_string(),
			sort_asc_class: "sort-asc".to_string(),
			sort_desc_class: "sort-desc".to_string(),
			sort_indicator: " ↕️".to_string(),
		}
	}
}

/// Alert configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertSettings {
	/// Selector for alerts closed automatically
	pub selector: String,
	/// Delay before an alert is closed, in milliseconds
	pub dismiss_after_ms: u32,
}

impl Default for AlertSettings {
	fn default() -> Self {
		Self {
			selector: ".alert-dismissible".to_string(),
			dismiss_after_ms: 5_000,
		}
	}
}

/// Form configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// Selector for forms validated on submit
	pub selector: String,
	/// Class added to a form once it has been submitted
	pub validated_class: String,
	/// Selector for links carrying an inline `confirm('…')`
	pub confirm_link_selector: String,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			selector: "form".to_string(),
			validated_class: "was-validated".to_string(),
			confirm_link_selector: "a[onclick*=\"confirm\"]".to_string(),
		}
	}
}

/// Upload configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
	/// Id of the file input
	pub input_id: String,
	/// Id of the preview container, created next to the input when missing
	pub preview_id: String,
	/// Largest accepted file, in bytes
	pub max_bytes: u64,
	/// Accepted MIME types
	pub allowed_types: Vec<String>,
}

impl Default for UploadSettings {
	fn default() -> Self {
		Self {
			input_id: "venue_screenshot".to_string(),
			preview_id: "imagePreview".to_string(),
			max_bytes: 16 * 1024 * 1024,
			allowed_types: ["image/png", "image/jpg", "image/jpeg", "image/gif"]
				.into_iter()
				.map(String::from)
				.collect(),
		}
	}
}

/// Miscellaneous widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
	/// Selector for elements holding a timestamp
	pub time_selector: String,
	/// Attribute of those elements that carries the raw timestamp
	pub time_attribute: String,
	/// Selector for Bootstrap tooltip triggers
	pub tooltip_selector: String,
	/// Scroll offset past which the back-to-top button appears, in pixels
	pub back_to_top_threshold_px: u32,
	/// How long a toast stays on screen, in milliseconds
	pub toast_duration_ms: u32,
}

impl Default for WidgetSettings {
	fn default() -> Self {
		Self {
			time_selector: "[data-time]".to_string(),
			time_attribute: "data-time".to_string(),
			tooltip_selector: "[data-bs-toggle=\"tooltip\"]".to_string(),
			back_to_top_threshold_px: 300,
			toast_duration_ms: 3_000,
		}
	}
}

impl UiSettings {
	/// Create new settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Validate settings
	pub fn validate(&self) -> Result<(), SettingsError> {
		let required = [
			("locale", &self.locale),
			("tables.sortable_header_selector", &self.tables.sortable_header_selector),
			("tables.table_selector", &self.tables.table_selector),
			("tables.search_input_id", &self.tables.search_input_id),
			("tables.sort_asc_class", &self.tables.sort_asc_class),
			("tables.sort_desc_class", &self.tables.sort_desc_class),
			("upload.input_id", &self.upload.input_id),
			("upload.preview_id", &self.upload.preview_id),
			("widgets.time_attribute", &self.widgets.time_attribute),
		];
		if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
			return Err(SettingsError::ValidationError(format!(
				"{name} must not be empty"
			)));
		}

		// DOMTokenList refuses tokens containing whitespace
		for (name, class) in [
			("tables.sort_asc_class", &self.tables.sort_asc_class),
			("tables.sort_desc_class", &self.tables.sort_desc_class),
		] {
			if class.chars().any(char::is_whitespace) {
				return Err(SettingsError::ValidationError(format!(
					"{name} must be a single class name: {class:?}"
				)));
			}
		}

		if self.tables.sort_asc_class == self.tables.sort_desc_class {
			return Err(SettingsError::ValidationError(
				"sort_asc_class and sort_desc_class must differ".to_string(),
			));
		}

		if self.upload.max_bytes == 0 {
			return Err(SettingsError::ValidationError(
				"upload.max_bytes must be greater than zero".to_string(),
			));
		}

		if self.upload.allowed_types.is_empty() {
			return Err(SettingsError::ValidationError(
				"upload.allowed_types must not be empty".to_string(),
			));
		}

		// chrono::FixedOffset accepts strictly less than a day
		if self.utc_offset_minutes.abs() >= 24 * 60 {
			return Err(SettingsError::ValidationError(format!(
				"utc_offset_minutes out of range: {}",
				self.utc_offset_minutes
			)));
		}

		Ok(())
	}

	/// Parse and validate settings from a TOML document
	pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
		let settings: UiSettings = toml::from_str(contents)
			.map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Parse and validate settings from a JSON document
	pub fn from_json_str(contents: &str) -> Result<Self, SettingsError> {
		let settings: UiSettings = serde_json::from_str(contents)
			.map_err(|e| SettingsError::ParseError(format!("JSON parse error: {}", e)))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Load settings from a configuration file
	///
	/// The format is chosen by extension: `.toml` or `.json`.
	pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			SettingsError::FileError(format!("Failed to read {}: {}", path.display(), e))
		})?;

		let settings = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml_str(&contents)?,
			Some("json") => Self::from_json_str(&contents)?,
			_ => {
				return Err(SettingsError::UnsupportedFormat(
					"Supported formats: .toml, .json".to_string(),
				));
			}
		};
		tracing::debug!(path = %path.display(), "loaded ui settings");
		Ok(settings)
	}
}
