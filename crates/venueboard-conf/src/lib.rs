//! # Venueboard settings
//!
//! Page-level configuration for the Venueboard widgets: which elements to bind,
//! the locale used for collation and timestamps, and the limits applied to
//! uploads. Every field has a default matching the markup rendered by the
//! venue booking templates, so an empty document is a valid configuration.
//!
//! Settings can be built in code, or parsed from TOML or JSON (for example a
//! JSON blob embedded in the page).
//!
//! ```rust
//! use venueboard_conf::UiSettings;
//!
//! let settings = UiSettings::from_toml_str(
//!     r#"
//!     locale = "en-US"
//!
//!     [upload]
//!     max_bytes = 1048576
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.locale, "en-US");
//! assert_eq!(settings.upload.max_bytes, 1024 * 1024);
//! assert_eq!(settings.tables.search_input_id, "searchInput");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod settings;

pub use error::SettingsError;
pub use settings::{
	AlertSettings, FormSettings, TableSettings, UiSettings, UploadSettings, WidgetSettings,
};
