//! # Venueboard
//!
//! Client-side table tooling for the venue booking pages: click-to-sort
//! columns, live search, and the small conveniences every page loads
//! (auto-closing alerts, form validation hints, screenshot upload checks,
//! local timestamps, tooltips and a back-to-top button).
//!
//! ## Crates
//!
//! - [`tables`] - sort and filter logic over any [`tables::TableSurface`]
//! - [`conf`] - [`UiSettings`] loaded from TOML or JSON
//! - [`utils`] - file sizes, timestamps, upload checks and confirm messages
//! - `pages` - browser bindings (feature `pages`, DOM layer on `wasm32` only)
//!
//! ## Example
//!
//! ```rust
//! use venueboard::prelude::*;
//!
//! let table = MemoryTable::new(
//!     ["Venue", "City"],
//!     vec![
//!         Row::new(["Harbour Hall", "Qingdao"]),
//!         Row::new(["Art Loft", "Hangzhou"]),
//!     ],
//! );
//! let mut controller = TableController::new(table, OrdinalCollator);
//!
//! controller.sort(0);
//! assert_eq!(controller.surface().column_texts(0), ["Art Loft", "Harbour Hall"]);
//! ```

pub use venueboard_conf as conf;
pub use venueboard_tables as tables;
pub use venueboard_utils as utils;

#[cfg(feature = "pages")]
pub use venueboard_pages as pages;

pub use venueboard_conf::{SettingsError, UiSettings};
pub use venueboard_tables::{TableController, TableError};

/// Commonly used types
pub mod prelude {
	pub use venueboard_conf::UiSettings;
	pub use venueboard_tables::{
		Filterable, LocaleCollator, MemoryTable, OrdinalCollator, Row, SortDirection, Sortable,
		TableController, TableSurface, TextCollator,
	};
	pub use venueboard_utils::{UploadPolicy, format_file_size, format_timestamp};
}
