//! Table sorting and live search filtering for Venueboard
//!
//! This crate holds the logic behind the sortable listing tables rendered by the
//! venue booking pages: clicking a column header reorders the rows by that
//! column, and typing into the search box hides rows that do not contain the
//! query.
//!
//! The computation is pure and lives in [`sorting`] and [`filtering`]. Presenting
//! the result goes through the [`TableSurface`] trait, so the same
//! [`TableController`] drives both the in-memory [`MemoryTable`] and the browser
//! binding in `venueboard-pages`.
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[TableController] --> B[TableSurface]
//!     A --> C[TextCollator]
//!     A --> D[TableSortState]
//!     B --> E[MemoryTable]
//!     B --> F[DomTable - wasm32]
//!     C --> G[LocaleCollator]
//!     C --> H[OrdinalCollator]
//!     A --> I[sort_order]
//!     A --> J[visibility_mask]
//! ```
//!
//! # Example
//!
//! ```rust
//! use venueboard_tables::{
//!     Filterable, MemoryTable, OrdinalCollator, Row, SortDirection, Sortable, TableController,
//! };
//!
//! let table = MemoryTable::new(
//!     ["Name", "Slots"],
//!     vec![
//!         Row::new(["Banana", "3"]),
//!         Row::new(["Apple", "1"]),
//!         Row::new(["Cherry", "2"]),
//!     ],
//! );
//! let mut controller = TableController::new(table, OrdinalCollator);
//!
//! assert_eq!(controller.sort(0), Some(SortDirection::Ascending));
//! assert_eq!(controller.surface().column_texts(0), ["Apple", "Banana", "Cherry"]);
//!
//! controller.filter_by("app");
//! assert_eq!(controller.surface().visible_texts(0), ["Apple"]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod collation;
pub mod controller;
pub mod error;
pub mod filtering;
pub mod memory;
pub mod row;
pub mod sorting;
pub mod state;
pub mod surface;

// Re-exports for convenience
pub use collation::{FnCollator, LocaleCollator, OrdinalCollator, TextCollator};
pub use controller::TableController;
pub use error::{Result, TableError};
pub use filtering::{Filterable, SearchQuery, visibility_mask};
pub use memory::MemoryTable;
pub use row::Row;
pub use sorting::{SortDirection, Sortable, sort_order};
pub use state::{SortRegistry, SortState, TableSortState};
pub use surface::TableSurface;
