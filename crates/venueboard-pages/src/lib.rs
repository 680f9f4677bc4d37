//! Browser bindings for Venueboard pages
//!
//! Binds sortable tables, the search box and the small page conveniences
//! (alerts, form validation, upload preview, local timestamps, tooltips and
//! the back-to-top button) to the DOM.
//!
//! The DOM layer only exists on `wasm32`. [`markup`] holds the generated
//! markup and messages, and builds everywhere.
//!
//! ## Usage
//!
//! ```ignore
//! use venueboard_conf::UiSettings;
//! use venueboard_pages::dom::mount;
//!
//! mount(UiSettings::default())?;
//! ```
//!
//! From JavaScript, after loading the generated module:
//!
//! ```text
//! venueboard_start(JSON.stringify({ locale: "zh-CN" }));
//! ```

#![warn(missing_docs)]

// Macros first so the modules below can use them
pub mod logging;

pub mod markup;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{Bindings, DomTable, init, mount, venueboard_start};
