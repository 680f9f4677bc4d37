//! Formatting and validation helpers for Venueboard widgets
//!
//! Everything here is pure: the browser binding in `venueboard-pages` reads
//! values off the page, calls into these helpers and writes the result back.
//!
//! - [`filesize`]: human-readable byte counts
//! - [`upload`]: size and type checks for screenshot uploads
//! - [`timefmt`]: timestamp display in the site's locale format
//! - [`confirm`]: extracting the prompt from inline `confirm('…')` handlers
//! - [`scroll`]: back-to-top button visibility
//! - [`html`]: escaping text for markup

#![warn(missing_docs)]

pub mod confirm;
pub mod filesize;
pub mod html;
pub mod scroll;
pub mod timefmt;
pub mod upload;

pub use confirm::extract_confirm_message;
pub use filesize::format_file_size;
pub use html::escape_html;
pub use scroll::BackToTop;
pub use timefmt::format_timestamp;
pub use upload::{UploadPolicy, UploadRejection};
