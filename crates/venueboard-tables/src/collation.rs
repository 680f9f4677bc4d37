//! String ordering used when sorting table columns
//!
//! Column values are compared as text in collation order, the way a browser's
//! `localeCompare` does: case and accents are secondary to the base letters,
//! and digit runs are compared character by character (so `"10"` sorts before
//! `"2"`).

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;

use crate::error::{Result, TableError};

/// Orders two cell texts
pub trait TextCollator {
	/// Compares `left` against `right`
	fn compare(&self, left: &str, right: &str) -> Ordering;
}

impl<T: TextCollator + ?Sized> TextCollator for &T {
	fn compare(&self, left: &str, right: &str) -> Ordering {
		(**self).compare(left, right)
	}
}

impl<T: TextCollator + ?Sized> TextCollator for Rc<T> {
	fn compare(&self, left: &str, right: &str) -> Ordering {
		(**self).compare(left, right)
	}
}

impl<T: TextCollator + ?Sized> TextCollator for Arc<T> {
	fn compare(&self, left: &str, right: &str) -> Ordering {
		(**self).compare(left, right)
	}
}

/// Locale-aware collation backed by ICU4X
///
/// Uses tertiary strength with numeric ordering disabled, matching the default
/// options of `String.prototype.localeCompare`.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use venueboard_tables::{LocaleCollator, TextCollator};
///
/// let collator = LocaleCollator::new("en").unwrap();
/// assert_eq!(collator.compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(collator.compare("10", "2"), Ordering::Less);
/// ```
pub struct LocaleCollator {
	locale: String,
	collator: Collator,
}

impl LocaleCollator {
	/// Creates a collator for a BCP-47 locale tag such as `zh-CN` or `en`
	pub fn new(locale: &str) -> Result<Self> {
		let parsed: Locale = locale
			.parse()
			.map_err(|_| TableError::InvalidLocale(locale.to_string()))?;
		let collator =
			Collator::try_new(&parsed.into(), CollatorOptions::new()).map_err(|e| {
				TableError::Collator {
					locale: locale.to_string(),
					reason: format!("{e:?}"),
				}
			})?;
		tracing::debug!(locale, "loaded collation data");
		Ok(Self {
			locale: locale.to_string(),
			collator,
		})
	}

	/// Returns the locale tag this collator was built for
	pub fn locale(&self) -> &str {
		&self.locale
	}
}

impl fmt::Debug for LocaleCollator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LocaleCollator")
			.field("locale", &self.locale)
			.finish_non_exhaustive()
	}
}

impl TextCollator for LocaleCollator {
	fn compare(&self, left: &str, right: &str) -> Ordering {
		self.collator.compare(left, right)
	}
}

/// Plain code point ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrdinalCollator;

impl TextCollator for OrdinalCollator {
	fn compare(&self, left: &str, right: &str) -> Ordering {
		left.cmp(right)
	}
}

/// Adapts a comparison closure into a [`TextCollator`]
///
/// ```rust
/// use std::cmp::Ordering;
/// use venueboard_tables::{FnCollator, TextCollator};
///
/// let by_length = FnCollator::new(|a: &str, b: &str| a.len().cmp(&b.len()));
/// assert_eq!(by_length.compare("zz", "aaa"), Ordering::Less);
/// ```
#[derive(Clone, Copy)]
pub struct FnCollator<F>(F);

impl<F> FnCollator<F>
where
	F: Fn(&str, &str) -> Ordering,
{
	/// Wraps `compare`
	pub fn new(compare: F) -> Self {
		Self(compare)
	}
}

impl<F> fmt::Debug for FnCollator<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FnCollator").finish_non_exhaustive()
	}
}

impl<F> TextCollator for FnCollator<F>
where
	F: Fn(&str, &str) -> Ordering,
{
	fn compare(&self, left: &str, right: &str) -> Ordering {
		(self.0)(left, right)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_invalid_locale_is_rejected() {
		let err = LocaleCollator::new("not a locale!").unwrap_err();
		assert_eq!(err, TableError::InvalidLocale("not a locale!".to_string()));
	}

	#[rstest]
	#[case("apple", "Banana", Ordering::Less)]
	#[case("Banana", "apple", Ordering::Greater)]
	#[case("cote", "côte", Ordering::Less)]
	#[case("10", "2", Ordering::Less)]
	#[case("same", "same", Ordering::Equal)]
	fn test_locale_collator_orders_like_locale_compare(
		#[case] left: &str,
		#[case] right: &str,
		#[case] expected: Ordering,
	) {
		let collator = LocaleCollator::new("en").unwrap();
		assert_eq!(collator.compare(left, right), expected);
	}

	#[rstest]
	fn test_ordinal_collator_puts_uppercase_first() {
		assert_eq!(OrdinalCollator.compare("Banana", "apple"), Ordering::Less);
	}

	#[rstest]
	fn test_fn_collator_uses_closure() {
		let case_insensitive = FnCollator::new(|a: &str, b: &str| a.to_lowercase().cmp(&b.to_lowercase()));
		assert_eq!(case_insensitive.compare("apple", "Banana"), Ordering::Less);
		assert_eq!(case_insensitive.compare("APPLE", "apple"), Ordering::Equal);
	}

	#[rstest]
	fn test_shared_collator_delegates() {
		let shared = Rc::new(OrdinalCollator);
		assert_eq!(shared.compare("a", "b"), Ordering::Less);
		assert_eq!((&OrdinalCollator).compare("b", "a"), Ordering::Greater);
	}
}
