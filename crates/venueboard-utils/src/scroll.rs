//! Back-to-top button visibility

/// Decides when the back-to-top button is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackToTop {
	threshold_px: u32,
}

impl BackToTop {
	/// Creates a rule showing the button past `threshold_px` of scroll
	pub fn new(threshold_px: u32) -> Self {
		Self { threshold_px }
	}

	/// Returns the scroll threshold in pixels
	pub fn threshold_px(&self) -> u32 {
		self.threshold_px
	}

	/// Returns true when the button should be visible at `offset` pixels
	pub fn visible_at(&self, offset: f64) -> bool {
		offset > f64::from(self.threshold_px)
	}

	/// Returns the CSS `display` value for `offset`
	pub fn display_at(&self, offset: f64) -> &'static str {
		if self.visible_at(offset) { "block" } else { "none" }
	}
}

impl Default for BackToTop {
	fn default() -> Self {
		Self::new(300)
	}
}
