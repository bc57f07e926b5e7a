//! Field value types shared by content models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Editor-produced HTML, stored verbatim.
///
/// Blank is a legal value everywhere the type is used; `Default` yields
/// the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(String);

impl RichText {
	/// Wrap an HTML fragment
	pub fn new(html: impl Into<String>) -> Self {
		Self(html.into())
	}

	/// The raw HTML
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Whether the fragment is blank
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<&str> for RichText {
	fn from(html: &str) -> Self {
		Self(html.to_string())
	}
}

impl fmt::Display for RichText {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
