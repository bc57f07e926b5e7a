//! Search-index field declarations
//!
//! Page types declare which of their fields the external index builder
//! should make full-text searchable and which should be exposed as exact
//! filters. Nothing here executes a search; the declarations are the
//! whole contract.

use serde::Serialize;

/// A field exposed to the search-index builder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndexedField {
	/// Full-text searchable field
	Search {
		/// Model field name
		name: String,
		/// Optional relevance boost
		boost: Option<f32>,
	},

	/// Exact-match filterable field
	Filter {
		/// Model field name
		name: String,
	},
}

impl IndexedField {
	/// A full-text field with default weighting
	pub fn search(name: &str) -> Self {
		IndexedField::Search { name: name.to_string(), boost: None }
	}

	/// A full-text field with a relevance boost
	pub fn search_boost(name: &str, boost: f32) -> Self {
		IndexedField::Search {
			name: name.to_string(),
			boost: Some(boost),
		}
	}

	/// An exact-match filter field
	pub fn filter(name: &str) -> Self {
		IndexedField::Filter { name: name.to_string() }
	}

	/// The declared field name
	pub fn name(&self) -> &str {
		match self {
			IndexedField::Search { name, .. } | IndexedField::Filter { name } => name,
		}
	}

	/// Whether this is a full-text declaration
	pub fn is_search(&self) -> bool {
		matches!(self, IndexedField::Search { .. })
	}
}

/// Search fields every page type starts from
pub fn base_search_fields() -> Vec<IndexedField> {
	vec![IndexedField::search_boost("title", 2.0)]
}
