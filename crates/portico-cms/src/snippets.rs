//! Reusable non-page records
//!
//! Snippets are admin-editable records that live outside the page tree,
//! e.g. reference data shared by many pages. A content app registers its
//! snippet types so the admin can list and edit them.

use crate::panels::Panel;
use serde::Serialize;
use std::collections::HashMap;

/// Admin-facing description of a snippet type
#[derive(Debug, Clone, Serialize)]
pub struct SnippetDescriptor {
	/// Stable type name, used as registry key
	pub type_name: String,

	/// Singular label shown in the admin
	pub verbose_name: String,

	/// Plural label shown in the admin
	pub verbose_name_plural: String,

	/// Editor panels for the type's fields
	pub panels: Vec<Panel>,
}

/// Trait implemented by snippet types
pub trait Snippet {
	/// Admin metadata for the type
	fn descriptor() -> SnippetDescriptor
	where
		Self: Sized;
}

/// Registry of snippet types exposed to the admin
#[derive(Debug, Default)]
pub struct SnippetRegistry {
	snippets: HashMap<String, SnippetDescriptor>,
}

impl SnippetRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a snippet type
	pub fn register<T: Snippet>(&mut self) {
		let descriptor = T::descriptor();
		tracing::debug!(snippet_type = %descriptor.type_name, "snippet registered");
		self.snippets.insert(descriptor.type_name.clone(), descriptor);
	}

	/// Look up a snippet type by name
	pub fn get(&self, type_name: &str) -> Option<&SnippetDescriptor> {
		self.snippets.get(type_name)
	}

	/// Registered type names, sorted
	pub fn type_names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.snippets.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}
}
