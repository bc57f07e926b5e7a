//! Tag model
//!
//! A tag is a free-text label with a URL-friendly slug. Names are unique
//! within a [`crate::manager::TagManager`]; the slug is derived once at
//! creation and kept stable afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum accepted tag-name length, matching the relational column width
pub const MAX_TAG_NAME_LENGTH: usize = 100;

/// A free-text label attached to content records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
	/// Primary key, `None` until the manager assigns one
	pub id: Option<i64>,

	/// Display name, unique per manager
	pub name: String,

	/// URL-friendly slug
	pub slug: String,

	/// Creation timestamp
	pub created_at: DateTime<Utc>,
}

impl Tag {
	/// Create a tag with an explicit slug
	pub fn new(name: &str, slug: &str) -> Self {
		Self {
			id: None,
			name: name.to_string(),
			slug: slug.to_string(),
			created_at: Utc::now(),
		}
	}

	/// Create a tag with a slug derived from the name
	///
	/// ```
	/// use portico_taggit::Tag;
	///
	/// let tag = Tag::from_name("Chronic Pain");
	/// assert_eq!(tag.slug, "chronic-pain");
	/// ```
	pub fn from_name(name: &str) -> Self {
		Self::new(name, &slug::slugify(name))
	}
}
