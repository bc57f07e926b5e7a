//! TaggedItem model
//!
//! Junction rows realizing the polymorphic many-to-many relationship
//! between tags and content records. Rows are owned by the tagged record:
//! deleting the record cascade-deletes its rows, as does deleting the tag.

use serde::{Deserialize, Serialize};

/// A single tag-to-record association
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedItem {
	/// Primary key, `None` until the manager assigns one
	pub id: Option<i64>,

	/// The assigned tag
	pub tag_id: i64,

	/// Content-type discriminator of the tagged record
	pub content_type: String,

	/// Identifier of the tagged record within its content type
	pub object_id: String,
}

impl TaggedItem {
	/// Create an unsaved junction row
	pub fn new(tag_id: i64, content_type: &str, object_id: &str) -> Self {
		Self {
			id: None,
			tag_id,
			content_type: content_type.to_string(),
			object_id: object_id.to_string(),
		}
	}
}
