//! Tag assignment and querying
//!
//! `TagManager` owns the tag table and the junction rows, mirroring the
//! relational layout: tags are unique by name, associations are unique per
//! (tag, content type, object). Deleting an owning record or a tag
//! cascade-deletes its junction rows; nothing else is touched.

use crate::error::{Result, TaggitError};
use crate::models::tag::MAX_TAG_NAME_LENGTH;
use crate::models::{Tag, Taggable, TaggedItem};
use std::collections::HashMap;

/// In-memory tag store with relational semantics
#[derive(Debug, Default)]
pub struct TagManager {
	tags: HashMap<i64, Tag>,
	by_name: HashMap<String, i64>,
	items: Vec<TaggedItem>,
	next_tag_id: i64,
	next_item_id: i64,
}

impl TagManager {
	/// Create an empty manager
	pub fn new() -> Self {
		Self::default()
	}

	/// Assign a tag to a record, creating the tag on first use.
	///
	/// Returns the (existing or new) tag. Assigning a tag the record
	/// already carries is an error, like the unique constraint on the
	/// junction table.
	pub async fn add_tag<T: Taggable>(&mut self, object: &T, name: &str) -> Result<Tag> {
		let name = validate_name(name)?;
		let object_id = object.object_id();
		let content_type = T::content_type_name();

		let tag_id = match self.by_name.get(name) {
			Some(id) => *id,
			None => {
				self.next_tag_id += 1;
				let mut tag = Tag::from_name(name);
				tag.id = Some(self.next_tag_id);
				self.by_name.insert(name.to_string(), self.next_tag_id);
				self.tags.insert(self.next_tag_id, tag);
				self.next_tag_id
			}
		};

		let duplicate = self.items.iter().any(|item| {
			item.tag_id == tag_id
				&& item.content_type == content_type
				&& item.object_id == object_id
		});
		if duplicate {
			return Err(TaggitError::DuplicateTag {
				content_type: content_type.to_string(),
				object_id,
				tag_name: name.to_string(),
			});
		}

		self.next_item_id += 1;
		let mut item = TaggedItem::new(tag_id, content_type, &object_id);
		item.id = Some(self.next_item_id);
		self.items.push(item);

		tracing::debug!(tag = name, content_type, object_id = %object_id, "tag assigned");
		self.tags
			.get(&tag_id)
			.cloned()
			.ok_or_else(|| TaggitError::TagNotFound(name.to_string()))
	}

	/// Remove one tag from a record
	pub async fn remove_tag<T: Taggable>(&mut self, object: &T, name: &str) -> Result<()> {
		let object_id = object.object_id();
		let content_type = T::content_type_name();

		let tag_id = *self
			.by_name
			.get(name)
			.ok_or_else(|| TaggitError::TagNotFound(name.to_string()))?;

		let position = self
			.items
			.iter()
			.position(|item| {
				item.tag_id == tag_id
					&& item.content_type == content_type
					&& item.object_id == object_id
			})
			.ok_or_else(|| TaggitError::TaggedItemNotFound {
				content_type: content_type.to_string(),
				object_id: object_id.clone(),
				tag_name: name.to_string(),
			})?;

		self.items.remove(position);
		tracing::debug!(tag = name, content_type, object_id = %object_id, "tag removed");
		Ok(())
	}

	/// Tags carried by a record, in assignment order
	pub async fn tags_for<T: Taggable>(&self, object: &T) -> Vec<Tag> {
		let object_id = object.object_id();
		let content_type = T::content_type_name();
		self.items
			.iter()
			.filter(|item| item.content_type == content_type && item.object_id == object_id)
			.filter_map(|item| self.tags.get(&item.tag_id))
			.cloned()
			.collect()
	}

	/// Object ids of the given content type carrying the named tag, in
	/// assignment order. An unknown tag yields an empty list.
	pub async fn objects_tagged(&self, content_type: &str, name: &str) -> Vec<String> {
		let Some(tag_id) = self.by_name.get(name) else {
			return Vec::new();
		};
		self.items
			.iter()
			.filter(|item| item.tag_id == *tag_id && item.content_type == content_type)
			.map(|item| item.object_id.clone())
			.collect()
	}

	/// Cascade-delete every junction row owned by a record.
	///
	/// Returns the number of rows removed; removing rows for an untagged
	/// record is a no-op, like a relational `DELETE`.
	pub async fn remove_object(&mut self, content_type: &str, object_id: &str) -> usize {
		let before = self.items.len();
		self.items
			.retain(|item| !(item.content_type == content_type && item.object_id == object_id));
		let removed = before - self.items.len();
		if removed > 0 {
			tracing::debug!(content_type, object_id, removed, "tag rows cascade-deleted");
		}
		removed
	}

	/// Delete a tag entirely, cascade-deleting its junction rows
	pub async fn remove_tag_entirely(&mut self, name: &str) -> Result<Tag> {
		let tag_id = self
			.by_name
			.remove(name)
			.ok_or_else(|| TaggitError::TagNotFound(name.to_string()))?;
		let Some(tag) = self.tags.remove(&tag_id) else {
			return Err(TaggitError::TagNotFound(name.to_string()));
		};
		self.items.retain(|item| item.tag_id != tag_id);
		tracing::debug!(tag = name, "tag deleted");
		Ok(tag)
	}

	/// All known tags, ordered by id
	pub async fn all_tags(&self) -> Vec<Tag> {
		let mut tags: Vec<Tag> = self.tags.values().cloned().collect();
		tags.sort_by_key(|tag| tag.id);
		tags
	}

	/// Number of distinct tags
	pub fn tag_count(&self) -> usize {
		self.tags.len()
	}

	/// Number of junction rows
	pub fn item_count(&self) -> usize {
		self.items.len()
	}
}

fn validate_name(name: &str) -> Result<&str> {
	let trimmed = name.trim();
	if trimmed.is_empty() {
		return Err(TaggitError::InvalidTagName(name.to_string()));
	}
	if trimmed.len() > MAX_TAG_NAME_LENGTH {
		return Err(TaggitError::TagNameTooLong {
			max: MAX_TAG_NAME_LENGTH,
			len: trimmed.len(),
		});
	}
	Ok(trimmed)
}
