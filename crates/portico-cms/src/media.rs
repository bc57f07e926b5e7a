//! Image and document records
//!
//! A flat library of uploadable media. Pages hold optional references to
//! these records by id; the library itself keeps no back-references, so
//! nulling dangling references after a removal is the owning store's job.

use crate::error::{CmsError, CmsResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Image identifier
pub type ImageId = Uuid;

/// Document identifier
pub type DocumentId = Uuid;

/// An uploaded image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
	/// Unique image id
	pub id: ImageId,

	/// Human-readable title
	pub title: String,

	/// Storage path or URL of the original file
	pub file: String,

	/// Pixel width, when known
	pub width: Option<u32>,

	/// Pixel height, when known
	pub height: Option<u32>,
}

/// An uploaded document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
	/// Unique document id
	pub id: DocumentId,

	/// Human-readable title
	pub title: String,

	/// Storage path or URL of the file
	pub file: String,
}

/// In-memory media store
#[derive(Debug, Default)]
pub struct MediaLibrary {
	images: HashMap<ImageId, Image>,
	documents: HashMap<DocumentId, Document>,
}

impl MediaLibrary {
	/// Create an empty library
	pub fn new() -> Self {
		Self::default()
	}

	/// Add an image record
	pub async fn add_image(
		&mut self,
		title: String,
		file: String,
		dimensions: Option<(u32, u32)>,
	) -> Image {
		let image = Image {
			id: Uuid::new_v4(),
			title,
			file,
			width: dimensions.map(|(w, _)| w),
			height: dimensions.map(|(_, h)| h),
		};
		tracing::debug!(image_id = %image.id, "image added");
		self.images.insert(image.id, image.clone());
		image
	}

	/// Look up an image
	pub async fn get_image(&self, id: ImageId) -> CmsResult<Image> {
		self.images
			.get(&id)
			.cloned()
			.ok_or_else(|| CmsError::MediaNotFound(id.to_string()))
	}

	/// Remove an image, returning the removed record
	pub async fn remove_image(&mut self, id: ImageId) -> CmsResult<Image> {
		tracing::debug!(image_id = %id, "image removed");
		self.images
			.remove(&id)
			.ok_or_else(|| CmsError::MediaNotFound(id.to_string()))
	}

	/// Add a document record
	pub async fn add_document(&mut self, title: String, file: String) -> Document {
		let document = Document {
			id: Uuid::new_v4(),
			title,
			file,
		};
		tracing::debug!(document_id = %document.id, "document added");
		self.documents.insert(document.id, document.clone());
		document
	}

	/// Look up a document
	pub async fn get_document(&self, id: DocumentId) -> CmsResult<Document> {
		self.documents
			.get(&id)
			.cloned()
			.ok_or_else(|| CmsError::MediaNotFound(id.to_string()))
	}

	/// Remove a document, returning the removed record
	pub async fn remove_document(&mut self, id: DocumentId) -> CmsResult<Document> {
		tracing::debug!(document_id = %id, "document removed");
		self.documents
			.remove(&id)
			.ok_or_else(|| CmsError::MediaNotFound(id.to_string()))
	}

	/// Number of stored images
	pub fn image_count(&self) -> usize {
		self.images.len()
	}

	/// Number of stored documents
	pub fn document_count(&self) -> usize {
		self.documents.len()
	}
}
